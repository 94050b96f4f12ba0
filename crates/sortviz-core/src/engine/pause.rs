use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// Re-armable suspension point for a running algorithm
///
/// While armed, [`PauseGate::wait`] parks the caller without polling until
/// [`PauseGate::resume`] is called. Clones share the same gate.
#[derive(Debug, Clone)]
pub struct PauseGate {
    paused: Arc<watch::Sender<bool>>,
}

impl Default for PauseGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseGate {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { paused: Arc::new(tx) }
    }

    /// Arm the gate. Returns false if it was already armed.
    pub fn pause(&self) -> bool {
        self.paused.send_if_modified(|paused| {
            if *paused {
                false
            } else {
                *paused = true;
                true
            }
        })
    }

    /// Disarm the gate and wake every waiter. Returns false if it was not armed.
    pub fn resume(&self) -> bool {
        self.paused.send_if_modified(|paused| {
            if *paused {
                *paused = false;
                true
            } else {
                false
            }
        })
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    /// Wait until the gate is disarmed; returns immediately when it is not armed
    pub async fn wait(&self) {
        let mut rx = self.paused.subscribe();
        if *rx.borrow_and_update() {
            debug!("Step parked at pause gate");
        }
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|paused| !*paused).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[test]
    fn test_pause_is_idempotent() {
        let gate = PauseGate::new();

        assert!(gate.pause());
        assert!(!gate.pause());
        assert!(gate.is_paused());

        assert!(gate.resume());
        assert!(!gate.resume());
        assert!(!gate.is_paused());
    }

    #[tokio::test]
    async fn test_wait_passes_when_not_paused() {
        let gate = PauseGate::new();
        let result = timeout(Duration::from_millis(10), gate.wait()).await;
        assert!(result.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_blocks_until_resume() {
        let gate = PauseGate::new();
        gate.pause();

        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait().await })
        };

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(!waiter.is_finished());

        gate.resume();
        timeout(Duration::from_millis(10), waiter)
            .await
            .expect("waiter should wake on resume")
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_then_resume_before_wait_does_not_block() {
        let gate = PauseGate::new();
        gate.pause();
        gate.resume();
        assert!(timeout(Duration::from_millis(1), gate.wait()).await.is_ok());
    }
}
