use std::sync::Mutex;

use crate::board::{Bar, BarUpdate};

/// Single point through which an algorithm changes the observable array
///
/// Fire-and-forget: implementations must not block the caller and must
/// apply updates in the order they are issued.
pub trait StepMutator: Send + Sync {
    fn apply(&self, index: usize, update: BarUpdate);
}

impl<F> StepMutator for F
where
    F: Fn(usize, BarUpdate) + Send + Sync,
{
    #[inline]
    fn apply(&self, index: usize, update: BarUpdate) {
        self(index, update)
    }
}

#[derive(Debug, Default)]
struct Recording {
    bars: Vec<Bar>,
    log: Vec<(usize, BarUpdate)>,
}

/// Mutator that mirrors updates into a local array and keeps an ordered log
///
/// Useful for driving an algorithm without a controller, e.g. in tests or
/// when replaying a run step by step.
#[derive(Debug, Default)]
pub struct RecordingMutator {
    inner: Mutex<Recording>,
}

impl RecordingMutator {
    pub fn new(values: &[u32]) -> Self {
        Self {
            inner: Mutex::new(Recording {
                bars: values.iter().copied().map(Bar::new).collect(),
                log: Vec::new(),
            }),
        }
    }

    /// Mirrored bars after every recorded update
    pub fn bars(&self) -> Vec<Bar> {
        self.lock().bars.clone()
    }

    pub fn values(&self) -> Vec<u32> {
        self.lock().bars.iter().map(|bar| bar.value).collect()
    }

    /// Every update, in issue order
    pub fn log(&self) -> Vec<(usize, BarUpdate)> {
        self.lock().log.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recording> {
        // A panic while holding the lock cannot leave a half-applied Bar behind.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StepMutator for RecordingMutator {
    fn apply(&self, index: usize, update: BarUpdate) {
        let mut recording = self.lock();
        if let Some(bar) = recording.bars.get_mut(index) {
            bar.apply(update);
        }
        recording.log.push((index, update));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BarState;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_recording_mutator_mirrors_updates_in_order() {
        let mutator = RecordingMutator::new(&[4, 2]);

        mutator.apply(0, BarUpdate::state(BarState::Selected));
        mutator.apply(1, BarUpdate::both(4, BarState::Idle));
        mutator.apply(0, BarUpdate::both(2, BarState::Idle));

        assert_eq!(mutator.values(), vec![2, 4]);
        assert_eq!(mutator.len(), 3);
        assert_eq!(mutator.log()[0], (0, BarUpdate::state(BarState::Selected)));
        assert!(mutator.bars().iter().all(|b| b.state == BarState::Idle));
    }

    #[test]
    fn test_recording_mutator_logs_out_of_range_without_panicking() {
        let mutator = RecordingMutator::new(&[]);
        mutator.apply(3, BarUpdate::value(1));
        assert!(mutator.values().is_empty());
        assert_eq!(mutator.len(), 1);
    }

    #[test]
    fn test_closure_mutator() {
        let calls = AtomicUsize::new(0);
        let mutator = |_index: usize, _update: BarUpdate| {
            calls.fetch_add(1, Ordering::Relaxed);
        };

        mutator.apply(0, BarUpdate::value(1));
        mutator.apply(1, BarUpdate::value(2));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }
}
