use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::{CancellationToken, DelaySource, PauseGate, StepMutator};
use crate::board::{BarState, BarUpdate};
use crate::{Error, Result};

/// Everything an algorithm needs to animate itself
///
/// Bundles the step mutator, delay source, cancellation token and pause gate
/// of one run, so algorithms stay free of scheduling concerns.
pub struct Stepper {
    mutator: Arc<dyn StepMutator>,
    delay: DelaySource,
    token: CancellationToken,
    gate: PauseGate,
    steps: AtomicU64,
}

impl Stepper {
    pub fn new(
        mutator: Arc<dyn StepMutator>,
        delay: DelaySource,
        token: CancellationToken,
        gate: PauseGate,
    ) -> Self {
        Self {
            mutator,
            delay,
            token,
            gate,
            steps: AtomicU64::new(0),
        }
    }

    /// Stepper with a fresh token and gate, mostly for driving an algorithm directly
    pub fn detached(mutator: Arc<dyn StepMutator>, delay: DelaySource) -> Self {
        Self::new(mutator, delay, CancellationToken::new(), PauseGate::new())
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn gate(&self) -> &PauseGate {
        &self.gate
    }

    /// Number of completed suspension points
    pub fn steps(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    /// Set the visual state of one bar
    #[inline]
    pub fn mark(&self, index: usize, state: BarState) {
        self.mutator.apply(index, BarUpdate::state(state));
    }

    /// Publish a value and visual state for one bar
    #[inline]
    pub fn set(&self, index: usize, value: u32, state: BarState) {
        self.mutator.apply(index, BarUpdate::both(value, state));
    }

    /// Fail fast with [`Error::Cancelled`] once the run's token is set
    #[inline]
    pub fn ensure_active(&self) -> Result<()> {
        if self.token.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    /// One observable step: cancellation check, pause gate, cancellation
    /// check, then the current delay
    ///
    /// Cancellation outranks pause: a reset while parked at the gate wakes
    /// the step and returns [`Error::Cancelled`]. The delay is read only after
    /// the gate opens, so time spent paused never counts against it.
    pub async fn step(&self) -> Result<()> {
        self.ensure_active()?;

        if self.gate.is_paused() {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => return Err(Error::Cancelled),
                _ = self.gate.wait() => {}
            }
        }
        self.ensure_active()?;

        let ms = self.delay.read();
        if ms == 0 {
            tokio::task::yield_now().await;
        } else {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => return Err(Error::Cancelled),
                _ = tokio::time::sleep(Duration::from_millis(ms)) => {}
            }
        }

        self.steps.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
