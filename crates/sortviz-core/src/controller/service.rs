use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use super::events::{ControllerEvent, RunHandle, RunOutcome};
use super::publisher::SnapshotPublisher;
use crate::algorithms::{Algorithm, SortOptions};
use crate::board::{ArrayGenerator, Bar, BarState, SortingState};
use crate::config::EngineConfig;
use crate::engine::{CancellationToken, DelaySource, PauseGate, Speed, Stepper};
use crate::Result;

/// Token and gate of the most recently started run
struct ActiveRun {
    run_id: u64,
    token: CancellationToken,
    gate: PauseGate,
}

/// Orchestrates animated runs over one observable array
///
/// Owns the [`SortingState`]; renderers read it through [`RunController::state`]
/// or a [`RunController::subscribe`] receiver. Runs execute on spawned tokio
/// tasks, so `start` must be called from within a runtime.
pub struct RunController {
    state: Arc<watch::Sender<SortingState>>,
    delay: DelaySource,
    generator: ArrayGenerator,
    options: SortOptions,
    active: Option<ActiveRun>,
    events: Option<mpsc::UnboundedSender<ControllerEvent>>,
    next_run_id: u64,
}

impl RunController {
    /// Create a controller holding a freshly generated array
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let generator = config.generator();
        let delay_ms = config.speed.delay_ms();
        let initial = SortingState::new(generator.generate(), config.algorithm, delay_ms);
        let (tx, _rx) = watch::channel(initial);

        Ok(Self {
            state: Arc::new(tx),
            delay: DelaySource::new(delay_ms),
            generator,
            options: config.sort_options(),
            active: None,
            events: None,
            next_run_id: 1,
        })
    }

    /// Set the event sender for run and step notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    fn send_event(&self, event: ControllerEvent) {
        if let Some(ref tx) = self.events {
            if tx.send(event).is_err() {
                warn!("Failed to send controller event: receiver dropped");
            }
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SortingState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every published change
    pub fn subscribe(&self) -> watch::Receiver<SortingState> {
        self.state.subscribe()
    }

    pub fn delay_source(&self) -> DelaySource {
        self.delay.clone()
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().sorting
    }

    pub fn algorithm(&self) -> Algorithm {
        self.state.borrow().algorithm
    }

    /// Speed preset matching the current delay, if it is one
    pub fn speed(&self) -> Option<Speed> {
        Speed::from_delay(self.delay.read())
    }

    /// Size used when generating a fresh array
    pub fn array_len(&self) -> usize {
        self.generator.len
    }

    /// Start animating the selected algorithm over the current array
    ///
    /// Returns `None` without side effects if a run is already in flight.
    pub fn start(&mut self) -> Option<RunHandle> {
        let mut snapshot = None;
        self.state.send_if_modified(|state| {
            if state.sorting {
                return false;
            }
            state.sorting = true;
            state.paused = false;
            state.sorted = false;
            if state.array.iter().any(|bar| bar.state != BarState::Idle) {
                for bar in Arc::make_mut(&mut state.array).iter_mut() {
                    bar.state = BarState::Idle;
                }
            }
            snapshot = Some((state.algorithm, state.values()));
            true
        });

        let Some((algorithm, mut values)) = snapshot else {
            debug!("Start ignored: a run is already in flight");
            return None;
        };

        let run_id = self.next_run_id;
        self.next_run_id += 1;

        let token = CancellationToken::new();
        let gate = PauseGate::new();
        let publisher =
            SnapshotPublisher::new(run_id, self.state.clone(), token.clone(), self.events.clone());
        let stepper = Stepper::new(
            Arc::new(publisher),
            self.delay.clone(),
            token.clone(),
            gate.clone(),
        );
        let options = self.options.clone();
        let len = values.len();

        info!(run_id, algorithm = algorithm.key(), len, "Run started");
        self.send_event(ControllerEvent::RunStarted {
            run_id,
            algorithm,
            len,
        });

        let state = self.state.clone();
        let events = self.events.clone();
        let run_token = token.clone();
        let task = tokio::spawn(async move {
            // The sort runs on its own task so a panic still reaches `finish`.
            let sort = tokio::spawn(async move {
                let result = algorithm.run(&mut values, &stepper, &options).await;
                (RunOutcome::from(result), stepper.steps())
            });
            let (outcome, steps) = match sort.await {
                Ok(done) => done,
                Err(e) => (RunOutcome::Failed(format!("sort task panicked: {}", e)), 0),
            };

            finish(&state, &run_token, &outcome);
            match &outcome {
                RunOutcome::Completed => info!(run_id, steps, "Run completed"),
                RunOutcome::Cancelled => debug!(run_id, steps, "Run cancelled"),
                RunOutcome::Failed(message) => error!(run_id, error = %message, "Run failed"),
            }

            if let Some(tx) = events {
                let _ = tx.send(ControllerEvent::RunFinished {
                    run_id,
                    algorithm,
                    outcome: outcome.clone(),
                    steps,
                });
            }
            outcome
        });

        self.active = Some(ActiveRun {
            run_id,
            token,
            gate,
        });
        Some(RunHandle::new(run_id, task))
    }

    /// Park the running algorithm at its next suspension point
    ///
    /// Returns false (and does nothing) unless a run is in flight and not
    /// already paused.
    pub fn pause(&self) -> bool {
        let Some(run) = self.active.as_ref() else {
            return false;
        };
        let paused = self.state.send_if_modified(|state| {
            if !state.sorting || state.paused {
                return false;
            }
            run.gate.pause();
            state.paused = true;
            true
        });
        if paused {
            debug!(run_id = run.run_id, "Run paused");
        }
        paused
    }

    /// Let a paused run continue. Returns false if it was not paused.
    pub fn resume(&self) -> bool {
        let Some(run) = self.active.as_ref() else {
            return false;
        };
        let resumed = self.state.send_if_modified(|state| {
            if !state.sorting || !state.paused {
                return false;
            }
            run.gate.resume();
            state.paused = false;
            true
        });
        if resumed {
            debug!(run_id = run.run_id, "Run resumed");
        }
        resumed
    }

    /// Toggle between paused and running; no-op when idle
    pub fn pause_resume(&self) -> bool {
        let paused = self.state.borrow().paused;
        if paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Cancel any run and replace the array with a freshly generated one
    pub fn reset(&mut self) {
        let bars = self.generator.generate();
        self.replace_array(bars);
    }

    /// Like [`RunController::reset`], with a new array size
    pub fn generate(&mut self, len: usize) {
        self.generator.len = len;
        self.reset();
    }

    /// Cancel any run and replace the array with the given values
    pub fn load_values(&mut self, values: &[u32]) {
        self.replace_array(values.iter().copied().map(Bar::new).collect());
    }

    fn replace_array(&mut self, bars: Vec<Bar>) {
        if let Some(run) = self.active.take() {
            if !run.token.is_cancelled() {
                run.token.cancel();
                debug!(run_id = run.run_id, "Run token cancelled");
            }
        }

        let len = bars.len();
        self.state.send_modify(|state| {
            state.array = Arc::new(bars);
            state.sorting = false;
            state.paused = false;
            state.sorted = false;
        });
        debug!(len, "Array replaced");
    }

    /// Apply a speed preset; takes effect at the next suspension point
    pub fn change_speed(&self, speed: Speed) {
        self.set_delay(speed.delay_ms());
    }

    pub fn set_delay(&self, ms: u64) {
        self.delay.write(ms);
        self.state.send_if_modified(|state| {
            if state.delay_ms == ms {
                return false;
            }
            state.delay_ms = ms;
            true
        });
    }

    /// Select the algorithm for the next run
    pub fn change_algorithm(&self, algorithm: Algorithm) {
        self.state.send_if_modified(|state| {
            if state.algorithm == algorithm {
                return false;
            }
            state.algorithm = algorithm;
            true
        });
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        if let Some(run) = self.active.take() {
            run.token.cancel();
        }
    }
}

/// Record a run's end, unless a reset already took the state over
fn finish(state: &watch::Sender<SortingState>, token: &CancellationToken, outcome: &RunOutcome) {
    state.send_if_modified(|state| {
        if token.is_cancelled() {
            return false;
        }
        state.sorting = false;
        state.paused = false;
        state.sorted = outcome.is_completed();
        true
    });
}
