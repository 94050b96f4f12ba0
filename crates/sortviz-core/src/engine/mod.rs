//! Cooperative execution primitives for animated sorting runs
//!
//! An algorithm never sleeps, blocks or checks for reset on its own. It calls
//! [`Stepper::step`] at every observable point, and the stepper consults the
//! cancellation token, the pause gate and the delay source in that order.

mod delay;
mod mutator;
mod pause;
mod stepper;

pub use delay::{DelaySource, Speed};
pub use mutator::{RecordingMutator, StepMutator};
pub use pause::PauseGate;
pub use stepper::Stepper;
pub use tokio_util::sync::CancellationToken;
