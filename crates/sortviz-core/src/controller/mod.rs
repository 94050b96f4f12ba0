mod events;
mod publisher;
mod service;

pub use events::{ControllerEvent, RunHandle, RunOutcome};
pub use service::RunController;
