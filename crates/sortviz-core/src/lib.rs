pub mod algorithms;
pub mod board;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;

pub use algorithms::{Algorithm, AlgorithmInfo, SortKey, SortOptions};
pub use board::{Bar, BarState, BarUpdate, SortingState};
pub use config::AppConfig;
pub use controller::{ControllerEvent, RunController, RunHandle, RunOutcome};
pub use engine::Speed;
pub use error::{Error, Result};
