mod generator;
mod models;

pub use generator::{generate_bars, ArrayGenerator, DEFAULT_ARRAY_LEN, DEFAULT_VALUE_RANGE};
pub use models::{Bar, BarState, BarUpdate, SortingState};
