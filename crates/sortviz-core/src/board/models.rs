use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;

/// Presentation state of a single bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarState {
    #[default]
    Idle,
    Selected,
    Comparing,
    Sorted,
}

/// One visualized array element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub value: u32,
    pub state: BarState,
}

impl Bar {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            state: BarState::Idle,
        }
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, update: BarUpdate) {
        if let Some(value) = update.value {
            self.value = value;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
    }
}

/// Partial update for one bar: value and/or visual state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<BarState>,
}

impl BarUpdate {
    pub fn value(value: u32) -> Self {
        Self {
            value: Some(value),
            state: None,
        }
    }

    pub fn state(state: BarState) -> Self {
        Self {
            value: None,
            state: Some(state),
        }
    }

    pub fn both(value: u32, state: BarState) -> Self {
        Self {
            value: Some(value),
            state: Some(state),
        }
    }
}

/// Observable state of the visualizer, owned by the run controller
///
/// `array` is an immutable snapshot: every mutation publishes a new `Arc`,
/// so a clone taken by a renderer never changes underneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct SortingState {
    pub array: Arc<Vec<Bar>>,
    pub algorithm: Algorithm,
    pub delay_ms: u64,
    pub sorting: bool,
    pub paused: bool,
    pub sorted: bool,
}

impl SortingState {
    pub fn new(array: Vec<Bar>, algorithm: Algorithm, delay_ms: u64) -> Self {
        Self {
            array: Arc::new(array),
            algorithm,
            delay_ms,
            sorting: false,
            paused: false,
            sorted: false,
        }
    }

    /// Current values, in array order
    pub fn values(&self) -> Vec<u32> {
        self.array.iter().map(|bar| bar.value).collect()
    }

    /// Largest value in the array (0 when empty)
    pub fn max_value(&self) -> u32 {
        self.array.iter().map(|bar| bar.value).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_apply_partial_update() {
        let mut bar = Bar::new(10);

        bar.apply(BarUpdate::state(BarState::Comparing));
        assert_eq!(bar, Bar { value: 10, state: BarState::Comparing });

        bar.apply(BarUpdate::value(42));
        assert_eq!(bar, Bar { value: 42, state: BarState::Comparing });

        bar.apply(BarUpdate::both(7, BarState::Idle));
        assert_eq!(bar, Bar::new(7));

        bar.apply(BarUpdate::default());
        assert_eq!(bar, Bar::new(7));
    }

    #[test]
    fn test_sorting_state_snapshot_is_independent() {
        let state = SortingState::new(vec![Bar::new(3), Bar::new(1)], Algorithm::Bubble, 8);
        let snapshot = state.array.clone();

        let mut next = state.clone();
        Arc::make_mut(&mut next.array)[0].apply(BarUpdate::value(9));

        assert_eq!(snapshot[0].value, 3);
        assert_eq!(next.values(), vec![9, 1]);
        assert_eq!(next.max_value(), 9);
    }
}
