use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::warn;

use super::ControllerEvent;
use crate::board::{BarUpdate, SortingState};
use crate::engine::{CancellationToken, StepMutator};

/// The controller's step mutator: publishes each update as a new snapshot
///
/// Writes are checked against the run's token while holding the state lock,
/// so nothing from a cancelled run can land on the array generated by the
/// reset that cancelled it.
pub(super) struct SnapshotPublisher {
    run_id: u64,
    state: Arc<watch::Sender<SortingState>>,
    token: CancellationToken,
    events: Option<mpsc::UnboundedSender<ControllerEvent>>,
}

impl SnapshotPublisher {
    pub(super) fn new(
        run_id: u64,
        state: Arc<watch::Sender<SortingState>>,
        token: CancellationToken,
        events: Option<mpsc::UnboundedSender<ControllerEvent>>,
    ) -> Self {
        Self {
            run_id,
            state,
            token,
            events,
        }
    }
}

impl StepMutator for SnapshotPublisher {
    fn apply(&self, index: usize, update: BarUpdate) {
        let published = self.state.send_if_modified(|state| {
            if self.token.is_cancelled() {
                return false;
            }
            let len = state.array.len();
            if index >= len {
                warn!(run_id = self.run_id, index, len, "Dropping out-of-range bar update");
                return false;
            }
            Arc::make_mut(&mut state.array)[index].apply(update);
            true
        });

        if published {
            if let Some(ref tx) = self.events {
                let _ = tx.send(ControllerEvent::Step {
                    run_id: self.run_id,
                    index,
                    update,
                });
            }
        }
    }
}
