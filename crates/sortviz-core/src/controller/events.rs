use std::fmt;

use tokio::task::JoinHandle;

use crate::algorithms::Algorithm;
use crate::board::BarUpdate;
use crate::Error;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The algorithm ran to a fully sorted array
    Completed,
    /// The run's token was set (reset) before it finished
    Cancelled,
    /// An unexpected internal error ended the run
    Failed(String),
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

impl From<crate::Result<()>> for RunOutcome {
    fn from(result: crate::Result<()>) -> Self {
        match result {
            Ok(()) => RunOutcome::Completed,
            Err(Error::Cancelled) => RunOutcome::Cancelled,
            Err(e) => RunOutcome::Failed(e.to_string()),
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed => f.write_str("completed"),
            RunOutcome::Cancelled => f.write_str("cancelled"),
            RunOutcome::Failed(message) => write!(f, "failed: {}", message),
        }
    }
}

/// Events emitted by the controller, delivered in the order they happen
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    /// A run was spawned
    RunStarted {
        run_id: u64,
        algorithm: Algorithm,
        len: usize,
    },
    /// One mutation was published to the array
    Step {
        run_id: u64,
        index: usize,
        update: BarUpdate,
    },
    /// A run ended
    RunFinished {
        run_id: u64,
        algorithm: Algorithm,
        outcome: RunOutcome,
        /// Delay-separated suspension points the run passed, not bar updates
        steps: u64,
    },
}

/// Handle to an in-flight run, awaitable for its outcome
#[derive(Debug)]
pub struct RunHandle {
    run_id: u64,
    task: JoinHandle<RunOutcome>,
}

impl RunHandle {
    pub(super) fn new(run_id: u64, task: JoinHandle<RunOutcome>) -> Self {
        Self { run_id, task }
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the run to end
    pub async fn outcome(self) -> RunOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => RunOutcome::Failed(format!("run task ended abnormally: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(RunOutcome::from(Ok(())), RunOutcome::Completed);
        assert_eq!(RunOutcome::from(Err(Error::Cancelled)), RunOutcome::Cancelled);
        assert_eq!(
            RunOutcome::from(Err(Error::InvalidInput("bad".to_string()))),
            RunOutcome::Failed("Invalid input: bad".to_string())
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RunOutcome::Completed.to_string(), "completed");
        assert_eq!(RunOutcome::Failed("x".to_string()).to_string(), "failed: x");
    }
}
