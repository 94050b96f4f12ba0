use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::info;

use sortviz_core::{AppConfig, BarUpdate, ControllerEvent, RunController, RunOutcome};

/// One line of `--trace` output
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum TraceRecord<'a> {
    Start {
        algorithm: &'static str,
        values: &'a [u32],
    },
    Step {
        index: usize,
        #[serde(flatten)]
        update: BarUpdate,
    },
    Finish {
        outcome: String,
        steps: u64,
    },
}

fn emit(record: &TraceRecord<'_>) -> Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}

/// Run one algorithm headless, printing the sorted array
///
/// Ctrl-C cancels the run the same way a reset does in the TUI.
pub async fn run(
    config: &AppConfig,
    values: Option<Vec<u32>>,
    delay_ms: Option<u64>,
    trace: bool,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut controller = RunController::new(&config.engine)?.with_event_sender(tx);
    if let Some(values) = values {
        controller.load_values(&values);
    }
    if let Some(ms) = delay_ms {
        controller.set_delay(ms);
    }

    let state = controller.state();
    let input = state.values();
    if trace {
        emit(&TraceRecord::Start {
            algorithm: state.algorithm.key(),
            values: &input,
        })?;
    }

    let handle = controller
        .start()
        .ok_or_else(|| anyhow!("a run is already in progress"))?;

    let mut final_values = None;
    let (outcome, steps) = loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(ControllerEvent::RunFinished { outcome, steps, .. }) => {
                    if outcome.is_completed() {
                        final_values = Some(controller.state().values());
                    }
                    break (outcome, steps);
                }
                Some(ControllerEvent::Step { index, update, .. }) => {
                    if trace {
                        emit(&TraceRecord::Step { index, update })?;
                    }
                }
                Some(ControllerEvent::RunStarted { .. }) => {}
                None => bail!("controller event channel closed"),
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, cancelling run");
                controller.reset();
            }
        }
    };
    handle.outcome().await;

    if trace {
        emit(&TraceRecord::Finish {
            outcome: outcome.to_string(),
            steps,
        })?;
        return outcome_result(outcome);
    }

    println!("{}: {} after {} steps", state.algorithm.key(), outcome, steps);
    if let Some(values) = final_values {
        println!("{:?}", values);
    }
    outcome_result(outcome)
}

fn outcome_result(outcome: RunOutcome) -> Result<()> {
    match outcome {
        RunOutcome::Failed(message) => Err(anyhow!("run failed: {}", message)),
        RunOutcome::Completed | RunOutcome::Cancelled => Ok(()),
    }
}
