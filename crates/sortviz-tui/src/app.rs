use std::sync::Arc;

use anyhow::Result;
use sortviz_core::{
    AlgorithmInfo, AppConfig, ControllerEvent, RunController, RunOutcome, SortingState, Speed,
};
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::input::Action;
use crate::theme::Theme;

/// Bars added or removed per grow/shrink
pub const ARRAY_LEN_STEP: usize = 10;
/// Largest array the TUI will generate
pub const MAX_ARRAY_LEN: usize = 500;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bar chart with the status bar
    Normal,
    /// Help overlay for the selected algorithm
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub controller: RunController,
    /// Latest published state, refreshed by [`App::sync`]
    pub snapshot: SortingState,
    /// Current application mode
    pub mode: Mode,
    /// Bar updates published by the current run
    pub mutations: u64,
    /// How the most recent run ended
    pub last_outcome: Option<RunOutcome>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    current_run: Option<u64>,
    state_rx: watch::Receiver<SortingState>,
    events: mpsc::UnboundedReceiver<ControllerEvent>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Result<Self> {
        let (tx, events) = mpsc::unbounded_channel();
        let controller = RunController::new(&config.engine)?.with_event_sender(tx);
        let state_rx = controller.subscribe();
        let snapshot = controller.state();

        Ok(Self {
            config,
            theme,
            controller,
            snapshot,
            mode: Mode::Normal,
            mutations: 0,
            last_outcome: None,
            should_quit: false,
            status_message: None,
            current_run: None,
            state_rx,
            events,
        })
    }

    /// Pull controller events and the newest snapshot
    pub fn sync(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_controller_event(event);
        }
        if self.state_rx.has_changed().unwrap_or(false) {
            self.snapshot = self.state_rx.borrow_and_update().clone();
        }
    }

    fn handle_controller_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::RunStarted { run_id, .. } => {
                self.current_run = Some(run_id);
                self.mutations = 0;
                self.last_outcome = None;
            }
            ControllerEvent::Step { run_id, .. } => {
                if self.current_run == Some(run_id) {
                    self.mutations += 1;
                }
            }
            ControllerEvent::RunFinished {
                run_id,
                algorithm,
                outcome,
                ..
            } => {
                if self.current_run != Some(run_id) {
                    return;
                }
                self.status_message = match &outcome {
                    RunOutcome::Completed => Some(format!("{} finished", algorithm)),
                    RunOutcome::Cancelled => None,
                    RunOutcome::Failed(message) => Some(format!("{} failed: {}", algorithm, message)),
                };
                self.last_outcome = Some(outcome);
            }
        }
    }

    /// Apply a user action to the controller
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::Start => {
                if self.controller.start().is_some() {
                    self.status_message = None;
                } else {
                    self.status_message = Some("Already sorting".to_string());
                }
            }
            Action::PauseResume => {
                if !self.controller.pause_resume() {
                    self.status_message = Some("Nothing to pause".to_string());
                }
            }
            Action::Reset => {
                self.controller.reset();
                self.clear_run();
                self.status_message = Some("New array generated".to_string());
            }
            Action::GrowArray => {
                let len = self.controller.array_len().saturating_add(ARRAY_LEN_STEP);
                self.resize_array(len);
            }
            Action::ShrinkArray => {
                let len = self.controller.array_len().saturating_sub(ARRAY_LEN_STEP);
                self.resize_array(len);
            }
            Action::NextAlgorithm => self.select_algorithm(self.controller.algorithm().next()),
            Action::PrevAlgorithm => self.select_algorithm(self.controller.algorithm().prev()),
            Action::SetSpeed(speed) => self.select_speed(speed),
            Action::CycleSpeed => {
                let speed = self.controller.speed().unwrap_or_default().next();
                self.select_speed(speed);
            }
            Action::ShowHelp => self.mode = Mode::Help,
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
        self.sync();
    }

    /// Cancel any run and generate an array of `len` bars
    fn resize_array(&mut self, len: usize) {
        let len = len.min(MAX_ARRAY_LEN);
        self.controller.generate(len);
        self.clear_run();
        self.status_message = Some(format!("Array size: {}", len));
    }

    fn clear_run(&mut self) {
        self.current_run = None;
        self.mutations = 0;
        self.last_outcome = None;
    }

    fn select_algorithm(&mut self, algorithm: sortviz_core::Algorithm) {
        self.controller.change_algorithm(algorithm);
        self.status_message = if self.controller.is_running() {
            Some(format!("{} selected for the next run", algorithm))
        } else {
            None
        };
    }

    fn select_speed(&mut self, speed: Speed) {
        self.controller.change_speed(speed);
        self.status_message = Some(format!("Speed: {}", speed));
    }

    /// Catalogue entry of the selected algorithm
    pub fn info(&self) -> AlgorithmInfo {
        self.snapshot.algorithm.info()
    }

    /// Short label for the run state shown in the status bar
    pub fn run_label(&self) -> &'static str {
        let state = &self.snapshot;
        if state.paused {
            "PAUSED"
        } else if state.sorting {
            "SORTING"
        } else if state.sorted {
            "SORTED"
        } else {
            match self.last_outcome {
                Some(RunOutcome::Failed(_)) => "FAILED",
                _ => "IDLE",
            }
        }
    }

    pub fn speed_label(&self) -> String {
        match Speed::from_delay(self.snapshot.delay_ms) {
            Some(speed) => speed.to_string(),
            None => format!("{}ms", self.snapshot.delay_ms),
        }
    }
}
