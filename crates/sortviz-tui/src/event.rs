use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// What the draw loop does after one poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Nothing to handle; repaint from the latest snapshot
    Redraw,
}

impl From<Event> for AppEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            // Releases, resizes, mouse and focus changes only need a repaint;
            // the chart relayouts to the new area on its own.
            _ => AppEvent::Redraw,
        }
    }
}

/// Paces the draw loop against terminal input
pub struct EventHandler {
    frame_interval: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            frame_interval: Duration::from_millis(tick_rate_ms.max(1)),
        }
    }

    /// Wait at most one frame interval for input
    ///
    /// Blocking. From async code call it through `block_in_place`.
    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.frame_interval)? {
            Ok(AppEvent::from(event::read()?))
        } else {
            Ok(AppEvent::Redraw)
        }
    }
}
