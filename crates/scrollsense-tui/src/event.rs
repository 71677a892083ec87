use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    frame_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, frame_rate: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_rate,
        }
    }

    /// Poll for the next event, waiting one frame instead of one tick while
    /// something is animating
    pub fn next(&self, fast: bool) -> Result<Option<AppEvent>> {
        let timeout = if fast { self.frame_rate } else { self.tick_rate };
        if event::poll(timeout)? {
            match event::read()? {
                // crossterm reports release events on some platforms
                Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}
