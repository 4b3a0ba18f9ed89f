//! Headless status content view
//!
//! Tracks what a label-and-spinner content view would show without drawing
//! anything. Useful as the default view, in tests, and for hosts that
//! render the text themselves.

use std::time::{Duration, SystemTime};

use recoil_core::PullState;

use crate::host::{ContentView, ControlStatus};

pub const PULL_TEXT: &str = "Pull down to refresh…";
pub const RELEASE_TEXT: &str = "Release to refresh…";
pub const LOADING_TEXT: &str = "Loading…";

#[derive(Debug, Clone, Default)]
pub struct StatusContentView {
    state: PullState,
    progress: f32,
    last_updated_at: Option<SystemTime>,
}

impl StatusContentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PullState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn last_updated_at(&self) -> Option<SystemTime> {
        self.last_updated_at
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_busy()
    }

    pub fn status_text(&self) -> &'static str {
        match self.state {
            PullState::Normal => PULL_TEXT,
            PullState::Ready => RELEASE_TEXT,
            PullState::Loading | PullState::Closing => LOADING_TEXT,
        }
    }

    /// "Last updated: …" relative to the current time
    pub fn last_updated_text(&self) -> Option<String> {
        self.last_updated_at
            .map(|at| format_last_updated(at, SystemTime::now()))
    }
}

impl ContentView for StatusContentView {
    fn set_state(&mut self, state: PullState, _status: &ControlStatus) {
        self.state = state;
    }

    fn set_pull_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    fn set_last_updated_at(&mut self, at: SystemTime, _status: &ControlStatus) {
        self.last_updated_at = Some(at);
    }
}

/// Format `at` relative to `now`. Times in the future read as "just now".
pub fn format_last_updated(at: SystemTime, now: SystemTime) -> String {
    let elapsed = now.duration_since(at).unwrap_or(Duration::ZERO).as_secs();
    let relative = match elapsed {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{} min ago", elapsed / 60),
        3600..=86_399 => format!("{} h ago", elapsed / 3600),
        _ => format!("{} d ago", elapsed / 86_400),
    };
    format!("Last updated: {relative}")
}
