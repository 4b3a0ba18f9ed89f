//! Pull-to-refresh states and their transition table.

use serde::{Deserialize, Serialize};

use crate::fsm::StateTransitions;

/// State of a refresh control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullState {
    /// Idle or being pulled short of the threshold ("Pull to refresh")
    #[default]
    Normal,
    /// Pulled past the threshold; releasing now starts loading ("Release to refresh")
    Ready,
    /// The host is loading
    Loading,
    /// Loading finished; the control is collapsing
    Closing,
}

impl PullState {
    /// Whether the control is busy with a loading cycle
    pub fn is_busy(&self) -> bool {
        matches!(self, PullState::Loading | PullState::Closing)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PullState::Normal => "normal",
            PullState::Ready => "ready",
            PullState::Loading => "loading",
            PullState::Closing => "closing",
        }
    }
}

impl std::fmt::Display for PullState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs that drive [`PullState`] transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullEvent {
    /// Progress reached 1.0 while the user is dragging
    PullPastThreshold,
    /// Progress dropped below 1.0 while the user is still dragging
    PullBelowThreshold,
    /// Drag released past the threshold and the delegate allowed loading
    Release,
    /// Drag released but loading must not start (gate denied or below threshold)
    CancelRelease,
    /// Explicit start-loading command from the host
    StartLoading,
    /// Explicit finish-loading command from the host
    FinishLoading,
    /// The collapse after loading settled
    Collapsed,
}

impl StateTransitions for PullState {
    type Event = PullEvent;

    fn on_event(&self, event: PullEvent) -> Option<Self> {
        use PullEvent::*;
        match (self, event) {
            (PullState::Normal, PullPastThreshold) => Some(PullState::Ready),
            (PullState::Ready, PullBelowThreshold) => Some(PullState::Normal),
            (PullState::Ready, Release) => Some(PullState::Loading),
            (PullState::Ready, CancelRelease) => Some(PullState::Normal),
            (PullState::Normal | PullState::Ready, StartLoading) => Some(PullState::Loading),
            (PullState::Loading, FinishLoading) => Some(PullState::Closing),
            (PullState::Closing, Collapsed) => Some(PullState::Normal),
            _ => None,
        }
    }
}
