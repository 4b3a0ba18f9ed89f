//! Interfaces implemented by the host application.
//!
//! The control never owns the scroll container or the delegate: it keeps
//! non-owning [`Weak`](std::rc::Weak) handles to both, so the host can own
//! the control without creating a cycle. Callbacks are delivered
//! synchronously on the thread that drives the control. They must not call
//! back into the control; queue a command and issue it after the current
//! call returns instead.

use std::time::SystemTime;

use recoil_core::{EdgeInsets, PullState};

use crate::config::Style;

/// The scroll view the control is attached to
///
/// Methods take `&self`; containers keep their own interior mutability.
pub trait ScrollContainer {
    /// Current offset along the pull axis (negative = pulled past the top)
    fn content_offset(&self) -> f32;

    /// Total content inset currently applied
    fn content_inset(&self) -> EdgeInsets;

    /// Replace the total content inset
    fn set_content_inset(&self, inset: EdgeInsets);

    /// Bring the top of the content back into view after an inset change.
    /// Only requested while the content is at or above its top edge.
    fn scroll_to_top(&self) {}
}

/// Lifecycle hooks for the host. Every method is optional.
#[allow(unused_variables)]
pub trait RefreshDelegate {
    /// Return `false` to keep a released pull from starting a load
    fn should_start_loading(&self) -> bool {
        true
    }

    /// The control entered loading; kick off the host's work here
    fn did_start_loading(&self) {}

    /// The control left loading after `finish_loading`
    fn did_finish_loading(&self) {}

    /// When the host's data was last refreshed. `None` means "now".
    fn last_updated_at(&self) -> Option<SystemTime> {
        None
    }

    /// The control wrote a new total inset to the container
    fn did_update_content_inset(&self, inset: EdgeInsets) {}

    /// Sent before the state changes
    fn will_transition(&self, from: PullState, to: PullState, animated: bool) {}

    /// Sent after the transition, including any animation, has settled
    fn did_transition(&self, from: PullState, to: PullState, animated: bool) {}
}

/// Read-only snapshot of the control passed to content views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlStatus {
    pub state: PullState,
    pub expanded: bool,
    pub expanded_height: f32,
    pub style: Style,
    /// Displayed pull progress (after the pull curve)
    pub progress: f32,
    /// Total inset the control currently wants applied
    pub content_inset: EdgeInsets,
    pub last_updated_at: Option<SystemTime>,
}

/// The pluggable visual surface of the control
#[allow(unused_variables)]
pub trait ContentView {
    /// The control's state changed. Required.
    fn set_state(&mut self, state: PullState, status: &ControlStatus);

    /// Pull progress from 0.0 upward; 1.0 means fully expanded. Values past
    /// 1.0 are shaped by the configured pull curve.
    fn set_pull_progress(&mut self, progress: f32) {}

    /// The last-updated time changed
    fn set_last_updated_at(&mut self, at: SystemTime, status: &ControlStatus) {}
}
