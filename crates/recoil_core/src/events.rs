//! Scroll notifications delivered by the host container.
//!
//! The host forwards one [`ScrollEvent`] per offset or inset mutation,
//! each carrying a snapshot of the container at that instant.

use crate::geometry::{EdgeInsets, Size};

/// What the user's finger is doing when a notification is delivered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollPhase {
    /// No gesture and no momentum
    #[default]
    Idle,
    /// The user is actively dragging the content
    Dragging,
    /// The finger lifted and the content is coasting
    Decelerating,
}

impl ScrollPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ScrollPhase::Dragging)
    }
}

/// Snapshot of the container at the time of a notification
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Offset along the pull axis (negative = pulled past the top)
    pub offset: f32,
    /// Total content inset currently applied to the container
    pub content_inset: EdgeInsets,
    /// Viewport size of the container
    pub viewport: Size,
    /// Safe-area inset reported by the container
    pub safe_area: EdgeInsets,
    pub phase: ScrollPhase,
}

impl ScrollMetrics {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Metrics for an active drag at `offset`
    pub fn dragging(offset: f32) -> Self {
        Self::new(offset).with_phase(ScrollPhase::Dragging)
    }

    pub fn with_phase(mut self, phase: ScrollPhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_inset(mut self, content_inset: EdgeInsets) -> Self {
        self.content_inset = content_inset;
        self
    }

    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_safe_area(mut self, safe_area: EdgeInsets) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }
}

/// A change notification from the scroll container
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    /// The content offset changed
    Scroll(ScrollMetrics),
    /// The user lifted their finger, ending the drag
    DragEnd(ScrollMetrics),
    /// The container's content inset changed
    InsetChanged(ScrollMetrics),
}

impl ScrollEvent {
    pub fn metrics(&self) -> &ScrollMetrics {
        match self {
            ScrollEvent::Scroll(m) | ScrollEvent::DragEnd(m) | ScrollEvent::InsetChanged(m) => m,
        }
    }

    /// Short label used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ScrollEvent::Scroll(_) => "scroll",
            ScrollEvent::DragEnd(_) => "drag_end",
            ScrollEvent::InsetChanged(_) => "inset_changed",
        }
    }
}
