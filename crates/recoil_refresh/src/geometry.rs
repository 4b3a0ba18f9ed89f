//! Pull geometry
//!
//! Pure functions from the container's offset to pull progress, the
//! control's inset contribution and its frame. Nothing here has side
//! effects; identical inputs always give identical outputs.

use recoil_core::{PullState, Rect, Size};

use crate::config::Style;

/// Progress at which a pull arms the control
pub const THRESHOLD: f32 = 1.0;

/// Whether `progress` has reached full expansion
pub fn is_past_threshold(progress: f32) -> bool {
    progress >= THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullGeometry {
    pub expanded_height: f32,
    pub style: Style,
    /// Host baseline top inset plus the effective safe-area top
    pub baseline_top: f32,
}

impl PullGeometry {
    pub fn new(expanded_height: f32, style: Style, baseline_top: f32) -> Self {
        Self {
            expanded_height,
            style,
            baseline_top,
        }
    }

    /// How far the content is pulled past its resting top edge
    pub fn pull_distance(&self, offset: f32) -> f32 {
        (-offset - self.baseline_top).max(0.0)
    }

    /// `max(0, -offset - baseline) / expanded_height`, unbounded above 1.0
    pub fn progress(&self, offset: f32) -> f32 {
        self.pull_distance(offset) / self.expanded_height
    }

    /// Inset the control contributes at `expansion` (0.0 collapsed, 1.0 expanded)
    ///
    /// A static control only takes up space while loading or closing.
    pub fn expanded_inset(&self, state: PullState, expansion: f32) -> f32 {
        if self.style == Style::Static && !state.is_busy() {
            return 0.0;
        }
        self.expanded_height * expansion.clamp(0.0, 1.0)
    }

    /// Contribution while the user drags during a load.
    ///
    /// A scrolling control gives up its space as the content scrolls upward
    /// and takes it back, up to `expanded_height`, as it is pulled down. A
    /// static control is pinned, so its contribution does not follow the drag.
    pub fn loading_drag_inset(&self, offset: f32) -> Option<f32> {
        match self.style {
            Style::Scrolling => Some(self.pull_distance(offset).min(self.expanded_height)),
            Style::Static => None,
        }
    }

    /// Frame of the control in content coordinates (content top at y = 0)
    pub fn control_frame(&self, offset: f32, viewport: Size, contribution: f32) -> Rect {
        match self.style {
            Style::Scrolling => Rect::new(
                0.0,
                -self.expanded_height,
                viewport.width,
                self.expanded_height,
            ),
            Style::Static => {
                let height = self.pull_distance(offset).max(contribution);
                Rect::new(0.0, -height, viewport.width, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(style: Style) -> PullGeometry {
        PullGeometry::new(70.0, style, 10.0)
    }

    #[test]
    fn test_progress_formula() {
        let g = geometry(Style::Scrolling);
        assert_eq!(g.progress(0.0), 0.0);
        assert_eq!(g.progress(-10.0), 0.0);
        assert_eq!(g.progress(-45.0), 0.5);
        assert_eq!(g.progress(-80.0), 1.0);
        assert_eq!(g.progress(-150.0), 2.0);
    }

    #[test]
    fn test_progress_non_negative_and_monotonic() {
        let g = geometry(Style::Scrolling);
        let mut last = 0.0;
        for step in 0..200 {
            let offset = 50.0 - step as f32;
            let progress = g.progress(offset);
            assert!(progress >= 0.0);
            assert!(progress >= last, "progress decreased at offset {offset}");
            last = progress;
        }
    }

    #[test]
    fn test_threshold() {
        assert!(!is_past_threshold(0.999));
        assert!(is_past_threshold(1.0));
        assert!(is_past_threshold(3.0));
    }

    #[test]
    fn test_static_style_contributes_only_when_busy() {
        let g = geometry(Style::Static);
        assert_eq!(g.expanded_inset(PullState::Normal, 1.0), 0.0);
        assert_eq!(g.expanded_inset(PullState::Ready, 1.0), 0.0);
        assert_eq!(g.expanded_inset(PullState::Loading, 1.0), 70.0);
        assert_eq!(g.expanded_inset(PullState::Closing, 0.5), 35.0);
    }

    #[test]
    fn test_scrolling_style_contribution_scales_with_expansion() {
        let g = geometry(Style::Scrolling);
        assert_eq!(g.expanded_inset(PullState::Normal, 0.0), 0.0);
        assert_eq!(g.expanded_inset(PullState::Loading, 0.25), 17.5);
        assert_eq!(g.expanded_inset(PullState::Loading, 4.0), 70.0);
    }

    #[test]
    fn test_loading_drag_inset_follows_content() {
        let g = geometry(Style::Scrolling);
        // scrolled into the content: control slides away entirely
        assert_eq!(g.loading_drag_inset(30.0), Some(0.0));
        // partially revealed
        assert_eq!(g.loading_drag_inset(-40.0), Some(30.0));
        // pulled far past: capped at the expanded height
        assert_eq!(g.loading_drag_inset(-200.0), Some(70.0));

        assert_eq!(geometry(Style::Static).loading_drag_inset(-40.0), None);
    }

    #[test]
    fn test_control_frames() {
        let viewport = Size::new(320.0, 480.0);

        let frame = geometry(Style::Scrolling).control_frame(-40.0, viewport, 0.0);
        assert_eq!(frame, Rect::new(0.0, -70.0, 320.0, 70.0));
        assert_eq!(frame.max_y(), 0.0);

        let frame = geometry(Style::Static).control_frame(-40.0, viewport, 0.0);
        assert_eq!(frame, Rect::new(0.0, -30.0, 320.0, 30.0));

        let frame = geometry(Style::Static).control_frame(-10.0, viewport, 70.0);
        assert_eq!(frame.height(), 70.0);
    }
}
