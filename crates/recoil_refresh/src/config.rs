//! Refresh control configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! expanded_height = 64.0
//! style = "static"
//! pull_curve = { damped = { limit = 0.5 } }
//!
//! [default_content_inset]
//! top = 44.0
//! ```

use recoil_animation::{Easing, PullCurve};
use recoil_core::EdgeInsets;
use serde::{Deserialize, Serialize};

use crate::error::{RefreshError, Result};

/// Height of the fully expanded control
pub const DEFAULT_EXPANDED_HEIGHT: f32 = 70.0;

/// Duration of animated expand/collapse transitions
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;

/// How the control is placed relative to the scrolling content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Attached above the content and moves with it
    #[default]
    Scrolling,
    /// Pinned behind the content at the top of the viewport; only takes up
    /// space while loading or closing
    Static,
}

/// Which safe-area inset counts toward the pull baseline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeArea {
    /// Use whatever the container reports with each notification
    #[default]
    FromContainer,
    /// Treat the safe area as zero
    Ignore,
    /// Use a fixed inset regardless of what the container reports
    Fixed(EdgeInsets),
}

impl SafeArea {
    pub fn resolve(&self, reported: EdgeInsets) -> EdgeInsets {
        match self {
            SafeArea::FromContainer => reported,
            SafeArea::Ignore => EdgeInsets::ZERO,
            SafeArea::Fixed(insets) => *insets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Height of the fully expanded content, independent of the content
    /// view's own size. Pulling this far arms the control.
    pub expanded_height: f32,
    pub style: Style,
    /// Duration of animated expand/collapse transitions (0 = immediate)
    pub animation_duration_ms: u32,
    pub easing: Easing,
    /// Shapes displayed progress past full expansion
    pub pull_curve: PullCurve,
    pub safe_area: SafeArea,
    /// Host-owned baseline inset. The control adds its own contribution on
    /// top and never folds it back into this value.
    pub default_content_inset: EdgeInsets,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            expanded_height: DEFAULT_EXPANDED_HEIGHT,
            style: Style::Scrolling,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::EaseOut,
            pull_curve: PullCurve::Linear,
            safe_area: SafeArea::FromContainer,
            default_content_inset: EdgeInsets::ZERO,
        }
    }
}

impl RefreshConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RefreshConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_expanded_height(self.expanded_height)
    }

    pub fn with_expanded_height(mut self, height: f32) -> Self {
        self.expanded_height = height;
        self
    }

    pub fn with_default_content_inset(mut self, insets: EdgeInsets) -> Self {
        self.default_content_inset = insets;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_safe_area(mut self, safe_area: SafeArea) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn with_animation_duration_ms(mut self, duration_ms: u32) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_pull_curve(mut self, curve: PullCurve) -> Self {
        self.pull_curve = curve;
        self
    }
}

pub(crate) fn validate_expanded_height(height: f32) -> Result<()> {
    if height.is_finite() && height > 0.0 {
        Ok(())
    } else {
        Err(RefreshError::InvalidExpandedHeight(height))
    }
}
