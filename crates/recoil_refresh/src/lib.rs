//! Recoil Refresh
//!
//! A pull-to-refresh controller for any scrollable container. The host
//! forwards scroll notifications; the controller works out pull progress,
//! drives the Normal → Ready → Loading → Closing cycle, and keeps the
//! container's top inset in step with its expansion.
//!
//! # Features
//!
//! - **Geometry**: pure progress, inset and frame computations
//! - **State**: an explicit transition table with will/did notifications
//! - **Insets**: the control's contribution layered over a host-owned baseline,
//!   with echo suppression for its own writes
//! - **Sequencing**: animated or immediate expand/collapse with completions
//!   that run exactly once
//! - **Configuration**: TOML-loadable settings with validation
//!
//! # Host integration
//!
//! Implement [`ScrollContainer`] for the scroll view, optionally
//! [`RefreshDelegate`] for lifecycle hooks and [`ContentView`] for the
//! visuals, then build a [`RefreshControl`]. Call
//! [`RefreshControl::handle_event`] for every offset or inset change and
//! [`RefreshControl::tick`] once per frame while
//! [`RefreshControl::is_animating`] is true.

pub mod config;
pub mod content;
pub mod control;
pub mod error;
pub mod geometry;
pub mod host;
pub mod inset;
pub mod sequencer;

pub use config::{RefreshConfig, SafeArea, Style};
pub use content::StatusContentView;
pub use control::{PullSession, RefreshControl, RefreshControlBuilder};
pub use error::{RefreshError, Result};
pub use geometry::PullGeometry;
pub use host::{ContentView, ControlStatus, RefreshDelegate, ScrollContainer};
pub use inset::{InsetCoordinator, InsetOrigin};
pub use sequencer::Completion;

// Re-export the types that appear in this crate's API
pub use recoil_animation::{Easing, PullCurve};
pub use recoil_core::{EdgeInsets, PullState, ScrollEvent, ScrollMetrics, ScrollPhase};
