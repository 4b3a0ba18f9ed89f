//! Recoil Core
//!
//! Foundational types for the Recoil pull-to-refresh controller:
//!
//! - **Geometry**: points, sizes, rects and four-sided insets
//! - **Scroll Events**: snapshots the host container delivers on every offset or inset change
//! - **State Machines**: a typed transition-table runtime and the pull states built on it
//!
//! # Example
//!
//! ```rust
//! use recoil_core::fsm::StateMachine;
//! use recoil_core::{PullEvent, PullState};
//!
//! let mut fsm = StateMachine::new(PullState::Normal);
//!
//! // Only listed transitions happen
//! assert!(fsm.send(PullEvent::FinishLoading).is_none());
//!
//! fsm.send(PullEvent::StartLoading);
//! assert_eq!(fsm.current_state(), PullState::Loading);
//! ```

pub mod events;
pub mod fsm;
pub mod geometry;
pub mod state;

pub use events::{ScrollEvent, ScrollMetrics, ScrollPhase};
pub use fsm::{StateMachine, StateTransitions, Transition};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use state::{PullEvent, PullState};
