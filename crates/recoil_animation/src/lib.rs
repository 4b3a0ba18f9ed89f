//! Recoil Animation
//!
//! Timing primitives for the refresh control.
//!
//! # Features
//!
//! - **Easing**: linear and cubic ease-in/out presets
//! - **Tweens**: fixed-duration value transitions advanced by the host's frame loop
//! - **Pull Curves**: configurable rubber-banding for progress past full expansion

pub mod curve;
pub mod easing;
pub mod tween;

pub use curve::PullCurve;
pub use easing::Easing;
pub use tween::Tween;
