//! Rubber-band curves for pull progress past full expansion.
//!
//! Raw progress keeps growing linearly while the user pulls beyond the
//! threshold. A [`PullCurve`] reshapes only the part above 1.0 before it is
//! shown, so indicators can stretch, slow down or stop. Values up to 1.0
//! always pass through unchanged.
//!
//! ```
//! use recoil_animation::PullCurve;
//!
//! let curve = PullCurve::Damped { limit: 0.5 };
//! assert_eq!(curve.apply(0.4), 0.4);
//! assert!(curve.apply(10.0) <= 1.5);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "CurveRepr", into = "CurveRepr")]
pub enum PullCurve {
    /// Overscroll is shown as-is
    #[default]
    Linear,
    /// Overscroll approaches `1.0 + limit` asymptotically
    Damped { limit: f32 },
    /// User-defined mapping of the overscroll amount (progress minus 1.0)
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl PullCurve {
    /// Create a custom curve from a closure over the overscroll amount
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        PullCurve::Custom(Arc::new(f))
    }

    /// Map raw progress to displayed progress
    pub fn apply(&self, progress: f32) -> f32 {
        if progress <= 1.0 {
            return progress;
        }
        let excess = progress - 1.0;
        let shaped = match self {
            PullCurve::Linear => excess,
            PullCurve::Damped { limit } => {
                if *limit <= 0.0 {
                    0.0
                } else {
                    limit * (1.0 - (-excess / limit).exp())
                }
            }
            PullCurve::Custom(f) => f(excess),
        };
        1.0 + shaped.max(0.0)
    }
}

impl std::fmt::Debug for PullCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PullCurve::Linear => write!(f, "Linear"),
            PullCurve::Damped { limit } => write!(f, "Damped({})", limit),
            PullCurve::Custom(_) => write!(f, "Custom"),
        }
    }
}

impl PartialEq for PullCurve {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PullCurve::Linear, PullCurve::Linear) => true,
            (PullCurve::Damped { limit: a }, PullCurve::Damped { limit: b }) => a == b,
            (PullCurve::Custom(a), PullCurve::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Serializable form. Custom closures cannot round-trip and are written as linear.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum CurveRepr {
    Linear,
    Damped { limit: f32 },
}

impl From<CurveRepr> for PullCurve {
    fn from(repr: CurveRepr) -> Self {
        match repr {
            CurveRepr::Linear => PullCurve::Linear,
            CurveRepr::Damped { limit } => PullCurve::Damped { limit },
        }
    }
}

impl From<PullCurve> for CurveRepr {
    fn from(curve: PullCurve) -> Self {
        match curve {
            PullCurve::Damped { limit } => CurveRepr::Damped { limit },
            PullCurve::Linear | PullCurve::Custom(_) => CurveRepr::Linear,
        }
    }
}
