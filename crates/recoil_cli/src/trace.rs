//! Gesture trace files
//!
//! A trace is a TOML list of steps applied in order:
//!
//! ```toml
//! [[step]]
//! kind = "drag"
//! offset = -90.0
//!
//! [[step]]
//! kind = "release"
//! offset = -90.0
//!
//! [[step]]
//! kind = "tick"
//! ms = 300
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// The user drags the content to `offset`
    Drag { offset: f32 },
    /// The user lifts their finger at `offset`
    Release { offset: f32 },
    /// Momentum scrolling reaches `offset`
    Decelerate { offset: f32 },
    StartLoading {
        #[serde(default)]
        expand: bool,
        #[serde(default = "default_true")]
        animated: bool,
    },
    FinishLoading {
        #[serde(default = "default_true")]
        animated: bool,
    },
    /// Advance animations by `ms` milliseconds in 16ms frames
    Tick { ms: u32 },
    /// The host replaces the container's inset
    SetInset {
        #[serde(default)]
        top: f32,
        #[serde(default)]
        left: f32,
        #[serde(default)]
        bottom: f32,
        #[serde(default)]
        right: f32,
    },
    /// The delegate refuses the next release
    DenyNextStart,
}

impl Step {
    /// One-line description for the replay log
    pub fn describe(&self) -> String {
        match self {
            Step::Drag { offset } => format!("drag to {offset}"),
            Step::Release { offset } => format!("release at {offset}"),
            Step::Decelerate { offset } => format!("decelerate to {offset}"),
            Step::StartLoading { expand, animated } => {
                format!("start_loading expand={expand} animated={animated}")
            }
            Step::FinishLoading { animated } => format!("finish_loading animated={animated}"),
            Step::Tick { ms } => format!("tick {ms}ms"),
            Step::SetInset { top, left, bottom, right } => {
                format!("set_inset [{top}, {left}, {bottom}, {right}]")
            }
            Step::DenyNextStart => "deny_next_start".to_string(),
        }
    }
}

impl Trace {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
