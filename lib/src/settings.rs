#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{render::Style, rewrite::Limits, turtle::TurtleConfig};

/// Everything that tunes how a curve is grown and drawn
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    #[cfg_attr(feature = "serde", serde(default))]
    pub turtle: TurtleConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub generations: GenerationConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlay: OverlayConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationConfig {
    /// How many generations to grow, the first being one expansion of the axiom
    #[cfg_attr(feature = "serde", serde(default = "default_count"))]
    pub count: usize,
    /// Warn once a generation grows beyond this many bytes
    #[cfg_attr(feature = "serde", serde(default = "default_warn_len"))]
    pub warn_len: usize,
    /// Fail instead of growing a generation beyond this many bytes
    #[cfg_attr(feature = "serde", serde(default = "default_max_len"))]
    pub max_len: usize,
}

const fn default_count() -> usize {
    8
}

fn default_warn_len() -> usize {
    Limits::default().warn_len
}

fn default_max_len() -> usize {
    Limits::default().max_len
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            warn_len: default_warn_len(),
            max_len: default_max_len(),
        }
    }
}

impl GenerationConfig {
    pub fn limits(&self) -> Limits {
        Limits {
            warn_len: self.warn_len,
            max_len: self.max_len,
        }
    }
}

/// Options for drawing every generation on top of each other
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlayConfig {
    /// Step scaler used instead of [TurtleConfig::step_scaler].
    ///
    /// Also sets how far each generation's starting point sits from the origin.
    #[cfg_attr(feature = "serde", serde(default = "default_overlay_scaler"))]
    pub step_scaler: f64,
    /// Multiplies the stroke width after each generation, defaults to the step scaler
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroke_width_decay: Option<f64>,
}

const fn default_overlay_scaler() -> f64 {
    0.5
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            step_scaler: default_overlay_scaler(),
            stroke_width_decay: None,
        }
    }
}

impl OverlayConfig {
    pub fn stroke_width_decay(&self) -> f64 {
        self.stroke_width_decay.unwrap_or(self.step_scaler)
    }
}
