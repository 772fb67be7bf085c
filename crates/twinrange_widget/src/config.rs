//! Slider configuration presets and file loading

use serde::{Deserialize, Serialize};
use twinrange_core::{BoundRange, TrackConfig, DEFAULT_THUMB_DIAMETER};

use crate::error::Result;
use crate::style::RangeSliderStyle;

/// Construction-time configuration of a range slider
///
/// Every field has a default, so configuration files only need to name what
/// they change:
///
/// ```toml
/// min = 0.0
/// max = 500.0
/// step = 10.0
///
/// [style.thumb]
/// color = "#1f2937"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSliderConfig {
    /// Lower domain bound
    pub min: f32,
    /// Upper domain bound
    pub max: f32,
    /// Quantization step; non-positive values disable stepping
    pub step: Option<f32>,
    /// Thumb diameter in pixels
    pub thumb_diameter: f32,
    pub style: RangeSliderStyle,
}

impl Default for RangeSliderConfig {
    fn default() -> Self {
        Self::percent()
    }
}

impl RangeSliderConfig {
    /// `0...100`, continuous
    pub fn percent() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: None,
            thumb_diameter: DEFAULT_THUMB_DIAMETER,
            style: RangeSliderStyle::default(),
        }
    }

    /// `0...1`, continuous
    pub fn unit() -> Self {
        Self {
            max: 1.0,
            ..Self::percent()
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_thumb_diameter(mut self, diameter: f32) -> Self {
        self.thumb_diameter = diameter;
        self
    }

    pub fn with_style(mut self, style: RangeSliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate the bounds and produce the engine configuration
    pub fn track_config(&self) -> Result<TrackConfig> {
        let bounds = BoundRange::new(self.min, self.max)?;
        Ok(TrackConfig::new(bounds)
            .with_step(self.step)
            .with_thumb_diameter(self.thumb_diameter))
    }
}
