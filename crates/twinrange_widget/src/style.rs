//! Visual styling passed through to the renderer
//!
//! Nothing in here affects slider behavior. The engine computes geometry;
//! the host's renderer reads these values to decide how to paint it.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Colors of the three track segments and the track background
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackColors {
    /// Track before the left thumb
    pub leading: Color,
    /// Track between the thumbs
    pub selected: Color,
    /// Track after the right thumb
    pub trailing: Color,
    pub background: Color,
}

impl Default for TrackColors {
    fn default() -> Self {
        Self {
            leading: Color::from_hex(0xD1D5DB),
            selected: Color::from_hex(0x3B82F6),
            trailing: Color::from_hex(0xD1D5DB),
            background: Color::TRANSPARENT,
        }
    }
}

/// Drop shadow under a thumb
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl ThumbShadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }
}

impl Default for ThumbShadow {
    fn default() -> Self {
        Self::new(0.0, 1.0, 3.0, Color::BLACK.with_alpha(0.25))
    }
}

/// Where per-thumb overlay content is placed relative to its thumb
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayStyle {
    #[default]
    Above,
    Below,
    Centered,
}

/// Thumb appearance
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbStyle {
    pub color: Color,
    /// Render scale applied to the thumb diameter
    pub scale: f32,
    pub shadow: Option<ThumbShadow>,
    pub overlay: OverlayStyle,
    pub stroke_width: f32,
    pub stroke_color: Color,
}

impl Default for ThumbStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            scale: 1.0,
            shadow: Some(ThumbShadow::default()),
            overlay: OverlayStyle::default(),
            stroke_width: 0.0,
            stroke_color: Color::GRAY,
        }
    }
}

/// Full slider style
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSliderStyle {
    pub track: TrackColors,
    pub track_height: f32,
    pub thumb: ThumbStyle,
}

impl Default for RangeSliderStyle {
    fn default() -> Self {
        Self {
            track: TrackColors::default(),
            track_height: 4.0,
            thumb: ThumbStyle::default(),
        }
    }
}

impl RangeSliderStyle {
    /// Color of the segment between the thumbs
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.track.selected = color;
        self
    }

    /// Color of both segments outside the thumbs
    pub fn with_unselected_color(mut self, color: Color) -> Self {
        self.track.leading = color;
        self.track.trailing = color;
        self
    }

    pub fn with_thumb(mut self, thumb: ThumbStyle) -> Self {
        self.thumb = thumb;
        self
    }

    pub fn with_track_height(mut self, height: f32) -> Self {
        self.track_height = height.max(0.0);
        self
    }
}
