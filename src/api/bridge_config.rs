use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::draw::DrawFlags;
use crate::error::{BridgeError, BridgeResult};
use crate::plot::{AxisFlags, PlotFlags};

/// Public bridge configuration.
///
/// Serializable so host applications can keep their drawing defaults next to
/// the rest of their settings. Every field is optional in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub draw: DrawDefaults,
    #[serde(default)]
    pub plot: PlotDefaults,
}

impl BridgeConfig {
    #[must_use]
    pub fn with_draw_defaults(mut self, draw: DrawDefaults) -> Self {
        self.draw = draw;
        self
    }

    #[must_use]
    pub fn with_plot_defaults(mut self, plot: PlotDefaults) -> Self {
        self.plot = plot;
        self
    }

    pub fn validate(&self) -> BridgeResult<()> {
        self.draw.validate()?;
        self.plot.validate()
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> BridgeResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> BridgeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            BridgeError::InvalidConfig(format!("failed to serialize bridge config: {e}"))
        })
    }
}

/// Arguments the short-form draw list operations fill in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawDefaults {
    #[serde(default = "default_thickness")]
    pub thickness: f32,
    #[serde(default = "default_rounding")]
    pub rounding: f32,
    #[serde(default = "default_corner_flags")]
    pub corner_flags: DrawFlags,
    /// Circle tessellation; `0` picks a segment count from the radius.
    #[serde(default)]
    pub num_segments: i32,
    #[serde(default)]
    pub clip_intersect: bool,
}

impl Default for DrawDefaults {
    fn default() -> Self {
        Self {
            thickness: default_thickness(),
            rounding: default_rounding(),
            corner_flags: default_corner_flags(),
            num_segments: 0,
            clip_intersect: false,
        }
    }
}

impl DrawDefaults {
    #[must_use]
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: f32, corner_flags: DrawFlags) -> Self {
        self.rounding = rounding;
        self.corner_flags = corner_flags;
        self
    }

    #[must_use]
    pub fn with_num_segments(mut self, num_segments: i32) -> Self {
        self.num_segments = num_segments;
        self
    }

    pub fn validate(&self) -> BridgeResult<()> {
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(BridgeError::InvalidConfig(format!(
                "draw thickness must be finite and >= 0, got {}",
                self.thickness
            )));
        }
        if !self.rounding.is_finite() || self.rounding < 0.0 {
            return Err(BridgeError::InvalidConfig(format!(
                "draw rounding must be finite and >= 0, got {}",
                self.rounding
            )));
        }
        if self.num_segments < 0 {
            return Err(BridgeError::InvalidConfig(format!(
                "circle segment count must be >= 0, got {}",
                self.num_segments
            )));
        }
        Ok(())
    }
}

/// Values `PlotSpec::from_defaults` starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotDefaults {
    #[serde(default = "default_plot_size")]
    pub size: Vec2,
    #[serde(default)]
    pub flags: PlotFlags,
    #[serde(default)]
    pub x_flags: AxisFlags,
    #[serde(default)]
    pub y_flags: AxisFlags,
    #[serde(default)]
    pub y2_flags: AxisFlags,
    #[serde(default)]
    pub y3_flags: AxisFlags,
}

impl Default for PlotDefaults {
    fn default() -> Self {
        Self {
            size: default_plot_size(),
            flags: PlotFlags::empty(),
            x_flags: AxisFlags::empty(),
            y_flags: AxisFlags::empty(),
            y2_flags: AxisFlags::empty(),
            y3_flags: AxisFlags::empty(),
        }
    }
}

impl PlotDefaults {
    pub fn validate(&self) -> BridgeResult<()> {
        if !self.size.x.is_finite() || !self.size.y.is_finite() {
            return Err(BridgeError::InvalidConfig(format!(
                "plot size must be finite, got ({}, {})",
                self.size.x, self.size.y
            )));
        }
        Ok(())
    }
}

fn default_thickness() -> f32 {
    1.0
}

fn default_rounding() -> f32 {
    1.0
}

fn default_corner_flags() -> DrawFlags {
    DrawFlags::ROUND_CORNERS_ALL
}

fn default_plot_size() -> Vec2 {
    Vec2::new(-1.0, 0.0)
}
