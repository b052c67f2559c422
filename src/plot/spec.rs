use crate::api::PlotDefaults;
use crate::core::Vec2;

use super::{AxisFlags, PlotFlags};

/// Arguments of one `begin_plot` call.
///
/// Labels left as `None` reach the native side as null pointers, which hides
/// the label instead of drawing an empty one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSpec<'a> {
    pub title: &'a str,
    pub x_label: Option<&'a str>,
    pub y_label: Option<&'a str>,
    pub y2_label: Option<&'a str>,
    pub y3_label: Option<&'a str>,
    /// Frame size; `-1` on an axis fills the available width, `0` uses the
    /// native default.
    pub size: Vec2,
    pub flags: PlotFlags,
    pub x_flags: AxisFlags,
    pub y_flags: AxisFlags,
    pub y2_flags: AxisFlags,
    pub y3_flags: AxisFlags,
}

impl<'a> PlotSpec<'a> {
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self::from_defaults(title, &PlotDefaults::default())
    }

    #[must_use]
    pub fn from_defaults(title: &'a str, defaults: &PlotDefaults) -> Self {
        Self {
            title,
            x_label: None,
            y_label: None,
            y2_label: None,
            y3_label: None,
            size: defaults.size,
            flags: defaults.flags,
            x_flags: defaults.x_flags,
            y_flags: defaults.y_flags,
            y2_flags: defaults.y2_flags,
            y3_flags: defaults.y3_flags,
        }
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: &'a str, y_label: &'a str) -> Self {
        self.x_label = Some(x_label);
        self.y_label = Some(y_label);
        self
    }

    #[must_use]
    pub fn with_y2_label(mut self, label: &'a str) -> Self {
        self.y2_label = Some(label);
        self
    }

    #[must_use]
    pub fn with_y3_label(mut self, label: &'a str) -> Self {
        self.y3_label = Some(label);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: PlotFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the x axis and primary y axis flags.
    #[must_use]
    pub fn with_axis_flags(mut self, x_flags: AxisFlags, y_flags: AxisFlags) -> Self {
        self.x_flags = x_flags;
        self.y_flags = y_flags;
        self
    }

    /// Sets the auxiliary y axis flags. The axes are only shown when
    /// `Y_AXIS_2` / `Y_AXIS_3` are part of the plot flags.
    #[must_use]
    pub fn with_extra_y_axis_flags(mut self, y2_flags: AxisFlags, y3_flags: AxisFlags) -> Self {
        self.y2_flags = y2_flags;
        self.y3_flags = y3_flags;
        self
    }
}
