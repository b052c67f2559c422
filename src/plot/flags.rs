use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Options for a whole plot, passed to `begin_plot`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PlotFlags: u32 {
        const NO_TITLE = 1 << 0;
        const NO_LEGEND = 1 << 1;
        const NO_MENUS = 1 << 2;
        const NO_BOX_SELECT = 1 << 3;
        const NO_MOUSE_POS = 1 << 4;
        const NO_HIGHLIGHT = 1 << 5;
        /// Draw into the current window instead of a child window.
        const NO_CHILD = 1 << 6;
        /// Keep one unit of x equal to one unit of y.
        const EQUAL = 1 << 7;
        const Y_AXIS_2 = 1 << 8;
        const Y_AXIS_3 = 1 << 9;
        const QUERY = 1 << 10;
        const CROSSHAIRS = 1 << 11;
        const ANTI_ALIASED = 1 << 12;
        const CANVAS_ONLY = Self::NO_TITLE.bits()
            | Self::NO_LEGEND.bits()
            | Self::NO_MENUS.bits()
            | Self::NO_BOX_SELECT.bits()
            | Self::NO_MOUSE_POS.bits();
    }
}

bitflags! {
    /// Options for one plot axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AxisFlags: u32 {
        const NO_LABEL = 1 << 0;
        const NO_GRID_LINES = 1 << 1;
        const NO_TICK_MARKS = 1 << 2;
        const NO_TICK_LABELS = 1 << 3;
        const LOG_SCALE = 1 << 4;
        /// Format tick labels as timestamps (seconds since the Unix epoch).
        const TIME = 1 << 5;
        const INVERT = 1 << 6;
        const LOCK_MIN = 1 << 7;
        const LOCK_MAX = 1 << 8;
        const LOCK = Self::LOCK_MIN.bits() | Self::LOCK_MAX.bits();
        const NO_DECORATIONS = Self::NO_LABEL.bits()
            | Self::NO_GRID_LINES.bits()
            | Self::NO_TICK_MARKS.bits()
            | Self::NO_TICK_LABELS.bits();
    }
}

impl PlotFlags {
    pub(crate) fn to_c(self) -> std::ffi::c_int {
        self.bits() as std::ffi::c_int
    }
}

impl AxisFlags {
    pub(crate) fn to_c(self) -> std::ffi::c_int {
        self.bits() as std::ffi::c_int
    }
}
