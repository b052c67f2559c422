use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags for rectangle, polyline and path-stroke draw calls.
    ///
    /// Corner bits only matter when rounding is positive. When none of them is
    /// set, the native side rounds every corner.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DrawFlags: u32 {
        /// Close the shape (`path_stroke`, polylines).
        const CLOSED = 1 << 0;
        const ROUND_CORNERS_TOP_LEFT = 1 << 4;
        const ROUND_CORNERS_TOP_RIGHT = 1 << 5;
        const ROUND_CORNERS_BOTTOM_LEFT = 1 << 6;
        const ROUND_CORNERS_BOTTOM_RIGHT = 1 << 7;
        /// Disable rounding on every corner even with a positive radius.
        const ROUND_CORNERS_NONE = 1 << 8;
        const ROUND_CORNERS_TOP = Self::ROUND_CORNERS_TOP_LEFT.bits()
            | Self::ROUND_CORNERS_TOP_RIGHT.bits();
        const ROUND_CORNERS_BOTTOM = Self::ROUND_CORNERS_BOTTOM_LEFT.bits()
            | Self::ROUND_CORNERS_BOTTOM_RIGHT.bits();
        const ROUND_CORNERS_LEFT = Self::ROUND_CORNERS_BOTTOM_LEFT.bits()
            | Self::ROUND_CORNERS_TOP_LEFT.bits();
        const ROUND_CORNERS_RIGHT = Self::ROUND_CORNERS_BOTTOM_RIGHT.bits()
            | Self::ROUND_CORNERS_TOP_RIGHT.bits();
        const ROUND_CORNERS_ALL = Self::ROUND_CORNERS_TOP.bits()
            | Self::ROUND_CORNERS_BOTTOM.bits();
        const ROUND_CORNERS_DEFAULT = Self::ROUND_CORNERS_ALL.bits();
        const ROUND_CORNERS_MASK = Self::ROUND_CORNERS_ALL.bits()
            | Self::ROUND_CORNERS_NONE.bits();
    }
}

/// Former name of [`DrawFlags`], kept so older call sites still compile.
#[deprecated(note = "use `DrawFlags`")]
pub type DrawCornerFlags = DrawFlags;

impl DrawFlags {
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_NONE`")]
    pub const CORNER_NONE: Self = Self::ROUND_CORNERS_NONE;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_TOP_LEFT`")]
    pub const CORNER_TOP_LEFT: Self = Self::ROUND_CORNERS_TOP_LEFT;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_TOP_RIGHT`")]
    pub const CORNER_TOP_RIGHT: Self = Self::ROUND_CORNERS_TOP_RIGHT;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_BOTTOM_LEFT`")]
    pub const CORNER_BOT_LEFT: Self = Self::ROUND_CORNERS_BOTTOM_LEFT;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_BOTTOM_RIGHT`")]
    pub const CORNER_BOT_RIGHT: Self = Self::ROUND_CORNERS_BOTTOM_RIGHT;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_ALL`")]
    pub const CORNER_ALL: Self = Self::ROUND_CORNERS_ALL;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_TOP`")]
    pub const CORNER_TOP: Self = Self::ROUND_CORNERS_TOP;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_BOTTOM`")]
    pub const CORNER_BOT: Self = Self::ROUND_CORNERS_BOTTOM;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_LEFT`")]
    pub const CORNER_LEFT: Self = Self::ROUND_CORNERS_LEFT;
    #[deprecated(note = "use `DrawFlags::ROUND_CORNERS_RIGHT`")]
    pub const CORNER_RIGHT: Self = Self::ROUND_CORNERS_RIGHT;
}

impl DrawFlags {
    /// Adds `ROUND_CORNERS_DEFAULT` when no corner bit is present.
    #[must_use]
    pub fn with_default_corners(self) -> Self {
        if self.intersects(Self::ROUND_CORNERS_MASK) {
            self
        } else {
            self | Self::ROUND_CORNERS_DEFAULT
        }
    }

    /// Corners the native side will round for the given radius.
    ///
    /// Empty when the radius is not positive or `ROUND_CORNERS_NONE` is the
    /// only corner bit.
    #[must_use]
    pub fn rounded_corners(self, rounding: f32) -> Self {
        if rounding.is_nan() || rounding <= 0.0 {
            return Self::empty();
        }
        let resolved = self.with_default_corners() & Self::ROUND_CORNERS_MASK;
        if resolved == Self::ROUND_CORNERS_NONE {
            return Self::empty();
        }
        resolved & Self::ROUND_CORNERS_ALL
    }

    pub(crate) fn to_c(self) -> std::ffi::c_int {
        self.bits() as std::ffi::c_int
    }
}
