use crate::core::Vec2;

/// C layout of a 2D vector as the shim reads and writes it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawVec2 {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for RawVec2 {
    fn from(value: Vec2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<RawVec2> for Vec2 {
    fn from(value: RawVec2) -> Self {
        Self::new(value.x, value.y)
    }
}
