use serde::{Deserialize, Serialize};

/// 2D vector in screen or plot space, 32-bit float per component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Four-component vector, used for normalized RGBA colors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

/// Caller-supplied texture identity forwarded verbatim to the renderer.
///
/// Unlike foreign handles this value belongs to the host's GPU backend, so it
/// can be built from any integer the backend uses to name its textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub usize);

impl TextureId {
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> usize {
        self.0
    }
}

/// When a "set next" style call takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum Condition {
    /// No condition; behaves like `Always`.
    #[default]
    None = 0,
    Always = 1 << 0,
    Once = 1 << 1,
    FirstUseEver = 1 << 2,
    Appearing = 1 << 3,
}

impl Condition {
    #[must_use]
    pub const fn bits(self) -> i32 {
        self as i32
    }
}

/// Y axis selector for plots with auxiliary axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum YAxis {
    #[default]
    Y1 = 0,
    Y2 = 1,
    Y3 = 2,
}

impl YAxis {
    #[must_use]
    pub const fn index(self) -> i32 {
        self as i32
    }
}
