pub mod color;
pub mod handle;
pub mod types;

pub use color::PackedColor;
pub use handle::{
    DrawCommandHandle, DrawCommandKind, DrawListHandle, DrawListKind, Handle, HandleKind, IoHandle,
    IoKind, PlotContextHandle, PlotContextKind,
};
pub use types::{Condition, TextureId, Vec2, Vec4, YAxis};
