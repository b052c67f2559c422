//! Draw list facade: primitives, the path API, clipping and buffer access.

mod flags;
mod layout;
mod list;

#[allow(deprecated)]
pub use flags::DrawCornerFlags;
pub use flags::DrawFlags;
pub use layout::{DrawVertex, IndexBufferLayout, RawBuffer, VertexBufferLayout};
pub use list::DrawListMut;
