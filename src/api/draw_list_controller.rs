use tracing::trace;

use crate::core::DrawListHandle;
use crate::draw::{DrawListMut, IndexBufferLayout, VertexBufferLayout};
use crate::ffi::ForeignBackend;

use super::Bridge;

impl<B: ForeignBackend> Bridge<B> {
    /// Draw list of the window currently being built.
    pub fn window_draw_list(&mut self) -> DrawListMut<'_, B> {
        let list = self.backend.window_draw_list();
        trace!(?list, "window draw list");
        DrawListMut::new(&mut self.backend, list, &self.config.draw)
    }

    /// Draw list rendered behind every window.
    pub fn background_draw_list(&mut self) -> DrawListMut<'_, B> {
        let list = self.backend.background_draw_list();
        trace!(?list, "background draw list");
        DrawListMut::new(&mut self.backend, list, &self.config.draw)
    }

    /// Facade over a draw list handle obtained earlier in the same frame.
    ///
    /// Handles are not validated; a list from a previous frame may already be
    /// gone on the native side.
    pub fn draw_list(&mut self, list: DrawListHandle) -> DrawListMut<'_, B> {
        DrawListMut::new(&mut self.backend, list, &self.config.draw)
    }

    pub fn vertex_buffer_layout(&mut self) -> VertexBufferLayout {
        self.backend.vertex_buffer_layout()
    }

    pub fn index_buffer_layout(&mut self) -> IndexBufferLayout {
        self.backend.index_buffer_layout()
    }
}
