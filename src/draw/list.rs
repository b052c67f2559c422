use crate::api::DrawDefaults;
use crate::core::{DrawCommandHandle, DrawListHandle, PackedColor, TextureId, Vec2};
use crate::error::BridgeResult;
use crate::ffi::ForeignBackend;
use crate::marshal::{ForeignString, SkipReason};

use super::{DrawFlags, DrawVertex, RawBuffer};

/// Mutable view of one foreign draw list.
///
/// Borrowed from a [`Bridge`](crate::Bridge) for the duration of the drawing
/// code. The short-form operations (`add_line`, `add_rect`, ...) take their
/// thickness, rounding and segment count from the bridge's [`DrawDefaults`];
/// the `_with` variants take every argument explicitly.
pub struct DrawListMut<'a, B: ForeignBackend> {
    backend: &'a mut B,
    list: DrawListHandle,
    defaults: &'a DrawDefaults,
}

impl<'a, B: ForeignBackend> DrawListMut<'a, B> {
    pub(crate) fn new(backend: &'a mut B, list: DrawListHandle, defaults: &'a DrawDefaults) -> Self {
        Self {
            backend,
            list,
            defaults,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DrawListHandle {
        self.list
    }

    pub fn command_count(&mut self) -> usize {
        usize::try_from(self.backend.draw_list_command_count(self.list)).unwrap_or(0)
    }

    /// Handles of every command currently recorded in the list, in order.
    pub fn commands(&mut self) -> Vec<DrawCommandHandle> {
        let count = self.backend.draw_list_command_count(self.list).max(0);
        (0..count)
            .map(|index| self.backend.draw_list_command(self.list, index))
            .collect()
    }

    pub fn vertex_buffer(&mut self) -> RawBuffer<'_> {
        self.backend.draw_list_raw_vertex_buffer(self.list)
    }

    pub fn index_buffer(&mut self) -> RawBuffer<'_> {
        self.backend.draw_list_raw_index_buffer(self.list)
    }

    /// Decodes the vertex buffer with a layout queried for this call.
    pub fn vertices(&mut self) -> BridgeResult<Vec<DrawVertex>> {
        let layout = self.backend.vertex_buffer_layout();
        let buffer = self.backend.draw_list_raw_vertex_buffer(self.list);
        layout.decode(buffer.as_bytes())
    }

    /// Decodes the index buffer with a layout queried for this call.
    pub fn indices(&mut self) -> BridgeResult<Vec<u32>> {
        let layout = self.backend.index_buffer_layout();
        let buffer = self.backend.draw_list_raw_index_buffer(self.list);
        layout.decode(buffer.as_bytes())
    }

    pub fn add_line(&mut self, p1: Vec2, p2: Vec2, col: PackedColor) {
        self.add_line_with(p1, p2, col, self.defaults.thickness);
    }

    pub fn add_line_with(&mut self, p1: Vec2, p2: Vec2, col: PackedColor, thickness: f32) {
        self.backend
            .add_line(self.list, &p1.into(), &p2.into(), col.bits(), thickness);
    }

    pub fn add_rect(&mut self, min: Vec2, max: Vec2, col: PackedColor) {
        self.add_rect_with(
            min,
            max,
            col,
            self.defaults.rounding,
            self.defaults.corner_flags,
            self.defaults.thickness,
        );
    }

    pub fn add_rect_with(
        &mut self,
        min: Vec2,
        max: Vec2,
        col: PackedColor,
        rounding: f32,
        flags: DrawFlags,
        thickness: f32,
    ) {
        self.backend.add_rect(
            self.list,
            &min.into(),
            &max.into(),
            col.bits(),
            rounding,
            flags.to_c(),
            thickness,
        );
    }

    pub fn add_rect_filled(&mut self, min: Vec2, max: Vec2, col: PackedColor) {
        self.add_rect_filled_with(min, max, col, self.defaults.rounding, self.defaults.corner_flags);
    }

    pub fn add_rect_filled_with(
        &mut self,
        min: Vec2,
        max: Vec2,
        col: PackedColor,
        rounding: f32,
        flags: DrawFlags,
    ) {
        self.backend.add_rect_filled(
            self.list,
            &min.into(),
            &max.into(),
            col.bits(),
            rounding,
            flags.to_c(),
        );
    }

    /// Cubic bezier from `pos0` to `pos1`. Zero segments lets the native side
    /// tessellate adaptively.
    #[allow(clippy::too_many_arguments)]
    pub fn add_bezier_cubic(
        &mut self,
        pos0: Vec2,
        cp0: Vec2,
        cp1: Vec2,
        pos1: Vec2,
        col: PackedColor,
        thickness: f32,
        num_segments: i32,
    ) {
        self.backend.add_bezier_cubic(
            self.list,
            &pos0.into(),
            &cp0.into(),
            &cp1.into(),
            &pos1.into(),
            col.bits(),
            thickness,
            num_segments,
        );
    }

    pub fn add_circle(&mut self, center: Vec2, radius: f32, col: PackedColor) {
        self.add_circle_with(
            center,
            radius,
            col,
            self.defaults.num_segments,
            self.defaults.thickness,
        );
    }

    pub fn add_circle_with(
        &mut self,
        center: Vec2,
        radius: f32,
        col: PackedColor,
        num_segments: i32,
        thickness: f32,
    ) {
        self.backend.add_circle(
            self.list,
            &center.into(),
            radius,
            col.bits(),
            num_segments,
            thickness,
        );
    }

    pub fn add_circle_filled(&mut self, center: Vec2, radius: f32, col: PackedColor) {
        self.add_circle_filled_with(center, radius, col, self.defaults.num_segments);
    }

    pub fn add_circle_filled_with(&mut self, center: Vec2, radius: f32, col: PackedColor, num_segments: i32) {
        self.backend
            .add_circle_filled(self.list, &center.into(), radius, col.bits(), num_segments);
    }

    pub fn add_triangle(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, col: PackedColor) {
        self.add_triangle_with(p1, p2, p3, col, self.defaults.thickness);
    }

    pub fn add_triangle_with(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, col: PackedColor, thickness: f32) {
        self.backend.add_triangle(
            self.list,
            &p1.into(),
            &p2.into(),
            &p3.into(),
            col.bits(),
            thickness,
        );
    }

    pub fn add_triangle_filled(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, col: PackedColor) {
        self.backend
            .add_triangle_filled(self.list, &p1.into(), &p2.into(), &p3.into(), col.bits());
    }

    pub fn add_quad(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2, col: PackedColor, thickness: f32) {
        self.backend.add_quad(
            self.list,
            &p1.into(),
            &p2.into(),
            &p3.into(),
            &p4.into(),
            col.bits(),
            thickness,
        );
    }

    pub fn add_quad_filled(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2, col: PackedColor) {
        self.backend.add_quad_filled(
            self.list,
            &p1.into(),
            &p2.into(),
            &p3.into(),
            &p4.into(),
            col.bits(),
        );
    }

    /// Draws `text` at `pos`. Empty text draws nothing.
    ///
    /// The text is passed with an explicit length, so interior NUL bytes are
    /// drawn rather than terminating the string.
    pub fn add_text(&mut self, pos: Vec2, col: PackedColor, text: &str) {
        const ENTRY: &str = "iggAddText";
        let buffer = ForeignString::new(text);
        if buffer.is_empty() {
            return SkipReason::Empty.log(ENTRY);
        }
        let Some(len) = buffer.text_len_c() else {
            return SkipReason::TooLong {
                len: buffer.text_len(),
            }
            .log(ENTRY);
        };
        self.backend
            .add_text(self.list, &pos.into(), col.bits(), &buffer, len);
    }

    /// Image over `pos_min..pos_max` using the full texture and a white tint.
    pub fn add_image(&mut self, texture: TextureId, pos_min: Vec2, pos_max: Vec2) {
        self.add_image_with(
            texture,
            pos_min,
            pos_max,
            Vec2::ZERO,
            Vec2::ONE,
            PackedColor::WHITE,
        );
    }

    pub fn add_image_with(
        &mut self,
        texture: TextureId,
        pos_min: Vec2,
        pos_max: Vec2,
        uv_min: Vec2,
        uv_max: Vec2,
        tint: PackedColor,
    ) {
        self.backend.add_image(
            self.list,
            texture,
            &pos_min.into(),
            &pos_max.into(),
            &uv_min.into(),
            &uv_max.into(),
            tint.bits(),
        );
    }

    pub fn path_clear(&mut self) {
        self.backend.path_clear(self.list);
    }

    pub fn path_line_to(&mut self, pos: Vec2) {
        self.backend.path_line_to(self.list, &pos.into());
    }

    /// Like [`path_line_to`](Self::path_line_to) but drops `pos` when it
    /// repeats the last path point.
    pub fn path_line_to_merge_duplicate(&mut self, pos: Vec2) {
        self.backend
            .path_line_to_merge_duplicate(self.list, &pos.into());
    }

    /// Fills the current path (must be convex) and clears it.
    pub fn path_fill_convex(&mut self, col: PackedColor) {
        self.backend.path_fill_convex(self.list, col.bits());
    }

    /// Strokes the current path and clears it.
    pub fn path_stroke(&mut self, col: PackedColor, closed: bool, thickness: f32) {
        self.backend
            .path_stroke(self.list, col.bits(), closed, thickness);
    }

    pub fn path_arc_to(&mut self, center: Vec2, radius: f32, a_min: f32, a_max: f32, num_segments: i32) {
        self.backend
            .path_arc_to(self.list, &center.into(), radius, a_min, a_max, num_segments);
    }

    /// Arc using the precomputed 12-step angle table; angles are in twelfths
    /// of a full turn.
    pub fn path_arc_to_fast(&mut self, center: Vec2, radius: f32, a_min_of_12: i32, a_max_of_12: i32) {
        self.backend
            .path_arc_to_fast(self.list, &center.into(), radius, a_min_of_12, a_max_of_12);
    }

    pub fn path_bezier_cubic_curve_to(&mut self, p2: Vec2, p3: Vec2, p4: Vec2, num_segments: i32) {
        self.backend.path_bezier_cubic_curve_to(
            self.list,
            &p2.into(),
            &p3.into(),
            &p4.into(),
            num_segments,
        );
    }

    pub fn push_clip_rect(&mut self, min: Vec2, max: Vec2) {
        self.push_clip_rect_with(min, max, self.defaults.clip_intersect);
    }

    /// Pushes a clip rectangle, optionally intersected with the current one.
    pub fn push_clip_rect_with(&mut self, min: Vec2, max: Vec2, intersect: bool) {
        self.backend
            .push_clip_rect(self.list, &min.into(), &max.into(), intersect);
    }

    pub fn pop_clip_rect(&mut self) {
        self.backend.pop_clip_rect(self.list);
    }
}

impl<B: ForeignBackend> std::fmt::Debug for DrawListMut<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawListMut")
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}
