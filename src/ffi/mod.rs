//! The `igg*` call surface of the C shim.
//!
//! [`ForeignBackend`] has one method per shim entry point and receives
//! arguments already marshaled into their foreign layout. Each method performs
//! exactly one foreign call; skipping and argument conversion happen before it
//! is reached.
#![allow(clippy::too_many_arguments)]

#[cfg(feature = "native")]
mod native;
mod recording;

use std::ffi::c_int;

use crate::core::{DrawCommandHandle, DrawListHandle, IoHandle, PlotContextHandle, TextureId};
use crate::draw::{IndexBufferLayout, RawBuffer, VertexBufferLayout};
use crate::marshal::{ForeignSlice, ForeignString, ForeignStringArray, RawVec2};

#[cfg(feature = "native")]
pub use native::NativeBackend;
pub use recording::{ForeignArg, ForeignCall, RecordingBackend};

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Contract implemented by the native shim and by the recording fake.
///
/// The trait is sealed: handles can only be minted inside this crate, so an
/// outside implementation could not produce valid ones.
pub trait ForeignBackend: Sealed {
    // Draw list buffers and commands.

    fn vertex_buffer_layout(&mut self) -> VertexBufferLayout;
    fn index_buffer_layout(&mut self) -> IndexBufferLayout;
    fn draw_list_raw_vertex_buffer(&mut self, list: DrawListHandle) -> RawBuffer<'_>;
    fn draw_list_raw_index_buffer(&mut self, list: DrawListHandle) -> RawBuffer<'_>;
    fn draw_list_command_count(&mut self, list: DrawListHandle) -> c_int;
    fn draw_list_command(&mut self, list: DrawListHandle, index: c_int) -> DrawCommandHandle;
    fn window_draw_list(&mut self) -> DrawListHandle;
    fn background_draw_list(&mut self) -> DrawListHandle;

    // Draw list primitives.

    fn add_line(&mut self, list: DrawListHandle, p1: &RawVec2, p2: &RawVec2, col: u32, thickness: f32);
    fn add_rect(
        &mut self,
        list: DrawListHandle,
        min: &RawVec2,
        max: &RawVec2,
        col: u32,
        rounding: f32,
        flags: c_int,
        thickness: f32,
    );
    fn add_rect_filled(
        &mut self,
        list: DrawListHandle,
        min: &RawVec2,
        max: &RawVec2,
        col: u32,
        rounding: f32,
        flags: c_int,
    );
    fn add_bezier_cubic(
        &mut self,
        list: DrawListHandle,
        pos0: &RawVec2,
        cp0: &RawVec2,
        cp1: &RawVec2,
        pos1: &RawVec2,
        col: u32,
        thickness: f32,
        num_segments: c_int,
    );
    fn add_circle_filled(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        col: u32,
        num_segments: c_int,
    );
    fn add_circle(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        col: u32,
        num_segments: c_int,
        thickness: f32,
    );
    fn add_triangle(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        col: u32,
        thickness: f32,
    );
    fn add_triangle_filled(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        col: u32,
    );
    fn add_quad(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        p4: &RawVec2,
        col: u32,
        thickness: f32,
    );
    fn add_quad_filled(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        p4: &RawVec2,
        col: u32,
    );
    fn add_text(
        &mut self,
        list: DrawListHandle,
        pos: &RawVec2,
        col: u32,
        text: &ForeignString,
        len: c_int,
    );
    fn add_image(
        &mut self,
        list: DrawListHandle,
        texture: TextureId,
        pos_min: &RawVec2,
        pos_max: &RawVec2,
        uv_min: &RawVec2,
        uv_max: &RawVec2,
        tint: u32,
    );

    // Stateful path API.

    fn path_clear(&mut self, list: DrawListHandle);
    fn path_line_to(&mut self, list: DrawListHandle, pos: &RawVec2);
    fn path_line_to_merge_duplicate(&mut self, list: DrawListHandle, pos: &RawVec2);
    fn path_fill_convex(&mut self, list: DrawListHandle, col: u32);
    fn path_stroke(&mut self, list: DrawListHandle, col: u32, closed: bool, thickness: f32);
    fn path_arc_to(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        a_min: f32,
        a_max: f32,
        num_segments: c_int,
    );
    fn path_arc_to_fast(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        a_min_of_12: c_int,
        a_max_of_12: c_int,
    );
    fn path_bezier_cubic_curve_to(
        &mut self,
        list: DrawListHandle,
        p2: &RawVec2,
        p3: &RawVec2,
        p4: &RawVec2,
        num_segments: c_int,
    );

    // Clipping.

    fn push_clip_rect(&mut self, list: DrawListHandle, min: &RawVec2, max: &RawVec2, intersect: bool);
    fn pop_clip_rect(&mut self, list: DrawListHandle);

    // Plot context and setup.

    fn plot_create_context(&mut self) -> PlotContextHandle;
    /// Destroys the current context; the foreign side takes no argument.
    fn plot_destroy_context(&mut self);
    fn plot_set_next_plot_limits(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64, cond: c_int);
    fn plot_set_next_plot_ticks_x(
        &mut self,
        values: ForeignSlice<'_>,
        labels: &ForeignStringArray,
        show_default: bool,
    );
    fn plot_set_next_plot_ticks_y(
        &mut self,
        values: ForeignSlice<'_>,
        labels: &ForeignStringArray,
        show_default: bool,
        y_axis: c_int,
    );
    fn plot_fit_next_plot_axes(&mut self, x: bool, y: bool, y2: bool, y3: bool);
    fn plot_begin_plot(
        &mut self,
        title: &ForeignString,
        x_label: Option<&ForeignString>,
        y_label: Option<&ForeignString>,
        size: &RawVec2,
        flags: c_int,
        x_flags: c_int,
        y_flags: c_int,
        y2_flags: c_int,
        y3_flags: c_int,
        y2_label: Option<&ForeignString>,
        y3_label: Option<&ForeignString>,
    ) -> bool;
    fn plot_end_plot(&mut self);

    // Plot items. Paired slices have equal lengths.

    fn plot_bars(&mut self, label: &ForeignString, values: ForeignSlice<'_>, width: f64, shift: f64, offset: c_int);
    fn plot_bars_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        width: f64,
        offset: c_int,
    );
    fn plot_bars_h(&mut self, label: &ForeignString, values: ForeignSlice<'_>, height: f64, shift: f64, offset: c_int);
    fn plot_bars_h_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        height: f64,
        offset: c_int,
    );
    fn plot_line(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int);
    fn plot_line_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int);
    fn plot_scatter(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int);
    fn plot_scatter_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int);
    fn plot_stairs(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int);
    fn plot_stairs_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int);
    fn plot_error_bars(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        err: ForeignSlice<'_>,
        offset: c_int,
    );
    fn plot_error_bars_h(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        err: ForeignSlice<'_>,
        offset: c_int,
    );
    fn plot_stems(
        &mut self,
        label: &ForeignString,
        values: ForeignSlice<'_>,
        y_ref: f64,
        x_scale: f64,
        x0: f64,
        offset: c_int,
    );
    fn plot_stems_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        y_ref: f64,
        offset: c_int,
    );
    fn plot_vlines(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, offset: c_int);
    fn plot_hlines(&mut self, label: &ForeignString, ys: ForeignSlice<'_>, offset: c_int);
    fn plot_pie_chart(
        &mut self,
        labels: &ForeignStringArray,
        values: ForeignSlice<'_>,
        x: f64,
        y: f64,
        radius: f64,
        normalize: bool,
        label_fmt: Option<&ForeignString>,
        angle0: f64,
    );

    // Plot queries.

    fn plot_get_plot_pos(&mut self, out: &mut RawVec2);
    fn plot_get_plot_size(&mut self, out: &mut RawVec2);
    fn plot_is_plot_hovered(&mut self) -> bool;
    fn plot_is_plot_x_axis_hovered(&mut self) -> bool;
    fn plot_is_plot_y_axis_hovered(&mut self, y_axis: c_int) -> bool;

    // IO of the current GUI context.

    fn io_current(&mut self) -> IoHandle;
    fn io_want_capture_mouse(&mut self, io: IoHandle) -> bool;
    fn io_want_capture_keyboard(&mut self, io: IoHandle) -> bool;
    fn io_want_text_input(&mut self, io: IoHandle) -> bool;
    fn io_framerate(&mut self, io: IoHandle) -> f32;
    fn io_metrics_render_vertices(&mut self, io: IoHandle) -> c_int;
    fn io_metrics_render_indices(&mut self, io: IoHandle) -> c_int;
    fn io_metrics_render_windows(&mut self, io: IoHandle) -> c_int;
    fn io_metrics_active_windows(&mut self, io: IoHandle) -> c_int;
    fn io_metrics_active_allocations(&mut self, io: IoHandle) -> c_int;
    fn io_mouse_delta(&mut self, io: IoHandle, out: &mut RawVec2);
    /// Horizontal delta first, matching the foreign argument order.
    fn io_mouse_wheel(&mut self, io: IoHandle, horizontal: &mut f32, vertical: &mut f32);
    fn io_display_frame_buffer_scale(&mut self, io: IoHandle, out: &mut RawVec2);
    fn io_set_display_size(&mut self, io: IoHandle, value: &RawVec2);
    fn io_set_display_frame_buffer_scale(&mut self, io: IoHandle, value: &RawVec2);
    fn io_set_mouse_position(&mut self, io: IoHandle, value: &RawVec2);
    fn io_set_mouse_button_down(&mut self, io: IoHandle, index: c_int, down: bool);
    fn io_add_mouse_wheel_delta(&mut self, io: IoHandle, x: f32, y: f32);
    fn io_set_delta_time(&mut self, io: IoHandle, seconds: f32);
    fn io_set_font_global_scale(&mut self, io: IoHandle, scale: f32);
    fn io_mouse_draw_cursor(&mut self, io: IoHandle) -> bool;
    fn io_set_mouse_draw_cursor(&mut self, io: IoHandle, show: bool);
    fn io_key_press(&mut self, io: IoHandle, key: c_int);
    fn io_key_release(&mut self, io: IoHandle, key: c_int);
    fn io_key_map(&mut self, io: IoHandle, imgui_key: c_int, native_key: c_int);
    fn io_key_ctrl(&mut self, io: IoHandle, left: c_int, right: c_int);
    fn io_key_shift(&mut self, io: IoHandle, left: c_int, right: c_int);
    fn io_key_alt(&mut self, io: IoHandle, left: c_int, right: c_int);
    fn io_key_super(&mut self, io: IoHandle, left: c_int, right: c_int);
    fn io_add_input_characters_utf8(&mut self, io: IoHandle, chars: &ForeignString);
    /// `None` passes a null pointer, which turns off settings persistence.
    fn io_set_ini_filename(&mut self, io: IoHandle, path: Option<&ForeignString>);
    fn io_config_flags(&mut self, io: IoHandle) -> c_int;
    fn io_set_config_flags(&mut self, io: IoHandle, flags: c_int);
    fn io_backend_flags(&mut self, io: IoHandle) -> c_int;
    fn io_set_backend_flags(&mut self, io: IoHandle, flags: c_int);
    fn io_frame_count_since_last_input(&mut self, io: IoHandle) -> c_int;
    fn io_set_frame_count_since_last_input(&mut self, io: IoHandle, count: c_int);
}
