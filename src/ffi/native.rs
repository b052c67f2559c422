use std::ffi::{c_char, c_int, c_void};
use std::marker::PhantomData;
use std::ptr;

use crate::core::{DrawCommandHandle, DrawListHandle, IoHandle, PlotContextHandle, TextureId};
use crate::draw::{IndexBufferLayout, RawBuffer, VertexBufferLayout};
use crate::marshal::{ForeignSlice, ForeignString, ForeignStringArray, RawVec2, optional_ptr};

use super::{ForeignBackend, Sealed};

type IggDrawList = *mut c_void;
type IggDrawCmd = *mut c_void;
type IggPlotContext = *mut c_void;
type IggIO = *mut c_void;
type IggTextureId = *mut c_void;
type IggBool = c_int;
type IggPackedColor = u32;

#[allow(non_snake_case)]
mod sys {
    use super::*;

    unsafe extern "C" {
        pub fn iggGetVertexBufferLayout(
            entry_size: *mut usize,
            pos_offset: *mut usize,
            uv_offset: *mut usize,
            col_offset: *mut usize,
        );
        pub fn iggGetIndexBufferLayout(entry_size: *mut usize);
        pub fn iggDrawListGetRawVertexBuffer(list: IggDrawList, data: *mut *mut c_void, size: *mut c_int);
        pub fn iggDrawListGetRawIndexBuffer(list: IggDrawList, data: *mut *mut c_void, size: *mut c_int);
        pub fn iggDrawListGetCommandCount(list: IggDrawList) -> c_int;
        pub fn iggDrawListGetCommand(list: IggDrawList, index: c_int) -> IggDrawCmd;
        pub fn iggGetWindowDrawList() -> IggDrawList;
        pub fn iggGetBackgroundDrawList() -> IggDrawList;

        pub fn iggAddLine(list: IggDrawList, p1: *const RawVec2, p2: *const RawVec2, col: IggPackedColor, thickness: f32);
        pub fn iggAddRect(
            list: IggDrawList,
            min: *const RawVec2,
            max: *const RawVec2,
            col: IggPackedColor,
            rounding: f32,
            flags: c_int,
            thickness: f32,
        );
        pub fn iggAddRectFilled(
            list: IggDrawList,
            min: *const RawVec2,
            max: *const RawVec2,
            col: IggPackedColor,
            rounding: f32,
            flags: c_int,
        );
        pub fn iggAddBezierCubic(
            list: IggDrawList,
            pos0: *const RawVec2,
            cp0: *const RawVec2,
            cp1: *const RawVec2,
            pos1: *const RawVec2,
            col: IggPackedColor,
            thickness: f32,
            num_segments: c_int,
        );
        pub fn iggAddCircleFilled(
            list: IggDrawList,
            center: *const RawVec2,
            radius: f32,
            col: IggPackedColor,
            num_segments: c_int,
        );
        pub fn iggAddCircle(
            list: IggDrawList,
            center: *const RawVec2,
            radius: f32,
            col: IggPackedColor,
            num_segments: c_int,
            thickness: f32,
        );
        pub fn iggAddTriangle(
            list: IggDrawList,
            p1: *const RawVec2,
            p2: *const RawVec2,
            p3: *const RawVec2,
            col: IggPackedColor,
            thickness: f32,
        );
        pub fn iggAddTriangleFilled(
            list: IggDrawList,
            p1: *const RawVec2,
            p2: *const RawVec2,
            p3: *const RawVec2,
            col: IggPackedColor,
        );
        pub fn iggAddQuad(
            list: IggDrawList,
            p1: *const RawVec2,
            p2: *const RawVec2,
            p3: *const RawVec2,
            p4: *const RawVec2,
            col: IggPackedColor,
            thickness: f32,
        );
        pub fn iggAddQuadFilled(
            list: IggDrawList,
            p1: *const RawVec2,
            p2: *const RawVec2,
            p3: *const RawVec2,
            p4: *const RawVec2,
            col: IggPackedColor,
        );
        pub fn iggAddText(list: IggDrawList, pos: *const RawVec2, col: IggPackedColor, text: *const c_char, length: c_int);
        pub fn iggAddImageV(
            list: IggDrawList,
            texture: IggTextureId,
            pos_min: *const RawVec2,
            pos_max: *const RawVec2,
            uv_min: *const RawVec2,
            uv_max: *const RawVec2,
            tint: IggPackedColor,
        );

        pub fn iggPathClear(list: IggDrawList);
        pub fn iggPathLineTo(list: IggDrawList, pos: *const RawVec2);
        pub fn iggPathLineToMergeDuplicate(list: IggDrawList, pos: *const RawVec2);
        pub fn iggPathFillConvex(list: IggDrawList, col: IggPackedColor);
        pub fn iggPathStroke(list: IggDrawList, col: IggPackedColor, closed: IggBool, thickness: f32);
        pub fn iggPathArcTo(
            list: IggDrawList,
            center: *const RawVec2,
            radius: f32,
            a_min: f32,
            a_max: f32,
            num_segments: c_int,
        );
        pub fn iggPathArcToFast(
            list: IggDrawList,
            center: *const RawVec2,
            radius: f32,
            a_min_of_12: c_int,
            a_max_of_12: c_int,
        );
        pub fn iggPathBezierCubicCurveTo(
            list: IggDrawList,
            p2: *const RawVec2,
            p3: *const RawVec2,
            p4: *const RawVec2,
            num_segments: c_int,
        );
        pub fn iggPushClipRect(list: IggDrawList, min: *const RawVec2, max: *const RawVec2, intersect: IggBool);
        pub fn iggPopClipRect(list: IggDrawList);

        pub fn iggImPlotCreateContext() -> IggPlotContext;
        pub fn iggImPlotDestroyContext();
        pub fn iggImPlotSetNextPlotLimits(x_min: f64, x_max: f64, y_min: f64, y_max: f64, cond: c_int);
        pub fn iggImPlotSetNextPlotTicksX(
            values: *const f64,
            count: c_int,
            labels: *const *const c_char,
            show_default: IggBool,
        );
        pub fn iggImPlotSetNextPlotTicksY(
            values: *const f64,
            count: c_int,
            labels: *const *const c_char,
            show_default: IggBool,
            y_axis: c_int,
        );
        pub fn iggImPlotFitNextPlotAxes(x: IggBool, y: IggBool, y2: IggBool, y3: IggBool);
        pub fn iggImPlotBeginPlot(
            title: *const c_char,
            x_label: *const c_char,
            y_label: *const c_char,
            size: *const RawVec2,
            flags: c_int,
            x_flags: c_int,
            y_flags: c_int,
            y2_flags: c_int,
            y3_flags: c_int,
            y2_label: *const c_char,
            y3_label: *const c_char,
        ) -> IggBool;
        pub fn iggImPlotEndPlot();

        pub fn iggImPlotBars(label: *const c_char, values: *const f64, count: c_int, width: f64, shift: f64, offset: c_int);
        pub fn iggImPlotBarsXY(
            label: *const c_char,
            xs: *const f64,
            ys: *const f64,
            count: c_int,
            width: f64,
            offset: c_int,
        );
        pub fn iggImPlotBarsH(label: *const c_char, values: *const f64, count: c_int, height: f64, shift: f64, offset: c_int);
        pub fn iggImPlotBarsHXY(
            label: *const c_char,
            xs: *const f64,
            ys: *const f64,
            count: c_int,
            height: f64,
            offset: c_int,
        );
        pub fn iggImPlotLine(label: *const c_char, values: *const f64, count: c_int, x_scale: f64, x0: f64, offset: c_int);
        pub fn iggImPlotLineXY(label: *const c_char, xs: *const f64, ys: *const f64, count: c_int, offset: c_int);
        pub fn iggImPlotScatter(label: *const c_char, values: *const f64, count: c_int, x_scale: f64, x0: f64, offset: c_int);
        pub fn iggImPlotScatterXY(label: *const c_char, xs: *const f64, ys: *const f64, count: c_int, offset: c_int);
        pub fn iggImPlotStairs(label: *const c_char, values: *const f64, count: c_int, x_scale: f64, x0: f64, offset: c_int);
        pub fn iggImPlotStairsXY(label: *const c_char, xs: *const f64, ys: *const f64, count: c_int, offset: c_int);
        pub fn iggImPlotErrorBars(
            label: *const c_char,
            xs: *const f64,
            ys: *const f64,
            err: *const f64,
            count: c_int,
            offset: c_int,
        );
        pub fn iggImPlotErrorBarsH(
            label: *const c_char,
            xs: *const f64,
            ys: *const f64,
            err: *const f64,
            count: c_int,
            offset: c_int,
        );
        pub fn iggImPlotStems(
            label: *const c_char,
            values: *const f64,
            count: c_int,
            y_ref: f64,
            x_scale: f64,
            x0: f64,
            offset: c_int,
        );
        pub fn iggImPlotStemsXY(
            label: *const c_char,
            xs: *const f64,
            ys: *const f64,
            count: c_int,
            y_ref: f64,
            offset: c_int,
        );
        pub fn iggImPlotVLines(label: *const c_char, xs: *const f64, count: c_int, offset: c_int);
        pub fn iggImPlotHLines(label: *const c_char, ys: *const f64, count: c_int, offset: c_int);
        pub fn iggImPlotPieChart(
            labels: *const *const c_char,
            values: *const f64,
            count: c_int,
            x: f64,
            y: f64,
            radius: f64,
            normalize: IggBool,
            label_fmt: *const c_char,
            angle0: f64,
        );

        pub fn iggImPlotGetPlotPos(out: *mut RawVec2);
        pub fn iggImPlotGetPlotSize(out: *mut RawVec2);
        pub fn iggImPlotIsPlotHovered() -> IggBool;
        pub fn iggImPlotIsPlotXAxisHovered() -> IggBool;
        pub fn iggImPlotIsPlotYAxisHovered(y_axis: c_int) -> IggBool;

        pub fn iggGetCurrentIO() -> IggIO;
        pub fn iggWantCaptureMouse(io: IggIO) -> IggBool;
        pub fn iggWantCaptureKeyboard(io: IggIO) -> IggBool;
        pub fn iggWantTextInput(io: IggIO) -> IggBool;
        pub fn iggFramerate(io: IggIO) -> f32;
        pub fn iggMetricsRenderVertices(io: IggIO) -> c_int;
        pub fn iggMetricsRenderIndices(io: IggIO) -> c_int;
        pub fn iggMetricsRenderWindows(io: IggIO) -> c_int;
        pub fn iggMetricsActiveWindows(io: IggIO) -> c_int;
        pub fn iggMetricsActiveAllocations(io: IggIO) -> c_int;
        pub fn iggMouseDelta(io: IggIO, value: *mut RawVec2);
        pub fn iggMouseWheel(io: IggIO, mouse_wheel_h: *mut f32, mouse_wheel: *mut f32);
        pub fn iggDisplayFrameBufferScale(io: IggIO, value: *mut RawVec2);
        pub fn iggIoSetDisplaySize(io: IggIO, value: *const RawVec2);
        pub fn iggIoSetDisplayFrameBufferScale(io: IggIO, value: *const RawVec2);
        pub fn iggIoSetMousePosition(io: IggIO, value: *const RawVec2);
        pub fn iggIoSetMouseButtonDown(io: IggIO, index: c_int, value: IggBool);
        pub fn iggIoAddMouseWheelDelta(io: IggIO, x: f32, y: f32);
        pub fn iggIoSetDeltaTime(io: IggIO, value: f32);
        pub fn iggIoSetFontGlobalScale(io: IggIO, value: f32);
        pub fn iggIoGetMouseDrawCursor(io: IggIO) -> IggBool;
        pub fn iggIoSetMouseDrawCursor(io: IggIO, show: IggBool);
        pub fn iggIoKeyPress(io: IggIO, key: c_int);
        pub fn iggIoKeyRelease(io: IggIO, key: c_int);
        pub fn iggIoKeyMap(io: IggIO, imgui_key: c_int, native_key: c_int);
        pub fn iggIoKeyCtrl(io: IggIO, left_ctrl: c_int, right_ctrl: c_int);
        pub fn iggIoKeyShift(io: IggIO, left_shift: c_int, right_shift: c_int);
        pub fn iggIoKeyAlt(io: IggIO, left_alt: c_int, right_alt: c_int);
        pub fn iggIoKeySuper(io: IggIO, left_super: c_int, right_super: c_int);
        pub fn iggIoAddInputCharactersUTF8(io: IggIO, utf8_chars: *const c_char);
        pub fn iggIoSetIniFilename(io: IggIO, value: *const c_char);
        pub fn iggIoSetConfigFlags(io: IggIO, flags: c_int);
        pub fn iggIoGetConfigFlags(io: IggIO) -> c_int;
        pub fn iggIoSetBackendFlags(io: IggIO, flags: c_int);
        pub fn iggIoGetBackendFlags(io: IggIO) -> c_int;
        pub fn iggGetFrameCountSinceLastInput(io: IggIO) -> c_int;
        pub fn iggSetFrameCountSinceLastInput(io: IggIO, count: c_int);
    }
}

fn c_bool(value: bool) -> IggBool {
    IggBool::from(value)
}

/// Backend forwarding every call to the linked `igg*` shim.
///
/// The type is `!Send` and `!Sync`: the wrapped libraries keep process-wide
/// current contexts and are driven from one frame-update thread.
#[derive(Debug)]
pub struct NativeBackend {
    _single_thread: PhantomData<*const ()>,
}

impl NativeBackend {
    /// # Safety
    ///
    /// The shim must be linked into the final binary, and a GUI context must be
    /// current whenever a method of the returned backend is called. Plot calls
    /// additionally need a current plot context, except `plot_create_context`.
    #[must_use]
    pub unsafe fn new() -> Self {
        Self {
            _single_thread: PhantomData,
        }
    }
}

impl Sealed for NativeBackend {}

// SAFETY (applies to every `unsafe` block below): `NativeBackend::new`'s
// contract guarantees the shim is linked and a context is current. Pointer
// arguments come from references or marshaled buffers that outlive the call,
// array pointers come from non-empty `ForeignSlice`s whose length is passed
// alongside, and handles were produced by the shim itself.
impl ForeignBackend for NativeBackend {
    fn vertex_buffer_layout(&mut self) -> VertexBufferLayout {
        let mut layout = VertexBufferLayout {
            entry_size: 0,
            pos_offset: 0,
            uv_offset: 0,
            col_offset: 0,
        };
        unsafe {
            sys::iggGetVertexBufferLayout(
                &mut layout.entry_size,
                &mut layout.pos_offset,
                &mut layout.uv_offset,
                &mut layout.col_offset,
            );
        }
        layout
    }

    fn index_buffer_layout(&mut self) -> IndexBufferLayout {
        let mut layout = IndexBufferLayout { entry_size: 0 };
        unsafe { sys::iggGetIndexBufferLayout(&mut layout.entry_size) };
        layout
    }

    fn draw_list_raw_vertex_buffer(&mut self, list: DrawListHandle) -> RawBuffer<'_> {
        let mut data: *mut c_void = ptr::null_mut();
        let mut size: c_int = 0;
        unsafe {
            sys::iggDrawListGetRawVertexBuffer(list.as_ptr(), &mut data, &mut size);
            RawBuffer::from_raw_parts(data.cast_const().cast(), usize::try_from(size).unwrap_or(0))
        }
    }

    fn draw_list_raw_index_buffer(&mut self, list: DrawListHandle) -> RawBuffer<'_> {
        let mut data: *mut c_void = ptr::null_mut();
        let mut size: c_int = 0;
        unsafe {
            sys::iggDrawListGetRawIndexBuffer(list.as_ptr(), &mut data, &mut size);
            RawBuffer::from_raw_parts(data.cast_const().cast(), usize::try_from(size).unwrap_or(0))
        }
    }

    fn draw_list_command_count(&mut self, list: DrawListHandle) -> c_int {
        unsafe { sys::iggDrawListGetCommandCount(list.as_ptr()) }
    }

    fn draw_list_command(&mut self, list: DrawListHandle, index: c_int) -> DrawCommandHandle {
        DrawCommandHandle::from_ptr(unsafe { sys::iggDrawListGetCommand(list.as_ptr(), index) })
    }

    fn window_draw_list(&mut self) -> DrawListHandle {
        DrawListHandle::from_ptr(unsafe { sys::iggGetWindowDrawList() })
    }

    fn background_draw_list(&mut self) -> DrawListHandle {
        DrawListHandle::from_ptr(unsafe { sys::iggGetBackgroundDrawList() })
    }

    fn add_line(&mut self, list: DrawListHandle, p1: &RawVec2, p2: &RawVec2, col: u32, thickness: f32) {
        unsafe { sys::iggAddLine(list.as_ptr(), p1, p2, col, thickness) }
    }

    fn add_rect(
        &mut self,
        list: DrawListHandle,
        min: &RawVec2,
        max: &RawVec2,
        col: u32,
        rounding: f32,
        flags: c_int,
        thickness: f32,
    ) {
        unsafe { sys::iggAddRect(list.as_ptr(), min, max, col, rounding, flags, thickness) }
    }

    fn add_rect_filled(
        &mut self,
        list: DrawListHandle,
        min: &RawVec2,
        max: &RawVec2,
        col: u32,
        rounding: f32,
        flags: c_int,
    ) {
        unsafe { sys::iggAddRectFilled(list.as_ptr(), min, max, col, rounding, flags) }
    }

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
    ) {
        unsafe {
            sys::iggAddBezierCubic(list.as_ptr(), pos0, cp0, cp1, pos1, col, thickness, num_segments)
        }
    }

    fn add_circle_filled(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        col: u32,
        num_segments: c_int,
    ) {
        unsafe { sys::iggAddCircleFilled(list.as_ptr(), center, radius, col, num_segments) }
    }

    fn add_circle(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        col: u32,
        num_segments: c_int,
        thickness: f32,
    ) {
        unsafe { sys::iggAddCircle(list.as_ptr(), center, radius, col, num_segments, thickness) }
    }

    fn add_triangle(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        col: u32,
        thickness: f32,
    ) {
        unsafe { sys::iggAddTriangle(list.as_ptr(), p1, p2, p3, col, thickness) }
    }

    fn add_triangle_filled(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        col: u32,
    ) {
        unsafe { sys::iggAddTriangleFilled(list.as_ptr(), p1, p2, p3, col) }
    }

    fn add_quad(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        p4: &RawVec2,
        col: u32,
        thickness: f32,
    ) {
        unsafe { sys::iggAddQuad(list.as_ptr(), p1, p2, p3, p4, col, thickness) }
    }

    fn add_quad_filled(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        p4: &RawVec2,
        col: u32,
    ) {
        unsafe { sys::iggAddQuadFilled(list.as_ptr(), p1, p2, p3, p4, col) }
    }

    fn add_text(
        &mut self,
        list: DrawListHandle,
        pos: &RawVec2,
        col: u32,
        text: &ForeignString,
        len: c_int,
    ) {
        unsafe { sys::iggAddText(list.as_ptr(), pos, col, text.as_ptr(), len) }
    }

    fn add_image(
        &mut self,
        list: DrawListHandle,
        texture: TextureId,
        pos_min: &RawVec2,
        pos_max: &RawVec2,
        uv_min: &RawVec2,
        uv_max: &RawVec2,
        tint: u32,
    ) {
        unsafe {
            sys::iggAddImageV(
                list.as_ptr(),
                texture.id() as IggTextureId,
                pos_min,
                pos_max,
                uv_min,
                uv_max,
                tint,
            )
        }
    }

    fn path_clear(&mut self, list: DrawListHandle) {
        unsafe { sys::iggPathClear(list.as_ptr()) }
    }

    fn path_line_to(&mut self, list: DrawListHandle, pos: &RawVec2) {
        unsafe { sys::iggPathLineTo(list.as_ptr(), pos) }
    }

    fn path_line_to_merge_duplicate(&mut self, list: DrawListHandle, pos: &RawVec2) {
        unsafe { sys::iggPathLineToMergeDuplicate(list.as_ptr(), pos) }
    }

    fn path_fill_convex(&mut self, list: DrawListHandle, col: u32) {
        unsafe { sys::iggPathFillConvex(list.as_ptr(), col) }
    }

    fn path_stroke(&mut self, list: DrawListHandle, col: u32, closed: bool, thickness: f32) {
        unsafe { sys::iggPathStroke(list.as_ptr(), col, c_bool(closed), thickness) }
    }

    fn path_arc_to(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        a_min: f32,
        a_max: f32,
        num_segments: c_int,
    ) {
        unsafe { sys::iggPathArcTo(list.as_ptr(), center, radius, a_min, a_max, num_segments) }
    }

    fn path_arc_to_fast(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        a_min_of_12: c_int,
        a_max_of_12: c_int,
    ) {
        unsafe { sys::iggPathArcToFast(list.as_ptr(), center, radius, a_min_of_12, a_max_of_12) }
    }

    fn path_bezier_cubic_curve_to(
        &mut self,
        list: DrawListHandle,
        p2: &RawVec2,
        p3: &RawVec2,
        p4: &RawVec2,
        num_segments: c_int,
    ) {
        unsafe { sys::iggPathBezierCubicCurveTo(list.as_ptr(), p2, p3, p4, num_segments) }
    }

    fn push_clip_rect(&mut self, list: DrawListHandle, min: &RawVec2, max: &RawVec2, intersect: bool) {
        unsafe { sys::iggPushClipRect(list.as_ptr(), min, max, c_bool(intersect)) }
    }

    fn pop_clip_rect(&mut self, list: DrawListHandle) {
        unsafe { sys::iggPopClipRect(list.as_ptr()) }
    }

    fn plot_create_context(&mut self) -> PlotContextHandle {
        PlotContextHandle::from_ptr(unsafe { sys::iggImPlotCreateContext() })
    }

    fn plot_destroy_context(&mut self) {
        unsafe { sys::iggImPlotDestroyContext() }
    }

    fn plot_set_next_plot_limits(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64, cond: c_int) {
        unsafe { sys::iggImPlotSetNextPlotLimits(x_min, x_max, y_min, y_max, cond) }
    }

    fn plot_set_next_plot_ticks_x(
        &mut self,
        values: ForeignSlice<'_>,
        labels: &ForeignStringArray,
        show_default: bool,
    ) {
        unsafe {
            sys::iggImPlotSetNextPlotTicksX(values.as_ptr(), values.len(), labels.as_ptr(), c_bool(show_default))
        }
    }

    fn plot_set_next_plot_ticks_y(
        &mut self,
        values: ForeignSlice<'_>,
        labels: &ForeignStringArray,
        show_default: bool,
        y_axis: c_int,
    ) {
        unsafe {
            sys::iggImPlotSetNextPlotTicksY(
                values.as_ptr(),
                values.len(),
                labels.as_ptr(),
                c_bool(show_default),
                y_axis,
            )
        }
    }

    fn plot_fit_next_plot_axes(&mut self, x: bool, y: bool, y2: bool, y3: bool) {
        unsafe { sys::iggImPlotFitNextPlotAxes(c_bool(x), c_bool(y), c_bool(y2), c_bool(y3)) }
    }

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
    ) -> bool {
        unsafe {
            sys::iggImPlotBeginPlot(
                title.as_ptr(),
                optional_ptr(x_label),
                optional_ptr(y_label),
                size,
                flags,
                x_flags,
                y_flags,
                y2_flags,
                y3_flags,
                optional_ptr(y2_label),
                optional_ptr(y3_label),
            ) != 0
        }
    }

    fn plot_end_plot(&mut self) {
        unsafe { sys::iggImPlotEndPlot() }
    }

    fn plot_bars(&mut self, label: &ForeignString, values: ForeignSlice<'_>, width: f64, shift: f64, offset: c_int) {
        unsafe { sys::iggImPlotBars(label.as_ptr(), values.as_ptr(), values.len(), width, shift, offset) }
    }

    fn plot_bars_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        width: f64,
        offset: c_int,
    ) {
        unsafe { sys::iggImPlotBarsXY(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), xs.len(), width, offset) }
    }

    fn plot_bars_h(&mut self, label: &ForeignString, values: ForeignSlice<'_>, height: f64, shift: f64, offset: c_int) {
        unsafe { sys::iggImPlotBarsH(label.as_ptr(), values.as_ptr(), values.len(), height, shift, offset) }
    }

    fn plot_bars_h_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        height: f64,
        offset: c_int,
    ) {
        unsafe { sys::iggImPlotBarsHXY(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), xs.len(), height, offset) }
    }

    fn plot_line(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int) {
        unsafe { sys::iggImPlotLine(label.as_ptr(), values.as_ptr(), values.len(), x_scale, x0, offset) }
    }

    fn plot_line_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int) {
        unsafe { sys::iggImPlotLineXY(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), xs.len(), offset) }
    }

    fn plot_scatter(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int) {
        unsafe { sys::iggImPlotScatter(label.as_ptr(), values.as_ptr(), values.len(), x_scale, x0, offset) }
    }

    fn plot_scatter_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int) {
        unsafe { sys::iggImPlotScatterXY(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), xs.len(), offset) }
    }

    fn plot_stairs(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int) {
        unsafe { sys::iggImPlotStairs(label.as_ptr(), values.as_ptr(), values.len(), x_scale, x0, offset) }
    }

    fn plot_stairs_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int) {
        unsafe { sys::iggImPlotStairsXY(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), xs.len(), offset) }
    }

    fn plot_error_bars(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        err: ForeignSlice<'_>,
        offset: c_int,
    ) {
        unsafe {
            sys::iggImPlotErrorBars(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), err.as_ptr(), xs.len(), offset)
        }
    }

    fn plot_error_bars_h(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        err: ForeignSlice<'_>,
        offset: c_int,
    ) {
        unsafe {
            sys::iggImPlotErrorBarsH(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), err.as_ptr(), xs.len(), offset)
        }
    }

    fn plot_stems(
        &mut self,
        label: &ForeignString,
        values: ForeignSlice<'_>,
        y_ref: f64,
        x_scale: f64,
        x0: f64,
        offset: c_int,
    ) {
        unsafe {
            sys::iggImPlotStems(label.as_ptr(), values.as_ptr(), values.len(), y_ref, x_scale, x0, offset)
        }
    }

    fn plot_stems_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        y_ref: f64,
        offset: c_int,
    ) {
        unsafe { sys::iggImPlotStemsXY(label.as_ptr(), xs.as_ptr(), ys.as_ptr(), xs.len(), y_ref, offset) }
    }

    fn plot_vlines(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, offset: c_int) {
        unsafe { sys::iggImPlotVLines(label.as_ptr(), xs.as_ptr(), xs.len(), offset) }
    }

    fn plot_hlines(&mut self, label: &ForeignString, ys: ForeignSlice<'_>, offset: c_int) {
        unsafe { sys::iggImPlotHLines(label.as_ptr(), ys.as_ptr(), ys.len(), offset) }
    }

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
    ) {
        unsafe {
            sys::iggImPlotPieChart(
                labels.as_ptr(),
                values.as_ptr(),
                values.len(),
                x,
                y,
                radius,
                c_bool(normalize),
                optional_ptr(label_fmt),
                angle0,
            )
        }
    }

    fn plot_get_plot_pos(&mut self, out: &mut RawVec2) {
        unsafe { sys::iggImPlotGetPlotPos(out) }
    }

    fn plot_get_plot_size(&mut self, out: &mut RawVec2) {
        unsafe { sys::iggImPlotGetPlotSize(out) }
    }

    fn plot_is_plot_hovered(&mut self) -> bool {
        unsafe { sys::iggImPlotIsPlotHovered() != 0 }
    }

    fn plot_is_plot_x_axis_hovered(&mut self) -> bool {
        unsafe { sys::iggImPlotIsPlotXAxisHovered() != 0 }
    }

    fn plot_is_plot_y_axis_hovered(&mut self, y_axis: c_int) -> bool {
        unsafe { sys::iggImPlotIsPlotYAxisHovered(y_axis) != 0 }
    }

    fn io_current(&mut self) -> IoHandle {
        IoHandle::from_ptr(unsafe { sys::iggGetCurrentIO() })
    }

    fn io_want_capture_mouse(&mut self, io: IoHandle) -> bool {
        unsafe { sys::iggWantCaptureMouse(io.as_ptr()) != 0 }
    }

    fn io_want_capture_keyboard(&mut self, io: IoHandle) -> bool {
        unsafe { sys::iggWantCaptureKeyboard(io.as_ptr()) != 0 }
    }

    fn io_want_text_input(&mut self, io: IoHandle) -> bool {
        unsafe { sys::iggWantTextInput(io.as_ptr()) != 0 }
    }

    fn io_framerate(&mut self, io: IoHandle) -> f32 {
        unsafe { sys::iggFramerate(io.as_ptr()) }
    }

    fn io_metrics_render_vertices(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggMetricsRenderVertices(io.as_ptr()) }
    }

    fn io_metrics_render_indices(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggMetricsRenderIndices(io.as_ptr()) }
    }

    fn io_metrics_render_windows(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggMetricsRenderWindows(io.as_ptr()) }
    }

    fn io_metrics_active_windows(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggMetricsActiveWindows(io.as_ptr()) }
    }

    fn io_metrics_active_allocations(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggMetricsActiveAllocations(io.as_ptr()) }
    }

    fn io_mouse_delta(&mut self, io: IoHandle, out: &mut RawVec2) {
        unsafe { sys::iggMouseDelta(io.as_ptr(), out) }
    }

    fn io_mouse_wheel(&mut self, io: IoHandle, horizontal: &mut f32, vertical: &mut f32) {
        unsafe { sys::iggMouseWheel(io.as_ptr(), horizontal, vertical) }
    }

    fn io_display_frame_buffer_scale(&mut self, io: IoHandle, out: &mut RawVec2) {
        unsafe { sys::iggDisplayFrameBufferScale(io.as_ptr(), out) }
    }

    fn io_set_display_size(&mut self, io: IoHandle, value: &RawVec2) {
        unsafe { sys::iggIoSetDisplaySize(io.as_ptr(), value) }
    }

    fn io_set_display_frame_buffer_scale(&mut self, io: IoHandle, value: &RawVec2) {
        unsafe { sys::iggIoSetDisplayFrameBufferScale(io.as_ptr(), value) }
    }

    fn io_set_mouse_position(&mut self, io: IoHandle, value: &RawVec2) {
        unsafe { sys::iggIoSetMousePosition(io.as_ptr(), value) }
    }

    fn io_set_mouse_button_down(&mut self, io: IoHandle, index: c_int, down: bool) {
        unsafe { sys::iggIoSetMouseButtonDown(io.as_ptr(), index, c_bool(down)) }
    }

    fn io_add_mouse_wheel_delta(&mut self, io: IoHandle, x: f32, y: f32) {
        unsafe { sys::iggIoAddMouseWheelDelta(io.as_ptr(), x, y) }
    }

    fn io_set_delta_time(&mut self, io: IoHandle, seconds: f32) {
        unsafe { sys::iggIoSetDeltaTime(io.as_ptr(), seconds) }
    }

    fn io_set_font_global_scale(&mut self, io: IoHandle, scale: f32) {
        unsafe { sys::iggIoSetFontGlobalScale(io.as_ptr(), scale) }
    }

    fn io_mouse_draw_cursor(&mut self, io: IoHandle) -> bool {
        unsafe { sys::iggIoGetMouseDrawCursor(io.as_ptr()) != 0 }
    }

    fn io_set_mouse_draw_cursor(&mut self, io: IoHandle, show: bool) {
        unsafe { sys::iggIoSetMouseDrawCursor(io.as_ptr(), c_bool(show)) }
    }

    fn io_key_press(&mut self, io: IoHandle, key: c_int) {
        unsafe { sys::iggIoKeyPress(io.as_ptr(), key) }
    }

    fn io_key_release(&mut self, io: IoHandle, key: c_int) {
        unsafe { sys::iggIoKeyRelease(io.as_ptr(), key) }
    }

    fn io_key_map(&mut self, io: IoHandle, imgui_key: c_int, native_key: c_int) {
        unsafe { sys::iggIoKeyMap(io.as_ptr(), imgui_key, native_key) }
    }

    fn io_key_ctrl(&mut self, io: IoHandle, left: c_int, right: c_int) {
        unsafe { sys::iggIoKeyCtrl(io.as_ptr(), left, right) }
    }

    fn io_key_shift(&mut self, io: IoHandle, left: c_int, right: c_int) {
        unsafe { sys::iggIoKeyShift(io.as_ptr(), left, right) }
    }

    fn io_key_alt(&mut self, io: IoHandle, left: c_int, right: c_int) {
        unsafe { sys::iggIoKeyAlt(io.as_ptr(), left, right) }
    }

    fn io_key_super(&mut self, io: IoHandle, left: c_int, right: c_int) {
        unsafe { sys::iggIoKeySuper(io.as_ptr(), left, right) }
    }

    fn io_add_input_characters_utf8(&mut self, io: IoHandle, chars: &ForeignString) {
        unsafe { sys::iggIoAddInputCharactersUTF8(io.as_ptr(), chars.as_ptr()) }
    }

    fn io_set_ini_filename(&mut self, io: IoHandle, path: Option<&ForeignString>) {
        unsafe { sys::iggIoSetIniFilename(io.as_ptr(), optional_ptr(path)) }
    }

    fn io_config_flags(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggIoGetConfigFlags(io.as_ptr()) }
    }

    fn io_set_config_flags(&mut self, io: IoHandle, flags: c_int) {
        unsafe { sys::iggIoSetConfigFlags(io.as_ptr(), flags) }
    }

    fn io_backend_flags(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggIoGetBackendFlags(io.as_ptr()) }
    }

    fn io_set_backend_flags(&mut self, io: IoHandle, flags: c_int) {
        unsafe { sys::iggIoSetBackendFlags(io.as_ptr(), flags) }
    }

    fn io_frame_count_since_last_input(&mut self, io: IoHandle) -> c_int {
        unsafe { sys::iggGetFrameCountSinceLastInput(io.as_ptr()) }
    }

    fn io_set_frame_count_since_last_input(&mut self, io: IoHandle, count: c_int) {
        unsafe { sys::iggSetFrameCountSinceLastInput(io.as_ptr(), count) }
    }
}
