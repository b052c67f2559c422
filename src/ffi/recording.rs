use std::collections::HashMap;
use std::ffi::c_int;

use crate::core::{
    DrawCommandHandle, DrawListHandle, IoHandle, PackedColor, PlotContextHandle, TextureId, Vec2,
};
use crate::draw::{IndexBufferLayout, RawBuffer, VertexBufferLayout};
use crate::io::{MouseWheel, RenderMetrics};
use crate::marshal::{ForeignSlice, ForeignString, ForeignStringArray, RawVec2};

use super::{ForeignBackend, Sealed};

const WINDOW_LIST_ADDR: usize = 0x1000_0000;
const BACKGROUND_LIST_ADDR: usize = 0x2000_0000;
const COMMAND_STRIDE: usize = 0x40;
const FIRST_CONTEXT_ADDR: usize = 0x7000_0000;
const CONTEXT_STRIDE: usize = 0x1000;
const IO_ADDR: usize = 0x3000_0000;

/// One marshaled argument, copied out of its transient buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum ForeignArg {
    DrawList(DrawListHandle),
    Io(IoHandle),
    Int(c_int),
    Float(f32),
    Double(f64),
    Bool(bool),
    Color(PackedColor),
    Vec2(RawVec2),
    Texture(TextureId),
    /// Full buffer bytes including the terminator; `None` for a null pointer.
    Text(Option<Vec<u8>>),
    Doubles(Vec<f64>),
    Texts(Vec<Vec<u8>>),
}

/// One recorded foreign call.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignCall {
    pub entry: &'static str,
    pub args: Vec<ForeignArg>,
}

impl ForeignCall {
    fn new(entry: &'static str, args: Vec<ForeignArg>) -> Self {
        Self { entry, args }
    }

    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&ForeignArg> {
        self.args.get(index)
    }

    #[must_use]
    pub fn vec2(&self, index: usize) -> Option<Vec2> {
        match self.arg(index)? {
            ForeignArg::Vec2(raw) => Some(Vec2::from(*raw)),
            _ => None,
        }
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Option<PackedColor> {
        match self.arg(index)? {
            ForeignArg::Color(color) => Some(*color),
            _ => None,
        }
    }

    #[must_use]
    pub fn int(&self, index: usize) -> Option<c_int> {
        match self.arg(index)? {
            ForeignArg::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn float(&self, index: usize) -> Option<f32> {
        match self.arg(index)? {
            ForeignArg::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn double(&self, index: usize) -> Option<f64> {
        match self.arg(index)? {
            ForeignArg::Double(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn boolean(&self, index: usize) -> Option<bool> {
        match self.arg(index)? {
            ForeignArg::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Raw text buffer including the terminator.
    #[must_use]
    pub fn text_bytes(&self, index: usize) -> Option<&[u8]> {
        match self.arg(index)? {
            ForeignArg::Text(Some(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// Text as a C reader sees it, up to the first NUL.
    #[must_use]
    pub fn text(&self, index: usize) -> Option<&str> {
        let bytes = self.text_bytes(index)?;
        let end = bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len());
        std::str::from_utf8(&bytes[..end]).ok()
    }

    /// Whether the argument at `index` was passed as a null string pointer.
    #[must_use]
    pub fn is_null_text(&self, index: usize) -> bool {
        matches!(self.arg(index), Some(ForeignArg::Text(None)))
    }

    #[must_use]
    pub fn doubles(&self, index: usize) -> Option<&[f64]> {
        match self.arg(index)? {
            ForeignArg::Doubles(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn texts(&self, index: usize) -> Option<Vec<&str>> {
        match self.arg(index)? {
            ForeignArg::Texts(items) => items
                .iter()
                .map(|bytes| {
                    let end = bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len());
                    std::str::from_utf8(&bytes[..end]).ok()
                })
                .collect(),
            _ => None,
        }
    }
}

/// Fake foreign backend for tests and headless hosts.
///
/// Every entry point appends a [`ForeignCall`] with its arguments copied out of
/// the transient buffers, so the buffers themselves are still released by the
/// caller. Queries are answered from a small simulated foreign state: two draw
/// lists, a command table per list, raw geometry bytes, plot contexts with an
/// ambient "current" one, plot geometry, hover state and one IO block.
#[derive(Debug)]
pub struct RecordingBackend {
    calls: Vec<ForeignCall>,
    command_count: usize,
    issued_commands: HashMap<DrawCommandHandle, usize>,
    vertex_layout: VertexBufferLayout,
    vertex_bytes: Vec<u8>,
    index_layout: IndexBufferLayout,
    index_bytes: Vec<u8>,
    next_context: usize,
    live_contexts: Vec<PlotContextHandle>,
    current_context: Option<PlotContextHandle>,
    begin_plot_result: bool,
    plot_pos: RawVec2,
    plot_size: RawVec2,
    plot_hovered: bool,
    x_axis_hovered: bool,
    y_axes_hovered: [bool; 3],
    io: IoState,
}

/// Simulated IO block. Setters write it, getters read it back.
#[derive(Debug, Default)]
struct IoState {
    want_capture_mouse: bool,
    want_capture_keyboard: bool,
    want_text_input: bool,
    framerate: f32,
    metrics: RenderMetrics,
    mouse_delta: RawVec2,
    mouse_wheel: MouseWheel,
    frame_buffer_scale: RawVec2,
    mouse_draw_cursor: bool,
    config_flags: c_int,
    backend_flags: c_int,
    frames_since_last_input: c_int,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            command_count: 0,
            issued_commands: HashMap::new(),
            // Packing of the default native build: pos, uv, then packed color.
            vertex_layout: VertexBufferLayout {
                entry_size: 20,
                pos_offset: 0,
                uv_offset: 8,
                col_offset: 16,
            },
            vertex_bytes: Vec::new(),
            index_layout: IndexBufferLayout { entry_size: 2 },
            index_bytes: Vec::new(),
            next_context: FIRST_CONTEXT_ADDR,
            live_contexts: Vec::new(),
            current_context: None,
            begin_plot_result: true,
            plot_pos: RawVec2::default(),
            plot_size: RawVec2::default(),
            plot_hovered: false,
            x_axis_hovered: false,
            y_axes_hovered: [false; 3],
            io: IoState {
                frame_buffer_scale: RawVec2 { x: 1.0, y: 1.0 },
                ..IoState::default()
            },
        }
    }
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands every draw list reports.
    #[must_use]
    pub fn with_command_count(mut self, count: usize) -> Self {
        self.command_count = count;
        self
    }

    #[must_use]
    pub fn with_vertex_buffer(mut self, layout: VertexBufferLayout, bytes: Vec<u8>) -> Self {
        self.vertex_layout = layout;
        self.vertex_bytes = bytes;
        self
    }

    #[must_use]
    pub fn with_index_buffer(mut self, layout: IndexBufferLayout, bytes: Vec<u8>) -> Self {
        self.index_layout = layout;
        self.index_bytes = bytes;
        self
    }

    #[must_use]
    pub fn with_begin_plot_result(mut self, visible: bool) -> Self {
        self.begin_plot_result = visible;
        self
    }

    #[must_use]
    pub fn with_plot_rect(mut self, pos: Vec2, size: Vec2) -> Self {
        self.plot_pos = pos.into();
        self.plot_size = size.into();
        self
    }

    #[must_use]
    pub fn with_hover(mut self, plot: bool, x_axis: bool, y_axes: [bool; 3]) -> Self {
        self.plot_hovered = plot;
        self.x_axis_hovered = x_axis;
        self.y_axes_hovered = y_axes;
        self
    }

    /// Which input the GUI wants to keep from the host application.
    #[must_use]
    pub fn with_io_capture(mut self, mouse: bool, keyboard: bool, text_input: bool) -> Self {
        self.io.want_capture_mouse = mouse;
        self.io.want_capture_keyboard = keyboard;
        self.io.want_text_input = text_input;
        self
    }

    #[must_use]
    pub fn with_io_frame_stats(mut self, framerate: f32, metrics: RenderMetrics) -> Self {
        self.io.framerate = framerate;
        self.io.metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_mouse_motion(mut self, delta: Vec2, wheel: MouseWheel) -> Self {
        self.io.mouse_delta = delta.into();
        self.io.mouse_wheel = wheel;
        self
    }

    #[must_use]
    pub fn calls(&self) -> &[ForeignCall] {
        &self.calls
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn calls_to<'a>(&'a self, entry: &'a str) -> impl Iterator<Item = &'a ForeignCall> + 'a {
        self.calls.iter().filter(move |call| call.entry == entry)
    }

    #[must_use]
    pub fn last_call(&self) -> Option<&ForeignCall> {
        self.calls.last()
    }

    /// Forgets recorded calls and the command handles issued so far.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.issued_commands.clear();
    }

    /// Index a command handle was issued for, if this backend issued it.
    #[must_use]
    pub fn command_index(&self, command: DrawCommandHandle) -> Option<usize> {
        self.issued_commands.get(&command).copied()
    }

    #[must_use]
    pub fn current_plot_context(&self) -> Option<PlotContextHandle> {
        self.current_context
    }

    #[must_use]
    pub fn live_plot_contexts(&self) -> &[PlotContextHandle] {
        &self.live_contexts
    }

    fn record(&mut self, entry: &'static str, args: Vec<ForeignArg>) {
        self.calls.push(ForeignCall::new(entry, args));
    }
}

fn text(value: &ForeignString) -> ForeignArg {
    ForeignArg::Text(Some(value.as_bytes_with_nul().to_vec()))
}

fn optional_text(value: Option<&ForeignString>) -> ForeignArg {
    ForeignArg::Text(value.map(|value| value.as_bytes_with_nul().to_vec()))
}

fn texts(values: &ForeignStringArray) -> ForeignArg {
    ForeignArg::Texts(
        values
            .strings()
            .iter()
            .map(|value| value.as_bytes_with_nul().to_vec())
            .collect(),
    )
}

fn doubles(values: ForeignSlice<'_>) -> ForeignArg {
    ForeignArg::Doubles(values.values().to_vec())
}

fn vec2(value: &RawVec2) -> ForeignArg {
    ForeignArg::Vec2(*value)
}

fn color(value: u32) -> ForeignArg {
    ForeignArg::Color(PackedColor(value))
}

impl Sealed for RecordingBackend {}

impl ForeignBackend for RecordingBackend {
    fn vertex_buffer_layout(&mut self) -> VertexBufferLayout {
        self.record("iggGetVertexBufferLayout", Vec::new());
        self.vertex_layout
    }

    fn index_buffer_layout(&mut self) -> IndexBufferLayout {
        self.record("iggGetIndexBufferLayout", Vec::new());
        self.index_layout
    }

    fn draw_list_raw_vertex_buffer(&mut self, list: DrawListHandle) -> RawBuffer<'_> {
        self.record("iggDrawListGetRawVertexBuffer", vec![ForeignArg::DrawList(list)]);
        RawBuffer::from_slice(&self.vertex_bytes)
    }

    fn draw_list_raw_index_buffer(&mut self, list: DrawListHandle) -> RawBuffer<'_> {
        self.record("iggDrawListGetRawIndexBuffer", vec![ForeignArg::DrawList(list)]);
        RawBuffer::from_slice(&self.index_bytes)
    }

    fn draw_list_command_count(&mut self, list: DrawListHandle) -> c_int {
        self.record("iggDrawListGetCommandCount", vec![ForeignArg::DrawList(list)]);
        c_int::try_from(self.command_count).unwrap_or(c_int::MAX)
    }

    fn draw_list_command(&mut self, list: DrawListHandle, index: c_int) -> DrawCommandHandle {
        self.record(
            "iggDrawListGetCommand",
            vec![ForeignArg::DrawList(list), ForeignArg::Int(index)],
        );
        let Ok(slot) = usize::try_from(index) else {
            return DrawCommandHandle::from_addr(0);
        };
        let command = DrawCommandHandle::from_addr(list.addr() + COMMAND_STRIDE * (slot + 1));
        self.issued_commands.insert(command, slot);
        command
    }

    fn window_draw_list(&mut self) -> DrawListHandle {
        self.record("iggGetWindowDrawList", Vec::new());
        DrawListHandle::from_addr(WINDOW_LIST_ADDR)
    }

    fn background_draw_list(&mut self) -> DrawListHandle {
        self.record("iggGetBackgroundDrawList", Vec::new());
        DrawListHandle::from_addr(BACKGROUND_LIST_ADDR)
    }

    fn add_line(&mut self, list: DrawListHandle, p1: &RawVec2, p2: &RawVec2, col: u32, thickness: f32) {
        self.record(
            "iggAddLine",
            vec![
                ForeignArg::DrawList(list),
                vec2(p1),
                vec2(p2),
                color(col),
                ForeignArg::Float(thickness),
            ],
        );
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
        self.record(
            "iggAddRect",
            vec![
                ForeignArg::DrawList(list),
                vec2(min),
                vec2(max),
                color(col),
                ForeignArg::Float(rounding),
                ForeignArg::Int(flags),
                ForeignArg::Float(thickness),
            ],
        );
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
        self.record(
            "iggAddRectFilled",
            vec![
                ForeignArg::DrawList(list),
                vec2(min),
                vec2(max),
                color(col),
                ForeignArg::Float(rounding),
                ForeignArg::Int(flags),
            ],
        );
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
        self.record(
            "iggAddBezierCubic",
            vec![
                ForeignArg::DrawList(list),
                vec2(pos0),
                vec2(cp0),
                vec2(cp1),
                vec2(pos1),
                color(col),
                ForeignArg::Float(thickness),
                ForeignArg::Int(num_segments),
            ],
        );
    }

    fn add_circle_filled(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        col: u32,
        num_segments: c_int,
    ) {
        self.record(
            "iggAddCircleFilled",
            vec![
                ForeignArg::DrawList(list),
                vec2(center),
                ForeignArg::Float(radius),
                color(col),
                ForeignArg::Int(num_segments),
            ],
        );
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
        self.record(
            "iggAddCircle",
            vec![
                ForeignArg::DrawList(list),
                vec2(center),
                ForeignArg::Float(radius),
                color(col),
                ForeignArg::Int(num_segments),
                ForeignArg::Float(thickness),
            ],
        );
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
        self.record(
            "iggAddTriangle",
            vec![
                ForeignArg::DrawList(list),
                vec2(p1),
                vec2(p2),
                vec2(p3),
                color(col),
                ForeignArg::Float(thickness),
            ],
        );
    }

    fn add_triangle_filled(
        &mut self,
        list: DrawListHandle,
        p1: &RawVec2,
        p2: &RawVec2,
        p3: &RawVec2,
        col: u32,
    ) {
        self.record(
            "iggAddTriangleFilled",
            vec![
                ForeignArg::DrawList(list),
                vec2(p1),
                vec2(p2),
                vec2(p3),
                color(col),
            ],
        );
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
        self.record(
            "iggAddQuad",
            vec![
                ForeignArg::DrawList(list),
                vec2(p1),
                vec2(p2),
                vec2(p3),
                vec2(p4),
                color(col),
                ForeignArg::Float(thickness),
            ],
        );
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
        self.record(
            "iggAddQuadFilled",
            vec![
                ForeignArg::DrawList(list),
                vec2(p1),
                vec2(p2),
                vec2(p3),
                vec2(p4),
                color(col),
            ],
        );
    }

    fn add_text(
        &mut self,
        list: DrawListHandle,
        pos: &RawVec2,
        col: u32,
        value: &ForeignString,
        len: c_int,
    ) {
        self.record(
            "iggAddText",
            vec![
                ForeignArg::DrawList(list),
                vec2(pos),
                color(col),
                text(value),
                ForeignArg::Int(len),
            ],
        );
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
        self.record(
            "iggAddImageV",
            vec![
                ForeignArg::DrawList(list),
                ForeignArg::Texture(texture),
                vec2(pos_min),
                vec2(pos_max),
                vec2(uv_min),
                vec2(uv_max),
                color(tint),
            ],
        );
    }

    fn path_clear(&mut self, list: DrawListHandle) {
        self.record("iggPathClear", vec![ForeignArg::DrawList(list)]);
    }

    fn path_line_to(&mut self, list: DrawListHandle, pos: &RawVec2) {
        self.record("iggPathLineTo", vec![ForeignArg::DrawList(list), vec2(pos)]);
    }

    fn path_line_to_merge_duplicate(&mut self, list: DrawListHandle, pos: &RawVec2) {
        self.record(
            "iggPathLineToMergeDuplicate",
            vec![ForeignArg::DrawList(list), vec2(pos)],
        );
    }

    fn path_fill_convex(&mut self, list: DrawListHandle, col: u32) {
        self.record("iggPathFillConvex", vec![ForeignArg::DrawList(list), color(col)]);
    }

    fn path_stroke(&mut self, list: DrawListHandle, col: u32, closed: bool, thickness: f32) {
        self.record(
            "iggPathStroke",
            vec![
                ForeignArg::DrawList(list),
                color(col),
                ForeignArg::Bool(closed),
                ForeignArg::Float(thickness),
            ],
        );
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
        self.record(
            "iggPathArcTo",
            vec![
                ForeignArg::DrawList(list),
                vec2(center),
                ForeignArg::Float(radius),
                ForeignArg::Float(a_min),
                ForeignArg::Float(a_max),
                ForeignArg::Int(num_segments),
            ],
        );
    }

    fn path_arc_to_fast(
        &mut self,
        list: DrawListHandle,
        center: &RawVec2,
        radius: f32,
        a_min_of_12: c_int,
        a_max_of_12: c_int,
    ) {
        self.record(
            "iggPathArcToFast",
            vec![
                ForeignArg::DrawList(list),
                vec2(center),
                ForeignArg::Float(radius),
                ForeignArg::Int(a_min_of_12),
                ForeignArg::Int(a_max_of_12),
            ],
        );
    }

    fn path_bezier_cubic_curve_to(
        &mut self,
        list: DrawListHandle,
        p2: &RawVec2,
        p3: &RawVec2,
        p4: &RawVec2,
        num_segments: c_int,
    ) {
        self.record(
            "iggPathBezierCubicCurveTo",
            vec![
                ForeignArg::DrawList(list),
                vec2(p2),
                vec2(p3),
                vec2(p4),
                ForeignArg::Int(num_segments),
            ],
        );
    }

    fn push_clip_rect(&mut self, list: DrawListHandle, min: &RawVec2, max: &RawVec2, intersect: bool) {
        self.record(
            "iggPushClipRect",
            vec![
                ForeignArg::DrawList(list),
                vec2(min),
                vec2(max),
                ForeignArg::Bool(intersect),
            ],
        );
    }

    fn pop_clip_rect(&mut self, list: DrawListHandle) {
        self.record("iggPopClipRect", vec![ForeignArg::DrawList(list)]);
    }

    fn plot_create_context(&mut self) -> PlotContextHandle {
        self.record("iggImPlotCreateContext", Vec::new());
        let context = PlotContextHandle::from_addr(self.next_context);
        self.next_context += CONTEXT_STRIDE;
        self.live_contexts.push(context);
        // The first context created becomes current, like the native library.
        if self.current_context.is_none() {
            self.current_context = Some(context);
        }
        context
    }

    fn plot_destroy_context(&mut self) {
        self.record("iggImPlotDestroyContext", Vec::new());
        if let Some(current) = self.current_context.take() {
            self.live_contexts.retain(|context| *context != current);
        }
    }

    fn plot_set_next_plot_limits(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64, cond: c_int) {
        self.record(
            "iggImPlotSetNextPlotLimits",
            vec![
                ForeignArg::Double(x_min),
                ForeignArg::Double(x_max),
                ForeignArg::Double(y_min),
                ForeignArg::Double(y_max),
                ForeignArg::Int(cond),
            ],
        );
    }

    fn plot_set_next_plot_ticks_x(
        &mut self,
        values: ForeignSlice<'_>,
        labels: &ForeignStringArray,
        show_default: bool,
    ) {
        self.record(
            "iggImPlotSetNextPlotTicksX",
            vec![
                doubles(values),
                ForeignArg::Int(values.len()),
                texts(labels),
                ForeignArg::Bool(show_default),
            ],
        );
    }

    fn plot_set_next_plot_ticks_y(
        &mut self,
        values: ForeignSlice<'_>,
        labels: &ForeignStringArray,
        show_default: bool,
        y_axis: c_int,
    ) {
        self.record(
            "iggImPlotSetNextPlotTicksY",
            vec![
                doubles(values),
                ForeignArg::Int(values.len()),
                texts(labels),
                ForeignArg::Bool(show_default),
                ForeignArg::Int(y_axis),
            ],
        );
    }

    fn plot_fit_next_plot_axes(&mut self, x: bool, y: bool, y2: bool, y3: bool) {
        self.record(
            "iggImPlotFitNextPlotAxes",
            vec![
                ForeignArg::Bool(x),
                ForeignArg::Bool(y),
                ForeignArg::Bool(y2),
                ForeignArg::Bool(y3),
            ],
        );
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
        self.record(
            "iggImPlotBeginPlot",
            vec![
                text(title),
                optional_text(x_label),
                optional_text(y_label),
                vec2(size),
                ForeignArg::Int(flags),
                ForeignArg::Int(x_flags),
                ForeignArg::Int(y_flags),
                ForeignArg::Int(y2_flags),
                ForeignArg::Int(y3_flags),
                optional_text(y2_label),
                optional_text(y3_label),
            ],
        );
        self.begin_plot_result
    }

    fn plot_end_plot(&mut self) {
        self.record("iggImPlotEndPlot", Vec::new());
    }

    fn plot_bars(&mut self, label: &ForeignString, values: ForeignSlice<'_>, width: f64, shift: f64, offset: c_int) {
        self.record(
            "iggImPlotBars",
            vec![
                text(label),
                doubles(values),
                ForeignArg::Int(values.len()),
                ForeignArg::Double(width),
                ForeignArg::Double(shift),
                ForeignArg::Int(offset),
            ],
        );
    }

    fn plot_bars_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        width: f64,
        offset: c_int,
    ) {
        self.record(
            "iggImPlotBarsXY",
            vec![
                text(label),
                doubles(xs),
                doubles(ys),
                ForeignArg::Int(xs.len()),
                ForeignArg::Double(width),
                ForeignArg::Int(offset),
            ],
        );
    }

    fn plot_bars_h(&mut self, label: &ForeignString, values: ForeignSlice<'_>, height: f64, shift: f64, offset: c_int) {
        self.record(
            "iggImPlotBarsH",
            vec![
                text(label),
                doubles(values),
                ForeignArg::Int(values.len()),
                ForeignArg::Double(height),
                ForeignArg::Double(shift),
                ForeignArg::Int(offset),
            ],
        );
    }

    fn plot_bars_h_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        height: f64,
        offset: c_int,
    ) {
        self.record(
            "iggImPlotBarsHXY",
            vec![
                text(label),
                doubles(xs),
                doubles(ys),
                ForeignArg::Int(xs.len()),
                ForeignArg::Double(height),
                ForeignArg::Int(offset),
            ],
        );
    }

    fn plot_line(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int) {
        self.record("iggImPlotLine", scaled_args(label, values, x_scale, x0, offset));
    }

    fn plot_line_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int) {
        self.record("iggImPlotLineXY", xy_args(label, xs, ys, offset));
    }

    fn plot_scatter(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int) {
        self.record("iggImPlotScatter", scaled_args(label, values, x_scale, x0, offset));
    }

    fn plot_scatter_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int) {
        self.record("iggImPlotScatterXY", xy_args(label, xs, ys, offset));
    }

    fn plot_stairs(&mut self, label: &ForeignString, values: ForeignSlice<'_>, x_scale: f64, x0: f64, offset: c_int) {
        self.record("iggImPlotStairs", scaled_args(label, values, x_scale, x0, offset));
    }

    fn plot_stairs_xy(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int) {
        self.record("iggImPlotStairsXY", xy_args(label, xs, ys, offset));
    }

    fn plot_error_bars(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        err: ForeignSlice<'_>,
        offset: c_int,
    ) {
        self.record("iggImPlotErrorBars", error_args(label, xs, ys, err, offset));
    }

    fn plot_error_bars_h(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        err: ForeignSlice<'_>,
        offset: c_int,
    ) {
        self.record("iggImPlotErrorBarsH", error_args(label, xs, ys, err, offset));
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
        self.record(
            "iggImPlotStems",
            vec![
                text(label),
                doubles(values),
                ForeignArg::Int(values.len()),
                ForeignArg::Double(y_ref),
                ForeignArg::Double(x_scale),
                ForeignArg::Double(x0),
                ForeignArg::Int(offset),
            ],
        );
    }

    fn plot_stems_xy(
        &mut self,
        label: &ForeignString,
        xs: ForeignSlice<'_>,
        ys: ForeignSlice<'_>,
        y_ref: f64,
        offset: c_int,
    ) {
        self.record(
            "iggImPlotStemsXY",
            vec![
                text(label),
                doubles(xs),
                doubles(ys),
                ForeignArg::Int(xs.len()),
                ForeignArg::Double(y_ref),
                ForeignArg::Int(offset),
            ],
        );
    }

    fn plot_vlines(&mut self, label: &ForeignString, xs: ForeignSlice<'_>, offset: c_int) {
        self.record(
            "iggImPlotVLines",
            vec![
                text(label),
                doubles(xs),
                ForeignArg::Int(xs.len()),
                ForeignArg::Int(offset),
            ],
        );
    }

    fn plot_hlines(&mut self, label: &ForeignString, ys: ForeignSlice<'_>, offset: c_int) {
        self.record(
            "iggImPlotHLines",
            vec![
                text(label),
                doubles(ys),
                ForeignArg::Int(ys.len()),
                ForeignArg::Int(offset),
            ],
        );
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
        self.record(
            "iggImPlotPieChart",
            vec![
                texts(labels),
                doubles(values),
                ForeignArg::Int(values.len()),
                ForeignArg::Double(x),
                ForeignArg::Double(y),
                ForeignArg::Double(radius),
                ForeignArg::Bool(normalize),
                optional_text(label_fmt),
                ForeignArg::Double(angle0),
            ],
        );
    }

    fn plot_get_plot_pos(&mut self, out: &mut RawVec2) {
        self.record("iggImPlotGetPlotPos", Vec::new());
        *out = self.plot_pos;
    }

    fn plot_get_plot_size(&mut self, out: &mut RawVec2) {
        self.record("iggImPlotGetPlotSize", Vec::new());
        *out = self.plot_size;
    }

    fn plot_is_plot_hovered(&mut self) -> bool {
        self.record("iggImPlotIsPlotHovered", Vec::new());
        self.plot_hovered
    }

    fn plot_is_plot_x_axis_hovered(&mut self) -> bool {
        self.record("iggImPlotIsPlotXAxisHovered", Vec::new());
        self.x_axis_hovered
    }

    fn plot_is_plot_y_axis_hovered(&mut self, y_axis: c_int) -> bool {
        self.record("iggImPlotIsPlotYAxisHovered", vec![ForeignArg::Int(y_axis)]);
        usize::try_from(y_axis)
            .ok()
            .and_then(|axis| self.y_axes_hovered.get(axis).copied())
            .unwrap_or(false)
    }
    fn io_current(&mut self) -> IoHandle {
        self.record("iggGetCurrentIO", Vec::new());
        IoHandle::from_addr(IO_ADDR)
    }

    fn io_want_capture_mouse(&mut self, io: IoHandle) -> bool {
        self.record("iggWantCaptureMouse", vec![ForeignArg::Io(io)]);
        self.io.want_capture_mouse
    }

    fn io_want_capture_keyboard(&mut self, io: IoHandle) -> bool {
        self.record("iggWantCaptureKeyboard", vec![ForeignArg::Io(io)]);
        self.io.want_capture_keyboard
    }

    fn io_want_text_input(&mut self, io: IoHandle) -> bool {
        self.record("iggWantTextInput", vec![ForeignArg::Io(io)]);
        self.io.want_text_input
    }

    fn io_framerate(&mut self, io: IoHandle) -> f32 {
        self.record("iggFramerate", vec![ForeignArg::Io(io)]);
        self.io.framerate
    }

    fn io_metrics_render_vertices(&mut self, io: IoHandle) -> c_int {
        self.record("iggMetricsRenderVertices", vec![ForeignArg::Io(io)]);
        count(self.io.metrics.render_vertices)
    }

    fn io_metrics_render_indices(&mut self, io: IoHandle) -> c_int {
        self.record("iggMetricsRenderIndices", vec![ForeignArg::Io(io)]);
        count(self.io.metrics.render_indices)
    }

    fn io_metrics_render_windows(&mut self, io: IoHandle) -> c_int {
        self.record("iggMetricsRenderWindows", vec![ForeignArg::Io(io)]);
        count(self.io.metrics.render_windows)
    }

    fn io_metrics_active_windows(&mut self, io: IoHandle) -> c_int {
        self.record("iggMetricsActiveWindows", vec![ForeignArg::Io(io)]);
        count(self.io.metrics.active_windows)
    }

    fn io_metrics_active_allocations(&mut self, io: IoHandle) -> c_int {
        self.record("iggMetricsActiveAllocations", vec![ForeignArg::Io(io)]);
        count(self.io.metrics.active_allocations)
    }

    fn io_mouse_delta(&mut self, io: IoHandle, out: &mut RawVec2) {
        self.record("iggMouseDelta", vec![ForeignArg::Io(io)]);
        *out = self.io.mouse_delta;
    }

    fn io_mouse_wheel(&mut self, io: IoHandle, horizontal: &mut f32, vertical: &mut f32) {
        self.record("iggMouseWheel", vec![ForeignArg::Io(io)]);
        *horizontal = self.io.mouse_wheel.horizontal;
        *vertical = self.io.mouse_wheel.vertical;
    }

    fn io_display_frame_buffer_scale(&mut self, io: IoHandle, out: &mut RawVec2) {
        self.record("iggDisplayFrameBufferScale", vec![ForeignArg::Io(io)]);
        *out = self.io.frame_buffer_scale;
    }

    fn io_set_display_size(&mut self, io: IoHandle, value: &RawVec2) {
        self.record("iggIoSetDisplaySize", vec![ForeignArg::Io(io), vec2(value)]);
    }

    fn io_set_display_frame_buffer_scale(&mut self, io: IoHandle, value: &RawVec2) {
        self.record(
            "iggIoSetDisplayFrameBufferScale",
            vec![ForeignArg::Io(io), vec2(value)],
        );
        self.io.frame_buffer_scale = *value;
    }

    fn io_set_mouse_position(&mut self, io: IoHandle, value: &RawVec2) {
        self.record("iggIoSetMousePosition", vec![ForeignArg::Io(io), vec2(value)]);
    }

    fn io_set_mouse_button_down(&mut self, io: IoHandle, index: c_int, down: bool) {
        self.record(
            "iggIoSetMouseButtonDown",
            vec![ForeignArg::Io(io), ForeignArg::Int(index), ForeignArg::Bool(down)],
        );
    }

    fn io_add_mouse_wheel_delta(&mut self, io: IoHandle, x: f32, y: f32) {
        self.record(
            "iggIoAddMouseWheelDelta",
            vec![ForeignArg::Io(io), ForeignArg::Float(x), ForeignArg::Float(y)],
        );
        self.io.mouse_wheel.horizontal += x;
        self.io.mouse_wheel.vertical += y;
    }

    fn io_set_delta_time(&mut self, io: IoHandle, seconds: f32) {
        self.record("iggIoSetDeltaTime", vec![ForeignArg::Io(io), ForeignArg::Float(seconds)]);
    }

    fn io_set_font_global_scale(&mut self, io: IoHandle, scale: f32) {
        self.record(
            "iggIoSetFontGlobalScale",
            vec![ForeignArg::Io(io), ForeignArg::Float(scale)],
        );
    }

    fn io_mouse_draw_cursor(&mut self, io: IoHandle) -> bool {
        self.record("iggIoGetMouseDrawCursor", vec![ForeignArg::Io(io)]);
        self.io.mouse_draw_cursor
    }

    fn io_set_mouse_draw_cursor(&mut self, io: IoHandle, show: bool) {
        self.record("iggIoSetMouseDrawCursor", vec![ForeignArg::Io(io), ForeignArg::Bool(show)]);
        self.io.mouse_draw_cursor = show;
    }

    fn io_key_press(&mut self, io: IoHandle, key: c_int) {
        self.record("iggIoKeyPress", vec![ForeignArg::Io(io), ForeignArg::Int(key)]);
    }

    fn io_key_release(&mut self, io: IoHandle, key: c_int) {
        self.record("iggIoKeyRelease", vec![ForeignArg::Io(io), ForeignArg::Int(key)]);
    }

    fn io_key_map(&mut self, io: IoHandle, imgui_key: c_int, native_key: c_int) {
        self.record("iggIoKeyMap", key_pair_args(io, imgui_key, native_key));
    }

    fn io_key_ctrl(&mut self, io: IoHandle, left: c_int, right: c_int) {
        self.record("iggIoKeyCtrl", key_pair_args(io, left, right));
    }

    fn io_key_shift(&mut self, io: IoHandle, left: c_int, right: c_int) {
        self.record("iggIoKeyShift", key_pair_args(io, left, right));
    }

    fn io_key_alt(&mut self, io: IoHandle, left: c_int, right: c_int) {
        self.record("iggIoKeyAlt", key_pair_args(io, left, right));
    }

    fn io_key_super(&mut self, io: IoHandle, left: c_int, right: c_int) {
        self.record("iggIoKeySuper", key_pair_args(io, left, right));
    }

    fn io_add_input_characters_utf8(&mut self, io: IoHandle, chars: &ForeignString) {
        self.record("iggIoAddInputCharactersUTF8", vec![ForeignArg::Io(io), text(chars)]);
    }

    fn io_set_ini_filename(&mut self, io: IoHandle, path: Option<&ForeignString>) {
        self.record("iggIoSetIniFilename", vec![ForeignArg::Io(io), optional_text(path)]);
    }

    fn io_config_flags(&mut self, io: IoHandle) -> c_int {
        self.record("iggIoGetConfigFlags", vec![ForeignArg::Io(io)]);
        self.io.config_flags
    }

    fn io_set_config_flags(&mut self, io: IoHandle, flags: c_int) {
        self.record("iggIoSetConfigFlags", vec![ForeignArg::Io(io), ForeignArg::Int(flags)]);
        self.io.config_flags = flags;
    }

    fn io_backend_flags(&mut self, io: IoHandle) -> c_int {
        self.record("iggIoGetBackendFlags", vec![ForeignArg::Io(io)]);
        self.io.backend_flags
    }

    fn io_set_backend_flags(&mut self, io: IoHandle, flags: c_int) {
        self.record("iggIoSetBackendFlags", vec![ForeignArg::Io(io), ForeignArg::Int(flags)]);
        self.io.backend_flags = flags;
    }

    fn io_frame_count_since_last_input(&mut self, io: IoHandle) -> c_int {
        self.record("iggGetFrameCountSinceLastInput", vec![ForeignArg::Io(io)]);
        self.io.frames_since_last_input
    }

    fn io_set_frame_count_since_last_input(&mut self, io: IoHandle, frames: c_int) {
        self.record(
            "iggSetFrameCountSinceLastInput",
            vec![ForeignArg::Io(io), ForeignArg::Int(frames)],
        );
        self.io.frames_since_last_input = frames;
    }
}

fn count(value: usize) -> c_int {
    c_int::try_from(value).unwrap_or(c_int::MAX)
}

fn key_pair_args(io: IoHandle, first: c_int, second: c_int) -> Vec<ForeignArg> {
    vec![ForeignArg::Io(io), ForeignArg::Int(first), ForeignArg::Int(second)]
}

fn scaled_args(
    label: &ForeignString,
    values: ForeignSlice<'_>,
    x_scale: f64,
    x0: f64,
    offset: c_int,
) -> Vec<ForeignArg> {
    vec![
        text(label),
        doubles(values),
        ForeignArg::Int(values.len()),
        ForeignArg::Double(x_scale),
        ForeignArg::Double(x0),
        ForeignArg::Int(offset),
    ]
}

fn xy_args(label: &ForeignString, xs: ForeignSlice<'_>, ys: ForeignSlice<'_>, offset: c_int) -> Vec<ForeignArg> {
    vec![
        text(label),
        doubles(xs),
        doubles(ys),
        ForeignArg::Int(xs.len()),
        ForeignArg::Int(offset),
    ]
}

fn error_args(
    label: &ForeignString,
    xs: ForeignSlice<'_>,
    ys: ForeignSlice<'_>,
    err: ForeignSlice<'_>,
    offset: c_int,
) -> Vec<ForeignArg> {
    vec![
        text(label),
        doubles(xs),
        doubles(ys),
        doubles(err),
        ForeignArg::Int(xs.len()),
        ForeignArg::Int(offset),
    ]
}
