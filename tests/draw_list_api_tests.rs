use approx::assert_relative_eq;
use imgui_bridge::Bridge;
use imgui_bridge::core::{PackedColor, TextureId, Vec2};
use imgui_bridge::draw::{DrawFlags, IndexBufferLayout, VertexBufferLayout};
use imgui_bridge::ffi::{ForeignArg, RecordingBackend};
use imgui_bridge::marshal::{buffer_stats, reset_buffer_stats};

fn bridge(backend: RecordingBackend) -> Bridge<RecordingBackend> {
    Bridge::with_default_config(backend)
}

fn vertex_bytes(layout: VertexBufferLayout, vertices: &[([f32; 2], [f32; 2], u32)]) -> Vec<u8> {
    let mut bytes = vec![0_u8; layout.entry_size * vertices.len()];
    for (i, (pos, uv, col)) in vertices.iter().enumerate() {
        let record = &mut bytes[i * layout.entry_size..(i + 1) * layout.entry_size];
        record[layout.pos_offset..layout.pos_offset + 4].copy_from_slice(&pos[0].to_ne_bytes());
        record[layout.pos_offset + 4..layout.pos_offset + 8].copy_from_slice(&pos[1].to_ne_bytes());
        record[layout.uv_offset..layout.uv_offset + 4].copy_from_slice(&uv[0].to_ne_bytes());
        record[layout.uv_offset + 4..layout.uv_offset + 8].copy_from_slice(&uv[1].to_ne_bytes());
        record[layout.col_offset..layout.col_offset + 4].copy_from_slice(&col.to_ne_bytes());
    }
    bytes
}

#[test]
fn line_forwards_points_color_and_default_thickness() {
    let mut bridge = bridge(RecordingBackend::new());
    let color = PackedColor::from_rgba(10, 20, 30, 255);
    bridge
        .window_draw_list()
        .add_line(Vec2::new(1.5, 2.5), Vec2::new(-3.0, 4.0), color);

    let backend = bridge.backend();
    let call = backend.last_call().expect("line call");
    assert_eq!(call.entry, "iggAddLine");
    assert_eq!(call.vec2(1), Some(Vec2::new(1.5, 2.5)));
    assert_eq!(call.vec2(2), Some(Vec2::new(-3.0, 4.0)));
    assert_eq!(call.color(3), Some(color));
    assert_eq!(call.float(4), Some(1.0));
}

#[test]
fn window_and_background_lists_are_distinct_handles() {
    let mut bridge = bridge(RecordingBackend::new());
    let window = bridge.window_draw_list().handle();
    let background = bridge.background_draw_list().handle();
    assert_ne!(window, background);
    assert!(!window.is_null());

    bridge.draw_list(window).pop_clip_rect();
    let call = bridge.backend().last_call().expect("pop clip call");
    assert_eq!(call.entry, "iggPopClipRect");
    assert_eq!(call.arg(0), Some(&ForeignArg::DrawList(window)));
}

#[test]
fn rect_defaults_round_all_corners() {
    let mut bridge = bridge(RecordingBackend::new());
    bridge
        .window_draw_list()
        .add_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), PackedColor::WHITE);

    let call = bridge.backend().last_call().expect("rect call");
    assert_eq!(call.entry, "iggAddRect");
    assert_eq!(call.float(4), Some(1.0));
    assert_eq!(call.int(5), Some(DrawFlags::ROUND_CORNERS_ALL.bits() as i32));
    assert_eq!(call.float(6), Some(1.0));
}

#[test]
fn filled_rect_passes_explicit_corner_flags() {
    let mut bridge = bridge(RecordingBackend::new());
    let flags = DrawFlags::ROUND_CORNERS_TOP_LEFT | DrawFlags::ROUND_CORNERS_BOTTOM_RIGHT;
    bridge.window_draw_list().add_rect_filled_with(
        Vec2::ZERO,
        Vec2::ONE,
        PackedColor::BLACK,
        4.0,
        flags,
    );

    let call = bridge.backend().last_call().expect("filled rect call");
    assert_eq!(call.entry, "iggAddRectFilled");
    assert_eq!(call.float(4), Some(4.0));
    assert_eq!(call.int(5), Some(0b1001_0000));
}

#[test]
fn text_is_passed_with_explicit_length_and_released() {
    reset_buffer_stats();
    let mut bridge = bridge(RecordingBackend::new());
    bridge
        .window_draw_list()
        .add_text(Vec2::new(5.0, 6.0), PackedColor::WHITE, "hello");

    let call = bridge.backend().last_call().expect("text call");
    assert_eq!(call.entry, "iggAddText");
    assert_eq!(call.text_bytes(3), Some(&b"hello\0"[..]));
    assert_eq!(call.int(4), Some(5));

    let stats = buffer_stats();
    assert_eq!(stats.acquired, 1);
    assert_eq!(stats.released, 1);
}

#[test]
fn empty_text_makes_no_call_and_still_releases_its_buffer() {
    reset_buffer_stats();
    let mut bridge = bridge(RecordingBackend::new());
    let mut list = bridge.window_draw_list();
    list.add_text(Vec2::ZERO, PackedColor::WHITE, "");
    drop(list);

    assert_eq!(bridge.backend().calls_to("iggAddText").count(), 0);
    let stats = buffer_stats();
    assert_eq!(stats.acquired, 1);
    assert_eq!(stats.released, 1);
    assert_eq!(stats.live(), 0);
}

#[test]
fn text_with_interior_nul_keeps_full_length() {
    let mut bridge = bridge(RecordingBackend::new());
    bridge
        .window_draw_list()
        .add_text(Vec2::ZERO, PackedColor::WHITE, "ab\0cd");

    let call = bridge.backend().last_call().expect("text call");
    assert_eq!(call.int(4), Some(5));
    assert_eq!(call.text(3), Some("ab"));
    assert_eq!(call.text_bytes(3).map(<[u8]>::len), Some(6));
}

#[test]
fn image_defaults_to_full_uv_and_white_tint() {
    let mut bridge = bridge(RecordingBackend::new());
    bridge
        .window_draw_list()
        .add_image(TextureId::new(42), Vec2::ZERO, Vec2::new(64.0, 32.0));

    let call = bridge.backend().last_call().expect("image call");
    assert_eq!(call.entry, "iggAddImageV");
    assert_eq!(call.arg(1), Some(&ForeignArg::Texture(TextureId::new(42))));
    assert_eq!(call.vec2(4), Some(Vec2::ZERO));
    assert_eq!(call.vec2(5), Some(Vec2::ONE));
    assert_eq!(call.color(6), Some(PackedColor::WHITE));
}

#[test]
fn circle_uses_configured_segment_default() {
    let mut bridge = bridge(RecordingBackend::new());
    let mut list = bridge.background_draw_list();
    list.add_circle(Vec2::new(3.0, 3.0), 2.0, PackedColor::WHITE);
    list.add_circle_filled_with(Vec2::new(3.0, 3.0), 2.0, PackedColor::WHITE, 12);
    drop(list);

    let backend = bridge.backend();
    let outline = backend.calls_to("iggAddCircle").next().expect("circle call");
    assert_eq!(outline.int(4), Some(0));
    assert_eq!(outline.float(5), Some(1.0));
    let filled = backend
        .calls_to("iggAddCircleFilled")
        .next()
        .expect("filled circle call");
    assert_eq!(filled.int(4), Some(12));
}

#[test]
fn path_calls_are_forwarded_in_order() {
    let mut bridge = bridge(RecordingBackend::new());
    let mut list = bridge.window_draw_list();
    list.path_clear();
    list.path_line_to(Vec2::new(0.0, 0.0));
    list.path_line_to_merge_duplicate(Vec2::new(0.0, 0.0));
    list.path_arc_to(Vec2::new(5.0, 5.0), 5.0, 0.0, 3.0, 8);
    list.path_arc_to_fast(Vec2::new(5.0, 5.0), 5.0, 0, 6);
    list.path_bezier_cubic_curve_to(Vec2::ONE, Vec2::new(2.0, 2.0), Vec2::new(3.0, 1.0), 0);
    list.path_stroke(PackedColor::WHITE, true, 2.0);
    list.path_fill_convex(PackedColor::BLACK);
    drop(list);

    let entries: Vec<&str> = bridge
        .backend()
        .calls()
        .iter()
        .map(|call| call.entry)
        .filter(|entry| entry.starts_with("iggPath"))
        .collect();
    assert_eq!(
        entries,
        vec![
            "iggPathClear",
            "iggPathLineTo",
            "iggPathLineToMergeDuplicate",
            "iggPathArcTo",
            "iggPathArcToFast",
            "iggPathBezierCubicCurveTo",
            "iggPathStroke",
            "iggPathFillConvex",
        ]
    );
    let stroke = bridge
        .backend()
        .calls_to("iggPathStroke")
        .next()
        .expect("stroke call");
    assert_eq!(stroke.boolean(2), Some(true));
    assert_eq!(stroke.float(3), Some(2.0));
}

#[test]
fn clip_rect_defaults_to_no_intersection() {
    let mut bridge = bridge(RecordingBackend::new());
    let mut list = bridge.window_draw_list();
    list.push_clip_rect(Vec2::ZERO, Vec2::new(100.0, 100.0));
    list.push_clip_rect_with(Vec2::ZERO, Vec2::new(50.0, 50.0), true);
    list.pop_clip_rect();
    list.pop_clip_rect();
    drop(list);

    let pushes: Vec<Option<bool>> = bridge
        .backend()
        .calls_to("iggPushClipRect")
        .map(|call| call.boolean(3))
        .collect();
    assert_eq!(pushes, vec![Some(false), Some(true)]);
    assert_eq!(bridge.backend().calls_to("iggPopClipRect").count(), 2);
}

#[test]
fn three_commands_resolve_to_their_indices() {
    let mut bridge = bridge(RecordingBackend::new().with_command_count(3));
    let commands = bridge.window_draw_list().commands();
    assert_eq!(commands.len(), 3);

    let backend = bridge.backend();
    for (index, command) in commands.iter().enumerate() {
        assert_eq!(backend.command_index(*command), Some(index));
    }
    assert_ne!(commands[0], commands[1]);
    assert_ne!(commands[1], commands[2]);
}

#[test]
fn clearing_calls_forgets_issued_commands_between_frames() {
    let mut bridge = bridge(RecordingBackend::new().with_command_count(2));
    let first_frame = bridge.window_draw_list().commands();
    assert_eq!(bridge.backend().command_index(first_frame[1]), Some(1));

    bridge.backend_mut().clear_calls();
    for command in &first_frame {
        assert_eq!(bridge.backend().command_index(*command), None);
    }
    assert_eq!(bridge.backend().call_count(), 0);

    let second_frame = bridge.window_draw_list().commands();
    assert_eq!(second_frame, first_frame);
    assert_eq!(bridge.backend().command_index(second_frame[0]), Some(0));
}

#[test]
fn vertices_are_decoded_with_the_queried_layout() {
    let layout = VertexBufferLayout {
        entry_size: 24,
        pos_offset: 4,
        uv_offset: 12,
        col_offset: 20,
    };
    let bytes = vertex_bytes(
        layout,
        &[
            ([1.25, -2.5], [0.0, 1.0], 0xFF00_00FF),
            ([300.5, 0.125], [0.5, 0.25], 0x8000_FF00),
        ],
    );
    let mut bridge = bridge(RecordingBackend::new().with_vertex_buffer(layout, bytes));

    let vertices = bridge.window_draw_list().vertices().expect("decode vertices");
    assert_eq!(vertices.len(), 2);
    assert_relative_eq!(vertices[0].pos.x, 1.25);
    assert_relative_eq!(vertices[0].pos.y, -2.5);
    assert_relative_eq!(vertices[1].pos.x, 300.5);
    assert_relative_eq!(vertices[1].uv.x, 0.5);
    assert_relative_eq!(vertices[1].uv.y, 0.25);
    assert_eq!(vertices[0].col.red(), 0xFF);
    assert_eq!(vertices[1].col.alpha(), 0x80);
    assert_eq!(vertices[1].col.green(), 0xFF);

    assert_eq!(
        bridge
            .backend()
            .calls_to("iggGetVertexBufferLayout")
            .count(),
        1
    );
}

#[test]
fn layout_is_queried_on_every_decode() {
    let layout = VertexBufferLayout {
        entry_size: 20,
        pos_offset: 0,
        uv_offset: 8,
        col_offset: 16,
    };
    let bytes = vertex_bytes(layout, &[([0.0, 0.0], [0.0, 0.0], 0)]);
    let mut bridge = bridge(RecordingBackend::new().with_vertex_buffer(layout, bytes));
    let mut list = bridge.window_draw_list();
    list.vertices().expect("first decode");
    list.vertices().expect("second decode");
    drop(list);

    assert_eq!(
        bridge
            .backend()
            .calls_to("iggGetVertexBufferLayout")
            .count(),
        2
    );
}

#[test]
fn truncated_vertex_buffer_is_an_error() {
    let layout = VertexBufferLayout {
        entry_size: 20,
        pos_offset: 0,
        uv_offset: 8,
        col_offset: 16,
    };
    let mut bridge = bridge(RecordingBackend::new().with_vertex_buffer(layout, vec![0; 30]));
    assert!(bridge.window_draw_list().vertices().is_err());
}

#[test]
fn indices_widen_sixteen_bit_entries() {
    let mut bytes = Vec::new();
    for index in [0_u16, 1, 2, 2, 3, 0] {
        bytes.extend_from_slice(&index.to_ne_bytes());
    }
    let mut bridge = bridge(
        RecordingBackend::new().with_index_buffer(IndexBufferLayout { entry_size: 2 }, bytes),
    );
    let mut list = bridge.window_draw_list();
    assert_eq!(list.index_buffer().byte_len(), 12);
    assert_eq!(list.indices().expect("decode indices"), vec![0, 1, 2, 2, 3, 0]);
}
