use approx::assert_relative_eq;
use imgui_bridge::Bridge;
use imgui_bridge::core::Vec2;
use imgui_bridge::ffi::{ForeignArg, RecordingBackend};
use imgui_bridge::io::{BackendFlags, ConfigFlags, KEY_COUNT, MOUSE_BUTTON_COUNT, MouseWheel, RenderMetrics};
use imgui_bridge::marshal::{buffer_stats, reset_buffer_stats};

fn bridge(backend: RecordingBackend) -> Bridge<RecordingBackend> {
    Bridge::with_default_config(backend)
}

#[test]
fn io_handle_comes_from_the_current_context_and_is_forwarded() {
    let mut bridge = bridge(RecordingBackend::new());
    let io = bridge.io().handle();
    assert!(!io.is_null());

    bridge.io().set_delta_time(1.0 / 60.0);
    let call = bridge.backend().last_call().expect("delta time call");
    assert_eq!(call.entry, "iggIoSetDeltaTime");
    assert_eq!(call.arg(0), Some(&ForeignArg::Io(io)));
    assert_relative_eq!(call.float(1).expect("seconds"), 1.0 / 60.0);
    assert_eq!(bridge.backend().calls_to("iggGetCurrentIO").count(), 2);
}

#[test]
fn out_param_getters_return_the_native_values() {
    let backend = RecordingBackend::new().with_mouse_motion(
        Vec2::new(3.5, -1.25),
        MouseWheel {
            horizontal: -0.5,
            vertical: 2.0,
        },
    );
    let mut bridge = bridge(backend);
    let mut io = bridge.io();

    assert_eq!(io.mouse_delta(), Vec2::new(3.5, -1.25));
    let wheel = io.mouse_wheel();
    assert_relative_eq!(wheel.horizontal, -0.5);
    assert_relative_eq!(wheel.vertical, 2.0);
    assert_eq!(io.display_frame_buffer_scale(), Vec2::ONE);
}

#[test]
fn frame_buffer_scale_reads_back_what_was_set() {
    let mut bridge = bridge(RecordingBackend::new());
    let mut io = bridge.io();
    io.set_display_frame_buffer_scale(Vec2::new(2.0, 2.0));
    assert_eq!(io.display_frame_buffer_scale(), Vec2::new(2.0, 2.0));

    let call = bridge
        .backend()
        .calls_to("iggIoSetDisplayFrameBufferScale")
        .next()
        .expect("set scale call");
    assert_eq!(call.vec2(1), Some(Vec2::new(2.0, 2.0)));
}

#[test]
fn wheel_deltas_accumulate_horizontal_first() {
    let mut bridge = bridge(RecordingBackend::new());
    let mut io = bridge.io();
    io.add_mouse_wheel_delta(1.0, -3.0);
    io.add_mouse_wheel_delta(0.5, 1.0);

    let wheel = io.mouse_wheel();
    assert_relative_eq!(wheel.horizontal, 1.5);
    assert_relative_eq!(wheel.vertical, -2.0);

    let call = bridge
        .backend()
        .calls_to("iggIoAddMouseWheelDelta")
        .next()
        .expect("wheel call");
    assert_eq!(call.float(1), Some(1.0));
    assert_eq!(call.float(2), Some(-3.0));
}

#[test]
fn capture_flags_and_frame_stats_are_queried_per_call() {
    let metrics = RenderMetrics {
        render_vertices: 1200,
        render_indices: 1800,
        render_windows: 3,
        active_windows: 4,
        active_allocations: 57,
    };
    let backend = RecordingBackend::new()
        .with_io_capture(true, false, true)
        .with_io_frame_stats(59.5, metrics);
    let mut bridge = bridge(backend);
    let mut io = bridge.io();

    assert!(io.want_capture_mouse());
    assert!(!io.want_capture_keyboard());
    assert!(io.want_text_input());
    assert_relative_eq!(io.framerate(), 59.5);
    assert_eq!(io.metrics(), metrics);
    assert_eq!(bridge.backend().calls_to("iggMetricsActiveAllocations").count(), 1);
}

#[test]
fn display_and_mouse_setters_forward_vectors() {
    let mut bridge = bridge(RecordingBackend::new());
    {
        let mut io = bridge.io();
        io.set_display_size(Vec2::new(1280.0, 720.0));
        io.set_mouse_position(Vec2::new(40.0, 30.0));
        io.clear_mouse_position();
    }

    let backend = bridge.backend();
    let size = backend.calls_to("iggIoSetDisplaySize").next().expect("size call");
    assert_eq!(size.vec2(1), Some(Vec2::new(1280.0, 720.0)));

    let positions: Vec<Vec2> = backend
        .calls_to("iggIoSetMousePosition")
        .filter_map(|call| call.vec2(1))
        .collect();
    assert_eq!(positions, vec![Vec2::new(40.0, 30.0), Vec2::new(-f32::MAX, -f32::MAX)]);
}

#[test]
fn mouse_buttons_past_the_native_table_are_skipped() {
    let mut bridge = bridge(RecordingBackend::new());
    {
        let mut io = bridge.io();
        io.set_mouse_button_down(0, true);
        io.set_mouse_button_down(MOUSE_BUTTON_COUNT - 1, false);
        io.set_mouse_button_down(MOUSE_BUTTON_COUNT, true);
    }

    let buttons: Vec<(Option<i32>, Option<bool>)> = bridge
        .backend()
        .calls_to("iggIoSetMouseButtonDown")
        .map(|call| (call.int(1), call.boolean(2)))
        .collect();
    assert_eq!(buttons, vec![(Some(0), Some(true)), (Some(4), Some(false))]);
}

#[test]
fn key_events_are_range_checked_against_the_key_table() {
    let mut bridge = bridge(RecordingBackend::new());
    {
        let mut io = bridge.io();
        io.key_press(65);
        io.key_release(65);
        io.key_press(KEY_COUNT);
        io.key_map(12, 65);
        io.key_map(22, 65);
        io.key_ctrl(17, 18);
        io.key_shift(16, KEY_COUNT + 1);
        io.key_alt(18, 19);
        io.key_super(91, 92);
    }

    let backend = bridge.backend();
    assert_eq!(backend.calls_to("iggIoKeyPress").count(), 1);
    assert_eq!(backend.calls_to("iggIoKeyRelease").count(), 1);
    assert_eq!(backend.calls_to("iggIoKeyMap").count(), 1);
    assert_eq!(backend.calls_to("iggIoKeyShift").count(), 0);

    let map = backend.calls_to("iggIoKeyMap").next().expect("key map call");
    assert_eq!((map.int(1), map.int(2)), (Some(12), Some(65)));
    let ctrl = backend.calls_to("iggIoKeyCtrl").next().expect("ctrl call");
    assert_eq!((ctrl.int(1), ctrl.int(2)), (Some(17), Some(18)));
    assert_eq!(backend.calls_to("iggIoKeyAlt").count(), 1);
    assert_eq!(backend.calls_to("iggIoKeySuper").count(), 1);
}

#[test]
fn typed_text_is_marshaled_and_released() {
    reset_buffer_stats();
    let mut bridge = bridge(RecordingBackend::new());
    {
        let mut io = bridge.io();
        io.add_input_characters("héllo");
        io.add_input_characters("");
    }

    let calls: Vec<_> = bridge.backend().calls_to("iggIoAddInputCharactersUTF8").collect();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text(1), Some("héllo"));

    let stats = buffer_stats();
    assert_eq!(stats.acquired, 1);
    assert_eq!(stats.live(), 0);
}

#[test]
fn ini_filename_none_passes_a_null_pointer() {
    reset_buffer_stats();
    let mut bridge = bridge(RecordingBackend::new());
    {
        let mut io = bridge.io();
        io.set_ini_filename(Some("layout.ini"));
        io.set_ini_filename(None);
    }

    let calls: Vec<_> = bridge.backend().calls_to("iggIoSetIniFilename").collect();
    assert_eq!(calls[0].text(1), Some("layout.ini"));
    assert!(calls[1].is_null_text(1));
    assert_eq!(buffer_stats().live(), 0);
}

#[test]
fn flags_cursor_and_idle_frames_round_trip_through_the_io_block() {
    let mut bridge = bridge(RecordingBackend::new());
    let mut io = bridge.io();

    assert_eq!(io.config_flags(), ConfigFlags::empty());
    io.set_config_flags(ConfigFlags::NAV_ENABLE_KEYBOARD | ConfigFlags::NO_MOUSE_CURSOR_CHANGE);
    assert_eq!(
        io.config_flags(),
        ConfigFlags::NAV_ENABLE_KEYBOARD | ConfigFlags::NO_MOUSE_CURSOR_CHANGE
    );

    io.set_backend_flags(BackendFlags::HAS_MOUSE_CURSORS);
    assert_eq!(io.backend_flags(), BackendFlags::HAS_MOUSE_CURSORS);

    assert!(!io.mouse_draw_cursor());
    io.set_mouse_draw_cursor(true);
    assert!(io.mouse_draw_cursor());

    io.set_frame_count_since_last_input(7);
    assert_eq!(io.frame_count_since_last_input(), 7);

    io.set_font_global_scale(1.5);
    let call = bridge.backend().last_call().expect("font scale call");
    assert_eq!(call.entry, "iggIoSetFontGlobalScale");
    assert_eq!(call.float(1), Some(1.5));
}
