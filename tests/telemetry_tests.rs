use imgui_bridge::Bridge;
use imgui_bridge::core::{PackedColor, Vec2};
use imgui_bridge::ffi::RecordingBackend;
use imgui_bridge::telemetry::init_default_tracing;

#[cfg(feature = "telemetry")]
#[test]
fn default_subscriber_installs_once_and_accepts_skip_events() {
    assert!(init_default_tracing());
    assert!(!init_default_tracing());

    let mut bridge = Bridge::with_default_config(RecordingBackend::new());
    bridge
        .window_draw_list()
        .add_text(Vec2::ZERO, PackedColor::WHITE, "");
    let context = bridge.create_plot_context();
    assert!(!context.is_null());
    bridge.destroy_plot_context();
    assert!(bridge.backend().calls_to("iggAddText").next().is_none());
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn default_subscriber_is_not_installed_without_the_feature() {
    assert!(!init_default_tracing());

    let mut bridge = Bridge::with_default_config(RecordingBackend::new());
    bridge
        .window_draw_list()
        .add_text(Vec2::ZERO, PackedColor::WHITE, "");
    assert!(bridge.backend().calls_to("iggAddText").next().is_none());
}
