use imgui_bridge::Bridge;
use imgui_bridge::core::{Condition, Vec2, YAxis};
use imgui_bridge::ffi::RecordingBackend;
use imgui_bridge::marshal::{buffer_stats, reset_buffer_stats};
use imgui_bridge::plot::{AxisFlags, PlotFlags, PlotSpec};

fn bridge() -> Bridge<RecordingBackend> {
    Bridge::with_default_config(RecordingBackend::new())
}

#[test]
fn empty_arrays_make_no_foreign_call() {
    let mut bridge = bridge();
    let mut plot = bridge.plot();
    plot.line("line", &[], 1.0, 0.0, 0);
    plot.line_xy("line xy", &[], &[], 0);
    plot.bars("bars", &[], 0.67, 0.0, 0);
    plot.bars_h_xy("bars h", &[], &[1.0], 0.67, 0);
    plot.scatter_xy("scatter", &[1.0], &[], 0);
    plot.stairs("stairs", &[], 1.0, 0.0, 0);
    plot.error_bars("err", &[], &[], &[], 0);
    plot.stems("stems", &[], 0.0, 1.0, 0.0, 0);
    plot.vlines("v", &[], 0);
    plot.hlines("h", &[], 0);
    plot.pie_chart::<&str>(&[], &[], 0.5, 0.5, 0.4, true, Some("%.1f"), 90.0);
    plot.set_next_plot_ticks_x::<&str>(&[], &[], false);
    drop(plot);

    assert_eq!(bridge.backend().call_count(), 0);
}

#[test]
fn skipped_items_do_not_marshal_their_label() {
    reset_buffer_stats();
    let mut bridge = bridge();
    bridge.plot().line_xy("never marshaled", &[1.0, 2.0], &[1.0], 0);
    assert_eq!(buffer_stats().acquired, 0);
    assert_eq!(bridge.backend().call_count(), 0);
}

#[test]
fn equal_pairs_make_exactly_one_call_with_their_length() {
    let mut bridge = bridge();
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [10.0, 11.0, 12.0, 13.0];
    bridge.plot().line_xy("prices", &xs, &ys, 2);

    let backend = bridge.backend();
    assert_eq!(backend.call_count(), 1);
    let call = backend.last_call().expect("line call");
    assert_eq!(call.entry, "iggImPlotLineXY");
    assert_eq!(call.text(0), Some("prices"));
    assert_eq!(call.doubles(1), Some(&xs[..]));
    assert_eq!(call.doubles(2), Some(&ys[..]));
    assert_eq!(call.int(3), Some(4));
    assert_eq!(call.int(4), Some(2));
}

#[test]
fn mismatched_pairs_are_skipped() {
    let mut bridge = bridge();
    let mut plot = bridge.plot();
    plot.line_xy("a", &[1.0, 2.0, 3.0], &[1.0, 2.0], 0);
    plot.bars_xy("b", &[1.0], &[1.0, 2.0], 0.5, 0);
    plot.stems_xy("c", &[1.0, 2.0], &[1.0], 0.0, 0);
    plot.error_bars_h("d", &[1.0, 2.0], &[1.0, 2.0], &[0.1], 0);
    plot.pie_chart(&["x", "y"], &[1.0], 0.5, 0.5, 0.4, false, None, 90.0);
    plot.set_next_plot_ticks_y(&[1.0, 2.0], &["one"], true, YAxis::Y2);
    drop(plot);

    assert_eq!(bridge.backend().call_count(), 0);
}

#[test]
fn single_array_items_forward_scale_and_offset() {
    let mut bridge = bridge();
    let values = [3.0, 1.0, 4.0];
    let mut plot = bridge.plot();
    plot.bars("bars", &values, 0.5, 0.25, 1);
    plot.scatter("scatter", &values, 2.0, 10.0, 0);
    plot.stems("stems", &values, -1.0, 1.0, 0.0, 0);
    drop(plot);

    let backend = bridge.backend();
    let bars = backend.calls_to("iggImPlotBars").next().expect("bars call");
    assert_eq!(bars.int(2), Some(3));
    assert_eq!(bars.double(3), Some(0.5));
    assert_eq!(bars.double(4), Some(0.25));
    assert_eq!(bars.int(5), Some(1));

    let scatter = backend
        .calls_to("iggImPlotScatter")
        .next()
        .expect("scatter call");
    assert_eq!(scatter.double(3), Some(2.0));
    assert_eq!(scatter.double(4), Some(10.0));

    let stems = backend.calls_to("iggImPlotStems").next().expect("stems call");
    assert_eq!(stems.double(3), Some(-1.0));
}

#[test]
fn error_bars_forward_three_equal_arrays() {
    let mut bridge = bridge();
    bridge
        .plot()
        .error_bars("err", &[1.0, 2.0], &[5.0, 6.0], &[0.5, 0.25], 0);

    let call = bridge.backend().last_call().expect("error bars call");
    assert_eq!(call.entry, "iggImPlotErrorBars");
    assert_eq!(call.doubles(3), Some(&[0.5, 0.25][..]));
    assert_eq!(call.int(4), Some(2));
}

#[test]
fn pie_chart_labels_are_released_after_the_call() {
    reset_buffer_stats();
    let mut bridge = bridge();
    bridge.plot().pie_chart(
        &["red", "green", "blue"],
        &[0.2, 0.3, 0.5],
        0.5,
        0.5,
        0.4,
        true,
        None,
        90.0,
    );

    let call = bridge.backend().last_call().expect("pie call");
    assert_eq!(call.entry, "iggImPlotPieChart");
    assert_eq!(call.texts(0), Some(vec!["red", "green", "blue"]));
    assert_eq!(call.int(2), Some(3));
    assert_eq!(call.boolean(6), Some(true));
    assert!(call.is_null_text(7));

    let stats = buffer_stats();
    assert_eq!(stats.acquired, 3);
    assert_eq!(stats.released, 3);
}

#[test]
fn pie_chart_format_is_marshaled_when_present() {
    let mut bridge = bridge();
    bridge
        .plot()
        .pie_chart(&["a"], &[1.0], 0.0, 0.0, 1.0, false, Some("%.0f%%"), 0.0);

    let call = bridge.backend().last_call().expect("pie call");
    assert_eq!(call.text(7), Some("%.0f%%"));
}

#[test]
fn tick_labels_follow_values() {
    let mut bridge = bridge();
    bridge
        .plot()
        .set_next_plot_ticks_x(&[0.0, 0.5, 1.0], &["lo", "mid", "hi"], true);

    let call = bridge.backend().last_call().expect("ticks call");
    assert_eq!(call.entry, "iggImPlotSetNextPlotTicksX");
    assert_eq!(call.int(1), Some(3));
    assert_eq!(call.texts(2), Some(vec!["lo", "mid", "hi"]));
    assert_eq!(call.boolean(3), Some(true));
}

#[test]
fn limits_forward_condition_bits() {
    let mut bridge = bridge();
    bridge
        .plot()
        .set_next_plot_limits(0.0, 10.0, -1.0, 1.0, Condition::Always);

    let call = bridge.backend().last_call().expect("limits call");
    assert_eq!(call.double(1), Some(10.0));
    assert_eq!(call.int(4), Some(1));
}

#[test]
fn missing_labels_become_null_pointers() {
    let mut bridge = bridge();
    let spec = PlotSpec::new("chart").with_axis_labels("time", "value");
    assert!(bridge.plot().begin_plot(&spec));

    let call = bridge.backend().last_call().expect("begin call");
    assert_eq!(call.entry, "iggImPlotBeginPlot");
    assert_eq!(call.text(0), Some("chart"));
    assert_eq!(call.text(1), Some("time"));
    assert_eq!(call.text(2), Some("value"));
    assert_eq!(call.vec2(3), Some(Vec2::new(-1.0, 0.0)));
    assert!(call.is_null_text(9));
    assert!(call.is_null_text(10));
}

#[test]
fn begin_plot_forwards_flags() {
    let mut bridge = bridge();
    let spec = PlotSpec::new("flags")
        .with_flags(PlotFlags::Y_AXIS_2 | PlotFlags::CROSSHAIRS)
        .with_axis_flags(AxisFlags::TIME, AxisFlags::LOCK)
        .with_extra_y_axis_flags(AxisFlags::LOG_SCALE, AxisFlags::empty())
        .with_y2_label("volume");
    bridge.plot().begin_plot(&spec);

    let call = bridge.backend().last_call().expect("begin call");
    assert_eq!(call.int(4), Some((1 << 8) | (1 << 11)));
    assert_eq!(call.int(5), Some(1 << 5));
    assert_eq!(call.int(6), Some(0b1_1000_0000));
    assert_eq!(call.int(7), Some(1 << 4));
    assert_eq!(call.text(9), Some("volume"));
}

#[test]
fn hidden_plot_skips_body_and_end() {
    let mut bridge = Bridge::with_default_config(RecordingBackend::new().with_begin_plot_result(false));
    let spec = PlotSpec::new("hidden");
    let drawn = bridge.plot().with_plot(&spec, |plot| {
        plot.line("never", &[1.0], 1.0, 0.0, 0);
    });

    assert!(drawn.is_none());
    assert_eq!(bridge.backend().calls_to("iggImPlotEndPlot").count(), 0);
    assert_eq!(bridge.backend().calls_to("iggImPlotLine").count(), 0);
}

#[test]
fn visible_plot_runs_body_between_begin_and_end() {
    let mut bridge = bridge();
    let spec = PlotSpec::new("visible");
    let drawn = bridge.plot().with_plot(&spec, |plot| {
        plot.hlines("zero", &[0.0], 0);
        7
    });

    assert_eq!(drawn, Some(7));
    let entries: Vec<&str> = bridge.backend().calls().iter().map(|call| call.entry).collect();
    assert_eq!(
        entries,
        vec!["iggImPlotBeginPlot", "iggImPlotHLines", "iggImPlotEndPlot"]
    );
}

#[test]
fn plot_geometry_and_hover_queries() {
    let backend = RecordingBackend::new()
        .with_plot_rect(Vec2::new(10.0, 20.0), Vec2::new(300.0, 200.0))
        .with_hover(true, false, [false, true, false]);
    let mut bridge = Bridge::with_default_config(backend);
    let mut plot = bridge.plot();

    assert_eq!(plot.plot_pos(), Vec2::new(10.0, 20.0));
    assert_eq!(plot.plot_size(), Vec2::new(300.0, 200.0));
    assert!(plot.is_plot_hovered());
    assert!(!plot.is_plot_x_axis_hovered());
    assert!(!plot.is_plot_y_axis_hovered(YAxis::Y1));
    assert!(plot.is_plot_y_axis_hovered(YAxis::Y2));
}

#[test]
fn fit_next_plot_axes_forwards_each_axis() {
    let mut bridge = bridge();
    bridge.plot().fit_next_plot_axes(true, false, true, false);

    let call = bridge.backend().last_call().expect("fit call");
    assert_eq!(call.entry, "iggImPlotFitNextPlotAxes");
    assert_eq!(call.boolean(0), Some(true));
    assert_eq!(call.boolean(1), Some(false));
    assert_eq!(call.boolean(2), Some(true));
}

#[test]
fn first_created_context_becomes_current() {
    let mut bridge = bridge();
    let first = bridge.create_plot_context();
    let second = bridge.create_plot_context();

    assert_ne!(first, second);
    assert_eq!(bridge.backend().current_plot_context(), Some(first));
    assert_eq!(bridge.backend().live_plot_contexts(), &[first, second]);
}

#[test]
fn destroy_targets_the_current_context_not_the_latest() {
    let mut bridge = bridge();
    let first = bridge.create_plot_context();
    let second = bridge.create_plot_context();

    bridge.destroy_plot_context();

    let backend = bridge.backend();
    assert_eq!(backend.live_plot_contexts(), &[second]);
    assert_eq!(backend.current_plot_context(), None);
    assert!(backend.calls_to("iggImPlotDestroyContext").next().is_some());
    assert_ne!(first, second);
}
