use criterion::{Criterion, criterion_group, criterion_main};
use imgui_bridge::Bridge;
use imgui_bridge::core::{PackedColor, Vec2};
use imgui_bridge::ffi::RecordingBackend;
use imgui_bridge::marshal::{ForeignString, ForeignStringArray};
use std::hint::black_box;

fn bench_string_marshaling(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog";

    c.bench_function("foreign_string_new", |b| {
        b.iter(|| {
            let buffer = ForeignString::new(black_box(text));
            black_box(buffer.byte_len());
        })
    });
}

fn bench_label_array_64(c: &mut Criterion) {
    let labels: Vec<String> = (0..64).map(|i| format!("label {i}")).collect();

    c.bench_function("foreign_string_array_64", |b| {
        b.iter(|| {
            let array = ForeignStringArray::new(black_box(&labels));
            black_box(array.as_ptr());
        })
    });
}

fn bench_plot_line_10k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.01).sin()).collect();
    let mut bridge = Bridge::with_default_config(RecordingBackend::new());

    c.bench_function("plot_line_xy_10k", |b| {
        b.iter(|| {
            bridge
                .plot()
                .line_xy("series", black_box(&xs), black_box(&ys), 0);
            bridge.backend_mut().clear_calls();
        })
    });
}

fn bench_draw_text(c: &mut Criterion) {
    let mut bridge = Bridge::with_default_config(RecordingBackend::new());

    c.bench_function("draw_list_add_text", |b| {
        b.iter(|| {
            bridge
                .window_draw_list()
                .add_text(Vec2::new(4.0, 4.0), PackedColor::WHITE, black_box("frame time 16.6 ms"));
            bridge.backend_mut().clear_calls();
        })
    });
}

criterion_group!(
    benches,
    bench_string_marshaling,
    bench_label_array_64,
    bench_plot_line_10k,
    bench_draw_text
);
criterion_main!(benches);
