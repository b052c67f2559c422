use imgui_bridge::Bridge;
use imgui_bridge::core::{PackedColor, Vec2};
use imgui_bridge::ffi::RecordingBackend;
use imgui_bridge::marshal::{buffer_stats, reset_buffer_stats};
use proptest::prelude::*;

fn bridge() -> Bridge<RecordingBackend> {
    Bridge::with_default_config(RecordingBackend::new())
}

proptest! {
    #[test]
    fn vec2_and_color_cross_the_boundary_bit_exact(
        x1 in any::<f32>(),
        y1 in any::<f32>(),
        x2 in any::<f32>(),
        y2 in any::<f32>(),
        color_bits in any::<u32>()
    ) {
        let mut bridge = bridge();
        bridge
            .window_draw_list()
            .add_line(Vec2::new(x1, y1), Vec2::new(x2, y2), PackedColor(color_bits));

        let call = bridge.backend().last_call().expect("line call");
        let p1 = call.vec2(1).expect("p1");
        let p2 = call.vec2(2).expect("p2");
        prop_assert_eq!(p1.x.to_bits(), x1.to_bits());
        prop_assert_eq!(p1.y.to_bits(), y1.to_bits());
        prop_assert_eq!(p2.x.to_bits(), x2.to_bits());
        prop_assert_eq!(p2.y.to_bits(), y2.to_bits());
        prop_assert_eq!(call.color(3).map(PackedColor::bits), Some(color_bits));
    }

    #[test]
    fn color_channels_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let color = PackedColor::from_rgba(r, g, b, a);
        prop_assert_eq!(color.to_rgba(), [r, g, b, a]);
        prop_assert_eq!(PackedColor::from(color.bits()), color);
    }

    #[test]
    fn text_buffer_is_input_plus_terminator(text in ".{1,48}") {
        reset_buffer_stats();
        let mut bridge = bridge();
        bridge.window_draw_list().add_text(Vec2::ZERO, PackedColor::WHITE, &text);

        let call = bridge.backend().last_call().expect("text call");
        prop_assert_eq!(call.text_bytes(3).map(<[u8]>::len), Some(text.len() + 1));
        prop_assert_eq!(call.int(4), Some(text.len() as i32));
        let stats = buffer_stats();
        prop_assert_eq!(stats.acquired, 1);
        prop_assert_eq!(stats.released, 1);
    }

    #[test]
    fn equal_pairs_call_once_with_their_length(
        xs in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)
    ) {
        let ys: Vec<f64> = xs.iter().map(|x| x * 2.0).collect();
        let mut bridge = bridge();
        bridge.plot().scatter_xy("points", &xs, &ys, 0);

        let backend = bridge.backend();
        prop_assert_eq!(backend.call_count(), 1);
        let call = backend.last_call().expect("scatter call");
        prop_assert_eq!(call.int(3), Some(xs.len() as i32));
        prop_assert_eq!(call.doubles(1), Some(&xs[..]));
    }

    #[test]
    fn unequal_pairs_never_call(
        xs in prop::collection::vec(-1.0e3f64..1.0e3, 0..16),
        ys in prop::collection::vec(-1.0e3f64..1.0e3, 0..16)
    ) {
        prop_assume!(xs.len() != ys.len() || xs.is_empty());
        reset_buffer_stats();
        let mut bridge = bridge();
        bridge.plot().stairs_xy("steps", &xs, &ys, 0);

        prop_assert_eq!(bridge.backend().call_count(), 0);
        prop_assert_eq!(buffer_stats().acquired, 0);
    }

    #[test]
    fn label_arrays_release_every_element_once(
        labels in prop::collection::vec("[a-z]{0,8}", 1..12)
    ) {
        reset_buffer_stats();
        let values: Vec<f64> = (0..labels.len()).map(|i| i as f64 + 1.0).collect();
        let mut bridge = bridge();
        bridge.plot().pie_chart(&labels, &values, 0.5, 0.5, 0.4, true, None, 90.0);

        let call = bridge.backend().last_call().expect("pie call");
        let recorded = call.texts(0).expect("labels");
        prop_assert_eq!(recorded.len(), labels.len());
        let stats = buffer_stats();
        prop_assert_eq!(stats.acquired, labels.len());
        prop_assert_eq!(stats.released, labels.len());
    }
}
