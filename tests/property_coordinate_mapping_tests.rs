use line_profile::core::{DisplayGeometry, FitMode, Point, map_linear};
use proptest::prelude::*;

proptest! {
    #[test]
    fn map_linear_round_trip_property(
        in_min in -1_000.0f64..1_000.0,
        in_span in 0.01f64..1_000.0,
        out_min in -1_000.0f64..1_000.0,
        out_span in 0.01f64..1_000.0,
        factor in 0.0f64..1.0
    ) {
        let in_max = in_min + in_span;
        let out_max = out_min + out_span;
        let value = in_min + factor * in_span;

        let mapped = map_linear(value, in_min, in_max, out_min, out_max);
        let recovered = map_linear(mapped, out_min, out_max, in_min, in_max);
        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn uniform_fit_round_trip_property(
        image_width in 1u32..4_000,
        image_height in 1u32..4_000,
        view_width in 1.0f64..3_000.0,
        view_height in 1.0f64..3_000.0,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0
    ) {
        let geometry = DisplayGeometry::new(image_width, image_height, view_width, view_height, FitMode::Uniform);
        let transform = geometry.transform().expect("valid geometry");

        let image_point = Point::new(fx * f64::from(image_width), fy * f64::from(image_height));
        let display = transform.image_to_display(image_point);
        prop_assert!(display.x >= -1e-6 && display.x <= view_width + 1e-6);
        prop_assert!(display.y >= -1e-6 && display.y <= view_height + 1e-6);

        let recovered = transform.display_to_image(display);
        prop_assert!((recovered.x - image_point.x).abs() <= 1e-6);
        prop_assert!((recovered.y - image_point.y).abs() <= 1e-6);
    }

    #[test]
    fn uniform_fit_fills_one_dimension(
        image_width in 1u32..4_000,
        image_height in 1u32..4_000,
        view_width in 1.0f64..3_000.0,
        view_height in 1.0f64..3_000.0
    ) {
        let geometry = DisplayGeometry::new(image_width, image_height, view_width, view_height, FitMode::Uniform);
        let transform = geometry.transform().expect("valid geometry");

        let offsets_zero = transform.offset_x.abs() <= 1e-6 || transform.offset_y.abs() <= 1e-6;
        prop_assert!(offsets_zero);
        prop_assert!(transform.offset_x >= -1e-9 && transform.offset_y >= -1e-9);
    }
}
