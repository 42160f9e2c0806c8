use line_profile::api::{PixelInspection, inspect};
use line_profile::core::{DisplayGeometry, FitMode, PixelBuffer, Point, luminance};

/// Pixel (row, col) is B=col*10, G=row*10, R=row*10+col.
fn coordinate_image(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for row in 0..height {
        for col in 0..width {
            data.extend_from_slice(&[(col * 10) as u8, (row * 10) as u8, (row * 10 + col) as u8, 255]);
        }
    }
    data
}

#[test]
fn click_without_scaling_reads_the_pixel_under_it() {
    let data = coordinate_image(5, 5);
    let buffer = PixelBuffer::packed(&data, 5, 5).expect("valid buffer");
    let geometry = DisplayGeometry::new(5, 5, 5.0, 5.0, FitMode::None);

    let inspection = inspect(Point::new(3.4, 3.9), geometry, buffer).expect("inside image");
    let pixel = buffer.sample(3, 3).expect("pixel");
    assert_eq!(
        inspection,
        PixelInspection {
            x: 3,
            y: 3,
            red: pixel.red,
            green: pixel.green,
            blue: pixel.blue,
            gray: luminance(pixel.red, pixel.green, pixel.blue),
        }
    );
    assert_eq!((inspection.red, inspection.green, inspection.blue), (33, 30, 30));
}

#[test]
fn column_and_row_are_not_swapped() {
    let data = coordinate_image(6, 3);
    let buffer = PixelBuffer::packed(&data, 6, 3).expect("valid buffer");
    let geometry = DisplayGeometry::new(6, 3, 6.0, 3.0, FitMode::None);

    let inspection = inspect(Point::new(4.5, 1.5), geometry, buffer).expect("inside image");
    assert_eq!((inspection.x, inspection.y), (4, 1));
    assert_eq!(inspection.blue, 40);
    assert_eq!(inspection.green, 10);
}

#[test]
fn uniform_fit_click_maps_through_letterbox() {
    let data = coordinate_image(10, 4);
    let buffer = PixelBuffer::packed(&data, 10, 4).expect("valid buffer");
    // scale = min(100 / 10, 100 / 4) = 10, drawn 100x40, offset_y = 30.
    let geometry = DisplayGeometry::new(10, 4, 100.0, 100.0, FitMode::Uniform);

    let inspection = inspect(Point::new(75.0, 55.0), geometry, buffer).expect("inside image");
    assert_eq!((inspection.x, inspection.y), (7, 2));
    assert_eq!(inspection.red, 27);

    assert!(inspect(Point::new(50.0, 10.0), geometry, buffer).is_none());
    assert!(inspect(Point::new(50.0, 71.0), geometry, buffer).is_none());
}

#[test]
fn clicks_outside_the_image_yield_nothing() {
    let data = coordinate_image(5, 5);
    let buffer = PixelBuffer::packed(&data, 5, 5).expect("valid buffer");
    let geometry = DisplayGeometry::new(5, 5, 8.0, 8.0, FitMode::None);

    assert!(inspect(Point::new(5.0, 1.0), geometry, buffer).is_none());
    assert!(inspect(Point::new(1.0, 7.5), geometry, buffer).is_none());
    assert!(inspect(Point::new(-0.5, 1.0), geometry, buffer).is_none());
    assert!(inspect(Point::new(f64::NAN, 1.0), geometry, buffer).is_none());
}

#[test]
fn mismatched_geometry_yields_nothing() {
    let data = coordinate_image(2, 2);
    let buffer = PixelBuffer::packed(&data, 2, 2).expect("valid buffer");

    let oversized = DisplayGeometry::new(4, 4, 4.0, 4.0, FitMode::None);
    assert!(inspect(Point::new(3.0, 3.0), oversized, buffer).is_none());

    let empty_view = DisplayGeometry::new(2, 2, 0.0, 0.0, FitMode::Uniform);
    assert!(inspect(Point::new(0.0, 0.0), empty_view, buffer).is_none());
}

#[test]
fn inspection_serializes_channel_names() {
    let inspection = PixelInspection {
        x: 1,
        y: 2,
        red: 3,
        green: 4,
        blue: 5,
        gray: 4,
    };
    let json = serde_json::to_value(inspection).expect("serialize");
    assert_eq!(json["red"], 3);
    assert_eq!(json["gray"], 4);
}
