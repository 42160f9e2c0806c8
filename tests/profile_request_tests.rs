use approx::assert_relative_eq;
use line_profile::ProfileRequest;
use line_profile::core::{
    Axis, DisplayGeometry, FitMode, LineProfile, PixelBuffer, Point, ProfileChannels,
    guide_segment,
};

fn solid_buffer(width: u32, height: u32) -> Vec<u8> {
    [40_u8, 80, 120, 255].repeat(width as usize * height as usize)
}

#[test]
fn index_is_clamped_per_axis() {
    let data = solid_buffer(8, 3);
    let buffer = PixelBuffer::packed(&data, 8, 3).expect("valid buffer");

    let row = ProfileRequest::new(Axis::Row, 50, ProfileChannels::Gray).clamped_to(buffer);
    assert_eq!(row.index, 2);

    let column = ProfileRequest::new(Axis::Column, 50, ProfileChannels::Gray).clamped_to(buffer);
    assert_eq!(column.index, 7);

    let inside = ProfileRequest::new(Axis::Column, 5, ProfileChannels::Rgb).clamped_to(buffer);
    assert_eq!(inside.index, 5);
    assert_eq!(inside.channels, ProfileChannels::Rgb);
}

#[test]
fn clamp_index_handles_negative_input() {
    assert_eq!(Axis::Row.clamp_index(-4, 10, 6), 0);
    assert_eq!(Axis::Row.clamp_index(99, 10, 6), 5);
    assert_eq!(Axis::Column.clamp_index(99, 10, 6), 9);
}

#[test]
fn request_extracts_requested_channels() {
    let data = solid_buffer(4, 2);
    let buffer = PixelBuffer::packed(&data, 4, 2).expect("valid buffer");

    let gray = ProfileRequest::new(Axis::Row, 1, ProfileChannels::Gray)
        .extract(buffer)
        .expect("extract");
    // 0.299 * 120 + 0.587 * 80 + 0.114 * 40 = 87.4
    assert_eq!(gray, LineProfile::Gray(vec![87; 4]));

    let rgb = ProfileRequest::new(Axis::Column, 3, ProfileChannels::Rgb)
        .extract(buffer)
        .expect("extract");
    assert_eq!(rgb.len(), 2);
    assert_eq!(rgb.channels(), ProfileChannels::Rgb);

    assert!(ProfileRequest::new(Axis::Row, 2, ProfileChannels::Gray).extract(buffer).is_err());
}

#[test]
fn titles_name_the_axis() {
    assert_eq!(ProfileRequest::new(Axis::Row, 12, ProfileChannels::Gray).title(), "Row 12");
    assert_eq!(ProfileRequest::new(Axis::Column, 3, ProfileChannels::Rgb).title(), "Column 3");
}

#[test]
fn request_json_defaults_channels_to_gray() {
    let request: ProfileRequest =
        serde_json::from_str(r#"{"axis":"column","index":4}"#).expect("parse");
    assert_eq!(request, ProfileRequest::new(Axis::Column, 4, ProfileChannels::Gray));
}

#[test]
fn guide_runs_through_pixel_centers() {
    let row = guide_segment(Axis::Row, 3, 20, 10);
    assert_eq!(row.start, Point::new(0.0, 3.5));
    assert_eq!(row.end, Point::new(20.0, 3.5));

    let data = solid_buffer(20, 10);
    let buffer = PixelBuffer::packed(&data, 20, 10).expect("valid buffer");
    let column = ProfileRequest::new(Axis::Column, 7, ProfileChannels::Gray).guide(buffer);
    assert_eq!(column.start, Point::new(7.5, 0.0));
    assert_eq!(column.end, Point::new(7.5, 10.0));
}

#[test]
fn guide_maps_onto_scaled_preview() {
    let geometry = DisplayGeometry::new(20, 10, 40.0, 40.0, FitMode::Uniform);
    let transform = geometry.transform().expect("transform");
    let guide = guide_segment(Axis::Row, 4, 20, 10);

    let start = transform.image_to_display(guide.start);
    let end = transform.image_to_display(guide.end);
    // scale 2, offset_y = (40 - 20) / 2 = 10
    assert_relative_eq!(start.x, 0.0);
    assert_relative_eq!(end.x, 40.0);
    assert_relative_eq!(start.y, 19.0);
    assert_relative_eq!(end.y, 19.0);
}
