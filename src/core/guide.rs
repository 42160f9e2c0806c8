use crate::core::profile::Axis;
use crate::core::types::Point;

/// Image-space segment marking the profiled row or column on a preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideSegment {
    pub start: Point,
    pub end: Point,
}

/// Segment through the centers of the pixels on line `index`, spanning the image.
///
/// Coordinates are in continuous image space, so the line sits at `index + 0.5`.
/// Map both endpoints with a `DisplayTransform` to overlay it on a scaled preview.
#[must_use]
pub fn guide_segment(axis: Axis, index: u32, image_width: u32, image_height: u32) -> GuideSegment {
    let center = f64::from(index) + 0.5;
    match axis {
        Axis::Row => GuideSegment {
            start: Point::new(0.0, center),
            end: Point::new(f64::from(image_width), center),
        },
        Axis::Column => GuideSegment {
            start: Point::new(center, 0.0),
            end: Point::new(center, f64::from(image_height)),
        },
    }
}
