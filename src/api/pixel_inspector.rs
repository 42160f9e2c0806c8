use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{DisplayGeometry, PixelBuffer, Point};

/// Channel values of the pixel under a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelInspection {
    pub x: u32,
    pub y: u32,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub gray: u8,
}

/// Resolves the image pixel under `click` and reads its channels.
///
/// Returns `None` when the click lands outside the drawn image, including
/// the letterbox bands of a uniformly fitted image.
#[must_use]
pub fn inspect(
    click: Point,
    geometry: DisplayGeometry,
    buffer: PixelBuffer<'_>,
) -> Option<PixelInspection> {
    let transform = match geometry.transform() {
        Ok(transform) => transform,
        Err(err) => {
            warn!(error = %err, "cannot invert display geometry");
            return None;
        }
    };

    let image_point = transform.display_to_image(click);
    let Some(pixel) = geometry.locate_pixel(image_point) else {
        trace!(x = click.x, y = click.y, "click outside image");
        return None;
    };

    let bgra = match buffer.sample(pixel.y, pixel.x) {
        Ok(bgra) => bgra,
        Err(err) => {
            warn!(error = %err, "display geometry does not match pixel buffer");
            return None;
        }
    };

    Some(PixelInspection {
        x: pixel.x,
        y: pixel.y,
        red: bgra.red,
        green: bgra.green,
        blue: bgra.blue,
        gray: bgra.luminance(),
    })
}
