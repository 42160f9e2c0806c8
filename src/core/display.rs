use serde::{Deserialize, Serialize};

use crate::core::types::{ImagePixel, Point};
use crate::error::{ProfileError, ProfileResult};

/// How an image is scaled into its display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// 1:1 pixel scale anchored at the view's top-left corner.
    None,
    /// Scaled to fit the view, aspect ratio preserved, centered.
    #[default]
    Uniform,
}

/// Placement of an image inside a display area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    pub image_width: u32,
    pub image_height: u32,
    pub view_width: f64,
    pub view_height: f64,
    pub fit_mode: FitMode,
}

impl DisplayGeometry {
    #[must_use]
    pub fn new(
        image_width: u32,
        image_height: u32,
        view_width: f64,
        view_height: f64,
        fit_mode: FitMode,
    ) -> Self {
        Self {
            image_width,
            image_height,
            view_width,
            view_height,
            fit_mode,
        }
    }

    /// Resolves the display transform; see [`DisplayTransform::from_geometry`].
    pub fn transform(self) -> ProfileResult<DisplayTransform> {
        DisplayTransform::from_geometry(self)
    }

    /// Floors an image-space point and keeps it only if it lies on the image.
    #[must_use]
    pub fn locate_pixel(self, image_point: Point) -> Option<ImagePixel> {
        if !image_point.is_finite() {
            return None;
        }
        let x = image_point.x.floor();
        let y = image_point.y.floor();
        if x < 0.0 || y < 0.0 || x >= f64::from(self.image_width) || y >= f64::from(self.image_height)
        {
            return None;
        }
        Some(ImagePixel::new(x as u32, y as u32))
    }
}

/// Uniform scale plus offset mapping image space into display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl DisplayTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// `FitMode::None` is the identity. `FitMode::Uniform` uses
    /// `scale = min(view_w / image_w, view_h / image_h)` and centers the drawn
    /// image, which requires a non-empty image and a positive finite view.
    pub fn from_geometry(geometry: DisplayGeometry) -> ProfileResult<Self> {
        match geometry.fit_mode {
            FitMode::None => Ok(Self::IDENTITY),
            FitMode::Uniform => {
                if geometry.image_width == 0 || geometry.image_height == 0 {
                    return Err(ProfileError::InvalidData(
                        "uniform fit requires a non-empty image".to_owned(),
                    ));
                }
                let view_valid = |v: f64| v.is_finite() && v > 0.0;
                if !view_valid(geometry.view_width) || !view_valid(geometry.view_height) {
                    return Err(ProfileError::InvalidData(
                        "uniform fit requires a positive finite view size".to_owned(),
                    ));
                }

                let image_width = f64::from(geometry.image_width);
                let image_height = f64::from(geometry.image_height);
                let scale =
                    (geometry.view_width / image_width).min(geometry.view_height / image_height);
                let drawn_width = image_width * scale;
                let drawn_height = image_height * scale;
                Ok(Self {
                    scale,
                    offset_x: (geometry.view_width - drawn_width) / 2.0,
                    offset_y: (geometry.view_height - drawn_height) / 2.0,
                })
            }
        }
    }

    #[must_use]
    pub fn display_to_image(self, point: Point) -> Point {
        Point::new(
            (point.x - self.offset_x) / self.scale,
            (point.y - self.offset_y) / self.scale,
        )
    }

    #[must_use]
    pub fn image_to_display(self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }
}

/// Maps a display-space point (e.g. a click) into continuous image coordinates.
pub fn display_to_image(point: Point, geometry: DisplayGeometry) -> ProfileResult<Point> {
    Ok(geometry.transform()?.display_to_image(point))
}

/// Maps a continuous image-space point into display space.
pub fn image_to_display(point: Point, geometry: DisplayGeometry) -> ProfileResult<Point> {
    Ok(geometry.transform()?.image_to_display(point))
}
