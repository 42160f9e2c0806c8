use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

/// Integer canvas size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Floors a host-provided layout size and raises it to `minimum`.
    ///
    /// Hosts usually report fractional layout sizes (and may report zero before
    /// the first layout pass), so anything smaller than the minimum is lifted to it.
    pub fn from_layout_size(width: f64, height: f64, minimum: Viewport) -> ProfileResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ProfileError::InvalidData(
                "canvas size must be finite".to_owned(),
            ));
        }

        let floor_to_u32 = |value: f64| value.floor().clamp(0.0, f64::from(u32::MAX)) as u32;
        Ok(Self {
            width: floor_to_u32(width).max(minimum.width),
            height: floor_to_u32(height).max(minimum.height),
        })
    }
}

/// A 2D point in either display space or image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Integer pixel coordinate inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImagePixel {
    pub x: u32,
    pub y: u32,
}

impl ImagePixel {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One pixel in the buffer's native B,G,R,A channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bgra {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub alpha: u8,
}

impl Bgra {
    #[must_use]
    pub const fn new(blue: u8, green: u8, red: u8, alpha: u8) -> Self {
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }

    /// Perceptual luminance of the color channels; alpha is ignored.
    #[must_use]
    pub fn luminance(self) -> u8 {
        super::primitives::luminance(self.red, self.green, self.blue)
    }
}
