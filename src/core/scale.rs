use crate::error::{ProfileError, ProfileResult};

/// Affine interpolation of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The result is undefined (non-finite) when `in_min == in_max`; use
/// [`LinearScale`] where the domain is not known to be non-degenerate.
#[must_use]
pub fn map_linear(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Validated value-to-pixel mapping for one chart axis.
///
/// A reversed pixel range (`range_start > range_end`) is how the y axis puts
/// the domain maximum at the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ProfileResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ProfileError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ProfileError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        map_linear(
            value,
            self.domain_start,
            self.domain_end,
            self.range_start,
            self.range_end,
        )
    }

    /// Inverse of [`LinearScale::domain_to_pixel`]; fails on a zero-width range.
    pub fn pixel_to_domain(self, pixel: f64) -> ProfileResult<f64> {
        if self.range_start == self.range_end {
            return Err(ProfileError::InvalidData(
                "cannot invert a scale with a zero-width range".to_owned(),
            ));
        }
        Ok(map_linear(
            pixel,
            self.range_start,
            self.range_end,
            self.domain_start,
            self.domain_end,
        ))
    }
}
