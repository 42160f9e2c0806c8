use crate::core::Viewport;
use crate::error::{ProfileError, ProfileResult};

use super::ProfileChartConfig;

/// Sub-region of the canvas where gridlines and series are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Canvas size and plot rectangle of one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub plot: PlotRect,
}

impl ChartLayout {
    /// Floors the requested canvas size, lifts it to the configured minimum and
    /// subtracts the margins. Sizes past `config.max_canvas` are rejected.
    pub fn resolve(
        canvas_width: f64,
        canvas_height: f64,
        config: &ProfileChartConfig,
    ) -> ProfileResult<Self> {
        let viewport = Viewport::from_layout_size(canvas_width, canvas_height, config.min_canvas)?;
        if viewport.width > config.max_canvas.width || viewport.height > config.max_canvas.height {
            return Err(ProfileError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = config.margins;
        let plot = PlotRect {
            left: margins.left,
            top: margins.top,
            right: f64::from(viewport.width) - margins.right,
            bottom: f64::from(viewport.height) - margins.bottom,
        };

        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return Err(ProfileError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self { viewport, plot })
    }
}
