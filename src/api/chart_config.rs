use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ProfileError, ProfileResult};

/// Space reserved around the plot rectangle for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotMargins {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self::new(44.0, 10.0, 10.0, 28.0)
    }
}

/// Geometry constants of the profile chart.
///
/// Serializable so hosts can keep chart tuning in their own settings files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileChartConfig {
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_min_canvas")]
    pub min_canvas: Viewport,
    /// Largest canvas accepted; bigger requests fail instead of allocating.
    #[serde(default = "default_max_canvas")]
    pub max_canvas: Viewport,
    #[serde(default = "default_y_ticks")]
    pub y_ticks: Vec<u8>,
    #[serde(default = "default_x_target_ticks")]
    pub x_target_ticks: u32,
    #[serde(default = "default_tick_length_px")]
    pub tick_length_px: f64,
    #[serde(default = "default_y_label_gap_px")]
    pub y_label_gap_px: f64,
    #[serde(default = "default_x_label_gap_px")]
    pub x_label_gap_px: f64,
    #[serde(default = "default_series_stroke_width")]
    pub series_stroke_width: f64,
    #[serde(default = "default_hairline_width")]
    pub grid_stroke_width: f64,
    #[serde(default = "default_hairline_width")]
    pub axis_stroke_width: f64,
    #[serde(default = "default_hairline_width")]
    pub border_stroke_width: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
}

impl Default for ProfileChartConfig {
    fn default() -> Self {
        Self {
            margins: PlotMargins::default(),
            min_canvas: default_min_canvas(),
            max_canvas: default_max_canvas(),
            y_ticks: default_y_ticks(),
            x_target_ticks: default_x_target_ticks(),
            tick_length_px: default_tick_length_px(),
            y_label_gap_px: default_y_label_gap_px(),
            x_label_gap_px: default_x_label_gap_px(),
            series_stroke_width: default_series_stroke_width(),
            grid_stroke_width: default_hairline_width(),
            axis_stroke_width: default_hairline_width(),
            border_stroke_width: default_hairline_width(),
            label_font_size_px: default_label_font_size_px(),
        }
    }
}

impl ProfileChartConfig {
    /// Sets the plot margins.
    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the smallest canvas the chart will render into.
    #[must_use]
    pub fn with_min_canvas(mut self, min_canvas: Viewport) -> Self {
        self.min_canvas = min_canvas;
        self
    }

    /// Sets the largest canvas the chart will render into.
    #[must_use]
    pub fn with_max_canvas(mut self, max_canvas: Viewport) -> Self {
        self.max_canvas = max_canvas;
        self
    }

    /// Sets the sample values that get a y gridline and label.
    #[must_use]
    pub fn with_y_ticks(mut self, y_ticks: Vec<u8>) -> Self {
        self.y_ticks = y_ticks;
        self
    }

    /// Sets the approximate number of labeled x positions.
    #[must_use]
    pub fn with_x_target_ticks(mut self, x_target_ticks: u32) -> Self {
        self.x_target_ticks = x_target_ticks;
        self
    }

    /// Sets the stroke width of plotted series.
    #[must_use]
    pub fn with_series_stroke_width(mut self, width: f64) -> Self {
        self.series_stroke_width = width;
        self
    }

    pub fn validate(&self) -> ProfileResult<()> {
        let margins = self.margins;
        for (name, value) in [
            ("left", margins.left),
            ("right", margins.right),
            ("top", margins.top),
            ("bottom", margins.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidData(format!(
                    "plot margin `{name}` must be finite and >= 0"
                )));
            }
        }

        if !self.min_canvas.is_valid()
            || f64::from(self.min_canvas.width) <= margins.horizontal()
            || f64::from(self.min_canvas.height) <= margins.vertical()
        {
            return Err(ProfileError::InvalidViewport {
                width: self.min_canvas.width,
                height: self.min_canvas.height,
            });
        }

        if self.max_canvas.width < self.min_canvas.width
            || self.max_canvas.height < self.min_canvas.height
        {
            return Err(ProfileError::InvalidViewport {
                width: self.max_canvas.width,
                height: self.max_canvas.height,
            });
        }

        if self.y_ticks.is_empty() {
            return Err(ProfileError::InvalidData(
                "at least one y tick is required".to_owned(),
            ));
        }
        if self.x_target_ticks == 0 {
            return Err(ProfileError::InvalidData(
                "x target tick count must be > 0".to_owned(),
            ));
        }

        for (name, value) in [
            ("tick length", self.tick_length_px),
            ("y label gap", self.y_label_gap_px),
            ("x label gap", self.x_label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("series stroke width", self.series_stroke_width),
            ("grid stroke width", self.grid_stroke_width),
            ("axis stroke width", self.axis_stroke_width),
            ("border stroke width", self.border_stroke_width),
            ("label font size", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ProfileError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ProfileResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ProfileError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ProfileResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ProfileError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_min_canvas() -> Viewport {
    Viewport::new(400, 240)
}

fn default_max_canvas() -> Viewport {
    Viewport::new(8192, 8192)
}

fn default_y_ticks() -> Vec<u8> {
    vec![0, 64, 128, 192, 255]
}

fn default_x_target_ticks() -> u32 {
    10
}

fn default_tick_length_px() -> f64 {
    4.0
}

fn default_y_label_gap_px() -> f64 {
    8.0
}

fn default_x_label_gap_px() -> f64 {
    6.0
}

fn default_series_stroke_width() -> f64 {
    1.5
}

fn default_hairline_width() -> f64 {
    1.0
}

fn default_label_font_size_px() -> f64 {
    11.0
}
