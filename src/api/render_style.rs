use crate::core::SeriesChannel;
use crate::error::ProfileResult;
use crate::render::Color;

/// Colors of every chart element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileRenderStyle {
    pub background_color: Color,
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub axis_label_color: Color,
    pub border_color: Color,
    pub gray_series_color: Color,
    pub red_series_color: Color,
    pub green_series_color: Color,
    pub blue_series_color: Color,
}

impl Default for ProfileRenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            grid_line_color: Color::from_rgb8(235, 235, 235),
            axis_line_color: Color::BLACK,
            axis_label_color: Color::BLACK,
            border_color: Color::from_rgb8(128, 128, 128),
            gray_series_color: Color::BLACK,
            red_series_color: Color::from_rgb8(255, 0, 0),
            green_series_color: Color::from_rgb8(0, 128, 0),
            blue_series_color: Color::from_rgb8(0, 0, 255),
        }
    }
}

impl ProfileRenderStyle {
    #[must_use]
    pub fn series_color(&self, channel: SeriesChannel) -> Color {
        match channel {
            SeriesChannel::Gray => self.gray_series_color,
            SeriesChannel::Red => self.red_series_color,
            SeriesChannel::Green => self.green_series_color,
            SeriesChannel::Blue => self.blue_series_color,
        }
    }

    pub fn validate(&self) -> ProfileResult<()> {
        for color in [
            self.background_color,
            self.grid_line_color,
            self.axis_line_color,
            self.axis_label_color,
            self.border_color,
            self.gray_series_color,
            self.red_series_color,
            self.green_series_color,
            self.blue_series_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
