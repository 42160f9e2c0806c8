use image::RgbaImage;
use tracing::debug;

use crate::core::LineProfile;
use crate::error::ProfileResult;
use crate::render::{RasterRenderer, RenderFrame, Renderer};

use super::render_frame_builder::build_profile_frame;
use super::{ChartLayout, ProfileChartConfig, ProfileRenderStyle};

/// Renders line profiles as axis-annotated line charts.
///
/// The chart holds only configuration; every call works on the profile it is
/// given and produces a fresh frame or raster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileChart {
    config: ProfileChartConfig,
    style: ProfileRenderStyle,
}

impl ProfileChart {
    pub fn new(config: ProfileChartConfig, style: ProfileRenderStyle) -> ProfileResult<Self> {
        config.validate()?;
        style.validate()?;
        Ok(Self { config, style })
    }

    #[must_use]
    pub fn config(&self) -> &ProfileChartConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> &ProfileRenderStyle {
        &self.style
    }

    pub fn layout(&self, canvas_width: f64, canvas_height: f64) -> ProfileResult<ChartLayout> {
        ChartLayout::resolve(canvas_width, canvas_height, &self.config)
    }

    /// Builds the chart scene, or `None` when the profile has at most one
    /// sample and there is nothing meaningful to plot.
    pub fn build_frame(
        &self,
        profile: &LineProfile,
        canvas_width: f64,
        canvas_height: f64,
    ) -> ProfileResult<Option<RenderFrame>> {
        let sample_count = profile.len();
        if sample_count <= 1 {
            debug!(sample_count, "skip chart for degenerate profile");
            return Ok(None);
        }

        let layout = self.layout(canvas_width, canvas_height)?;
        debug!(
            sample_count,
            channels = ?profile.channels(),
            width = layout.viewport.width,
            height = layout.viewport.height,
            "build profile chart frame"
        );
        build_profile_frame(profile, layout, &self.config, &self.style).map(Some)
    }

    /// Renders through an arbitrary backend; returns whether anything was drawn.
    pub fn render_with<R: Renderer>(
        &self,
        renderer: &mut R,
        profile: &LineProfile,
        canvas_width: f64,
        canvas_height: f64,
    ) -> ProfileResult<bool> {
        match self.build_frame(profile, canvas_width, canvas_height)? {
            Some(frame) => {
                renderer.render(&frame)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Rasterizes the chart into a new RGBA image sized to the resolved canvas.
    pub fn render(
        &self,
        profile: &LineProfile,
        canvas_width: f64,
        canvas_height: f64,
    ) -> ProfileResult<Option<RgbaImage>> {
        let Some(frame) = self.build_frame(profile, canvas_width, canvas_height)? else {
            return Ok(None);
        };
        let mut renderer = RasterRenderer::new(frame.viewport.width, frame.viewport.height)?;
        renderer.set_clear_color(self.style.background_color)?;
        renderer.render(&frame)?;
        Ok(Some(renderer.into_image()))
    }
}

/// Renders `profile` with the default chart configuration and style.
pub fn render_profile(
    profile: &LineProfile,
    canvas_width: f64,
    canvas_height: f64,
) -> ProfileResult<Option<RgbaImage>> {
    ProfileChart::default().render(profile, canvas_width, canvas_height)
}
