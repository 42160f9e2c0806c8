use crate::core::LineProfile;
use crate::error::ProfileResult;
use crate::render::{
    CanvasLayerKind, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::axis_ticks::{index_scale, value_scale, x_axis_ticks, y_axis_ticks};
use super::{ChartLayout, ProfileChartConfig, ProfileRenderStyle};

/// Composes the full chart scene for a profile with at least two samples.
pub(super) fn build_profile_frame(
    profile: &LineProfile,
    layout: ChartLayout,
    config: &ProfileChartConfig,
    style: &ProfileRenderStyle,
) -> ProfileResult<RenderFrame> {
    let mut frame = RenderFrame::new(layout.viewport);
    let width = f64::from(layout.viewport.width);
    let height = f64::from(layout.viewport.height);

    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::filled(0.0, 0.0, width, height, style.background_color),
    );

    push_axes(&mut frame, profile.len(), layout, config, style)?;
    push_series(&mut frame, profile, layout, config, style)?;

    // Inset by half a pixel so the hairline covers exactly the outermost pixels.
    frame.push_rect(
        CanvasLayerKind::Border,
        RectPrimitive::outlined(
            0.5,
            0.5,
            width - 1.0,
            height - 1.0,
            config.border_stroke_width,
            style.border_color,
        ),
    );

    Ok(frame)
}

fn push_axes(
    frame: &mut RenderFrame,
    sample_count: usize,
    layout: ChartLayout,
    config: &ProfileChartConfig,
    style: &ProfileRenderStyle,
) -> ProfileResult<()> {
    let plot = layout.plot;
    let axis_line = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, config.axis_stroke_width, style.axis_line_color)
    };
    let grid_line = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, config.grid_stroke_width, style.grid_line_color)
    };
    let label = |text: String, x, y, h_align, v_align| {
        TextPrimitive::new(
            text,
            x,
            y,
            config.label_font_size_px,
            style.axis_label_color,
            h_align,
            v_align,
        )
    };

    frame.push_line(
        CanvasLayerKind::Axis,
        axis_line(plot.left, plot.bottom, plot.right, plot.bottom),
    );
    frame.push_line(
        CanvasLayerKind::Axis,
        axis_line(plot.left, plot.top, plot.left, plot.bottom),
    );

    for tick in y_axis_ticks(&config.y_ticks, plot)? {
        let y = tick.position_px;
        frame.push_line(CanvasLayerKind::Grid, grid_line(plot.left, y, plot.right, y));
        frame.push_line(
            CanvasLayerKind::Axis,
            axis_line(plot.left - config.tick_length_px, y, plot.left, y),
        );
        frame.push_text(
            CanvasLayerKind::Axis,
            label(
                tick.label,
                plot.left - config.y_label_gap_px,
                y,
                TextHAlign::Right,
                TextVAlign::Center,
            ),
        );
    }

    for tick in x_axis_ticks(sample_count, config.x_target_ticks, plot)? {
        let x = tick.position_px;
        frame.push_line(CanvasLayerKind::Grid, grid_line(x, plot.top, x, plot.bottom));
        frame.push_line(
            CanvasLayerKind::Axis,
            axis_line(x, plot.bottom, x, plot.bottom + config.tick_length_px),
        );
        frame.push_text(
            CanvasLayerKind::Axis,
            label(
                tick.label,
                x,
                plot.bottom + config.x_label_gap_px,
                TextHAlign::Center,
                TextVAlign::Top,
            ),
        );
    }

    Ok(())
}

fn push_series(
    frame: &mut RenderFrame,
    profile: &LineProfile,
    layout: ChartLayout,
    config: &ProfileChartConfig,
    style: &ProfileRenderStyle,
) -> ProfileResult<()> {
    let x_scale = index_scale(profile.len(), layout.plot)?;
    let y_scale = value_scale(layout.plot)?;

    for series in profile.series() {
        let points = series
            .samples
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                (
                    x_scale.domain_to_pixel(index as f64),
                    y_scale.domain_to_pixel(f64::from(*sample)),
                )
            })
            .collect();
        frame.push_polyline(
            CanvasLayerKind::Series,
            PolylinePrimitive::new(
                points,
                config.series_stroke_width,
                style.series_color(series.channel),
            ),
        );
    }

    Ok(())
}
