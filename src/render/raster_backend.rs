use std::fmt::Display;

use image::{DynamicImage, RgbImage, RgbaImage};
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, DrawingArea, IntoDrawingArea, IntoFont, PathElement, RGBAColor, Rectangle,
    ShapeStyle,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::error::{ProfileError, ProfileResult};
use crate::render::label_font::{LABEL_FONT_FAMILY, label_font_available};
use crate::render::{
    Color, LayerPrimitives, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, TextVAlign,
};

type RasterArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub texts_drawn: usize,
    pub texts_skipped: usize,
}

/// Software renderer drawing frames with the plotters bitmap backend.
///
/// Output is an opaque 8-bit RGBA image. Strokes snap to whole device pixels,
/// so fractional widths round to the nearest integer width.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    image: RgbaImage,
    clear_color: Color,
    last_stats: RasterRenderStats,
}

impl RasterRenderer {
    pub fn new(width: u32, height: u32) -> ProfileResult<Self> {
        raster_len(width, height, 4)?;
        Ok(Self {
            image: RgbaImage::new(width, height),
            clear_color: Color::WHITE,
            last_stats: RasterRenderStats::default(),
        })
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ProfileResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> RasterRenderStats {
        self.last_stats
    }
}

impl Renderer for RasterRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ProfileResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        let (width, height) = (frame.viewport.width, frame.viewport.height);
        raster_len(width, height, 4)?;
        let mut rgb = vec![0_u8; raster_len(width, height, 3)?];
        let labels = label_font_available();
        let mut stats = RasterRenderStats::default();
        {
            let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
            root.fill(&to_plotters_color(self.clear_color))
                .map_err(backend_error)?;
            for layer in &frame.layers {
                paint_layer(&root, layer, labels, &mut stats)?;
            }
            root.present().map_err(backend_error)?;
        }

        let rgb = RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
            ProfileError::InvalidData("raster buffer does not match the viewport".to_owned())
        })?;
        self.image = DynamicImage::ImageRgb8(rgb).into_rgba8();
        if stats.texts_skipped > 0 {
            debug!(skipped = stats.texts_skipped, "labels skipped without a label font");
        }
        self.last_stats = stats;
        Ok(())
    }
}

fn paint_layer(
    root: &RasterArea<'_>,
    layer: &LayerPrimitives,
    labels: bool,
    stats: &mut RasterRenderStats,
) -> ProfileResult<()> {
    for rect in &layer.rects {
        paint_rect(root, *rect)?;
        stats.rects_drawn += 1;
    }
    for line in &layer.lines {
        paint_line(root, *line)?;
        stats.lines_drawn += 1;
    }
    for polyline in &layer.polylines {
        paint_polyline(root, polyline)?;
        stats.polylines_drawn += 1;
    }
    for text in &layer.texts {
        if labels && paint_text(root, text) {
            stats.texts_drawn += 1;
        } else {
            stats.texts_skipped += 1;
        }
    }
    Ok(())
}

fn paint_rect(root: &RasterArea<'_>, rect: RectPrimitive) -> ProfileResult<()> {
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    if let Some(fill_color) = rect.fill_color {
        // Fill covers the pixels whose centers lie inside the rectangle.
        let top_left = (rect.x.round() as i32, rect.y.round() as i32);
        let bottom_right = (right.round() as i32 - 1, bottom.round() as i32 - 1);
        if bottom_right.0 >= top_left.0 && bottom_right.1 >= top_left.1 {
            let style = ShapeStyle {
                color: to_plotters_color(fill_color),
                filled: true,
                stroke_width: 1,
            };
            root.draw(&Rectangle::new([top_left, bottom_right], style))
                .map_err(backend_error)?;
        }
    }

    if rect.border_width > 0.0 {
        let style = stroke_style(rect.border_color, rect.border_width);
        let corners = [device_point(rect.x, rect.y), device_point(right, bottom)];
        root.draw(&Rectangle::new(corners, style))
            .map_err(backend_error)?;
    }
    Ok(())
}

fn paint_line(root: &RasterArea<'_>, line: LinePrimitive) -> ProfileResult<()> {
    let points = vec![device_point(line.x1, line.y1), device_point(line.x2, line.y2)];
    root.draw(&PathElement::new(points, stroke_style(line.color, line.stroke_width)))
        .map_err(backend_error)
}

fn paint_polyline(root: &RasterArea<'_>, polyline: &PolylinePrimitive) -> ProfileResult<()> {
    let mut points: Vec<(i32, i32)> = Vec::with_capacity(polyline.points.len());
    for (x, y) in &polyline.points {
        let point = device_point(*x, *y);
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    let style = stroke_style(polyline.color, polyline.stroke_width);
    root.draw(&PathElement::new(points, style))
        .map_err(backend_error)
}

/// Draws one label; returns `false` when the font backend could not render it.
fn paint_text(root: &RasterArea<'_>, text: &TextPrimitive) -> bool {
    let h_pos = match text.h_align {
        TextHAlign::Left => HPos::Left,
        TextHAlign::Center => HPos::Center,
        TextHAlign::Right => HPos::Right,
    };
    let v_pos = match text.v_align {
        TextVAlign::Top => VPos::Top,
        TextVAlign::Center => VPos::Center,
        TextVAlign::Bottom => VPos::Bottom,
    };
    let color = to_plotters_color(text.color);
    let style = (LABEL_FONT_FAMILY, text.font_size_px)
        .into_font()
        .color(&color)
        .pos(Pos::new(h_pos, v_pos));

    match root.draw_text(&text.text, &style, device_point(text.x, text.y)) {
        Ok(()) => true,
        Err(err) => {
            debug!(text = %text.text, error = %err, "label not drawn");
            false
        }
    }
}

fn stroke_style(color: Color, width: f64) -> ShapeStyle {
    ShapeStyle {
        color: to_plotters_color(color),
        filled: false,
        stroke_width: width.round().clamp(1.0, f64::from(u16::MAX)) as u32,
    }
}

/// Device pixel containing the frame-space point.
fn device_point(x: f64, y: f64) -> (i32, i32) {
    let limit = f64::from(i32::MAX / 2);
    (
        x.floor().clamp(-limit, limit) as i32,
        y.floor().clamp(-limit, limit) as i32,
    )
}

fn to_plotters_color(color: Color) -> RGBAColor {
    let [red, green, blue, _] = color.to_rgba8();
    RGBAColor(red, green, blue, color.alpha)
}

/// Byte length of a `width` x `height` buffer with `channels` bytes per pixel.
fn raster_len(width: u32, height: u32, channels: usize) -> ProfileResult<usize> {
    let invalid = ProfileError::InvalidViewport { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or(invalid)
}

fn backend_error(err: impl Display) -> ProfileError {
    ProfileError::InvalidData(format!("raster backend failed: {err}"))
}
