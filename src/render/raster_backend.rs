use std::fmt;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{
    Blend, draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use tracing::trace;

use crate::core::{PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, FrameStats, LinePrimitive, PolygonPrimitive, RectPrimitive,
    RenderFrame, Renderer, WedgePrimitive,
};

/// Maximum angular step used when flattening arcs into polygons.
const ARC_FLATTEN_STEP_RAD: f64 = std::f64::consts::PI / 90.0;

/// Software raster backend painting into an owned RGBA image.
///
/// Primitives are alpha-blended over whatever is already on the surface; every
/// pass starts by overwriting all pixels with the frame background, so two
/// passes over the same frame produce identical pixels.
pub struct RasterRenderer {
    surface: Blend<RgbaImage>,
    last_stats: FrameStats,
}

impl RasterRenderer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Blend(RgbaImage::new(width, height)),
            last_stats: FrameStats::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &RgbaImage {
        &self.surface.0
    }

    /// Replaces the surface with a blank one of the new size.
    ///
    /// Prior content is discarded; call `ChartRenderer::resize` afterwards to
    /// repaint the last chart.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface = Blend(RgbaImage::new(width, height));
    }

    #[must_use]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        self.surface
            .0
            .save_with_format(path, ImageFormat::Png)
            .map_err(|err| {
                ChartError::Backend(format!("failed to write `{}`: {err}", path.display()))
            })
    }

    fn clear(&mut self, color: Color) {
        let pixel = to_pixel(color);
        for target in self.surface.0.pixels_mut() {
            *target = pixel;
        }
    }

    fn fill_polygon(&mut self, outline: &[PixelPoint], color: Color) {
        let Some(points) = raster_outline(outline) else {
            return;
        };
        draw_polygon_mut(&mut self.surface, &points, to_pixel(color));
    }

    fn draw_polygon(&mut self, polygon: &PolygonPrimitive) {
        self.fill_polygon(&polygon.points, polygon.fill_color);
    }

    fn draw_wedge(&mut self, wedge: WedgePrimitive) {
        self.fill_polygon(&wedge.outline(ARC_FLATTEN_STEP_RAD), wedge.fill_color);
    }

    fn draw_rect(&mut self, rect: RectPrimitive) {
        let left = rect.x.round();
        let top = rect.y.round();
        let width = (rect.x + rect.width).round() - left;
        let height = (rect.y + rect.height).round() - top;
        if width < 1.0 || height < 1.0 {
            return;
        }
        let area = Rect::at(left as i32, top as i32).of_size(width as u32, height as u32);
        draw_filled_rect_mut(&mut self.surface, area, to_pixel(rect.fill_color));
    }

    fn draw_line(&mut self, line: LinePrimitive) {
        if line.stroke_width <= 1.5 {
            draw_line_segment_mut(
                &mut self.surface,
                (line.x1 as f32, line.y1 as f32),
                (line.x2 as f32, line.y2 as f32),
                to_pixel(line.color),
            );
            return;
        }

        let dx = line.x2 - line.x1;
        let dy = line.y2 - line.y1;
        let length = dx.hypot(dy);
        if length == 0.0 {
            return;
        }
        let half = line.stroke_width / 2.0;
        let nx = -dy / length * half;
        let ny = dx / length * half;
        let quad = [
            PixelPoint::new(line.x1 + nx, line.y1 + ny),
            PixelPoint::new(line.x2 + nx, line.y2 + ny),
            PixelPoint::new(line.x2 - nx, line.y2 - ny),
            PixelPoint::new(line.x1 - nx, line.y1 - ny),
        ];
        self.fill_polygon(&quad, line.color);
    }

    fn draw_circle(&mut self, circle: CirclePrimitive) {
        draw_filled_circle_mut(
            &mut self.surface,
            (circle.center_x.round() as i32, circle.center_y.round() as i32),
            circle.radius.round().max(1.0) as i32,
            to_pixel(circle.fill_color),
        );
    }
}

impl fmt::Debug for RasterRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterRenderer")
            .field("width", &self.surface.0.width())
            .field("height", &self.surface.0.height())
            .field("last_stats", &self.last_stats)
            .finish()
    }
}

impl Renderer for RasterRenderer {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.surface.0.width(), self.surface.0.height())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        if frame.viewport != self.viewport() {
            return Err(ChartError::Backend(format!(
                "frame built for {}x{} but surface is {}x{}",
                frame.viewport.width,
                frame.viewport.height,
                self.surface.0.width(),
                self.surface.0.height()
            )));
        }

        self.clear(frame.background);
        for polygon in &frame.polygons {
            self.draw_polygon(polygon);
        }
        for wedge in &frame.wedges {
            self.draw_wedge(*wedge);
        }
        for rect in &frame.rects {
            self.draw_rect(*rect);
        }
        for line in &frame.lines {
            self.draw_line(*line);
        }
        for circle in &frame.circles {
            self.draw_circle(*circle);
        }

        self.last_stats = frame.stats();
        trace!(primitives = self.last_stats.total(), "raster frame painted");
        Ok(())
    }
}

fn to_pixel(color: Color) -> Rgba<u8> {
    Rgba(color.to_rgba8())
}

/// Rounds an outline to integer vertices in the shape `draw_polygon_mut`
/// accepts: no repeated neighbours, first vertex not repeated at the end, and
/// at least three vertices.
fn raster_outline(outline: &[PixelPoint]) -> Option<Vec<Point<i32>>> {
    let mut points: Vec<Point<i32>> = Vec::with_capacity(outline.len());
    for vertex in outline {
        let point = Point::new(vertex.x.round() as i32, vertex.y.round() as i32);
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    (points.len() >= 3).then_some(points)
}
