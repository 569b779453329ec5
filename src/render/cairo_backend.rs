use std::f64::consts::TAU;

use cairo::{Context, Format, ImageSurface, Operator};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FrameStats, RenderFrame, Renderer};

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: FrameStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            last_stats: FrameStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Replaces the offscreen surface with a blank one of the new size.
    pub fn resize_surface(&mut self, width: i32, height: i32) -> ChartResult<()> {
        self.surface = create_surface(width, height)?;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Copies the surface bytes (premultiplied native-endian ARGB32, row stride
    /// from `ImageSurface::stride`).
    pub fn pixel_data(&mut self) -> ChartResult<Vec<u8>> {
        self.surface.flush();
        let data = self
            .surface
            .data()
            .map_err(|err| ChartError::Backend(format!("failed to borrow surface data: {err}")))?;
        Ok(data.to_vec())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        context.set_operator(Operator::Source);
        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(Operator::Over);

        for polygon in &frame.polygons {
            let mut vertices = polygon.points.iter();
            if let Some(first) = vertices.next() {
                context.new_path();
                context.move_to(first.x, first.y);
                for vertex in vertices {
                    context.line_to(vertex.x, vertex.y);
                }
                context.close_path();
                apply_color(context, polygon.fill_color);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            }
        }

        for wedge in &frame.wedges {
            let end = wedge.start_angle + wedge.sweep;
            context.new_path();
            context.arc(
                wedge.center_x,
                wedge.center_y,
                wedge.outer_radius,
                wedge.start_angle,
                end,
            );
            if wedge.inner_radius > 0.0 {
                context.arc_negative(
                    wedge.center_x,
                    wedge.center_y,
                    wedge.inner_radius,
                    end,
                    wedge.start_angle,
                );
            } else {
                context.line_to(wedge.center_x, wedge.center_y);
            }
            context.close_path();
            apply_color(context, wedge.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill wedge", err))?;
        }

        for rect in &frame.rects {
            context.new_path();
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }

        for line in &frame.lines {
            context.new_path();
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
        }

        for circle in &frame.circles {
            context.new_path();
            context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
            apply_color(context, circle.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
        }

        self.last_stats = frame.stats();
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            u32::try_from(self.surface.width()).unwrap_or(0),
            u32::try_from(self.surface.height()).unwrap_or(0),
        )
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidViewport {
            width: u32::try_from(width).unwrap_or(0),
            height: u32::try_from(height).unwrap_or(0),
        });
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
