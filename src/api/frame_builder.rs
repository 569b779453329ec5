use tracing::trace;

use crate::core::{
    PixelPoint, Viewport, grid_line_ys, project_bars, project_line, project_radar, project_wedges,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    WedgePrimitive,
};

use super::validation::validate_chart_config;
use super::{ChartConfig, ChartKind, Dataset, RenderStyle};

/// Builds the complete draw-command list for one chart pass.
///
/// This is a pure function of its inputs: the same config, style and viewport
/// always produce the same frame. Malformed configs and empty surfaces are
/// reported as errors; degenerate values (flat series, zero totals, zero
/// maxima) produce well-defined fallback frames.
pub fn build_render_frame(
    config: &ChartConfig,
    style: &RenderStyle,
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let dataset = validate_chart_config(config)?;
    let series = SeriesStyle::resolve(dataset, style);

    let mut frame = RenderFrame::new(viewport, style.background);
    match config.kind {
        ChartKind::Line => push_line_chart(&mut frame, dataset, style, &series)?,
        ChartKind::Radar => push_radar_chart(&mut frame, dataset, style, &series)?,
        ChartKind::Pie => push_pie_chart(&mut frame, dataset, style, &series, 0.0)?,
        ChartKind::Doughnut => {
            push_pie_chart(&mut frame, dataset, style, &series, style.doughnut_cutout)?;
        }
        ChartKind::Bar => push_bar_chart(&mut frame, dataset, style, &series)?,
    }

    trace!(
        kind = config.kind.as_str(),
        primitives = frame.stats().total(),
        "built render frame"
    );
    Ok(frame)
}

/// Dataset style with every unset attribute resolved against the render style.
struct SeriesStyle<'a> {
    stroke_color: Color,
    stroke_width: f64,
    point_radius: f64,
    point_color: Color,
    fill_colors: &'a [Color],
}

impl<'a> SeriesStyle<'a> {
    fn resolve(dataset: &'a Dataset, style: &RenderStyle) -> Self {
        let stroke_color = dataset
            .style
            .stroke_color
            .unwrap_or(style.default_stroke_color);
        Self {
            stroke_color,
            stroke_width: dataset
                .style
                .stroke_width
                .unwrap_or(style.default_stroke_width),
            point_radius: dataset
                .style
                .point_radius
                .unwrap_or(style.default_point_radius),
            point_color: dataset.style.point_color.unwrap_or(stroke_color),
            fill_colors: &dataset.style.fill_colors,
        }
    }

    /// Positional fill, cycling through the dataset fills and then the palette.
    fn fill_at(&self, index: usize, style: &RenderStyle) -> Color {
        if self.fill_colors.is_empty() {
            style.palette_color(index)
        } else {
            self.fill_colors[index % self.fill_colors.len()]
        }
    }
}

fn push_line_chart(
    frame: &mut RenderFrame,
    dataset: &Dataset,
    style: &RenderStyle,
    series: &SeriesStyle<'_>,
) -> ChartResult<()> {
    let area = frame.viewport.plot_area(style.padding_px);
    for y in grid_line_ys(area, style.grid_divisions) {
        frame.lines.push(LinePrimitive::new(
            area.left,
            y,
            area.right(),
            y,
            style.grid_line_width,
            style.grid_color,
        ));
    }

    let geometry = project_line(&dataset.values, area)?;
    for segment in &geometry.segments {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            series.stroke_width,
            series.stroke_color,
        ));
    }
    push_points(frame, &geometry.points, series);
    Ok(())
}

fn push_radar_chart(
    frame: &mut RenderFrame,
    dataset: &Dataset,
    style: &RenderStyle,
    series: &SeriesStyle<'_>,
) -> ChartResult<()> {
    let area = frame.viewport.plot_area(style.padding_px);
    let geometry = project_radar(&dataset.values, area, style.grid_divisions)?;

    if geometry.spokes.len() >= 3 {
        for ring in &geometry.rings {
            push_closed_outline(frame, ring, style.grid_line_width, style.grid_color);
        }
    }
    for spoke in &geometry.spokes {
        frame.lines.push(LinePrimitive::new(
            geometry.center.x,
            geometry.center.y,
            spoke.x,
            spoke.y,
            style.grid_line_width,
            style.grid_color,
        ));
    }

    if geometry.points.len() >= 3 {
        if let Some(fill) = series.fill_colors.first() {
            frame.polygons.push(PolygonPrimitive {
                points: geometry.points.clone(),
                fill_color: *fill,
            });
        }
    }
    push_closed_outline(
        frame,
        &geometry.points,
        series.stroke_width,
        series.stroke_color,
    );
    push_points(frame, &geometry.points, series);
    Ok(())
}

fn push_pie_chart(
    frame: &mut RenderFrame,
    dataset: &Dataset,
    style: &RenderStyle,
    series: &SeriesStyle<'_>,
    cutout: f64,
) -> ChartResult<()> {
    let center = frame.viewport.center();
    let radius = (center.x.min(center.y) - style.pie_inset_px).max(0.0);
    let wedges = project_wedges(&dataset.values, center, radius, radius * cutout)?;
    for wedge in wedges {
        frame.wedges.push(WedgePrimitive {
            center_x: wedge.center.x,
            center_y: wedge.center.y,
            inner_radius: wedge.inner_radius,
            outer_radius: wedge.outer_radius,
            start_angle: wedge.start_angle,
            sweep: wedge.sweep,
            fill_color: series.fill_at(wedge.index, style),
        });
    }
    Ok(())
}

fn push_bar_chart(
    frame: &mut RenderFrame,
    dataset: &Dataset,
    style: &RenderStyle,
    series: &SeriesStyle<'_>,
) -> ChartResult<()> {
    let area = frame.viewport.plot_area(style.padding_px);
    let bars = project_bars(&dataset.values, area, style.bar_fill_ratio)?;
    for (index, bar) in bars.iter().enumerate() {
        if bar.height <= 0.0 || bar.width <= 0.0 {
            continue;
        }
        frame.rects.push(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            series.fill_at(index, style),
        ));
    }
    Ok(())
}

fn push_points(frame: &mut RenderFrame, points: &[PixelPoint], series: &SeriesStyle<'_>) {
    if series.point_radius <= 0.0 {
        return;
    }
    frame.circles.extend(points.iter().map(|point| {
        CirclePrimitive::new(point.x, point.y, series.point_radius, series.point_color)
    }));
}

/// Pushes segments joining consecutive vertices, closing the loop when there
/// are at least three.
fn push_closed_outline(frame: &mut RenderFrame, vertices: &[PixelPoint], width: f64, color: Color) {
    for pair in vertices.windows(2) {
        frame.lines.push(LinePrimitive::new(
            pair[0].x, pair[0].y, pair[1].x, pair[1].y, width, color,
        ));
    }
    if vertices.len() < 3 {
        return;
    }
    if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
        frame
            .lines
            .push(LinePrimitive::new(last.x, last.y, first.x, first.y, width, color));
    }
}
