#![cfg(feature = "raster-backend")]

use std::f64::consts::FRAC_PI_2;

use dash_charts::ChartError;
use dash_charts::api::{ChartConfig, ChartKind, ChartRenderer, Dataset, RenderOutcome, presets};
use dash_charts::core::{PixelPoint, Viewport};
use dash_charts::render::{
    CirclePrimitive, Color, FrameStats, LinePrimitive, PolygonPrimitive, RasterRenderer,
    RectPrimitive, RenderFrame, Renderer, WedgePrimitive,
};

fn raster_chart(width: u32, height: u32) -> ChartRenderer<RasterRenderer> {
    ChartRenderer::new(RasterRenderer::new(width, height))
}

#[test]
fn rendering_same_config_twice_is_pixel_identical() {
    for config in presets::dashboard_presets().into_values() {
        let mut chart = raster_chart(400, 300);
        chart.render(config.clone()).expect("first render");
        let first = chart.backend().surface().clone();

        chart.render(config).expect("second render");
        assert_eq!(first.as_raw(), chart.backend().surface().as_raw());
    }
}

#[test]
fn zero_total_pie_leaves_fully_transparent_surface() {
    let mut chart = raster_chart(120, 120);
    chart.render(presets::assignment_status_chart()).expect("prime surface");
    assert!(chart.backend().surface().pixels().any(|pixel| pixel.0[3] > 0));

    let empty = ChartConfig::new(ChartKind::Pie, ["x", "y", "z"])
        .with_dataset(Dataset::new(vec![0.0, 0.0, 0.0]));
    let outcome = chart.render(empty).expect("render");
    assert!(outcome.is_drawn());
    assert!(chart.backend().surface().pixels().all(|pixel| pixel.0 == [0, 0, 0, 0]));
}

#[test]
fn flat_line_paints_mid_height_row() {
    let mut chart = raster_chart(400, 300);
    let config = ChartConfig::new(ChartKind::Line, ["a", "b", "c", "d"])
        .with_dataset(Dataset::new(vec![5.0, 5.0, 5.0, 5.0]));
    chart.render(config).expect("render");

    let surface = chart.backend().surface();
    assert_eq!(surface.get_pixel(100, 150).0[3], 255);
    assert_eq!(surface.get_pixel(300, 150).0[3], 255);
    assert_eq!(surface.get_pixel(100, 100).0[3], 0);
    assert_eq!(surface.get_pixel(100, 200).0[3], 0);
}

#[test]
fn pie_wedges_fill_with_their_colors_and_doughnut_keeps_hole() {
    let mut chart = raster_chart(400, 300);
    chart.render(presets::assignment_status_chart()).expect("pie");
    let inside_first_wedge = chart.backend().surface().get_pixel(150, 150).0;
    assert_eq!(inside_first_wedge[3], 255);
    assert!(inside_first_wedge[1] > inside_first_wedge[0]);
    assert_eq!(chart.backend().surface().get_pixel(5, 5).0[3], 0);

    chart.render(presets::grade_breakdown_chart()).expect("doughnut");
    assert_eq!(chart.backend().surface().get_pixel(200, 150).0[3], 0);
    assert_eq!(chart.backend().surface().get_pixel(210, 50).0[3], 255);
}

#[test]
fn tallest_bar_spans_plot_height() {
    let mut chart = raster_chart(400, 300);
    chart.render(presets::grade_distribution_chart()).expect("render");
    let surface = chart.backend().surface();

    let column = 70;
    assert_eq!(surface.get_pixel(column, 41).0[3], 255);
    assert_eq!(surface.get_pixel(column, 259).0[3], 255);
    assert_eq!(surface.get_pixel(column, 30).0[3], 0);
    assert_eq!(surface.get_pixel(column, 270).0[3], 0);
}

#[test]
fn resize_surface_then_redraw_at_new_size() {
    let mut chart = raster_chart(400, 300);
    chart.render(presets::study_progress_chart()).expect("render");

    chart.backend_mut().resize_surface(200, 120);
    assert!(chart.backend().surface().pixels().all(|pixel| pixel.0[3] == 0));

    let outcome = chart.resize().expect("resize");
    assert!(outcome.is_drawn());
    assert_eq!(chart.backend().viewport(), Viewport::new(200, 120));
    assert!(chart.backend().surface().pixels().any(|pixel| pixel.0[3] == 255));
}

#[test]
fn zero_sized_surface_skips_render() {
    let mut chart = raster_chart(0, 0);
    let outcome = chart.render(presets::attendance_chart()).expect("no backend error");
    assert_eq!(
        outcome,
        RenderOutcome::Skipped(ChartError::InvalidViewport {
            width: 0,
            height: 0
        })
    );
}

#[test]
fn surface_exports_png() {
    let mut chart = raster_chart(160, 120);
    chart.render(presets::study_time_chart()).expect("render");

    let path = std::env::temp_dir().join(format!("dash-charts-radar-{}.png", std::process::id()));
    chart.backend().save_png(&path).expect("save png");
    let decoded = image::open(&path).expect("decode png").to_rgba8();
    assert_eq!(decoded.dimensions(), (160, 120));
    assert_eq!(decoded.as_raw(), chart.backend().surface().as_raw());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn hand_built_frame_paints_every_primitive_kind() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let frame = RenderFrame::new(Viewport::new(100, 100), Color::TRANSPARENT)
        .with_polygon(PolygonPrimitive {
            points: vec![
                PixelPoint::new(60.0, 10.0),
                PixelPoint::new(90.0, 10.0),
                PixelPoint::new(75.0, 40.0),
            ],
            fill_color: red,
        })
        .with_wedge(WedgePrimitive {
            center_x: 25.0,
            center_y: 75.0,
            inner_radius: 0.0,
            outer_radius: 20.0,
            start_angle: 0.0,
            sweep: FRAC_PI_2,
            fill_color: red,
        })
        .with_rect(RectPrimitive::new(10.0, 10.0, 20.0, 20.0, red))
        .with_line(LinePrimitive::new(50.0, 60.0, 90.0, 60.0, 3.0, red))
        .with_circle(CirclePrimitive::new(75.0, 85.0, 5.0, red));

    let mut renderer = RasterRenderer::new(100, 100);
    renderer.render(&frame).expect("render");
    assert_eq!(
        renderer.last_stats(),
        FrameStats {
            polygons: 1,
            wedges: 1,
            rects: 1,
            lines: 1,
            circles: 1,
        }
    );

    let surface = renderer.surface();
    assert_eq!(surface.get_pixel(75, 20).0, [255, 0, 0, 255]);
    assert_eq!(surface.get_pixel(32, 82).0, [255, 0, 0, 255]);
    assert_eq!(surface.get_pixel(18, 68).0[3], 0);
    assert_eq!(surface.get_pixel(20, 20).0, [255, 0, 0, 255]);
    assert_eq!(surface.get_pixel(70, 60).0, [255, 0, 0, 255]);
    assert_eq!(surface.get_pixel(75, 85).0, [255, 0, 0, 255]);
    assert_eq!(surface.get_pixel(50, 90).0[3], 0);
}
