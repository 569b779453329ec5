use dash_charts::ChartError;
use dash_charts::api::{
    ChartConfig, ChartKind, ChartRenderer, Dataset, RenderOutcome, RenderStyle, presets,
};
use dash_charts::core::Viewport;
use dash_charts::render::{NullRenderer, Renderer};

fn renderer(width: u32, height: u32) -> ChartRenderer<NullRenderer> {
    ChartRenderer::new(NullRenderer::new(Viewport::new(width, height)))
}

#[test]
fn render_stores_config_and_paints_frame() {
    let mut chart = renderer(400, 300);
    let outcome = chart.render(presets::study_progress_chart()).expect("render");

    let RenderOutcome::Drawn(stats) = outcome else {
        panic!("expected drawn outcome");
    };
    assert_eq!(stats.lines, 12);
    assert_eq!(stats.circles, 7);
    assert_eq!(chart.config(), Some(&presets::study_progress_chart()));
    assert_eq!(chart.backend().render_count(), 1);
}

#[test]
fn update_replaces_config_and_repaints() {
    let mut chart = renderer(400, 300);
    chart.render(presets::study_progress_chart()).expect("render");
    let before = chart.backend().last_frame().cloned().expect("frame");

    chart
        .update(presets::assignment_status_chart())
        .expect("update");
    assert_eq!(chart.config().map(|config| config.kind), Some(ChartKind::Pie));
    assert_eq!(chart.backend().render_count(), 2);
    assert_ne!(chart.backend().last_frame(), Some(&before));
}

#[test]
fn update_with_edits_stored_values_like_live_refresh() {
    let mut chart = renderer(400, 300);
    chart.render(presets::study_progress_chart()).expect("render");

    let outcome = chart
        .update_with(|config| config.datasets[0].values = presets::refreshed_progress_values())
        .expect("update");
    assert!(outcome.is_drawn());
    assert_eq!(
        chart.config().expect("config").datasets[0].values,
        presets::refreshed_progress_values()
    );
}

#[test]
fn update_with_before_first_render_is_skipped() {
    let mut chart = renderer(400, 300);
    let outcome = chart.update_with(|_| {}).expect("no backend error");
    assert_eq!(outcome, RenderOutcome::Skipped(ChartError::NotConfigured));
    assert_eq!(chart.backend().render_count(), 0);
}

#[test]
fn resize_repaints_last_config_at_new_surface_size() {
    let mut chart = renderer(400, 300);
    chart.render(presets::grade_breakdown_chart()).expect("render");
    assert_eq!(chart.backend().last_frame().expect("frame").wedges[0].outer_radius, 130.0);

    chart.backend_mut().set_viewport(Viewport::new(200, 200));
    let outcome = chart.resize().expect("resize");
    assert!(outcome.is_drawn());

    let frame = chart.backend().last_frame().expect("frame");
    assert_eq!(frame.viewport, Viewport::new(200, 200));
    assert_eq!(frame.wedges[0].outer_radius, 80.0);
    assert_eq!(chart.viewport(), Viewport::new(200, 200));
}

#[test]
fn resize_without_config_is_noop() {
    let mut chart = renderer(400, 300);
    let outcome = chart.resize().expect("resize");
    assert_eq!(outcome, RenderOutcome::Skipped(ChartError::NotConfigured));
    assert!(chart.backend().last_frame().is_none());
}

#[test]
fn empty_datasets_skip_without_touching_surface() {
    let mut chart = renderer(400, 300);
    chart.render(presets::study_progress_chart()).expect("render");

    let outcome = chart
        .render(ChartConfig::new(ChartKind::Line, ["a"]))
        .expect("no backend error");
    assert_eq!(outcome, RenderOutcome::Skipped(ChartError::EmptyDatasets));
    assert_eq!(chart.backend().render_count(), 1);
}

#[test]
fn zero_sized_surface_is_skipped() {
    let mut chart = renderer(0, 300);
    let outcome = chart.render(presets::attendance_chart()).expect("no backend error");
    assert_eq!(
        outcome,
        RenderOutcome::Skipped(ChartError::InvalidViewport {
            width: 0,
            height: 300
        })
    );
}

#[test]
fn length_mismatch_is_skipped() {
    let mut chart = renderer(400, 300);
    let config = ChartConfig::new(ChartKind::Bar, ["a", "b", "c"])
        .with_dataset(Dataset::new(vec![1.0, 2.0]));
    let outcome = chart.render(config).expect("no backend error");
    assert_eq!(
        outcome,
        RenderOutcome::Skipped(ChartError::LengthMismatch {
            dataset: 0,
            labels: 3,
            values: 2
        })
    );
}

#[test]
fn set_style_validates_and_applies_to_next_pass() {
    let mut chart = renderer(400, 300);
    let mut bad = RenderStyle::default();
    bad.bar_fill_ratio = 0.0;
    assert!(chart.set_style(bad).is_err());

    let mut wide = RenderStyle::default();
    wide.padding_px = 0.0;
    chart.set_style(wide).expect("valid style");
    chart.render(presets::grade_distribution_chart()).expect("render");
    let frame = chart.backend().last_frame().expect("frame");
    assert_eq!(frame.rects[0].height, 300.0);
}

#[test]
fn into_backend_returns_owned_surface() {
    let mut chart = renderer(64, 48);
    chart.render(presets::assignment_status_chart()).expect("render");
    let backend = chart.into_backend();
    assert_eq!(backend.viewport(), Viewport::new(64, 48));
    assert_eq!(backend.last_stats().wedges, 2);
}
