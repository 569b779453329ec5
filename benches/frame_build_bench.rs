use criterion::{Criterion, criterion_group, criterion_main};
use dash_charts::api::{ChartConfig, ChartKind, Dataset, RenderStyle, build_render_frame};
use dash_charts::core::{PixelPoint, Viewport, project_line, project_wedges};
use std::hint::black_box;

fn generated_values(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            50.0 + (t * 0.37).sin() * 20.0 + t * 0.01
        })
        .collect()
}

fn bench_line_projection_10k(c: &mut Criterion) {
    let area = Viewport::new(1920, 1080).plot_area(40.0);
    let values = generated_values(10_000);

    c.bench_function("line_projection_10k", |b| {
        b.iter(|| {
            let _ = project_line(black_box(&values), black_box(area)).expect("projection");
        })
    });
}

fn bench_wedge_projection_1k(c: &mut Criterion) {
    let values = generated_values(1_000);

    c.bench_function("wedge_projection_1k", |b| {
        b.iter(|| {
            let _ = project_wedges(
                black_box(&values),
                black_box(PixelPoint::new(960.0, 540.0)),
                black_box(500.0),
                black_box(250.0),
            )
            .expect("projection");
        })
    });
}

fn bench_frame_build_all_kinds(c: &mut Criterion) {
    let values = generated_values(64);
    let labels: Vec<String> = (0..values.len()).map(|i| format!("L{i}")).collect();
    let style = RenderStyle::default();
    let viewport = Viewport::new(1280, 720);
    let configs: Vec<ChartConfig> = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Doughnut,
        ChartKind::Radar,
    ]
    .into_iter()
    .map(|kind| ChartConfig::new(kind, labels.clone()).with_dataset(Dataset::new(values.clone())))
    .collect();

    c.bench_function("frame_build_all_kinds_64", |b| {
        b.iter(|| {
            for config in &configs {
                let _ = build_render_frame(black_box(config), &style, viewport).expect("frame");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_line_projection_10k,
    bench_wedge_projection_1k,
    bench_frame_build_all_kinds
);
criterion_main!(benches);
