use std::f64::consts::TAU;

use dash_charts::api::{ChartConfig, ChartKind, Dataset, RenderStyle, build_render_frame};
use dash_charts::core::{
    PixelPoint, Viewport, project_bars, project_line, project_wedges, total_sweep,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn line_points_preserve_value_ordering(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 2..24),
        width in 100u32..2_000,
        height in 100u32..2_000
    ) {
        let area = Viewport::new(width, height).plot_area(40.0);
        let geometry = project_line(&values, area).expect("project");

        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                let ya = geometry.points[i].y;
                let yb = geometry.points[j].y;
                if a < b {
                    prop_assert!(ya >= yb);
                    if b - a > 1e-6 && area.height > 0.0 {
                        prop_assert!(ya > yb);
                    }
                }
                if a == b {
                    prop_assert!((ya - yb).abs() <= 1e-9);
                }
            }
            prop_assert!(geometry.points[i].y >= area.top - 1e-9);
            prop_assert!(geometry.points[i].y <= area.bottom() + 1e-9);
        }
    }

    #[test]
    fn pie_sweeps_sum_to_full_turn(
        values in prop::collection::vec(0.0f64..1_000.0, 1..16),
        radius in 1.0f64..500.0
    ) {
        prop_assume!(values.iter().sum::<f64>() > 0.0);
        let wedges =
            project_wedges(&values, PixelPoint::new(0.0, 0.0), radius, 0.0).expect("wedges");

        prop_assert!((total_sweep(&wedges) - TAU).abs() <= 1e-9);
        for pair in wedges.windows(2) {
            prop_assert!((pair[0].end_angle() - pair[1].start_angle).abs() <= 1e-9);
        }
    }

    #[test]
    fn pie_sweeps_sum_to_full_turn_near_f64_max(
        fractions in prop::collection::vec(0.6f64..1.0, 2..16)
    ) {
        let values: Vec<f64> = fractions.iter().map(|fraction| fraction * f64::MAX).collect();
        prop_assert!(values.iter().sum::<f64>().is_infinite());

        let wedges =
            project_wedges(&values, PixelPoint::new(0.0, 0.0), 100.0, 0.0).expect("wedges");
        prop_assert_eq!(wedges.len(), values.len());
        prop_assert!((total_sweep(&wedges) - TAU).abs() <= 1e-9);
    }

    #[test]
    fn tallest_bar_spans_full_plot_height(
        values in prop::collection::vec(0.0f64..1_000.0, 1..32),
        width in 100u32..2_000,
        height in 100u32..2_000,
        fill_ratio in 0.1f64..1.0
    ) {
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        prop_assume!(max > 0.0);

        let area = Viewport::new(width, height).plot_area(40.0);
        let bars = project_bars(&values, area, fill_ratio).expect("bars");
        let tallest = bars.iter().map(|bar| bar.height).fold(0.0, f64::max);

        prop_assert!((tallest - area.height).abs() <= 1e-9);
        for bar in &bars {
            prop_assert!((bar.y + bar.height - area.bottom()).abs() <= 1e-9);
        }
    }

    #[test]
    fn frame_building_is_deterministic(
        values in prop::collection::vec(0.0f64..100.0, 1..12),
        kind_index in 0usize..5
    ) {
        let kind = [
            ChartKind::Line,
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::Doughnut,
            ChartKind::Radar,
        ][kind_index];
        let labels: Vec<String> = (0..values.len()).map(|i| format!("L{i}")).collect();
        let config = ChartConfig::new(kind, labels).with_dataset(Dataset::new(values));
        let style = RenderStyle::default();
        let viewport = Viewport::new(640, 480);

        let first = build_render_frame(&config, &style, viewport).expect("first");
        let second = build_render_frame(&config, &style, viewport).expect("second");
        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
    }
}
