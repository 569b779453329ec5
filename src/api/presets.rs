//! Stock charts shown on the student dashboard and reports pages.

use crate::render::Color;

use super::{ChartBundle, ChartConfig, ChartKind, Dataset};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const GRADES: [&str; 5] = ["A", "B+", "B", "C+", "C"];

/// Weekly study hours pushed by the dashboard's periodic refresh.
#[must_use]
pub fn refreshed_progress_values() -> Vec<f64> {
    vec![3.0, 7.0, 4.0, 6.0, 8.0, 5.0, 6.0]
}

fn grade_colors() -> [Color; 5] {
    [
        Color::rgba8(0x10, 0xb9, 0x81, 1.0),
        Color::rgba8(0x3b, 0x82, 0xf6, 1.0),
        Color::rgba8(0x8b, 0x5c, 0xf6, 1.0),
        Color::rgba8(0xf5, 0x9e, 0x0b, 1.0),
        Color::rgba8(0xef, 0x44, 0x44, 1.0),
    ]
}

#[must_use]
pub fn study_progress_chart() -> ChartConfig {
    let green = Color::rgba8(0x10, 0xb9, 0x81, 1.0);
    ChartConfig::new(ChartKind::Line, WEEKDAYS).with_dataset(
        Dataset::new(vec![4.0, 6.0, 3.0, 8.0, 5.0, 7.0, 4.0])
            .with_label("Study Hours")
            .with_stroke_color(green)
            .with_stroke_width(3.0)
            .with_point_radius(6.0)
            .with_point_color(green),
    )
}

#[must_use]
pub fn grade_breakdown_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Doughnut, GRADES).with_dataset(
        Dataset::new(vec![4.0, 2.0, 1.0, 0.0, 0.0]).with_fill_colors(grade_colors()),
    )
}

#[must_use]
pub fn grade_distribution_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar, GRADES).with_dataset(
        Dataset::new(vec![4.0, 2.0, 1.0, 0.0, 0.0]).with_fill_colors(grade_colors()),
    )
}

#[must_use]
pub fn attendance_chart() -> ChartConfig {
    ChartConfig::new(
        ChartKind::Line,
        ["Week 1", "Week 2", "Week 3", "Week 4", "Week 5", "Week 6"],
    )
    .with_dataset(
        Dataset::new(vec![95.0, 92.0, 98.0, 90.0, 94.0, 96.0])
            .with_label("Attendance %")
            .with_stroke_color(Color::rgba8(0x3b, 0x82, 0xf6, 1.0)),
    )
}

#[must_use]
pub fn study_time_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Radar, WEEKDAYS).with_dataset(
        Dataset::new(vec![4.0, 6.0, 3.0, 8.0, 5.0, 7.0, 4.0])
            .with_label("Hours")
            .with_stroke_color(Color::rgba8(0x8b, 0x5c, 0xf6, 1.0))
            .with_fill_colors([Color::rgba8(0x8b, 0x5c, 0xf6, 0.2)]),
    )
}

#[must_use]
pub fn assignment_status_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Pie, ["On Time", "Late", "Missing"]).with_dataset(
        Dataset::new(vec![23.0, 2.0, 0.0]).with_fill_colors([
            Color::rgba8(0x10, 0xb9, 0x81, 1.0),
            Color::rgba8(0xf5, 0x9e, 0x0b, 1.0),
            Color::rgba8(0xef, 0x44, 0x44, 1.0),
        ]),
    )
}

/// Every stock chart keyed by its widget name, in page order.
#[must_use]
pub fn dashboard_presets() -> ChartBundle {
    [
        ("progress", study_progress_chart()),
        ("grade", grade_breakdown_chart()),
        ("grade_distribution", grade_distribution_chart()),
        ("attendance", attendance_chart()),
        ("study_time", study_time_chart()),
        ("assignment", assignment_status_chart()),
    ]
    .into_iter()
    .map(|(name, config)| (name.to_owned(), config))
    .collect()
}
