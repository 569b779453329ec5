use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::render::Color;

/// Chart family selecting the drawing routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
    Radar,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
        }
    }
}

/// Visual attributes of one dataset.
///
/// Unset fields fall back to `RenderStyle` defaults at render time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    /// Positional fills: one per value for bar/pie/doughnut, area fill for radar.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub fill_colors: SmallVec<[Color; 8]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_color: Option<Color>,
}

/// One numeric series, one value per chart label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub style: DatasetStyle,
}

impl Dataset {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            label: None,
            values,
            style: DatasetStyle::default(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.style.stroke_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.style.fill_colors = colors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.style.stroke_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.style.point_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_point_color(mut self, color: Color) -> Self {
        self.style.point_color = Some(color);
        self
    }
}

/// Declarative description of one chart.
///
/// A config is immutable for the duration of a render call; hosts replace it
/// wholesale (or edit the stored copy through `ChartRenderer::update_with`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartConfig {
    #[must_use]
    pub fn new<S: Into<String>>(kind: ChartKind, labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind,
            labels: labels.into_iter().map(Into::into).collect(),
            datasets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// The dataset every drawing routine projects. Additional datasets are
    /// validated but not drawn.
    #[must_use]
    pub fn primary_dataset(&self) -> Option<&Dataset> {
        self.datasets.first()
    }
}
