use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Layout and color defaults applied to every chart drawn by one renderer.
///
/// Every field has a default, so a partial JSON object is a valid style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Surface clear color painted before every pass.
    pub background: Color,
    /// Inset of the line/bar/radar plot area from each surface edge.
    pub padding_px: f64,
    /// Number of equal bands separated by gridlines (radar: number of rings).
    pub grid_divisions: u32,
    pub grid_color: Color,
    pub grid_line_width: f64,
    /// Fraction of each bar slot covered by the bar; the rest is spacing.
    pub bar_fill_ratio: f64,
    /// Gap between the pie radius and the nearest surface edge.
    pub pie_inset_px: f64,
    /// Inner radius of doughnut wedges as a fraction of the outer radius.
    pub doughnut_cutout: f64,
    pub default_stroke_color: Color,
    pub default_stroke_width: f64,
    /// Point marker radius; `0` disables markers.
    pub default_point_radius: f64,
    /// Positional fills used when a dataset carries no `fill_colors`.
    pub palette: SmallVec<[Color; 8]>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            padding_px: 40.0,
            grid_divisions: 5,
            grid_color: Color::rgba(1.0, 1.0, 1.0, 0.1),
            grid_line_width: 1.0,
            bar_fill_ratio: 0.8,
            pie_inset_px: 20.0,
            doughnut_cutout: 0.5,
            default_stroke_color: Color::rgba8(0x3b, 0x82, 0xf6, 1.0),
            default_stroke_width: 2.0,
            default_point_radius: 4.0,
            palette: smallvec![
                Color::rgba8(0x10, 0xb9, 0x81, 1.0),
                Color::rgba8(0x3b, 0x82, 0xf6, 1.0),
                Color::rgba8(0x8b, 0x5c, 0xf6, 1.0),
                Color::rgba8(0xf5, 0x9e, 0x0b, 1.0),
                Color::rgba8(0xef, 0x44, 0x44, 1.0),
            ],
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_non_negative("padding_px", self.padding_px)?;
        ensure_non_negative("pie_inset_px", self.pie_inset_px)?;
        ensure_non_negative("default_point_radius", self.default_point_radius)?;
        ensure_positive("grid_line_width", self.grid_line_width)?;
        ensure_positive("default_stroke_width", self.default_stroke_width)?;

        if !self.bar_fill_ratio.is_finite()
            || self.bar_fill_ratio <= 0.0
            || self.bar_fill_ratio > 1.0
        {
            return Err(ChartError::InvalidData(
                "bar_fill_ratio must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.doughnut_cutout.is_finite() || !(0.0..1.0).contains(&self.doughnut_cutout) {
            return Err(ChartError::InvalidData(
                "doughnut_cutout must be finite and in [0, 1)".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }

        self.background.validate()?;
        self.grid_color.validate()?;
        self.default_stroke_color.validate()?;
        for color in &self.palette {
            color.validate()?;
        }
        Ok(())
    }

    /// Parses and validates a style from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render style json: {e}"))
        })?;
        style.validate()?;
        Ok(style)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize render style: {e}")))
    }

    /// Fill for the value at `index` when the dataset has no fills of its own.
    #[must_use]
    pub(crate) fn palette_color(&self, index: usize) -> Color {
        self.palette
            .get(index % self.palette.len().max(1))
            .copied()
            .unwrap_or(self.default_stroke_color)
    }
}

fn ensure_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )))
    }
}

fn ensure_positive(name: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{name} must be finite and > 0")))
    }
}
