use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::PlotArea;
use crate::core::line_series::ensure_finite;
use crate::error::{ChartError, ChartResult};

/// Filled-bar geometry in pixel coordinates, anchored on the plot bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects category values into vertical bars.
///
/// Each category owns `area.width / n` pixels; `fill_ratio` of the slot is the
/// bar and the remainder is split evenly on both sides. Heights scale against
/// the series maximum, so the tallest bar spans the full plot height. A
/// non-positive maximum yields zero-height bars, and negative values clamp to
/// zero height.
pub fn project_bars(
    values: &[f64],
    area: PlotArea,
    fill_ratio: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !fill_ratio.is_finite() || fill_ratio <= 0.0 || fill_ratio > 1.0 {
        return Err(ChartError::InvalidData(
            "bar fill ratio must be finite and in (0, 1]".to_owned(),
        ));
    }
    ensure_finite(values)?;
    let Some(max) = values.iter().copied().map(OrderedFloat).max() else {
        return Ok(Vec::new());
    };
    let max = max.0;

    let slot = area.width / values.len() as f64;
    let bar_width = slot * fill_ratio;
    let spacing = slot - bar_width;

    Ok(values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = if max > 0.0 {
                (value.max(0.0) / max) * area.height
            } else {
                0.0
            };
            BarGeometry {
                x: area.left + index as f64 * slot + spacing / 2.0,
                y: area.bottom() - height,
                width: bar_width,
                height,
            }
        })
        .collect())
}
