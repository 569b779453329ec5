use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PlotArea, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Point and segment geometry of one line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub points: Vec<PixelPoint>,
    pub segments: Vec<LineSegment>,
}

/// Projects category-indexed values into line-series geometry.
///
/// X positions are evenly spaced across the plot width by index; a lone value
/// is centered horizontally. Y positions come from the series' own min/max.
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_line(values: &[f64], area: PlotArea) -> ChartResult<LineGeometry> {
    ensure_finite(values)?;
    let Some(range) = ValueRange::from_values(values) else {
        return Ok(LineGeometry {
            points: Vec::new(),
            segments: Vec::new(),
        });
    };

    let step = if values.len() > 1 {
        area.width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let points: Vec<PixelPoint> = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = if values.len() > 1 {
                area.left + step * index as f64
            } else {
                area.center().x
            };
            PixelPoint::new(x, range.value_to_y(*value, area))
        })
        .collect();

    let segments = points
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect();

    Ok(LineGeometry { points, segments })
}

/// Y coordinates of horizontal gridlines dividing the plot area into `divisions`
/// equal bands, top edge first.
#[must_use]
pub fn grid_line_ys(area: PlotArea, divisions: u32) -> Vec<f64> {
    if divisions == 0 {
        return Vec::new();
    }
    let band = area.height / f64::from(divisions);
    (0..=divisions)
        .map(|index| area.top + band * f64::from(index))
        .collect()
}

pub(crate) fn ensure_finite(values: &[f64]) -> ChartResult<()> {
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "value at index {index} must be finite"
        )));
    }
    Ok(())
}
