use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::line_series::ensure_finite;
use crate::core::{PixelPoint, PlotArea, ValueRange};
use crate::error::ChartResult;

/// Polar-layout geometry for a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub center: PixelPoint,
    pub radius: f64,
    /// Outer end of each category spoke, one per value.
    pub spokes: Vec<PixelPoint>,
    /// Concentric grid rings, innermost first, each with one vertex per spoke.
    pub rings: Vec<Vec<PixelPoint>>,
    /// Series vertices, one per value, in category order.
    pub points: Vec<PixelPoint>,
}

/// Projects values onto radar spokes.
///
/// Spoke `i` points at `-π/2 + 2π·i/n`. Values normalize against the series
/// min/max exactly like a line chart, so the minimum sits at the center and the
/// maximum on the outer ring; a collapsed range places every vertex at half
/// radius.
pub fn project_radar(
    values: &[f64],
    area: PlotArea,
    ring_count: u32,
) -> ChartResult<RadarGeometry> {
    ensure_finite(values)?;
    let center = area.center();
    let radius = area.width.min(area.height) / 2.0;
    let Some(range) = ValueRange::from_values(values) else {
        return Ok(RadarGeometry {
            center,
            radius,
            spokes: Vec::new(),
            rings: Vec::new(),
            points: Vec::new(),
        });
    };

    let count = values.len() as f64;
    let polar = |index: usize, distance: f64| {
        let angle = -FRAC_PI_2 + TAU * index as f64 / count;
        PixelPoint::new(
            center.x + distance * angle.cos(),
            center.y + distance * angle.sin(),
        )
    };

    let spokes: Vec<PixelPoint> = (0..values.len()).map(|index| polar(index, radius)).collect();
    let rings: Vec<Vec<PixelPoint>> = (1..=ring_count)
        .map(|ring| {
            let distance = radius * f64::from(ring) / f64::from(ring_count);
            (0..values.len())
                .map(|index| polar(index, distance))
                .collect::<Vec<_>>()
        })
        .collect();
    let points: Vec<PixelPoint> = values
        .iter()
        .enumerate()
        .map(|(index, value)| polar(index, range.normalize(*value) * radius))
        .collect();

    Ok(RadarGeometry {
        center,
        radius,
        spokes,
        rings,
        points,
    })
}
