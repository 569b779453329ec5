use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::core::line_series::ensure_finite;
use crate::error::{ChartError, ChartResult};

/// Angular slice of a pie or doughnut.
///
/// Angles are in radians, measured clockwise on screen from the positive X axis
/// (Y grows downward), so `-π/2` is 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeGeometry {
    /// Position of the source value, used to pick the fill color.
    pub index: usize,
    pub center: PixelPoint,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl WedgeGeometry {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep
    }
}

/// Projects values into consecutive wedges starting at 12 o'clock.
///
/// Each wedge sweeps `value / total * 2π`. Zero values produce no wedge and a
/// zero total produces no wedges at all. Negative values are rejected.
pub fn project_wedges(
    values: &[f64],
    center: PixelPoint,
    outer_radius: f64,
    inner_radius: f64,
) -> ChartResult<Vec<WedgeGeometry>> {
    ensure_finite(values)?;
    if values.iter().any(|value| *value < 0.0) {
        return Err(ChartError::InvalidData(
            "pie values must be >= 0".to_owned(),
        ));
    }
    if !outer_radius.is_finite() || !inner_radius.is_finite() || inner_radius < 0.0 {
        return Err(ChartError::InvalidData(
            "wedge radii must be finite and >= 0".to_owned(),
        ));
    }

    // Shares are summed relative to the largest value so totals near
    // `f64::MAX` cannot overflow.
    let largest = values.iter().copied().fold(0.0, f64::max);
    if largest <= 0.0 || outer_radius <= 0.0 {
        return Ok(Vec::new());
    }
    let total: f64 = values.iter().map(|value| value / largest).sum();

    let mut current = -FRAC_PI_2;
    let mut wedges = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let sweep = value / largest / total * TAU;
        if sweep > 0.0 {
            wedges.push(WedgeGeometry {
                index,
                center,
                inner_radius: inner_radius.min(outer_radius),
                outer_radius,
                start_angle: current,
                sweep,
            });
        }
        current += sweep;
    }
    Ok(wedges)
}

/// Sum of the angular sweeps of `wedges`.
#[must_use]
pub fn total_sweep(wedges: &[WedgeGeometry]) -> f64 {
    wedges.iter().map(|wedge| wedge.sweep).sum()
}
