use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite_coords("line", &[self.x1, self.y1, self.x2, self.y2])?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite_coords("rect", &[self.x, self.y])?;
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Draw command for one filled circle (series point marker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite_coords("circle", &[self.center_x, self.center_y])?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Draw command for one filled annular sector.
///
/// `inner_radius == 0` draws a classic pie slice from the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub fill_color: Color,
}

impl WedgePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        ensure_finite_coords(
            "wedge",
            &[self.center_x, self.center_y, self.start_angle, self.sweep],
        )?;
        if !self.outer_radius.is_finite()
            || !self.inner_radius.is_finite()
            || self.outer_radius <= 0.0
            || self.inner_radius < 0.0
            || self.inner_radius >= self.outer_radius
        {
            return Err(ChartError::InvalidData(
                "wedge radii must satisfy 0 <= inner < outer".to_owned(),
            ));
        }
        if self.sweep <= 0.0 {
            return Err(ChartError::InvalidData(
                "wedge sweep must be > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }

    /// Outline of the wedge as a closed polygon, sampling the arcs every
    /// `max_step` radians at most. The first vertex is not repeated at the end.
    #[must_use]
    pub fn outline(self, max_step: f64) -> Vec<PixelPoint> {
        let steps = ((self.sweep / max_step.max(1e-3)).ceil() as usize).max(1);
        let arc = |radius: f64, step: usize| {
            let angle = self.start_angle + self.sweep * step as f64 / steps as f64;
            PixelPoint::new(
                self.center_x + radius * angle.cos(),
                self.center_y + radius * angle.sin(),
            )
        };

        let mut outline: Vec<PixelPoint> = (0..=steps)
            .map(|step| arc(self.outer_radius, step))
            .collect();
        if self.inner_radius > 0.0 {
            outline.extend((0..=steps).rev().map(|step| arc(self.inner_radius, step)));
        } else {
            outline.push(PixelPoint::new(self.center_x, self.center_y));
        }
        outline
    }
}

/// Draw command for one filled simple polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: Vec<PixelPoint>,
    pub fill_color: Color,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least 3 vertices".to_owned(),
            ));
        }
        for point in &self.points {
            ensure_finite_coords("polygon", &[point.x, point.y])?;
        }
        self.fill_color.validate()
    }
}

fn ensure_finite_coords(kind: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{kind} coordinates must be finite"
        )))
    }
}
