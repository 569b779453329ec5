use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, WedgePrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends clear the surface to `background` and then paint polygons, wedges,
/// rects, lines and circles in that order, each list in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub polygons: Vec<PolygonPrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
}

/// Primitive counts of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameStats {
    pub polygons: usize,
    pub wedges: usize,
    pub rects: usize,
    pub lines: usize,
    pub circles: usize,
}

impl FrameStats {
    #[must_use]
    pub fn total(self) -> usize {
        self.polygons + self.wedges + self.rects + self.lines + self.circles
    }
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            polygons: Vec::new(),
            wedges: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_wedge(mut self, wedge: WedgePrimitive) -> Self {
        self.wedges.push(wedge);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            polygons: self.polygons.len(),
            wedges: self.wedges.len(),
            rects: self.rects.len(),
            lines: self.lines.len(),
            circles: self.circles.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats().total() == 0
    }
}
