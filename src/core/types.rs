use serde::{Deserialize, Serialize};

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Returns the drawable region left after insetting every edge by `padding_px`.
    ///
    /// Surfaces smaller than twice the padding collapse to a zero-sized area
    /// anchored at the padding corner instead of producing negative extents.
    #[must_use]
    pub fn plot_area(self, padding_px: f64) -> PlotArea {
        let padding = padding_px.max(0.0);
        PlotArea {
            left: padding,
            top: padding,
            width: (f64::from(self.width) - padding * 2.0).max(0.0),
            height: (f64::from(self.height) - padding * 2.0).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned drawable region in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}
