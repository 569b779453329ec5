use ordered_float::OrderedFloat;

use crate::core::types::PlotArea;

/// Observed value domain of one series.
///
/// A collapsed domain (`min == max`) is legal: every value normalizes to the
/// midpoint so flat series render as a centered line instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Builds the range from finite values. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().map(OrderedFloat).min()?.0;
        let max = values.iter().copied().map(OrderedFloat).max()?.0;
        Some(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    /// Maps `value` into `0..=1` relative to the range.
    ///
    /// Ranges wider than `f64::MAX` are normalized on halved operands so the
    /// result stays finite.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        let span = self.span();
        if span.is_finite() {
            return (value - self.min) / span;
        }
        (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
    }

    /// Maps `value` onto the plot area's inverted Y axis (`max` at the top edge).
    #[must_use]
    pub fn value_to_y(self, value: f64, area: PlotArea) -> f64 {
        area.top + area.height - self.normalize(value) * area.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea {
            left: 40.0,
            top: 40.0,
            width: 320.0,
            height: 200.0,
        }
    }

    #[test]
    fn empty_values_have_no_range() {
        assert!(ValueRange::from_values(&[]).is_none());
    }

    #[test]
    fn extremes_map_to_plot_edges() {
        let range = ValueRange::from_values(&[3.0, 9.0, 6.0]).expect("range");
        assert_eq!(range.min(), 3.0);
        assert_eq!(range.max(), 9.0);
        assert!((range.value_to_y(9.0, area()) - 40.0).abs() <= 1e-9);
        assert!((range.value_to_y(3.0, area()) - 240.0).abs() <= 1e-9);
        assert!((range.value_to_y(6.0, area()) - 140.0).abs() <= 1e-9);
    }

    #[test]
    fn collapsed_range_maps_to_mid_height() {
        let range = ValueRange::from_values(&[5.0, 5.0]).expect("range");
        assert!(range.is_degenerate());
        assert_eq!(range.normalize(5.0), 0.5);
        assert!((range.value_to_y(5.0, area()) - 140.0).abs() <= 1e-9);
    }

    #[test]
    fn range_wider_than_f64_max_stays_finite() {
        let range = ValueRange::from_values(&[-1.7e308, 0.0, 1.7e308]).expect("range");
        assert!(range.span().is_infinite());
        assert_eq!(range.normalize(-1.7e308), 0.0);
        assert_eq!(range.normalize(1.7e308), 1.0);
        assert!((range.normalize(0.0) - 0.5).abs() <= 1e-12);
        assert!((range.value_to_y(0.0, area()) - 140.0).abs() <= 1e-9);
    }
}
