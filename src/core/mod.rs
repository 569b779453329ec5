pub mod bar_series;
pub mod line_series;
pub mod pie_series;
pub mod radar_series;
pub mod scale;
pub mod types;

pub use bar_series::{BarGeometry, project_bars};
pub use line_series::{LineGeometry, LineSegment, grid_line_ys, project_line};
pub use pie_series::{WedgeGeometry, project_wedges, total_sweep};
pub use radar_series::{RadarGeometry, project_radar};
pub use scale::ValueRange;
pub use types::{PixelPoint, PlotArea, Viewport};
