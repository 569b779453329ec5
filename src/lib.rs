//! dash-charts: immediate-mode chart rendering for dashboard widgets.
//!
//! Geometry projection (`core`), frame building (`api`) and drawing backends
//! (`render`) are kept apart so chart math is testable without a surface and
//! the same frame can be painted by any backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartKind, ChartRenderer, Dataset, RenderOutcome, RenderStyle};
pub use error::{ChartError, ChartResult};
