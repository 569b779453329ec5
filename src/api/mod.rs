mod chart_config;
mod chart_renderer;
mod frame_builder;
mod json_contract;
pub mod presets;
mod render_style;
mod validation;

pub use chart_config::{ChartConfig, ChartKind, Dataset, DatasetStyle};
pub use chart_renderer::{ChartRenderer, RenderOutcome};
pub use frame_builder::build_render_frame;
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartBundle, ChartConfigJsonContractV1,
    chart_bundle_to_json_pretty, parse_chart_bundle,
};
pub use presets::dashboard_presets;
pub use render_style::RenderStyle;
