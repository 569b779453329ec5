use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Named chart configs in display order.
pub type ChartBundle = IndexMap<String, ChartConfig>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

impl ChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Accepts a bare config object or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<ChartConfig>(input) {
            return Ok(config);
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

pub fn parse_chart_bundle(input: &str) -> ChartResult<ChartBundle> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse chart bundle json: {e}")))
}

pub fn chart_bundle_to_json_pretty(bundle: &ChartBundle) -> ChartResult<String> {
    serde_json::to_string_pretty(bundle)
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart bundle: {e}")))
}
