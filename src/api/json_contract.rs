use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartLayout, DashboardLayout, DashboardRequest};

pub const CHART_LAYOUT_JSON_SCHEMA_V1: u32 = 1;
pub const DASHBOARD_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: ChartLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayoutJsonContractV1 {
    pub schema_version: u32,
    pub dashboard: DashboardLayout,
}

impl ChartLayout {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize layout json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartLayoutJsonContractV1 {
            schema_version: CHART_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare layout or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(layout) = serde_json::from_str::<ChartLayout>(input) {
            return Ok(layout);
        }
        let payload: ChartLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != CHART_LAYOUT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}

impl DashboardLayout {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DashboardLayoutJsonContractV1 {
            schema_version: DASHBOARD_LAYOUT_JSON_SCHEMA_V1,
            dashboard: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize dashboard contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(dashboard) = serde_json::from_str::<DashboardLayout>(input) {
            return Ok(dashboard);
        }
        let payload: DashboardLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dashboard json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_LAYOUT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported dashboard schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.dashboard)
    }
}

impl DashboardRequest {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dashboard request json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize dashboard request json: {e}"))
        })
    }
}
