use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{RenderView, Renderer};

use super::ChartSession;

pub const RENDER_VIEW_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderViewJsonContractV1 {
    pub schema_version: u32,
    pub view: RenderView,
}

impl RenderView {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize render view: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderViewJsonContractV1 {
            schema_version: RENDER_VIEW_JSON_SCHEMA_V1,
            view: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render view contract v1: {e}"))
        })
    }

    /// Accepts both a bare view and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(view) = serde_json::from_str::<RenderView>(input) {
            return Ok(view);
        }
        let payload: RenderViewJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render view json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_VIEW_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render view schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.view)
    }
}

impl<R: Renderer> ChartSession<R> {
    pub fn view_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.view.to_json_contract_v1_pretty()
    }

    /// Flattened chart rows as a JSON array string.
    pub fn rows_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.view.rows_json())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart rows: {e}")))
    }
}
