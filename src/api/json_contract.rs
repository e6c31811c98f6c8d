use serde::{Deserialize, Serialize};

use crate::core::{LayoutBox, ScalePair, Size};
use crate::error::{ChartError, ChartResult};

use super::ChartCanvas;

pub const CANVAS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of an initialized canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    pub layout: LayoutBox,
    pub surface_size: Size,
    pub transform: String,
    pub scales: ScalePair,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CanvasSnapshot,
}

impl ChartCanvas {
    #[must_use]
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            layout: self.layout,
            surface_size: self.surface.size(),
            transform: self.surface.transform(),
            scales: self.scales,
        }
    }
}

impl CanvasSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CanvasSnapshotJsonContractV1 {
            schema_version: CANVAS_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize canvas snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CanvasSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CanvasSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse canvas snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CANVAS_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported canvas snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
