use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DateMarker, PositionCache, SlatDescriptor, SlotGeometry};
use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::{TimeGridConfig, TimeGridEngine};

pub const GRID_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGridSnapshot {
    pub config: TimeGridConfig,
    pub slots: SlotGeometry,
    pub slats: Vec<SlatDescriptor>,
    pub day_columns: Vec<DateMarker>,
    pub column_positions: Option<PositionCache>,
    pub slat_positions: Option<PositionCache>,
    pub rebuild_count: u64,
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGridSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimeGridSnapshot,
}

impl TimeGridSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GridResult<String> {
        let payload = TimeGridSnapshotJsonContractV1 {
            schema_version: GRID_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GridError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GridResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<TimeGridSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: TimeGridSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GridError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GRID_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GridError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> TimeGridEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> TimeGridSnapshot {
        TimeGridSnapshot {
            config: self.config,
            slots: self.slots,
            slats: self.slots.slats(),
            day_columns: self.day_starts.clone(),
            column_positions: self.session.columns().cloned(),
            slat_positions: self.session.slats().cloned(),
            rebuild_count: self.rebuild_count,
            metadata: self.metadata.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> GridResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| GridError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
