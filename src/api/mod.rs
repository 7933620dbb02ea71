mod engine;
mod engine_config;
mod engine_snapshot;
mod hit_controller;
mod now_indicator_controller;
mod position_controller;
mod segment_controller;

pub use engine::TimeGridEngine;
pub use engine_config::TimeGridConfig;
pub use engine_snapshot::{
    GRID_SNAPSHOT_JSON_SCHEMA_V1, TimeGridSnapshot, TimeGridSnapshotJsonContractV1,
};
