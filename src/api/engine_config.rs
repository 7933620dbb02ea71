use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::core::SlotGeometry;
use crate::core::primitives::{duration_millis, duration_millis_opt};
use crate::error::{GridError, GridResult};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist grid setup; durations are stored as
/// integer milliseconds and every field falls back to its default when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGridConfig {
    #[serde(
        rename = "slot_duration_ms",
        with = "duration_millis",
        default = "default_slot_duration"
    )]
    pub slot_duration: Duration,
    /// Drag/select granularity; `None` snaps to whole slots.
    #[serde(rename = "snap_duration_ms", with = "duration_millis_opt", default)]
    pub snap_duration: Option<Duration>,
    #[serde(rename = "min_time_ms", with = "duration_millis", default = "default_min_time")]
    pub min_time: Duration,
    #[serde(rename = "max_time_ms", with = "duration_millis", default = "default_max_time")]
    pub max_time: Duration,
    /// Axis label spacing; `None` picks a stock interval from the slot size.
    #[serde(rename = "slot_label_interval_ms", with = "duration_millis_opt", default)]
    pub slot_label_interval: Option<Duration>,
    #[serde(default)]
    pub min_event_height_px: f64,
}

impl Default for TimeGridConfig {
    fn default() -> Self {
        Self {
            slot_duration: default_slot_duration(),
            snap_duration: None,
            min_time: default_min_time(),
            max_time: default_max_time(),
            slot_label_interval: None,
            min_event_height_px: 0.0,
        }
    }
}

impl TimeGridConfig {
    #[must_use]
    pub fn new(slot_duration: Duration) -> Self {
        Self {
            slot_duration,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_snap_duration(mut self, snap_duration: Duration) -> Self {
        self.snap_duration = Some(snap_duration);
        self
    }

    #[must_use]
    pub fn with_visible_times(mut self, min_time: Duration, max_time: Duration) -> Self {
        self.min_time = min_time;
        self.max_time = max_time;
        self
    }

    #[must_use]
    pub fn with_slot_label_interval(mut self, interval: Duration) -> Self {
        self.slot_label_interval = Some(interval);
        self
    }

    #[must_use]
    pub fn with_min_event_height(mut self, min_event_height_px: f64) -> Self {
        self.min_event_height_px = min_event_height_px;
        self
    }

    /// Validates the config and derives slot/snap geometry from it.
    pub fn resolve_slots(&self) -> GridResult<SlotGeometry> {
        if !self.min_event_height_px.is_finite() || self.min_event_height_px < 0.0 {
            return Err(GridError::InvalidConfig(
                "min event height must be finite and >= 0".to_owned(),
            ));
        }
        SlotGeometry::resolve(
            self.slot_duration,
            self.snap_duration,
            self.min_time,
            self.max_time,
            self.slot_label_interval,
        )
    }

    pub fn from_json_str(input: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GridError::InvalidData(format!("failed to parse grid config: {e}")))?;
        config.resolve_slots()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> GridResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GridError::InvalidData(format!("failed to serialize grid config: {e}")))
    }
}

fn default_slot_duration() -> Duration {
    Duration::minutes(30)
}

fn default_min_time() -> Duration {
    Duration::zero()
}

fn default_max_time() -> Duration {
    Duration::hours(24)
}
