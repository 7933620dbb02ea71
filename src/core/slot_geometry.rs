use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::{duration_millis, duration_to_millis, whole_divide_durations};
use crate::error::{GridError, GridResult};

/// Candidate axis label intervals, finest last.
const STOCK_LABEL_INTERVALS_MS: [i64; 5] = [3_600_000, 1_800_000, 900_000, 30_000, 15_000];

/// Earliest visible time, relative to a column's day start.
pub const MIN_VISIBLE_TIME_MS: i64 = -86_400_000;
/// Latest visible time, relative to a column's day start.
pub const MAX_VISIBLE_TIME_MS: i64 = 2 * 86_400_000;
/// Upper bound on slats per column.
pub const MAX_SLAT_COUNT: usize = 100_000;

/// Resolved slot and snap granularity of the time axis.
///
/// `snaps_per_slot` is always a positive integer. A configured snap that does
/// not evenly divide the slot is replaced by the slot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGeometry {
    #[serde(with = "duration_millis")]
    slot_duration: Duration,
    #[serde(with = "duration_millis")]
    snap_duration: Duration,
    snaps_per_slot: u32,
    #[serde(with = "duration_millis")]
    min_time: Duration,
    #[serde(with = "duration_millis")]
    max_time: Duration,
    #[serde(with = "duration_millis")]
    label_interval: Duration,
    snap_fallback_applied: bool,
}

/// One horizontal time row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlatDescriptor {
    pub index: usize,
    /// Start of the slat, measured from the column's day start.
    #[serde(with = "duration_millis")]
    pub time: Duration,
    /// Whether the axis shows a label for this slat.
    pub is_labeled: bool,
}

impl SlotGeometry {
    pub fn resolve(
        slot_duration: Duration,
        snap_duration: Option<Duration>,
        min_time: Duration,
        max_time: Duration,
        label_interval: Option<Duration>,
    ) -> GridResult<Self> {
        if duration_to_millis(slot_duration) <= 0 {
            return Err(GridError::InvalidConfig(
                "slot duration must be > 0".to_owned(),
            ));
        }
        if max_time <= min_time {
            return Err(GridError::InvalidConfig(format!(
                "max time ({} ms) must be after min time ({} ms)",
                duration_to_millis(max_time),
                duration_to_millis(min_time)
            )));
        }
        let visible = MIN_VISIBLE_TIME_MS..=MAX_VISIBLE_TIME_MS;
        if !visible.contains(&duration_to_millis(min_time))
            || !visible.contains(&duration_to_millis(max_time))
        {
            return Err(GridError::InvalidConfig(format!(
                "visible times must lie within [{MIN_VISIBLE_TIME_MS}, {MAX_VISIBLE_TIME_MS}] ms of the day start"
            )));
        }
        let slat_count = ceil_div_millis(max_time - min_time, slot_duration);
        if slat_count.is_none_or(|count| count > MAX_SLAT_COUNT) {
            return Err(GridError::InvalidConfig(format!(
                "visible window needs more than {MAX_SLAT_COUNT} slats of {} ms",
                duration_to_millis(slot_duration)
            )));
        }

        let (snap_duration, snaps_per_slot, snap_fallback_applied) =
            resolve_snap(slot_duration, snap_duration);

        let label_interval = match label_interval {
            Some(interval) if duration_to_millis(interval) > 0 => interval,
            Some(interval) => {
                warn!(
                    interval_ms = duration_to_millis(interval),
                    "ignoring non-positive slot label interval"
                );
                compute_label_interval(slot_duration)
            }
            None => compute_label_interval(slot_duration),
        };

        let geometry = Self {
            slot_duration,
            snap_duration,
            snaps_per_slot,
            min_time,
            max_time,
            label_interval,
            snap_fallback_applied,
        };
        debug!(
            slot_ms = duration_to_millis(slot_duration),
            snap_ms = duration_to_millis(snap_duration),
            snaps_per_slot,
            slat_count = geometry.slat_count(),
            "resolved slot geometry"
        );
        Ok(geometry)
    }

    #[must_use]
    pub fn slot_duration(self) -> Duration {
        self.slot_duration
    }

    #[must_use]
    pub fn snap_duration(self) -> Duration {
        self.snap_duration
    }

    #[must_use]
    pub fn snaps_per_slot(self) -> u32 {
        self.snaps_per_slot
    }

    #[must_use]
    pub fn min_time(self) -> Duration {
        self.min_time
    }

    #[must_use]
    pub fn max_time(self) -> Duration {
        self.max_time
    }

    #[must_use]
    pub fn label_interval(self) -> Duration {
        self.label_interval
    }

    /// `true` when the configured snap was replaced by the slot duration.
    #[must_use]
    pub fn snap_fallback_applied(self) -> bool {
        self.snap_fallback_applied
    }

    /// Number of slats covering `[min_time, max_time)`; a partial trailing
    /// slot still gets its own slat.
    ///
    /// Never exceeds [`MAX_SLAT_COUNT`], including for geometry deserialized
    /// without validation.
    #[must_use]
    pub fn slat_count(self) -> usize {
        self.max_time
            .checked_sub(&self.min_time)
            .and_then(|span| ceil_div_millis(span, self.slot_duration))
            .map_or(0, |count| count.min(MAX_SLAT_COUNT))
    }

    /// Offset from the day start of snap cell `snap_index`, `None` when the
    /// offset is not representable.
    #[must_use]
    pub fn snap_index_to_time(self, snap_index: i64) -> Option<Duration> {
        let snaps = i32::try_from(snap_index).ok()?;
        self.snap_duration
            .checked_mul(snaps)?
            .checked_add(&self.min_time)
    }

    #[must_use]
    pub fn slats(self) -> Vec<SlatDescriptor> {
        (0..self.slat_count())
            .map(|index| {
                let since_min = self.slot_duration * index as i32;
                SlatDescriptor {
                    index,
                    time: self.min_time + since_min,
                    is_labeled: whole_divide_durations(since_min, self.label_interval).is_some(),
                }
            })
            .collect()
    }
}

/// `ceil(span / slot)` for a positive span and slot.
fn ceil_div_millis(span: Duration, slot: Duration) -> Option<usize> {
    let span = duration_to_millis(span);
    let slot = duration_to_millis(slot);
    if span <= 0 || slot <= 0 {
        return Some(0);
    }
    usize::try_from(span / slot + i64::from(span % slot != 0)).ok()
}

fn resolve_snap(slot_duration: Duration, snap_duration: Option<Duration>) -> (Duration, u32, bool) {
    let Some(snap_duration) = snap_duration else {
        return (slot_duration, 1, false);
    };

    match whole_divide_durations(slot_duration, snap_duration)
        .and_then(|count| u32::try_from(count).ok())
        .filter(|&count| count >= 1)
    {
        Some(snaps_per_slot) => (snap_duration, snaps_per_slot, false),
        None => {
            warn!(
                slot_ms = duration_to_millis(slot_duration),
                snap_ms = duration_to_millis(snap_duration),
                "snap duration does not evenly divide slot duration, snapping to slots"
            );
            (slot_duration, 1, true)
        }
    }
}

/// Picks the finest stock interval that spans more than one slot.
#[must_use]
pub fn compute_label_interval(slot_duration: Duration) -> Duration {
    STOCK_LABEL_INTERVALS_MS
        .iter()
        .rev()
        .map(|&millis| Duration::milliseconds(millis))
        .find(|&interval| {
            whole_divide_durations(interval, slot_duration).is_some_and(|slots| slots > 1)
        })
        .unwrap_or(slot_duration)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::compute_label_interval;

    #[test]
    fn label_interval_prefers_finest_multi_slot_interval() {
        assert_eq!(
            compute_label_interval(Duration::minutes(5)),
            Duration::minutes(15)
        );
        assert_eq!(
            compute_label_interval(Duration::minutes(30)),
            Duration::hours(1)
        );
    }

    #[test]
    fn label_interval_falls_back_to_slot() {
        assert_eq!(
            compute_label_interval(Duration::minutes(45)),
            Duration::minutes(45)
        );
        assert_eq!(compute_label_interval(Duration::hours(2)), Duration::hours(2));
    }
}
