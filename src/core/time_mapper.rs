use chrono::Duration;

use crate::core::position_cache::PositionCache;
use crate::core::primitives::{DateMarker, duration_ratio, start_of_day};
use crate::core::slot_geometry::SlotGeometry;

/// Maps time-of-day durations onto the vertical slat axis.
///
/// Slats may have unequal heights, so a time inside a slot is interpolated
/// within that slat's own measured extent rather than a uniform row height.
#[derive(Debug, Clone, Copy)]
pub struct TimeCoordinateMapper<'a> {
    slats: &'a PositionCache,
    slots: SlotGeometry,
}

impl<'a> TimeCoordinateMapper<'a> {
    #[must_use]
    pub fn new(slats: &'a PositionCache, slots: SlotGeometry) -> Self {
        Self { slats, slots }
    }

    #[must_use]
    pub fn slots(&self) -> SlotGeometry {
        self.slots
    }

    #[must_use]
    pub fn slats(&self) -> &'a PositionCache {
        self.slats
    }

    /// Pixel offset of `time` (measured from the day start).
    ///
    /// Times before `min_time` saturate to 0 and times past the last slat
    /// saturate to its far edge.
    #[must_use]
    pub fn time_to_pixel(&self, time: Duration) -> f64 {
        let slat_count = self.slats.len();
        if slat_count == 0 {
            return 0.0;
        }

        let min_time = self.slots.min_time();
        let coverage = match time.checked_sub(&min_time) {
            Some(since_min) => duration_ratio(since_min, self.slots.slot_duration()),
            None if time < min_time => 0.0,
            None => slat_count as f64,
        }
        .clamp(0.0, slat_count as f64);
        let index = (coverage.floor() as usize).min(slat_count - 1);
        let fraction = coverage - index as f64;
        let entry = self.slats.entries()[index];

        (entry.offset + entry.extent * fraction)
            .max(0.0)
            .min(self.slats.total_extent())
    }

    /// Pixel offset of an absolute moment inside the column starting at
    /// `day_start`, or inside the moment's own day when `None`.
    #[must_use]
    pub fn date_to_pixel(&self, moment: DateMarker, day_start: Option<DateMarker>) -> f64 {
        let day_start = day_start.unwrap_or_else(|| start_of_day(moment));
        self.time_to_pixel(moment - day_start)
    }
}
