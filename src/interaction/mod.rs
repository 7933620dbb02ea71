use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DateMarker, GridGeometry, PixelRect, SlotGeometry, TimeRange};

/// Semantic result of a pointer hit on the grid.
///
/// `time_range` has snap granularity while `pixel_rect` covers the whole slat
/// row: selection is logical at snap resolution, highlighting is visual at
/// slot resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    pub column: usize,
    pub time_range: TimeRange,
    pub pixel_rect: PixelRect,
}

impl HitResult {
    /// Same column and same snap cell.
    #[must_use]
    pub fn is_same_cell(&self, other: &HitResult) -> bool {
        self.column == other.column && self.time_range == other.time_range
    }
}

/// Pointer-to-time translation over one measured layout.
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'a> {
    geometry: GridGeometry<'a>,
    slots: SlotGeometry,
    day_starts: &'a [DateMarker],
}

impl<'a> HitTester<'a> {
    #[must_use]
    pub fn new(geometry: GridGeometry<'a>, slots: SlotGeometry, day_starts: &'a [DateMarker]) -> Self {
        Self {
            geometry,
            slots,
            day_starts,
        }
    }

    /// Resolves `(x, y)`, relative to the grid origin, into a hit.
    ///
    /// Returns `None` when either coordinate misses every region; a column
    /// without a slat (or the reverse) is not a meaningful hit.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitResult> {
        let column = self.geometry.columns.position_to_index(x)?;
        let slat = self.geometry.slats.position_to_index(y)?;
        let column_entry = self.geometry.columns.entry(column)?;
        let slat_entry = self.geometry.slats.entry(slat)?;
        if slat_entry.extent <= 0.0 {
            return None;
        }

        let Some(&day_start) = self.day_starts.get(column) else {
            debug!(column, day_columns = self.day_starts.len(), "hit column has no day");
            return None;
        };

        let snaps_per_slot = self.slots.snaps_per_slot();
        let partial = (y - slat_entry.offset) / slat_entry.extent;
        let local_snap = ((partial * f64::from(snaps_per_slot)).floor() as u32)
            .min(snaps_per_slot - 1);
        let snap_index = slat as i64 * i64::from(snaps_per_slot) + i64::from(local_snap);

        let start = day_start.checked_add_signed(self.slots.snap_index_to_time(snap_index)?)?;
        let end = start.checked_add_signed(self.slots.snap_duration())?;
        trace!(x, y, column, slat, snap_index, "grid hit");

        Some(HitResult {
            column,
            time_range: TimeRange::new(start, end),
            pixel_rect: PixelRect {
                left: column_entry.offset,
                right: column_entry.far_edge(),
                top: slat_entry.offset,
                bottom: slat_entry.far_edge(),
            },
        })
    }
}

/// Time span covered by a drag from `anchor` to `current`.
///
/// The span runs from the earlier cell's start to the later cell's end, so
/// hits in different columns produce a continuous range across days.
#[must_use]
pub fn selection_between(anchor: &HitResult, current: &HitResult) -> TimeRange {
    TimeRange::new(
        anchor.time_range.start.min(current.time_range.start),
        anchor.time_range.end.max(current.time_range.end),
    )
}
