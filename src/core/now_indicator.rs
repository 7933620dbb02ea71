use chrono::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::position_cache::PositionCache;
use crate::core::primitives::DateMarker;
use crate::core::segment::slice_range_into_columns;
use crate::core::time_mapper::TimeCoordinateMapper;
use crate::core::types::TimeRange;

const REFRESH_UNIT_MS: i64 = 60_000;

/// Marker line drawn across one visible column at the current time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NowIndicatorLine {
    pub column: usize,
    pub top: f64,
    pub left: f64,
    pub right: f64,
}

/// Arrow drawn on the time axis gutter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisArrow {
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NowIndicatorPlacement {
    pub now: DateMarker,
    pub offset: f64,
    pub lines: SmallVec<[NowIndicatorLine; 7]>,
    pub arrow: AxisArrow,
}

pub struct NowIndicatorPositioner<'a> {
    mapper: TimeCoordinateMapper<'a>,
    columns: &'a PositionCache,
}

impl<'a> NowIndicatorPositioner<'a> {
    #[must_use]
    pub fn new(mapper: TimeCoordinateMapper<'a>, columns: &'a PositionCache) -> Self {
        Self { mapper, columns }
    }

    /// Places the indicator, or returns `None` when `now` is outside every
    /// column's visible window.
    ///
    /// The offset is measured from `now`'s own day start and shared by every
    /// column whose window contains `now`.
    #[must_use]
    pub fn position(&self, now: DateMarker, day_starts: &[DateMarker]) -> Option<NowIndicatorPlacement> {
        let instant = TimeRange::new(now, now.checked_add_signed(Duration::milliseconds(1))?);
        let hits = slice_range_into_columns("now", instant, day_starts, self.mapper.slots());
        if hits.is_empty() {
            return None;
        }
        let offset = self.mapper.date_to_pixel(now, None);

        let lines = hits
            .iter()
            .filter_map(|hit| {
                let entry = self.columns.entry(hit.column)?;
                Some(NowIndicatorLine {
                    column: hit.column,
                    top: offset,
                    left: entry.offset,
                    right: entry.far_edge(),
                })
            })
            .collect();

        Some(NowIndicatorPlacement {
            now,
            offset,
            lines,
            arrow: AxisArrow { top: offset },
        })
    }
}

/// Time left until the indicator should be repositioned (next minute).
#[must_use]
pub fn next_refresh_delay(now: DateMarker) -> Duration {
    let into_unit = now.timestamp_millis().rem_euclid(REFRESH_UNIT_MS);
    Duration::milliseconds(REFRESH_UNIT_MS - into_unit)
}
