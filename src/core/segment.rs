use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::primitives::DateMarker;
use crate::core::slot_geometry::SlotGeometry;
use crate::core::time_mapper::TimeCoordinateMapper;
use crate::core::types::TimeRange;
use crate::error::{GridError, GridResult};

/// Time-ranged region anchored to one day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub start: DateMarker,
    pub end: DateMarker,
    pub column: usize,
    /// The segment begins where its source range begins (not clipped).
    pub is_start: bool,
    /// The segment ends where its source range ends (not clipped).
    pub is_end: bool,
}

impl Segment {
    #[must_use]
    pub fn new(id: impl Into<String>, start: DateMarker, end: DateMarker, column: usize) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            column,
            is_start: true,
            is_end: true,
        }
    }

    #[must_use]
    pub fn with_clipping(mut self, is_start: bool, is_end: bool) -> Self {
        self.is_start = is_start;
        self.is_end = is_end;
        self
    }

    #[must_use]
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }
}

/// Vertical pixel extent of a segment inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentVerticals {
    pub top: f64,
    pub bottom: f64,
}

impl SegmentVerticals {
    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Anchors the segment by its leading edge and by the distance of its
    /// trailing edge from the container's far edge.
    #[must_use]
    pub fn placement(self, container_extent: f64) -> VerticalPlacement {
        VerticalPlacement {
            top_offset: self.top,
            distance_from_far_edge: container_extent - self.bottom,
        }
    }
}

/// Style pair handed to the rendering collaborator.
///
/// The container may resize its own height without moving the segment's
/// trailing anchor. `distance_from_far_edge` is negative when a minimum-height
/// segment overhangs the last slat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalPlacement {
    pub top_offset: f64,
    pub distance_from_far_edge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedSegment {
    pub segment: Segment,
    pub verticals: SegmentVerticals,
}

/// Access to the underlying [`Segment`] of a layout item.
pub trait AsSegment {
    fn as_segment(&self) -> &Segment;
}

impl AsSegment for Segment {
    fn as_segment(&self) -> &Segment {
        self
    }
}

impl AsSegment for PositionedSegment {
    fn as_segment(&self) -> &Segment {
        &self.segment
    }
}

/// Computes `top`/`bottom` for each segment against its column's day start.
///
/// `bottom` never ends up closer than `min_event_height` to `top`, so very
/// short and zero-duration segments stay visible.
pub fn compute_verticals(
    segments: &[Segment],
    day_starts: &[DateMarker],
    mapper: &TimeCoordinateMapper<'_>,
    min_event_height: f64,
) -> GridResult<Vec<PositionedSegment>> {
    segments
        .iter()
        .map(|segment| {
            let day_start =
                day_starts
                    .get(segment.column)
                    .copied()
                    .ok_or(GridError::IndexOutOfRange {
                        index: segment.column,
                        len: day_starts.len(),
                    })?;
            let top = mapper.date_to_pixel(segment.start, Some(day_start));
            let end_px = mapper.date_to_pixel(segment.end, Some(day_start));
            let bottom = end_px.max(top + min_event_height);
            trace!(id = %segment.id, column = segment.column, top, bottom, "segment verticals");
            Ok(PositionedSegment {
                segment: segment.clone(),
                verticals: SegmentVerticals { top, bottom },
            })
        })
        .collect()
}

/// Partitions segments into `column_count` lanes, each sorted with `compare`.
///
/// The sort is stable, so identical input always yields identical lanes.
pub fn group_by_column<S, F>(
    segments: impl IntoIterator<Item = S>,
    column_count: usize,
    mut compare: F,
) -> Vec<Vec<S>>
where
    S: AsSegment,
    F: FnMut(&S, &S) -> Ordering,
{
    let mut columns: Vec<Vec<S>> = (0..column_count).map(|_| Vec::new()).collect();
    for item in segments {
        let column = item.as_segment().column;
        match columns.get_mut(column) {
            Some(lane) => lane.push(item),
            None => warn!(
                id = %item.as_segment().id,
                column,
                column_count,
                "dropping segment outside the grid's columns"
            ),
        }
    }
    for lane in &mut columns {
        lane.sort_by(&mut compare);
    }
    columns
}

/// Default segment order: earlier start first, then longer first, then id.
pub fn compare_segments_by_start<S: AsSegment>(a: &S, b: &S) -> Ordering {
    let (a, b) = (a.as_segment(), b.as_segment());
    a.start
        .cmp(&b.start)
        .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
        .then_with(|| a.id.cmp(&b.id))
}

/// Splits an absolute time range into per-column segments.
///
/// Each column shows `[day + min_time, day + max_time)`; the range is
/// intersected with every such window and clipped edges clear the
/// `is_start`/`is_end` flags.
#[must_use]
pub fn slice_range_into_columns(
    id: &str,
    range: TimeRange,
    day_starts: &[DateMarker],
    slots: SlotGeometry,
) -> Vec<Segment> {
    day_starts
        .iter()
        .enumerate()
        .filter_map(|(column, &day_start)| {
            let window_start = day_start.checked_add_signed(slots.min_time())?;
            let window_end = day_start.checked_add_signed(slots.max_time())?;
            let start = range.start.max(window_start);
            let end = range.end.min(window_end);
            (start < end).then(|| {
                Segment::new(id, start, end, column)
                    .with_clipping(start == range.start, end == range.end)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{Segment, compare_segments_by_start};

    #[test]
    fn longer_segment_sorts_first_on_equal_start() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let short = Segment::new("a", start, start + Duration::minutes(30), 0);
        let long = Segment::new("b", start, start + Duration::hours(2), 0);
        assert!(compare_segments_by_start(&long, &short).is_lt());
    }
}
