use tracing::debug;

use crate::core::{
    DateMarker, PositionedSegment, Segment, StackedSegment, TimeCoordinateMapper, TimeRange,
    compare_segments_by_start, compute_verticals, group_by_column, slice_range_into_columns,
    stack_column,
};
use crate::error::{GridError, GridResult};
use crate::render::{PlacementFrame, Renderer, SegmentPrimitive};

use super::TimeGridEngine;

impl<R: Renderer> TimeGridEngine<R> {
    pub(super) fn time_mapper(&self) -> GridResult<TimeCoordinateMapper<'_>> {
        let slats = self
            .session
            .slats()
            .ok_or(GridError::CacheNotBuilt { cache: "slat" })?;
        Ok(TimeCoordinateMapper::new(slats, self.slots))
    }

    /// Vertical pixel offset of `moment` within its own day.
    pub fn date_to_pixel(&self, moment: DateMarker) -> GridResult<f64> {
        Ok(self.time_mapper()?.date_to_pixel(moment, None))
    }

    /// Vertical pixel offset of `moment` inside `column`, which matters when
    /// the visible window extends past midnight.
    pub fn date_to_pixel_in_column(&self, moment: DateMarker, column: usize) -> GridResult<f64> {
        let day_start = self
            .day_starts
            .get(column)
            .copied()
            .ok_or(GridError::IndexOutOfRange {
                index: column,
                len: self.day_starts.len(),
            })?;
        Ok(self.time_mapper()?.date_to_pixel(moment, Some(day_start)))
    }

    /// Splits an absolute range into per-column segments.
    #[must_use]
    pub fn slice_range(&self, id: &str, range: TimeRange) -> Vec<Segment> {
        slice_range_into_columns(id, range, &self.day_starts, self.slots)
    }

    pub fn compute_verticals(&self, segments: &[Segment]) -> GridResult<Vec<PositionedSegment>> {
        compute_verticals(
            segments,
            &self.day_starts,
            &self.time_mapper()?,
            self.config.min_event_height_px,
        )
    }

    /// Full vertical and horizontal layout, one lane per column, each in
    /// default segment order.
    pub fn layout_segments(&self, segments: &[Segment]) -> GridResult<Vec<Vec<StackedSegment>>> {
        let positioned = self.compute_verticals(segments)?;
        Ok(
            group_by_column(positioned, self.day_starts.len(), compare_segments_by_start)
                .into_iter()
                .map(|lane| stack_column(lane, compare_segments_by_start))
                .collect(),
        )
    }

    /// Lays out `segments` and hands their placements to the renderer.
    pub fn render_segments(&mut self, segments: &[Segment]) -> GridResult<()> {
        let lanes = self.layout_segments(segments)?;
        let container_extent = self.time_mapper()?.slats().total_extent();
        let frame = lanes
            .iter()
            .flatten()
            .fold(PlacementFrame::new(container_extent), |frame, stacked| {
                frame.with_segment(SegmentPrimitive::from_stacked(stacked, container_extent))
            });
        debug!(segments = frame.segments.len(), container_extent, "render segments");
        self.render_frame(&frame)
    }
}
