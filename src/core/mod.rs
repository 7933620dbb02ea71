pub mod layout_session;
pub mod now_indicator;
pub mod position_cache;
pub mod primitives;
pub mod segment;
pub mod segment_stacking;
pub mod slot_geometry;
pub mod time_mapper;
pub mod types;

pub use layout_session::{GridGeometry, LayoutSession};
pub use now_indicator::{
    AxisArrow, NowIndicatorLine, NowIndicatorPlacement, NowIndicatorPositioner,
    next_refresh_delay,
};
pub use position_cache::{MeasureProvider, MeasuredRegions, PositionCache, PositionEntry};
pub use primitives::{
    DateMarker, duration_ratio, duration_to_millis, start_of_day, whole_divide_durations,
};
pub use segment::{
    AsSegment, PositionedSegment, Segment, SegmentVerticals, VerticalPlacement,
    compare_segments_by_start, compute_verticals, group_by_column, slice_range_into_columns,
};
pub use segment_stacking::{SegmentHorizontals, StackedSegment, stack_column, verticals_collide};
pub use slot_geometry::{
    MAX_SLAT_COUNT, MAX_VISIBLE_TIME_MS, MIN_VISIBLE_TIME_MS, SlatDescriptor, SlotGeometry,
    compute_label_interval,
};
pub use time_mapper::TimeCoordinateMapper;
pub use types::{Axis, PixelRect, RegionBounds, TimeRange};
