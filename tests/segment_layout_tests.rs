use approx::assert_relative_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use timegrid_rs::GridError;
use timegrid_rs::core::{
    Axis, MeasuredRegions, PositionCache, Segment, SlotGeometry, TimeCoordinateMapper, TimeRange,
    compare_segments_by_start, compute_verticals, group_by_column, slice_range_into_columns,
};

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap()
}

fn day_starts() -> Vec<DateTime<Utc>> {
    vec![at(1, 0, 0), at(2, 0, 0)]
}

fn full_day_slots() -> SlotGeometry {
    SlotGeometry::resolve(
        Duration::hours(1),
        None,
        Duration::zero(),
        Duration::hours(24),
        None,
    )
    .expect("slots")
}

fn slat_cache() -> PositionCache {
    PositionCache::build(Axis::Vertical, &MeasuredRegions::uniform(0.0, 24, 40.0))
        .expect("slat cache")
}

#[test]
fn verticals_follow_start_and_end_offsets() {
    let cache = slat_cache();
    let mapper = TimeCoordinateMapper::new(&cache, full_day_slots());
    let segments = vec![Segment::new("standup", at(1, 9, 0), at(1, 10, 30), 0)];

    let positioned = compute_verticals(&segments, &day_starts(), &mapper, 0.0).expect("verticals");

    assert_eq!(positioned.len(), 1);
    assert_relative_eq!(positioned[0].verticals.top, 360.0);
    assert_relative_eq!(positioned[0].verticals.bottom, 420.0);
    assert_eq!(positioned[0].segment.id, "standup");
}

#[test]
fn zero_duration_segment_gets_minimum_height() {
    let cache = slat_cache();
    let mapper = TimeCoordinateMapper::new(&cache, full_day_slots());
    let segments = vec![Segment::new("ping", at(1, 9, 0), at(1, 9, 0), 0)];

    let positioned =
        compute_verticals(&segments, &day_starts(), &mapper, 15.0).expect("verticals");

    assert_relative_eq!(positioned[0].verticals.top, 360.0);
    assert_relative_eq!(positioned[0].verticals.bottom, 375.0);
}

#[test]
fn verticals_use_the_owning_column_day() {
    let cache = slat_cache();
    let mapper = TimeCoordinateMapper::new(&cache, full_day_slots());
    let segments = vec![Segment::new("review", at(2, 14, 0), at(2, 15, 0), 1)];

    let positioned = compute_verticals(&segments, &day_starts(), &mapper, 0.0).expect("verticals");

    assert_relative_eq!(positioned[0].verticals.top, 560.0);
    assert_relative_eq!(positioned[0].verticals.bottom, 600.0);
}

#[test]
fn unknown_column_is_out_of_range() {
    let cache = slat_cache();
    let mapper = TimeCoordinateMapper::new(&cache, full_day_slots());
    let segments = vec![Segment::new("ghost", at(1, 9, 0), at(1, 10, 0), 4)];

    let err = compute_verticals(&segments, &day_starts(), &mapper, 0.0).expect_err("bad column");
    assert!(matches!(err, GridError::IndexOutOfRange { index: 4, len: 2 }));
}

#[test]
fn placement_anchors_bottom_to_far_edge() {
    let cache = slat_cache();
    let mapper = TimeCoordinateMapper::new(&cache, full_day_slots());
    let segments = vec![Segment::new("standup", at(1, 9, 0), at(1, 10, 30), 0)];
    let positioned = compute_verticals(&segments, &day_starts(), &mapper, 0.0).expect("verticals");

    let placement = positioned[0].verticals.placement(cache.total_extent());
    assert_relative_eq!(placement.top_offset, 360.0);
    assert_relative_eq!(placement.distance_from_far_edge, 540.0);
}

#[test]
fn grouping_partitions_by_column_and_orders_each_lane() {
    let segments = vec![
        Segment::new("late", at(1, 15, 0), at(1, 16, 0), 0),
        Segment::new("tuesday", at(2, 9, 0), at(2, 10, 0), 1),
        Segment::new("early", at(1, 8, 0), at(1, 9, 0), 0),
        Segment::new("early-long", at(1, 8, 0), at(1, 11, 0), 0),
        Segment::new("stray", at(1, 8, 0), at(1, 9, 0), 5),
    ];

    let lanes = group_by_column(segments.clone(), 2, compare_segments_by_start);
    let ids: Vec<Vec<&str>> = lanes
        .iter()
        .map(|lane| lane.iter().map(|s| s.id.as_str()).collect())
        .collect();

    assert_eq!(ids, vec![vec!["early-long", "early", "late"], vec!["tuesday"]]);

    let again = group_by_column(segments, 2, compare_segments_by_start);
    assert_eq!(lanes, again);
}

#[test]
fn grouping_accepts_a_custom_order() {
    let segments = vec![
        Segment::new("b", at(1, 8, 0), at(1, 9, 0), 0),
        Segment::new("a", at(1, 10, 0), at(1, 11, 0), 0),
    ];

    let lanes = group_by_column(segments, 1, |x: &Segment, y: &Segment| x.id.cmp(&y.id));
    assert_eq!(lanes[0][0].id, "a");
}

#[test]
fn slicing_splits_ranges_across_midnight() {
    let range = TimeRange::new(at(1, 22, 0), at(2, 2, 0));
    let segments = slice_range_into_columns("overnight", range, &day_starts(), full_day_slots());

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].column, 0);
    assert_eq!(segments[0].start, at(1, 22, 0));
    assert_eq!(segments[0].end, at(2, 0, 0));
    assert!(segments[0].is_start);
    assert!(!segments[0].is_end);

    assert_eq!(segments[1].column, 1);
    assert_eq!(segments[1].start, at(2, 0, 0));
    assert_eq!(segments[1].end, at(2, 2, 0));
    assert!(!segments[1].is_start);
    assert!(segments[1].is_end);
}

#[test]
fn slicing_clips_to_visible_window() {
    let slots = SlotGeometry::resolve(
        Duration::hours(1),
        None,
        Duration::hours(8),
        Duration::hours(18),
        None,
    )
    .expect("slots");
    let range = TimeRange::new(at(1, 6, 0), at(1, 9, 0));

    let segments = slice_range_into_columns("early", range, &day_starts(), slots);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, at(1, 8, 0));
    assert!(!segments[0].is_start);
    assert!(segments[0].is_end);

    let hidden = TimeRange::new(at(1, 19, 0), at(1, 20, 0));
    assert!(slice_range_into_columns("late", hidden, &day_starts(), slots).is_empty());
}
