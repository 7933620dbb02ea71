use approx::assert_relative_eq;
use chrono::{Duration, TimeZone, Utc};
use timegrid_rs::core::{
    Axis, MeasuredRegions, PositionCache, SlotGeometry, TimeCoordinateMapper,
};

fn hourly_slots(min_hours: i64, max_hours: i64) -> SlotGeometry {
    SlotGeometry::resolve(
        Duration::hours(1),
        None,
        Duration::hours(min_hours),
        Duration::hours(max_hours),
        None,
    )
    .expect("slots")
}

fn slats(extents: &[f64]) -> PositionCache {
    PositionCache::build(Axis::Vertical, &MeasuredRegions::contiguous(0.0, extents))
        .expect("slat cache")
}

#[test]
fn time_inside_slot_interpolates_linearly() {
    let cache = slats(&[50.0; 4]);
    let mapper = TimeCoordinateMapper::new(&cache, hourly_slots(0, 4));

    assert_relative_eq!(mapper.time_to_pixel(Duration::zero()), 0.0);
    assert_relative_eq!(mapper.time_to_pixel(Duration::minutes(90)), 75.0);
    assert_relative_eq!(mapper.time_to_pixel(Duration::hours(4)), 200.0);
}

#[test]
fn unequal_slat_heights_use_their_own_extent() {
    let cache = slats(&[20.0, 80.0, 50.0, 50.0]);
    let mapper = TimeCoordinateMapper::new(&cache, hourly_slots(0, 4));

    assert_relative_eq!(mapper.time_to_pixel(Duration::minutes(90)), 60.0);
    assert_relative_eq!(mapper.time_to_pixel(Duration::minutes(30)), 10.0);
}

#[test]
fn times_outside_visible_window_saturate() {
    let cache = slats(&[50.0; 4]);
    let mapper = TimeCoordinateMapper::new(&cache, hourly_slots(8, 12));

    assert_relative_eq!(mapper.time_to_pixel(Duration::hours(7)), 0.0);
    assert_relative_eq!(mapper.time_to_pixel(Duration::hours(9)), 50.0);
    assert_relative_eq!(mapper.time_to_pixel(Duration::hours(13)), 200.0);
    assert_relative_eq!(mapper.time_to_pixel(Duration::hours(-3)), 0.0);
}

#[test]
fn date_to_pixel_defaults_to_the_moment_own_day() {
    let cache = slats(&[50.0; 24]);
    let mapper = TimeCoordinateMapper::new(&cache, hourly_slots(0, 24));
    let moment = Utc.with_ymd_and_hms(2024, 1, 1, 2, 15, 0).unwrap();

    assert_relative_eq!(mapper.date_to_pixel(moment, None), 112.5);
}

#[test]
fn explicit_day_start_covers_windows_past_midnight() {
    let cache = slats(&[10.0; 30]);
    let mapper = TimeCoordinateMapper::new(&cache, hourly_slots(0, 30));
    let previous_day = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let moment = Utc.with_ymd_and_hms(2024, 1, 2, 2, 0, 0).unwrap();

    assert_relative_eq!(mapper.date_to_pixel(moment, Some(previous_day)), 260.0);
    assert_relative_eq!(mapper.date_to_pixel(moment, None), 20.0);
}

#[test]
fn no_slats_maps_everything_to_zero() {
    let cache = PositionCache::zeros(Axis::Vertical, 0);
    let mapper = TimeCoordinateMapper::new(&cache, hourly_slots(0, 4));

    assert_relative_eq!(mapper.time_to_pixel(Duration::hours(2)), 0.0);
}

#[test]
fn zeroed_slats_map_everything_to_zero() {
    let cache = PositionCache::zeros(Axis::Vertical, 4);
    let mapper = TimeCoordinateMapper::new(&cache, hourly_slots(0, 4));

    assert_relative_eq!(mapper.time_to_pixel(Duration::hours(2)), 0.0);
}
