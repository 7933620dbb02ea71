use chrono::Duration;
use timegrid_rs::core::{Axis, MeasuredRegions, PositionCache, SlotGeometry, TimeCoordinateMapper};
use proptest::prelude::*;

fn half_hour_slots() -> SlotGeometry {
    SlotGeometry::resolve(Duration::minutes(30), None, Duration::zero(), Duration::hours(24), None)
        .expect("valid slots")
}

proptest! {
    #[test]
    fn time_to_pixel_is_monotonic_and_bounded(
        extents in prop::collection::vec(0.0f64..80.0, 48),
        a in -120i64..1_600,
        b in -120i64..1_600
    ) {
        let slats = PositionCache::build(Axis::Vertical, &MeasuredRegions::contiguous(0.0, &extents))
            .expect("build slats");
        let mapper = TimeCoordinateMapper::new(&slats, half_hour_slots());

        let (early, late) = (a.min(b), a.max(b));
        let early_px = mapper.time_to_pixel(Duration::minutes(early));
        let late_px = mapper.time_to_pixel(Duration::minutes(late));

        prop_assert!(early_px <= late_px + 1e-9);
        prop_assert!(early_px >= 0.0);
        prop_assert!(late_px <= slats.total_extent() + 1e-9);
    }

    #[test]
    fn slot_boundaries_land_on_slat_offsets(
        extents in prop::collection::vec(1.0f64..80.0, 48),
        slat in 0usize..48
    ) {
        let slats = PositionCache::build(Axis::Vertical, &MeasuredRegions::contiguous(0.0, &extents))
            .expect("build slats");
        let mapper = TimeCoordinateMapper::new(&slats, half_hour_slots());

        let px = mapper.time_to_pixel(Duration::minutes(30 * slat as i64));
        let expected = slats.index_to_offset(slat).expect("offset");
        prop_assert!((px - expected).abs() <= 1e-9);
    }
}
