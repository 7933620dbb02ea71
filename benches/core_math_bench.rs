use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timegrid_rs::core::{
    Axis, MeasuredRegions, PositionCache, Segment, SlotGeometry, TimeCoordinateMapper,
    compare_segments_by_start, compute_verticals, stack_column,
};
use timegrid_rs::render::NullRenderer;
use timegrid_rs::{TimeGridConfig, TimeGridEngine};

fn five_minute_slots() -> SlotGeometry {
    SlotGeometry::resolve(
        Duration::minutes(5),
        Some(Duration::minutes(1)),
        Duration::zero(),
        Duration::hours(24),
        None,
    )
    .expect("valid slots")
}

fn uneven_extents(count: usize) -> Vec<f64> {
    (0..count).map(|i| 18.0 + (i % 7) as f64 * 1.5).collect()
}

fn bench_position_lookup_10k(c: &mut Criterion) {
    let cache = PositionCache::build(
        Axis::Vertical,
        &MeasuredRegions::contiguous(0.0, &uneven_extents(10_000)),
    )
    .expect("valid cache");
    let total = cache.total_extent();

    c.bench_function("position_lookup_10k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for step in 0..256 {
                let position = total * f64::from(step) / 256.0;
                if cache.position_to_index(black_box(position)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_engine_hit_test_week(c: &mut Criterion) {
    let config = TimeGridConfig::new(Duration::minutes(5)).with_snap_duration(Duration::minutes(1));
    let mut engine = TimeGridEngine::new(NullRenderer::default(), config).expect("engine init");
    let monday = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
    engine.set_day_columns((0..7).map(|d| monday + Duration::days(d)).collect());

    let slat_count = engine.slots().slat_count();
    engine
        .rebuild_positions(
            &MeasuredRegions::uniform(64.0, 7, 180.0),
            &MeasuredRegions::contiguous(0.0, &uneven_extents(slat_count)),
        )
        .expect("rebuild positions");

    c.bench_function("engine_hit_test_week", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for step in 0..512 {
                let x = f64::from(step % 64) * 19.5;
                let y = f64::from(step) * 11.25;
                if let Ok(Some(hit)) = engine.hit_test(black_box(x), black_box(y)) {
                    hits += hit.column;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_segment_layout_2k(c: &mut Criterion) {
    let slots = five_minute_slots();
    let slats = PositionCache::build(
        Axis::Vertical,
        &MeasuredRegions::contiguous(0.0, &uneven_extents(slots.slat_count())),
    )
    .expect("valid slats");
    let mapper = TimeCoordinateMapper::new(&slats, slots);
    let day = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();

    let segments: Vec<Segment> = (0..2_000)
        .map(|i| {
            let start = day + Duration::minutes((i * 37) % 1_380);
            let length = Duration::minutes(15 + (i % 9) * 10);
            Segment::new(format!("seg-{i}"), start, start + length, 0)
        })
        .collect();

    c.bench_function("segment_layout_2k", |b| {
        b.iter(|| {
            let positioned = compute_verticals(black_box(&segments), &[day], &mapper, 12.0)
                .expect("verticals should succeed");
            let stacked = stack_column(positioned, compare_segments_by_start);
            black_box(stacked.len())
        })
    });
}

criterion_group!(
    benches,
    bench_position_lookup_10k,
    bench_engine_hit_test_week,
    bench_segment_layout_2k
);
criterion_main!(benches);
