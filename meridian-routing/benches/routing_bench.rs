//! Routing map lookup benchmarks.
//!
//! Measures point lookup and overlap resolution across map sizes, since
//! both run on the hot path of every routed request.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meridian_core::{EffectiveKey, KeyRange, QueryRange};
use meridian_routing::RoutingMap;

/// Builds a complete map of `ranges` ranges over fixed-width hex boundaries.
fn build_map(ranges: usize) -> RoutingMap<u64> {
    let pairs: Vec<(KeyRange, u64)> = (0..ranges)
        .map(|index| {
            let min = if index == 0 {
                EffectiveKey::MIN
            } else {
                EffectiveKey::new(format!("{index:08x}"))
            };
            let max = if index == ranges - 1 {
                EffectiveKey::MAX
            } else {
                EffectiveKey::new(format!("{:08x}", index + 1))
            };
            (KeyRange::new(format!("{index}"), min, max), index as u64)
        })
        .collect();

    RoutingMap::try_create_complete(pairs, "bench-snapshot")
        .expect("bench ranges do not overlap")
        .expect("bench ranges are complete")
}

/// Random probe keys landing uniformly across the map.
fn probe_keys(ranges: usize, count: usize) -> Vec<EffectiveKey> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let bucket = rng.gen_range(0..ranges);
            EffectiveKey::new(format!("{bucket:08x}7"))
        })
        .collect()
}

fn bench_point_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_lookup");

    for ranges in [16_usize, 256, 4096] {
        let map = build_map(ranges);
        let keys = probe_keys(ranges, 1024);

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ranges), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(map.range_by_effective_partition_key(black_box(key)));
                }
            });
        });
    }

    group.finish();
}

fn bench_overlap_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_resolution");

    for ranges in [256_usize, 4096] {
        let map = build_map(ranges);
        // Queries each spanning roughly eight ranges.
        let mut rng = StdRng::seed_from_u64(7);
        let queries: Vec<QueryRange> = (0..64)
            .map(|_| {
                let start = rng.gen_range(0..ranges - 8);
                QueryRange::half_open(
                    format!("{start:08x}"),
                    format!("{:08x}", start + 8),
                )
            })
            .collect();

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ranges), &queries, |b, queries| {
            b.iter(|| black_box(map.overlapping_ranges(black_box(queries))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_point_lookup, bench_overlap_resolution);
criterion_main!(benches);
