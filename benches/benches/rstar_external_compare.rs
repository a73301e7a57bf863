// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_range::{Backend, Point, RangeTree, Rectangle};

use rstar::{AABB, RTree};

fn gen_random_points(count: usize, extent: f64) -> Vec<Point<f64>> {
    let mut rng = SmallRng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.r#gen::<f64>() * extent, rng.r#gen::<f64>() * extent))
        .collect()
}

fn to_rstar_points(v: &[Point<f64>]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare_f64");
    for &n in &[4096usize, 16_384] {
        let points = gen_random_points(n, 2000.0);
        let query = Rectangle::from_coords(500.0, 500.0, 900.0, 900.0);
        let envelope = AABB::from_corners([500.0, 500.0], [900.0, 900.0]);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| {
                    let tree = RangeTree::from_points(pts);
                    black_box(tree.query_rect(&query).count());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_bulk_load_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.locate_in_envelope(&envelope).count());
                },
                BatchSize::SmallInput,
            );
        });

        let tree = RangeTree::from_points(points.iter().copied());
        let rtree = RTree::bulk_load(to_rstar_points(&points));
        group.bench_function(format!("understory_query_only_n{}", n), |b| {
            b.iter(|| black_box(tree.query_rect(&query).count()));
        });
        group.bench_function(format!("understory_count_only_n{}", n), |b| {
            b.iter(|| black_box(tree.count_rect(&query)));
        });
        group.bench_function(format!("rstar_query_only_n{}", n), |b| {
            b.iter(|| black_box(rtree.locate_in_envelope(&envelope).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);
