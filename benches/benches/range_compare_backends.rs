// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_range::{Backend, FlatVec, Point, RangeTree, Rectangle};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

fn gen_grid_points_i64(n: usize, cell: i64) -> Vec<Point<i64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n as i64 {
        for x in 0..n as i64 {
            out.push(Point::new(x * cell, y * cell));
        }
    }
    out
}

fn gen_random_points(count: usize, extent: f64, seed: u64) -> Vec<Point<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.r#gen::<f64>() * extent, rng.r#gen::<f64>() * extent))
        .collect()
}

fn gen_queries(count: usize, extent: f64, side: f64, seed: u64) -> Vec<Rectangle<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x0 = rng.r#gen::<f64>() * (extent - side);
            let y0 = rng.r#gen::<f64>() * (extent - side);
            Rectangle::from_coords(x0, y0, x0 + side, y0 + side)
        })
        .collect()
}

fn build<B: Backend<f64> + Default>(points: &[Point<f64>]) -> B {
    let mut b = B::default();
    for p in points {
        b.add(*p);
    }
    b
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32usize, 64, 128] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("range_tree_add_n{}", n), |b| {
            b.iter(|| black_box(build::<RangeTree<f64>>(&points)));
        });
        group.bench_function(format!("range_tree_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| black_box(RangeTree::from_points(pts)),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("flatvec_add_n{}", n), |b| {
            b.iter(|| black_box(build::<FlatVec<f64>>(&points)));
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let points = gen_random_points(16_384, 2000.0, 0x5EED_0001);
    let queries = gen_queries(256, 2000.0, 100.0, 0x5EED_0002);
    let tree = build::<RangeTree<f64>>(&points);
    let flat = build::<FlatVec<f64>>(&points);
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("range_tree_report", |b| {
        b.iter(|| {
            let total: usize = queries.iter().map(|q| tree.query_rect(q).count()).sum();
            black_box(total);
        });
    });
    group.bench_function("range_tree_count", |b| {
        b.iter(|| {
            let total: usize = queries.iter().map(|q| tree.count_rect(q)).sum();
            black_box(total);
        });
    });
    group.bench_function("flatvec_report", |b| {
        b.iter(|| {
            let total: usize = queries.iter().map(|q| flat.query_rect(q).count()).sum();
            black_box(total);
        });
    });
    group.finish();
}

fn bench_update_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_heavy_i64");
    let points = gen_grid_points_i64(64, 10);
    group.bench_function("range_tree_remove_then_add", |b| {
        b.iter_batched(
            || RangeTree::<i64>::from_points(points.iter().copied()),
            |mut tree| {
                for (j, p) in points.iter().enumerate() {
                    tree.remove(*p);
                    let shift = (j as i64 % 5) - 2;
                    tree.add(Point::new(p.x + shift, p.y));
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_update_heavy);
criterion_main!(benches);
