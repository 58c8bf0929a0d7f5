// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kdtree::{Aabb2D, KdTree, Point2D, PointIndex, PointSet};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, seed: u64) -> Vec<Point2D> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point2D::new(rng.next_f64(), rng.next_f64()))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point2D> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64(), rng.next_f64()));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point2D::new(
                (cx + dx).clamp(0.0, 1.0),
                (cy + dy).clamp(0.0, 1.0),
            ));
        }
    }
    out
}

/// Points along the diagonal in increasing order: the tree degenerates into a chain.
fn gen_sorted_diagonal(count: usize) -> Vec<Point2D> {
    (0..count)
        .map(|i| {
            let v = i as f64 / count as f64;
            Point2D::new(v, v)
        })
        .collect()
}

fn build<I: PointIndex + Default>(points: &[Point2D]) -> I {
    let mut idx = I::default();
    for &p in points {
        idx.insert(p);
    }
    idx
}

fn bench_insert<I: PointIndex + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{name}_insert"));
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_random_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| black_box(build::<I>(&points).len()))
        });
    }
    group.finish();
}

fn bench_range<I: PointIndex + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{name}_range"));
    for &n in &[1_000usize, 10_000, 100_000] {
        let idx: I = build(&gen_random_points(n, 0xFACE_FEED_CAFE_BABE));
        group.bench_function(format!("many_small_rects_n{}", n), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 / 16.0;
                    let y = (q / 16) as f64 / 16.0;
                    total += idx.range(Aabb2D::from_xywh(x, y, 0.05, 0.05)).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_nearest<I: PointIndex + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{name}_nearest"));
    let queries = gen_random_points(256, 0xBADC_F00D_1234_5678);
    for &n in &[1_000usize, 10_000, 100_000] {
        let idx: I = build(&gen_random_points(n, 0xFACE_FEED_CAFE_BABE));
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(idx.nearest(*q));
                }
            })
        });
    }
    let clustered: I = build(&gen_clustered_points(16, 1024, 0.05));
    group.bench_function("clustered", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(clustered.nearest(*q));
            }
        })
    });
    group.finish();
}

fn bench_pointset(c: &mut Criterion) {
    bench_insert::<PointSet>(c, "pointset");
    bench_range::<PointSet>(c, "pointset");
    bench_nearest::<PointSet>(c, "pointset");
}

fn bench_kdtree(c: &mut Criterion) {
    bench_insert::<KdTree>(c, "kdtree");
    bench_range::<KdTree>(c, "kdtree");
    bench_nearest::<KdTree>(c, "kdtree");
}

fn bench_kdtree_degenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_degenerate");
    let points = gen_sorted_diagonal(4_096);
    group.bench_function("sorted_insert_then_query", |b| {
        b.iter_batched(
            KdTree::new,
            |mut tree| {
                for p in points.iter().copied() {
                    tree.insert(p);
                }
                black_box(tree.nearest(Point2D::new(1.0, 1.0)));
                black_box(tree.range(Aabb2D::from_xywh(0.4, 0.4, 0.1, 0.1)).len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_pointset,
    bench_kdtree,
    bench_kdtree_degenerate,
);
criterion_main!(benches);
