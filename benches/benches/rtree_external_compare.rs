// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kdtree::{Aabb2D, KdTree, Point2D};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize) -> Vec<Point2D> {
    let mut out = Vec::with_capacity(n * n);
    let step = 1.0 / n as f64;
    for y in 0..n {
        for x in 0..n {
            // Deterministic jitter so the grid is not perfectly regular.
            let jx = ((x * 7 + y * 3) % 5) as f64 * step * 0.1;
            let jy = ((x * 5 + y * 11) % 7) as f64 * step * 0.1;
            out.push(Point2D::new(x as f64 * step + jx, y as f64 * step + jy));
        }
    }
    out
}

fn to_rstar_points(v: &[Point2D]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n);
        let rect = Aabb2D::new(0.25, 0.25, 0.5, 0.5);
        let query = Point2D::new(0.333, 0.777);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("kdtree_build_query_n{}", n), |b| {
            b.iter_batched(
                KdTree::new,
                |mut tree| {
                    for p in points.iter().copied() {
                        tree.insert(p);
                    }
                    black_box(tree.range(rect).len());
                    black_box(tree.nearest(query));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
                    black_box(tree.locate_in_envelope(&aabb).count());
                    black_box(tree.nearest_neighbor(&[query.x, query.y]));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_insert_n{}", n), |b| {
            b.iter_batched(
                RTree::<[f64; 2]>::new,
                |mut tree| {
                    for p in &points {
                        tree.insert([p.x, p.y]);
                    }
                    let aabb = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
                    black_box(tree.locate_in_envelope(&aabb).count());
                    black_box(tree.nearest_neighbor(&[query.x, query.y]));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
