// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! KdTree basics.
//!
//! Insert points, query them, and compare with the brute-force `PointSet`.
//! Set `RUST_LOG=warn` to see rejected input being logged.
//!
//! Run:
//! - `cargo run -p understory_demos --example kdtree_basics`

use understory_kdtree::{Aabb2D, KdTree, Point2D, PointIndex, PointSet};

fn report(name: &str, idx: &dyn PointIndex) {
    let mut hits = idx.range(Aabb2D::new(0.0, 0.0, 0.6, 0.6));
    hits.sort();
    println!(
        "{name}: len={} contains(0.2,0.8)={} range={hits:?} nearest(0.5,0.6)={:?}",
        idx.len(),
        idx.contains(Point2D::new(0.2, 0.8)),
        idx.nearest(Point2D::new(0.5, 0.6)),
    );
}

fn main() {
    env_logger::init();

    let input = [(0.5, 0.5), (0.2, 0.8), (0.9, 0.1), (0.5, 0.5), (f64::NAN, 0.3)];

    let mut tree = KdTree::new();
    let mut set = PointSet::new();
    for (x, y) in input {
        match Point2D::try_new(x, y) {
            Ok(p) => {
                tree.insert(p);
                set.insert(p);
            }
            Err(err) => log::warn!("skipping ({x}, {y}): {err}"),
        }
    }

    report("kdtree", &tree);
    report("pointset", &set);
    println!("{tree:?} {set:?}");
}
