// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory KdTree: insert, membership, range, and nearest queries.

use understory_kdtree::{Aabb2D, KdTree, Point2D};

fn main() {
    let mut tree = KdTree::new();
    for (x, y) in [(0.5, 0.5), (0.2, 0.8), (0.9, 0.1)] {
        tree.insert(Point2D::new(x, y));
    }
    // Duplicates are ignored.
    let added = tree.insert(Point2D::new(0.5, 0.5));
    println!("len={} (duplicate added: {added})", tree.len());

    println!("contains (0.2,0.8): {}", tree.contains(Point2D::new(0.2, 0.8)));

    let hits = tree.range(Aabb2D::new(0.0, 0.0, 0.6, 0.6));
    println!("range [0,0]-[0.6,0.6]: {hits:?}");

    if let Some((p, d2)) = tree.nearest_with_distance(Point2D::new(0.5, 0.6)) {
        println!("nearest to (0.5,0.6): {p:?} at squared distance {d2}");
    }
}
