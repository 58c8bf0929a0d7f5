// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Export a tree's splits as drawable Kurbo primitives.
//!
//! Each node yields its point and its splitting segment clipped to the node's
//! region: red for vertical splits, blue for horizontal ones. The unit square is
//! mapped to a 512×512 canvas with y pointing down.
//!
//! Run:
//! - `cargo run -p understory_demos --example kdtree_splits`

use kurbo::{Affine, Circle, Line, Rect, Shape};
use understory_kdtree::{Aabb2D, KdTree, Orientation, Point2D};

fn main() {
    env_logger::init();

    let tree: KdTree = [
        (0.7, 0.2),
        (0.5, 0.4),
        (0.2, 0.3),
        (0.4, 0.7),
        (0.9, 0.6),
    ]
    .into_iter()
    .map(|(x, y)| Point2D::new(x, y))
    .collect();

    let to_canvas = Affine::new([512.0, 0.0, 0.0, -512.0, 0.0, 512.0]);
    let frame: Rect = to_canvas.transform_rect_bbox(Aabb2D::UNIT_SQUARE.into());
    println!("canvas {frame:?}");

    for split in tree.splits() {
        let color = match split.orientation {
            Orientation::Vertical => "red",
            Orientation::Horizontal => "blue",
        };
        let line: Line = to_canvas * split.to_line();
        let dot = Circle::new(to_canvas * kurbo::Point::from(split.point), 4.0);
        println!(
            "{color:>4} line {:?} -> {:?}  point {:?} (dot area {:.1})",
            line.p0,
            line.p1,
            dot.center,
            dot.area()
        );
    }
}
