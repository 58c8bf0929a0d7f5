// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point index trait shared by the tree and the brute-force baseline.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{Aabb2D, Point2D};

/// A set of distinct points answering membership, range, and nearest-neighbor queries.
///
/// Implementations are interchangeable: for the same insertion sequence they
/// agree on `len`, `contains`, `range` (as a set), and the distance of `nearest`.
pub trait PointIndex {
    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// Whether no points are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a point. Returns `false` if an equal point was already present.
    fn insert(&mut self, p: Point2D) -> bool;

    /// Whether a point with exactly these coordinates is stored.
    fn contains(&self, p: Point2D) -> bool;

    /// All stored points inside or on the boundary of `rect`, in no particular order.
    fn range(&self, rect: Aabb2D) -> Vec<Point2D>;

    /// A stored point closest to `p`, or `None` when empty.
    fn nearest(&self, p: Point2D) -> Option<Point2D>;

    /// Iterate over every stored point.
    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point2D> + 'a>;
}
