// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered-set backend with linear scans. Small and simple; the baseline the tree is checked against.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::PointIndex;
use crate::types::{Aabb2D, Point2D};

/// Ordered, duplicate-free point set answering queries by full scan.
///
/// Iteration order is the [`Point2D`] total order (x, then y). `nearest` keeps the
/// first minimum in that order.
#[derive(Clone, Default)]
pub struct PointSet {
    points: BTreeSet<Point2D>,
}

impl PointSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Insert a point; returns `false` if it was already present.
    pub fn insert(&mut self, p: Point2D) -> bool {
        self.points.insert(p)
    }

    /// Whether a point with exactly these coordinates is in the set.
    pub fn contains(&self, p: Point2D) -> bool {
        self.points.contains(&p)
    }

    /// All points inside or on the boundary of `rect`, in set order.
    pub fn range(&self, rect: Aabb2D) -> Vec<Point2D> {
        self.points
            .iter()
            .copied()
            .filter(|p| rect.contains(*p))
            .collect()
    }

    /// A point closest to `p`, or `None` if the set is empty.
    pub fn nearest(&self, p: Point2D) -> Option<Point2D> {
        self.nearest_with_distance(p).map(|(q, _)| q)
    }

    /// A point closest to `p` together with its squared distance to `p`.
    pub fn nearest_with_distance(&self, p: Point2D) -> Option<(Point2D, f64)> {
        let mut best: Option<(Point2D, f64)> = None;
        for q in self.points.iter().copied() {
            let d2 = q.distance_squared_to(p);
            if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
                best = Some((q, d2));
            }
        }
        best
    }

    /// Iterate over the points in set order.
    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().copied()
    }
}

impl Debug for PointSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointSet")
            .field("len", &self.points.len())
            .finish_non_exhaustive()
    }
}

impl FromIterator<Point2D> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point2D> for PointSet {
    fn extend<I: IntoIterator<Item = Point2D>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl PointIndex for PointSet {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn insert(&mut self, p: Point2D) -> bool {
        Self::insert(self, p)
    }

    fn contains(&self, p: Point2D) -> bool {
        Self::contains(self, p)
    }

    fn range(&self, rect: Aabb2D) -> Vec<Point2D> {
        Self::range(self, rect)
    }

    fn nearest(&self, p: Point2D) -> Option<Point2D> {
        Self::nearest(self, p)
    }

    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point2D> + 'a> {
        Box::new(self.iter())
    }
}
