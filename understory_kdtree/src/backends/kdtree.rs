// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2d-tree backend: alternating vertical/horizontal splits over the unit square.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::backend::PointIndex;
use crate::types::{Aabb2D, Orientation, Point2D};

/// A 2d-tree of distinct points.
///
/// The root splits vertically on x, its children horizontally on y, and so on.
/// Each node caches the region of the plane assigned to its subtree; the root's
/// region is [`Aabb2D::UNIT_SQUARE`].
///
/// Points outside the unit square are accepted and [`contains`](Self::contains)
/// finds them, but they lie outside the regions used for pruning, so
/// [`range`](Self::range) and [`nearest`](Self::nearest) may skip them.
///
/// On the splitting axis, a point strictly less than the node's key goes left
/// and a point greater or equal goes right. Insertion order alone determines the
/// shape; there is no rebalancing.
pub struct KdTree {
    root: Option<Box<Node>>,
    len: usize,
}

#[derive(Debug)]
struct Node {
    point: Point2D,
    rect: Aabb2D,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(point: Point2D, rect: Aabb2D) -> Self {
        Self {
            point,
            rect,
            left: None,
            right: None,
        }
    }
}

/// A pending nearest-neighbor visit.
///
/// `gate` is the squared distance from the query to the parent's splitting line;
/// the visit is skipped unless it is strictly below the best distance at the time
/// it is popped. Near children use `-inf` so they are always entered.
struct Visit<'a> {
    node: &'a Node,
    orientation: Orientation,
    gate: f64,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl KdTree {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct points in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a point. Returns `false` and leaves the tree unchanged if an equal
    /// point is already present.
    pub fn insert(&mut self, p: Point2D) -> bool {
        let mut slot = &mut self.root;
        let mut orientation = Orientation::Vertical;
        let mut rect = Aabb2D::UNIT_SQUARE;
        while let Some(node) = slot {
            if node.point == p {
                log::trace!("KdTree: ignoring duplicate insert of {p:?}");
                return false;
            }
            let at = node.point.coord(orientation);
            if goes_left(p, at, orientation) {
                rect = node.rect.split_low(orientation, at);
                slot = &mut node.left;
            } else {
                rect = node.rect.split_high(orientation, at);
                slot = &mut node.right;
            }
            orientation = orientation.flip();
        }
        *slot = Some(Box::new(Node::new(p, rect)));
        self.len += 1;
        true
    }

    /// Whether a point with exactly these coordinates is in the tree.
    pub fn contains(&self, p: Point2D) -> bool {
        let mut cur = self.root.as_deref();
        let mut orientation = Orientation::Vertical;
        while let Some(node) = cur {
            if node.point == p {
                return true;
            }
            cur = if goes_left(p, node.point.coord(orientation), orientation) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
            orientation = orientation.flip();
        }
        false
    }

    /// All points inside or on the boundary of `rect`, in no particular order.
    ///
    /// Subtrees whose region does not intersect `rect` are skipped entirely.
    pub fn range(&self, rect: Aabb2D) -> Vec<Point2D> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if !rect.intersects(&node.rect) {
                continue;
            }
            if rect.contains(node.point) {
                out.push(node.point);
            }
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// A point closest to `p`, or `None` if the tree is empty.
    pub fn nearest(&self, p: Point2D) -> Option<Point2D> {
        self.nearest_with_distance(p).map(|(q, _)| q)
    }

    /// A point closest to `p` together with its squared distance to `p`.
    ///
    /// The near side of each split is searched first; the far side is entered
    /// only if the splitting line is strictly closer than the best point so far.
    /// Among equidistant points the first one reached wins, which is deterministic
    /// for a given tree shape.
    pub fn nearest_with_distance(&self, p: Point2D) -> Option<(Point2D, f64)> {
        let root = self.root.as_deref()?;
        let mut best: Option<Point2D> = None;
        let mut best_d2 = f64::INFINITY;
        let mut stack = vec![Visit {
            node: root,
            orientation: Orientation::Vertical,
            gate: f64::NEG_INFINITY,
        }];
        while let Some(Visit {
            node,
            orientation,
            gate,
        }) = stack.pop()
        {
            if gate >= best_d2 || node.rect.distance_squared_to(p) >= best_d2 {
                continue;
            }
            let d2 = node.point.distance_squared_to(p);
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(node.point);
            }
            let diff = p.coord(orientation) - node.point.coord(orientation);
            let (near, far) = if diff < 0.0 {
                (&node.left, &node.right)
            } else {
                (&node.right, &node.left)
            };
            let next = orientation.flip();
            // Far goes underneath near so the whole near subtree is searched first.
            if let Some(far) = far.as_deref() {
                stack.push(Visit {
                    node: far,
                    orientation: next,
                    gate: diff * diff,
                });
            }
            if let Some(near) = near.as_deref() {
                stack.push(Visit {
                    node: near,
                    orientation: next,
                    gate: f64::NEG_INFINITY,
                });
            }
        }
        best.map(|q| (q, best_d2))
    }

    /// Number of levels on the longest root-to-leaf path; `0` when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Export one [`Split`] per node in pre-order (node, left subtree, right subtree).
    ///
    /// This is the read-only view a renderer needs to draw points and their
    /// splitting segments.
    pub fn splits(&self) -> Splits<'_> {
        Splits {
            stack: self
                .root
                .as_deref()
                .map(|n| (n, Orientation::Vertical))
                .into_iter()
                .collect(),
        }
    }

    /// Iterate over all points in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.splits().map(|s| s.point)
    }
}

/// Whether `p` routes to the left (lower) child of a split at `at`.
///
/// Ties on the splitting axis route right.
#[inline]
fn goes_left(p: Point2D, at: f64, orientation: Orientation) -> bool {
    p.coord(orientation).total_cmp(&at) == Ordering::Less
}

impl Drop for KdTree {
    fn drop(&mut self) {
        // Unlink iteratively so a degenerate (list-shaped) tree cannot overflow the stack.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl FromIterator<Point2D> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Point2D> for KdTree {
    fn extend<I: IntoIterator<Item = Point2D>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl PointIndex for KdTree {
    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
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

/// One node of a [`KdTree`] as seen by a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Split {
    /// The node's key.
    pub point: Point2D,
    /// The region assigned to the node's subtree.
    pub rect: Aabb2D,
    /// Which axis the node splits.
    pub orientation: Orientation,
}

impl Split {
    /// The splitting segment through `point`, clipped to `rect`.
    ///
    /// Vertical splits span `rect` from bottom to top at `point.x`; horizontal
    /// splits span it from left to right at `point.y`.
    pub const fn segment(&self) -> (Point2D, Point2D) {
        match self.orientation {
            Orientation::Vertical => (
                Point2D::new(self.point.x, self.rect.min_y),
                Point2D::new(self.point.x, self.rect.max_y),
            ),
            Orientation::Horizontal => (
                Point2D::new(self.rect.min_x, self.point.y),
                Point2D::new(self.rect.max_x, self.point.y),
            ),
        }
    }

    /// The splitting segment as a Kurbo line.
    #[cfg(feature = "kurbo")]
    pub fn to_line(&self) -> kurbo::Line {
        let (p0, p1) = self.segment();
        kurbo::Line::new(p0, p1)
    }
}

/// Pre-order iterator over the nodes of a [`KdTree`], see [`KdTree::splits`].
#[derive(Debug)]
pub struct Splits<'a> {
    stack: Vec<(&'a Node, Orientation)>,
}

impl Iterator for Splits<'_> {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        let (node, orientation) = self.stack.pop()?;
        let next = orientation.flip();
        self.stack.extend(node.right.as_deref().map(|n| (n, next)));
        self.stack.extend(node.left.as_deref().map(|n| (n, next)));
        Some(Split {
            point: node.point,
            rect: node.rect,
            orientation,
        })
    }
}
