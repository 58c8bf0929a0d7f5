// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory KdTree: a 2d-tree point index over the unit square.
//!
//! Understory KdTree answers three queries over a set of distinct 2D points:
//!
//! - Membership: is this exact point stored?
//! - Range: which points lie in an axis-aligned rectangle (boundary included)?
//! - Nearest neighbor: which stored point is closest to a query point?
//!
//! [`KdTree`] is the indexed structure. Levels alternate between vertical and
//! horizontal splits, and each node caches the rectangle its subtree occupies,
//! which lets range and nearest-neighbor searches skip whole subtrees.
//! [`PointSet`] is a brute-force baseline over an ordered set; it answers the
//! same queries by scanning every point and exists to check and benchmark the tree.
//! Both implement [`PointIndex`].
//!
//! # Example
//!
//! ```rust
//! use understory_kdtree::{Aabb2D, KdTree, Point2D};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point2D::new(0.5, 0.5));
//! tree.insert(Point2D::new(0.2, 0.8));
//! tree.insert(Point2D::new(0.9, 0.1));
//!
//! assert!(tree.contains(Point2D::new(0.2, 0.8)));
//!
//! let hits = tree.range(Aabb2D::new(0.0, 0.0, 0.6, 0.6));
//! assert_eq!(hits, vec![Point2D::new(0.5, 0.5)]);
//!
//! let (nearest, d2) = tree.nearest_with_distance(Point2D::new(0.5, 0.6)).unwrap();
//! assert_eq!(nearest, Point2D::new(0.5, 0.5));
//! assert!((d2 - 0.01).abs() < 1e-12);
//! ```
//!
//! ## Drawing a tree
//!
//! Rendering is left to the caller. [`KdTree::splits`] exports every node's point,
//! region, and [`Orientation`]; [`Split::segment`] gives the splitting line clipped
//! to the region. With the `kurbo` feature these convert to Kurbo geometry.
//!
//! ```rust
//! use understory_kdtree::{KdTree, Orientation, Point2D};
//!
//! let tree: KdTree = [Point2D::new(0.7, 0.2), Point2D::new(0.5, 0.4)]
//!     .into_iter()
//!     .collect();
//! let splits: Vec<_> = tree.splits().collect();
//! assert_eq!(splits[0].orientation, Orientation::Vertical);
//! assert_eq!(
//!     splits[1].segment(),
//!     (Point2D::new(0.0, 0.4), Point2D::new(0.7, 0.4))
//! );
//! ```
//!
//! ## Validated input
//!
//! Inserts and queries never fail. [`Point2D::try_new`] and [`Aabb2D::try_new`]
//! reject non-finite coordinates and inverted rectangles with
//! [`Error::InvalidArgument`] for callers handling untrusted input.
//!
//! ### Float semantics
//!
//! Point identity uses the IEEE total order, so `-0.0` and `0.0` are different
//! points. Queries assume no NaNs.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod error;
pub mod types;

pub use backend::PointIndex;
pub use backends::kdtree::{KdTree, Split, Splits};
pub use backends::pointset::PointSet;
pub use error::Error;
pub use types::{Aabb2D, Orientation, Point2D};
