// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations of [`PointIndex`](crate::PointIndex).
//!
//! - `kdtree`: 2d-tree with per-node bounding rectangles and pruning queries.
//! - `pointset`: ordered set with linear scans, the correctness baseline.
//!
//! Pruning note
//! ------------
//! Every tree node caches the region its subtree occupies. Regions only shrink
//! going down, so a range query that misses a node's region misses the whole
//! subtree, and a nearest-neighbor search can skip any subtree whose region is
//! no closer than the best point found so far.

pub mod kdtree;
pub mod pointset;
