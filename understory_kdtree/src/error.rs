// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for validated construction of points and rectangles.

/// Errors reported by this crate.
///
/// Queries and inserts never fail: an absent argument cannot be expressed, and
/// points outside the unit square, degenerate rectangles, and repeated inserts
/// are all defined behavior. Only the validating constructors
/// ([`Point2D::try_new`](crate::Point2D::try_new),
/// [`Aabb2D::try_new`](crate::Aabb2D::try_new)) return errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument violates the caller contract.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },
}
