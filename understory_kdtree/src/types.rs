// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::error::Error;

/// A point in the plane.
///
/// Coordinates are expected to be finite. Use [`Point2D::try_new`] when the input
/// is untrusted; [`Point2D::new`] does not check.
///
/// Equality, ordering, and hashing follow the IEEE 754 total order
/// ([`f64::total_cmp`]) on `x` first, then `y`. Two points are equal only when
/// both coordinates are bit-for-bit equal, so `-0.0` and `0.0` are distinct.
#[derive(Copy, Clone, Debug)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a point without validating the coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, Error> {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("Rejecting point with non-finite coordinates ({x}, {y})");
            return Err(Error::InvalidArgument {
                reason: "point coordinates must be finite",
            });
        }
        Ok(Self { x, y })
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[cfg(any(feature = "std", feature = "libm"))]
    #[inline]
    pub fn distance_to(self, other: Self) -> f64 {
        sqrt(self.distance_squared_to(other))
    }

    /// The coordinate compared by a split of the given orientation.
    #[inline]
    pub const fn coord(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.x,
            Orientation::Horizontal => self.y,
        }
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point2D {}

impl PartialOrd for Point2D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point2D {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Total-order equality is bit equality.
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl TryFrom<(f64, f64)> for Point2D {
    type Error = Error;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Self::try_new(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned rectangle in 2D.
///
/// Bounds are inclusive on every side: points on the boundary are contained, and
/// rectangles that only touch still intersect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2D {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (bottom)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (top)
    pub max_y: f64,
}

impl Aabb2D {
    /// The unit square `[0, 1] × [0, 1]`, the region assigned to a tree root.
    pub const UNIT_SQUARE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new rectangle from min/max corners without validation.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle, rejecting non-finite or inverted bounds.
    ///
    /// Degenerate rectangles (zero width or height) are accepted.
    pub fn try_new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, Error> {
        if [min_x, min_y, max_x, max_y].iter().any(|v| !v.is_finite()) {
            log::warn!(
                "Rejecting rectangle with non-finite bounds ({min_x}, {min_y})-({max_x}, {max_y})"
            );
            return Err(Error::InvalidArgument {
                reason: "rectangle bounds must be finite",
            });
        }
        if min_x > max_x || min_y > max_y {
            log::warn!(
                "Rejecting inverted rectangle ({min_x}, {min_y})-({max_x}, {max_y})"
            );
            return Err(Error::InvalidArgument {
                reason: "rectangle minimum exceeds maximum",
            });
        }
        Ok(Self::new(min_x, min_y, max_x, max_y))
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether this rectangle contains the point, boundary included.
    pub fn contains(&self, p: Point2D) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Whether the two rectangles share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.max_x >= other.min_x
            && self.max_y >= other.min_y
            && other.max_x >= self.min_x
            && other.max_y >= self.min_y
    }

    /// Squared Euclidean distance from `p` to the closest point of the rectangle.
    ///
    /// Zero when `p` is inside or on the boundary.
    pub fn distance_squared_to(&self, p: Point2D) -> f64 {
        let dx = axis_gap(p.x, self.min_x, self.max_x);
        let dy = axis_gap(p.y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// The part of this rectangle below `at` on the split axis.
    ///
    /// For a vertical split this is the left part (`max_x == at`); for a
    /// horizontal split it is the bottom part (`max_y == at`).
    pub const fn split_low(&self, orientation: Orientation, at: f64) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(self.min_x, self.min_y, at, self.max_y),
            Orientation::Horizontal => Self::new(self.min_x, self.min_y, self.max_x, at),
        }
    }

    /// The part of this rectangle at or above `at` on the split axis.
    pub const fn split_high(&self, orientation: Orientation, at: f64) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(at, self.min_y, self.max_x, self.max_y),
            Orientation::Horizontal => Self::new(self.min_x, at, self.max_x, self.max_y),
        }
    }
}

impl TryFrom<[f64; 4]> for Aabb2D {
    type Error = Error;

    fn try_from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::try_new(min_x, min_y, max_x, max_y)
    }
}

/// Which coordinate a tree level splits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Split on x; the splitting line is vertical. Used at the root.
    Vertical,
    /// Split on y; the splitting line is horizontal.
    Horizontal,
}

impl Orientation {
    /// Orientation of the next tree level.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

#[inline]
fn axis_gap(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        v - min
    } else if v > max {
        v - max
    } else {
        0.0
    }
}

#[cfg(feature = "std")]
#[inline]
fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn sqrt(v: f64) -> f64 {
    libm::sqrt(v)
}

#[cfg(feature = "kurbo")]
mod kurbo_conv {
    use super::{Aabb2D, Point2D};

    impl From<Point2D> for kurbo::Point {
        fn from(p: Point2D) -> Self {
            Self::new(p.x, p.y)
        }
    }

    impl From<kurbo::Point> for Point2D {
        fn from(p: kurbo::Point) -> Self {
            Self::new(p.x, p.y)
        }
    }

    impl From<Aabb2D> for kurbo::Rect {
        fn from(r: Aabb2D) -> Self {
            Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
        }
    }

    impl From<kurbo::Rect> for Aabb2D {
        fn from(r: kurbo::Rect) -> Self {
            let r = r.abs();
            Self::new(r.x0, r.y0, r.x1, r.y1)
        }
    }
}
