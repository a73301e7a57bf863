// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::ops::Sub;

/// A point in 2D.
///
/// Points compare by value. Two points with identical coordinates are still
/// separate entries when added to an index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in 2D with inclusive bounds.
///
/// Corners are taken as given: an inverted rectangle (a `bottom_left`
/// coordinate greater than the matching `top_right` coordinate) is not
/// rejected or normalized, it simply contains no points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle<T> {
    /// Corner with the minimum coordinates.
    pub bottom_left: Point<T>,
    /// Corner with the maximum coordinates.
    pub top_right: Point<T>,
}

impl<T> Rectangle<T> {
    /// Create a new rectangle from its min/max corners.
    pub const fn new(bottom_left: Point<T>, top_right: Point<T>) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Create a new rectangle from min/max coordinates.
    pub const fn from_coords(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            bottom_left: Point::new(min_x, min_y),
            top_right: Point::new(max_x, max_y),
        }
    }
}

impl<T: Copy + PartialOrd> Rectangle<T> {
    /// Whether the point lies inside the rectangle, boundary included.
    pub fn contains(&self, p: &Point<T>) -> bool {
        le(self.bottom_left.x, p.x)
            && le(p.x, self.top_right.x)
            && le(self.bottom_left.y, p.y)
            && le(p.y, self.top_right.y)
    }

    /// Return true if the rectangle is inverted on either axis. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.top_right.x, self.bottom_left.x) || lt(self.top_right.y, self.bottom_left.y)
    }
}

impl<T: Copy + Sub<Output = T>> Rectangle<T> {
    /// Horizontal extent (`top_right.x - bottom_left.x`).
    pub fn width(&self) -> T {
        self.top_right.x - self.bottom_left.x
    }

    /// Vertical extent (`top_right.y - bottom_left.y`).
    pub fn height(&self) -> T {
        self.top_right.y - self.bottom_left.y
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

/// Whether a scalar can be ordered at all (false for NaN).
pub(crate) fn is_comparable<T: PartialOrd>(v: &T) -> bool {
    v.partial_cmp(v).is_some()
}

/// Total order on points used to compare point multisets. Assumes no NaN.
#[cfg(test)]
pub(crate) fn cmp_points<T: PartialOrd>(a: &Point<T>, b: &Point<T>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
