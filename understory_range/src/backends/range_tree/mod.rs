// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic 2D range tree with weight-balanced rebuilds.
//!
//! The outer level is a leaf-oriented search tree keyed on `x`. Every node
//! of it owns a nested level keyed on `y` that holds exactly the points of
//! the node's subtree; leaves of the nested level store the points sharing
//! one `y`.
//!
//! A rectangle query splits `[min_x, max_x]` into `O(log n)` canonical
//! subtrees, then splits `[min_y, max_y]` inside each of their nested levels,
//! so reporting costs `O(log² n + k)` and counting `O(log² n)`.
//!
//! Balance is kept BB[α]-style: after an update, the topmost node on the
//! touched path whose children's leaf counts violate
//! `min >= alpha * max` is rebuilt from scratch as a perfectly balanced
//! subtree. Updates cost amortized `O(log² n)`.

#[cfg(test)]
mod invariants;
mod level;
mod node;
mod query;
mod rebuild;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::{Point, Rectangle};
use level::AxisTree;
use node::Axis;

/// Default weight-balance threshold.
///
/// A separator is rebuilt once its smaller child holds fewer than
/// `alpha` times the leaves of its larger child.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Dynamic 2D orthogonal range tree.
///
/// Supports insertion and exact-match removal of points, and reports or
/// counts the points inside an axis-aligned rectangle (bounds inclusive).
/// Coordinates must not be NaN.
///
/// ```rust
/// use understory_range::{Backend, Point, RangeTree, Rectangle};
///
/// let mut tree = RangeTree::new();
/// tree.add(Point::new(0.0, 0.0));
/// tree.add(Point::new(1.0, 1.0));
/// tree.add(Point::new(2.0, 2.0));
///
/// let rect = Rectangle::from_coords(0.0, 0.0, 1.0, 1.0);
/// assert_eq!(tree.count_rect(&rect), 2);
///
/// tree.remove(Point::new(1.0, 1.0));
/// let hits: Vec<_> = tree.query_rect(&rect).collect();
/// assert_eq!(hits, vec![Point::new(0.0, 0.0)]);
/// ```
#[derive(Clone)]
pub struct RangeTree<T: Copy + PartialOrd + Debug> {
    tree: AxisTree<T>,
}

impl<T: Copy + PartialOrd + Debug> RangeTree<T> {
    /// Create an empty tree with [`DEFAULT_ALPHA`].
    pub fn new() -> Self {
        Self::with_alpha(DEFAULT_ALPHA)
    }

    /// Create an empty tree with a custom balance threshold.
    ///
    /// Smaller values rebuild less often but allow deeper trees.
    ///
    /// # Panics
    ///
    /// If `alpha` is not in `(0, 0.5]`.
    pub fn with_alpha(alpha: f64) -> Self {
        assert_alpha(alpha);
        Self {
            tree: AxisTree::new(Axis::X, alpha),
        }
    }

    /// Build a perfectly balanced tree from a batch of points.
    pub fn from_points<I: IntoIterator<Item = Point<T>>>(points: I) -> Self {
        Self::from_points_with_alpha(points, DEFAULT_ALPHA)
    }

    /// Build a perfectly balanced tree from a batch of points with a custom
    /// balance threshold.
    ///
    /// # Panics
    ///
    /// If `alpha` is not in `(0, 0.5]`.
    pub fn from_points_with_alpha<I: IntoIterator<Item = Point<T>>>(points: I, alpha: f64) -> Self {
        assert_alpha(alpha);
        let mut points: Vec<Point<T>> = points.into_iter().collect();
        debug_assert!(
            points
                .iter()
                .all(|p| crate::types::is_comparable(&p.x) && crate::types::is_comparable(&p.y)),
            "coordinates must be comparable (no NaN)"
        );
        rebuild::sort_by_axis(Axis::X, &mut points);
        Self {
            tree: AxisTree::from_sorted(Axis::X, alpha, &points),
        }
    }

    /// The balance threshold this tree was created with.
    pub fn alpha(&self) -> f64 {
        self.tree.alpha
    }

    /// Number of edges on the longest root-to-leaf path of the outer level.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Whether a point with exactly these coordinates is stored.
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.tree.count(&Rectangle::new(*point, *point)) > 0
    }

    /// All stored points, in no particular order.
    pub fn points(&self) -> Vec<Point<T>> {
        self.tree.points()
    }
}

fn assert_alpha(alpha: f64) {
    assert!(
        alpha > 0.0 && alpha <= 0.5,
        "alpha must be in (0, 0.5], got {alpha}"
    );
}

impl<T: Copy + PartialOrd + Debug> Default for RangeTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialOrd + Debug> Backend<T> for RangeTree<T> {
    fn add(&mut self, point: Point<T>) {
        self.tree.add(point);
    }

    fn remove(&mut self, point: Point<T>) -> bool {
        self.tree.remove(point)
    }

    fn clear(&mut self) {
        self.tree = AxisTree::new(Axis::X, self.tree.alpha);
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn query_rect<'a>(&'a self, rect: &Rectangle<T>) -> Box<dyn Iterator<Item = Point<T>> + 'a> {
        let mut out = Vec::new();
        if !self.tree.is_empty() {
            self.tree.query(rect, &mut out);
        }
        Box::new(out.into_iter())
    }

    fn count_rect(&self, rect: &Rectangle<T>) -> usize {
        if self.tree.is_empty() {
            return 0;
        }
        self.tree.count(rect)
    }
}

impl<T: Copy + PartialOrd + Debug> FromIterator<Point<T>> for RangeTree<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl<T: Copy + PartialOrd + Debug> Extend<Point<T>> for RangeTree<T> {
    fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
        for p in iter {
            self.tree.add(p);
        }
    }
}

impl<T: Copy + PartialOrd + Debug> Debug for RangeTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeTree")
            .field("alpha", &self.tree.alpha)
            .field("len", &self.tree.len())
            .field("height", &self.tree.height())
            .field("outer_nodes", &self.tree.live_nodes())
            .finish_non_exhaustive()
    }
}
