// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for range query implementations.

use alloc::boxed::Box;

use crate::types::{Point, Rectangle};
use core::fmt::Debug;

/// Dynamic point set answering orthogonal range queries.
///
/// Implemented by [`RangeTree`](crate::RangeTree) and by the linear-scan
/// [`FlatVec`](crate::FlatVec), which serves as a reference for testing and
/// benchmarking.
pub trait Backend<T: Copy + PartialOrd + Debug> {
    /// Add a point. Duplicates are kept as separate entries.
    fn add(&mut self, point: Point<T>);

    /// Remove one occurrence of an exactly matching point.
    ///
    /// Removing a point that is not present is a no-op and returns `false`.
    fn remove(&mut self, point: Point<T>) -> bool;

    /// Remove all points.
    fn clear(&mut self);

    /// Number of points currently stored.
    fn len(&self) -> usize;

    /// Whether no points are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Query points inside the rectangle (inclusive bounds).
    fn query_rect<'a>(&'a self, rect: &Rectangle<T>) -> Box<dyn Iterator<Item = Point<T>> + 'a>;

    /// Count points inside the rectangle without collecting them.
    fn count_rect(&self, rect: &Rectangle<T>) -> usize;
}
