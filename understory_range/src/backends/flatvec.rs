// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; the reference
//! the range tree is tested and benchmarked against.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::{Point, Rectangle};

/// Flat vector backend with linear scans.
#[derive(Clone)]
pub struct FlatVec<T: Copy + PartialOrd + Debug> {
    points: Vec<Point<T>>,
}

impl<T: Copy + PartialOrd + Debug> FlatVec<T> {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }
}

impl<T: Copy + PartialOrd + Debug> Default for FlatVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialOrd + Debug> Debug for FlatVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("len", &self.points.len())
            .field("capacity", &self.points.capacity())
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialOrd + Debug> Backend<T> for FlatVec<T> {
    fn add(&mut self, point: Point<T>) {
        self.points.push(point);
    }
    fn remove(&mut self, point: Point<T>) -> bool {
        match self.points.iter().position(|p| *p == point) {
            Some(i) => {
                self.points.remove(i);
                true
            }
            None => false,
        }
    }
    fn clear(&mut self) {
        self.points.clear();
    }
    fn len(&self) -> usize {
        self.points.len()
    }
    fn query_rect<'a>(&'a self, rect: &Rectangle<T>) -> Box<dyn Iterator<Item = Point<T>> + 'a> {
        let rect = *rect;
        Box::new(self.points.iter().copied().filter(move |p| rect.contains(p)))
    }
    fn count_rect(&self, rect: &Rectangle<T>) -> usize {
        self.points.iter().filter(|p| rect.contains(p)).count()
    }
}

impl<T: Copy + PartialOrd + Debug> FromIterator<Point<T>> for FlatVec<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
