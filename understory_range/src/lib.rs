// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range --heading-base-level=0

//! Understory Range: a dynamic 2D orthogonal range index.
//!
//! Understory Range answers "which points lie inside this rectangle?" for a
//! point set that changes over time.
//!
//! - Add points incrementally and remove them by exact match.
//! - Report the points inside an axis-aligned rectangle (bounds inclusive), or just count them.
//! - Duplicate points are separate entries.
//!
//! It is generic over the scalar type `T` (`f64`, `f32`, `i64`, ...) and does not depend on
//! any geometry crate. Conversions from Kurbo types are available behind the `kurbo` feature.
//!
//! Both implementations share the [`Backend`] trait, so tests and benchmarks can swap them.
//!
//! # Example
//!
//! ```rust
//! use understory_range::{Backend, Point, RangeTree, Rectangle};
//!
//! let mut tree: RangeTree<f64> = RangeTree::new();
//! tree.add(Point::new(0.0, 0.0));
//! tree.add(Point::new(1.0, 1.0));
//! tree.add(Point::new(1.0, 1.0));
//! tree.add(Point::new(2.0, 2.0));
//!
//! let rect = Rectangle::from_coords(0.5, 0.5, 2.0, 2.0);
//! assert_eq!(tree.count_rect(&rect), 3);
//!
//! // Removing an absent point is a no-op.
//! assert!(!tree.remove(Point::new(5.0, 5.0)));
//! assert!(tree.remove(Point::new(1.0, 1.0)));
//! assert_eq!(tree.query_rect(&rect).count(), 2);
//! ```
//!
//! ## Choosing a backend
//!
//! - `RangeTree` (default choice): a tree of trees over `x` then `y`. Reporting costs
//!   `O(log² n + k)`, counting `O(log² n)`, updates amortized `O(log² n)`; memory is
//!   `O(n log n)`. Balance is restored by rebuilding subtrees (BB[α]); tune with
//!   [`RangeTree::with_alpha`] (default [`DEFAULT_ALPHA`]).
//! - `FlatVec`: linear scans over a vector. Cheapest updates, `O(n)` queries; the
//!   reference the range tree is checked against.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds assert.
//! Infinite coordinates are fine: the tree's own boundary keys sit outside every value.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod backends;
#[cfg(feature = "kurbo")]
pub mod interop;
pub mod types;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
pub use backends::range_tree::{DEFAULT_ALPHA, RangeTree};
pub use types::{Point, Rectangle};
