// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from Kurbo geometry.

use crate::types::{Point, Rectangle};

impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Maps `(x0, y0)` to the bottom-left corner and `(x1, y1)` to the top-right
/// corner as-is. A rectangle with `x1 < x0` or `y1 < y0` matches nothing;
/// call [`kurbo::Rect::abs`] first to normalize it.
impl From<kurbo::Rect> for Rectangle<f64> {
    fn from(r: kurbo::Rect) -> Self {
        Self::from_coords(r.x0, r.y0, r.x1, r.y1)
    }
}
