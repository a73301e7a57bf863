// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range queries over Kurbo geometry.
//!
//! Scatters marker positions over a canvas, then asks which markers a
//! selection rectangle covers while the selection is dragged.

use kurbo::{Point, Rect, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_range::{Backend, RangeTree, Rectangle};

fn main() {
    let mut rng = SmallRng::seed_from_u64(7);
    let markers: Vec<Point> = (0..500)
        .map(|_| Point::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)))
        .collect();
    let mut tree: RangeTree<f64> = markers.iter().map(|&p| p.into()).collect();

    let mut selection = Rect::new(100.0, 100.0, 220.0, 180.0);
    for step in 0..5 {
        let rect: Rectangle<f64> = selection.into();
        println!(
            "step {step}: selection {:?} covers {} markers",
            selection,
            tree.count_rect(&rect)
        );
        selection = selection + Vec2::new(60.0, 40.0);
    }

    // Drop the markers under the last selection.
    let rect: Rectangle<f64> = selection.into();
    let doomed: Vec<_> = tree.query_rect(&rect).collect();
    for p in &doomed {
        tree.remove(*p);
    }
    println!(
        "removed {} markers, {} left, {} still selected",
        doomed.len(),
        tree.len(),
        tree.count_rect(&rect)
    );

    // A flipped rectangle selects nothing until normalized.
    let flipped = Rect::new(400.0, 400.0, 0.0, 0.0);
    println!(
        "flipped: {}, normalized: {}",
        tree.count_rect(&flipped.into()),
        tree.count_rect(&flipped.abs().into())
    );
}
