// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A sliding window of points: new points arrive, old ones expire, and a
//! fixed region is counted after every batch. The linear-scan backend runs
//! alongside as a cross-check.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_range::{Backend, FlatVec, Point, RangeTree, Rectangle};

fn main() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut tree: RangeTree<i64> = RangeTree::with_alpha(0.25);
    let mut flat: FlatVec<i64> = FlatVec::new();
    let mut window = VecDeque::new();
    let region = Rectangle::from_coords(-50, -50, 50, 50);

    for batch in 0..10 {
        for _ in 0..200 {
            let p = Point::new(rng.gen_range(-200..200), rng.gen_range(-200..200));
            tree.add(p);
            flat.add(p);
            window.push_back(p);
        }
        while window.len() > 1000 {
            if let Some(old) = window.pop_front() {
                tree.remove(old);
                flat.remove(old);
            }
        }
        let count = tree.count_rect(&region);
        assert_eq!(count, flat.count_rect(&region));
        println!(
            "batch {batch}: {} live, {count} in region, height {}",
            tree.len(),
            tree.height()
        );
    }
}
