// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Range: add, query, count, and remove.

use understory_range::{Backend, Point, RangeTree, Rectangle};

fn main() {
    let mut tree: RangeTree<i64> = RangeTree::new();
    for (x, y) in [(1, 1), (2, 5), (4, 3), (4, 3), (7, 8)] {
        tree.add(Point::new(x, y));
    }

    let rect = Rectangle::from_coords(0, 0, 4, 4);
    let hits: Vec<_> = tree.query_rect(&rect).collect();
    println!("points in {:?}: {:?}", rect, hits);
    println!("count: {}", tree.count_rect(&rect));

    // Duplicates are removed one at a time.
    let removed = tree.remove(Point::new(4, 3));
    println!("removed (4, 3): {removed}, count now {}", tree.count_rect(&rect));
    println!("removing (9, 9): {}", tree.remove(Point::new(9, 9)));
}
