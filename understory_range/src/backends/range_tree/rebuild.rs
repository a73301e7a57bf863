// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weight-balanced rebuilds and bulk construction.
//!
//! Instead of rotating, an unbalanced subtree is flattened into its ordered
//! leaves and regenerated as a perfectly balanced tree by recursive median
//! splits. Nested trees of the new separators are bulk-built bottom-up from
//! points merged in next-axis order, so a rebuild of `k` leaves costs
//! `O(k log k)` per axis level.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use super::level::AxisTree;
use super::node::{Axis, Key, Node, NodeIdx, Payload};
use crate::types::{Point, le};

/// A leaf detached from the arena, waiting to be reinserted by `build`.
struct LeafEntry<T> {
    key: Key<T>,
    weight: usize,
    payload: Payload<T>,
}

impl<T: Copy + PartialOrd + Debug> AxisTree<T> {
    /// Build a level over points sorted by `axis`.
    pub(crate) fn from_sorted(axis: Axis, alpha: f64, points: &[Point<T>]) -> Self {
        let mut tree = Self {
            axis,
            alpha,
            root: NodeIdx::new(0),
            arena: Vec::new(),
            free: Vec::new(),
        };
        let mut leaves = Vec::new();
        leaves.push(LeafEntry {
            key: Key::NegInf,
            weight: 0,
            payload: tree.empty_payload(),
        });
        for group in points.chunk_by(|a, b| axis.coord(a) == axis.coord(b)) {
            let payload = match axis.next() {
                Some(next) => {
                    let mut group = group.to_vec();
                    sort_by_axis(next, &mut group);
                    Payload::Nested(Box::new(Self::from_sorted(next, alpha, &group)))
                }
                None => Payload::Points(group.to_vec()),
            };
            leaves.push(LeafEntry {
                key: Key::At(axis.coord(&group[0])),
                weight: group.len(),
                payload,
            });
        }
        leaves.push(LeafEntry {
            key: Key::PosInf,
            weight: 0,
            payload: tree.empty_payload(),
        });
        tree.arena.reserve(2 * leaves.len() - 1);
        let (root, _) = tree.build(leaves);
        tree.root = root;
        tree
    }

    /// Replace the subtree under `top` with a perfectly balanced one over the
    /// same leaves. Sentinels are ordinary leaves here, so borders survive.
    pub(super) fn rebuild(&mut self, top: NodeIdx) {
        let parent = self.arena[top.get()].parent;
        let was_left = parent
            .and_then(|p| self.arena[p.get()].children)
            .is_some_and(|(left, _)| left == top);

        let mut leaves = Vec::with_capacity(self.arena[top.get()].size);
        let mut stack = alloc::vec![top];
        while let Some(i) = stack.pop() {
            let node = &mut self.arena[i.get()];
            match node.children {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => leaves.push(LeafEntry {
                    key: node.key,
                    weight: node.weight,
                    payload: core::mem::replace(&mut node.payload, Payload::none()),
                }),
            }
            self.release(i);
        }

        let (new_top, _) = self.build(leaves);
        self.arena[new_top.get()].parent = parent;
        match parent {
            Some(p) => {
                if let Some((left, right)) = self.arena[p.get()].children.as_mut() {
                    if was_left {
                        *left = new_top;
                    } else {
                        *right = new_top;
                    }
                }
            }
            None => self.root = new_top,
        }
    }

    /// Recursively build a balanced subtree over ordered leaves with distinct
    /// keys. Returns the subtree root and, on levels with nested trees, its
    /// points sorted by the next axis.
    fn build(&mut self, mut leaves: Vec<LeafEntry<T>>) -> (NodeIdx, Vec<Point<T>>) {
        if leaves.len() <= 1 {
            let entry = leaves
                .pop()
                .expect("rebuild never sees an empty key range");
            let points = match &entry.payload {
                Payload::Nested(tree) => tree.points(),
                Payload::Points(_) => Vec::new(),
            };
            let i = self.alloc(Node::leaf(entry.key, entry.weight, entry.payload));
            return (i, points);
        }

        let mid = leaves.len() / 2;
        debug_assert!(
            mid > 0 && mid < leaves.len(),
            "median split of {} keys left a side empty",
            leaves.len()
        );
        let key = leaves[mid - 1].key;
        let right_leaves = leaves.split_off(mid);
        let (left, left_points) = self.build(leaves);
        let (right, right_points) = self.build(right_leaves);

        let (payload, points) = match self.axis.next() {
            Some(next) => {
                let merged = merge_by_axis(next, left_points, right_points);
                let nested = Self::from_sorted(next, self.alpha, &merged);
                (Payload::Nested(Box::new(nested)), merged)
            }
            None => (Payload::none(), Vec::new()),
        };
        let (l, r) = (&self.arena[left.get()], &self.arena[right.get()]);
        let node = Node {
            key,
            parent: None,
            children: Some((left, right)),
            size: l.size + r.size,
            weight: l.weight + r.weight,
            payload,
        };
        let i = self.alloc(node);
        self.arena[left.get()].parent = Some(i);
        self.arena[right.get()].parent = Some(i);
        (i, points)
    }
}

pub(super) fn sort_by_axis<T: Copy + PartialOrd>(axis: Axis, points: &mut [Point<T>]) {
    points.sort_by(|a, b| {
        axis.coord(a)
            .partial_cmp(&axis.coord(b))
            .unwrap_or(core::cmp::Ordering::Equal)
    });
}

/// Merge two runs sorted by `axis` into one sorted run.
fn merge_by_axis<T: Copy + PartialOrd>(
    axis: Axis,
    a: Vec<Point<T>>,
    b: Vec<Point<T>>,
) -> Vec<Point<T>> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if le(axis.coord(&a[i]), axis.coord(&b[j])) {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
