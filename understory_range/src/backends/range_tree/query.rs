// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical range decomposition and point collection.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use super::level::AxisTree;
use super::node::{Key, NodeIdx, Payload};
use crate::types::{Point, Rectangle, le};

impl<T: Copy + PartialOrd + Debug> AxisTree<T> {
    /// Maximal subtrees whose leaf keys all lie in `[lo, hi]`, together
    /// covering every such leaf exactly once.
    ///
    /// Starts from the leaves just outside the range (the predecessor of `lo`
    /// and the successor of `hi`, which always exist thanks to the sentinels)
    /// and climbs both chains to their lowest common ancestor. Climbing out of
    /// a left child on the lower chain, or a right child on the upper chain,
    /// picks up the sibling subtree.
    pub(crate) fn canonical(&self, lo: T, hi: T) -> Vec<NodeIdx> {
        let mut out = Vec::new();
        if !le(lo, hi) {
            return out;
        }
        let (lo, hi) = (Key::At(lo), Key::At(hi));
        let Some(mut lower) = self.predecessor(self.find(self.root, lo)) else {
            return out;
        };
        let mut upper = self.find(self.root, hi);
        if self.node(upper).key == hi {
            match self.successor(upper) {
                Some(next) => upper = next,
                None => return out,
            }
        }

        let mut lower_depth = self.depth(lower);
        let mut upper_depth = self.depth(upper);
        while lower_depth > upper_depth {
            lower = self.climb_lower(lower, &mut out);
            lower_depth -= 1;
        }
        while upper_depth > lower_depth {
            upper = self.climb_upper(upper, &mut out);
            upper_depth -= 1;
        }
        while self.node(lower).parent != self.node(upper).parent {
            lower = self.climb_lower(lower, &mut out);
            upper = self.climb_upper(upper, &mut out);
        }
        out
    }

    fn climb_lower(&self, i: NodeIdx, out: &mut Vec<NodeIdx>) -> NodeIdx {
        let parent = self
            .node(i)
            .parent
            .expect("range boundary chains meet below the root");
        if let Some((left, right)) = self.node(parent).children
            && left == i
        {
            out.push(right);
        }
        parent
    }

    fn climb_upper(&self, i: NodeIdx, out: &mut Vec<NodeIdx>) -> NodeIdx {
        let parent = self
            .node(i)
            .parent
            .expect("range boundary chains meet below the root");
        if let Some((left, right)) = self.node(parent).children
            && right == i
        {
            out.push(left);
        }
        parent
    }

    /// Append every point stored under `from`.
    pub(crate) fn collect_points(&self, from: NodeIdx, out: &mut Vec<Point<T>>) {
        if let Payload::Nested(tree) = &self.node(from).payload {
            tree.collect_points(tree.root(), out);
            return;
        }
        let mut stack = vec![from];
        while let Some(i) = stack.pop() {
            let node = self.node(i);
            if node.weight == 0 {
                continue;
            }
            match (node.children, &node.payload) {
                (Some((left, right)), _) => {
                    stack.push(right);
                    stack.push(left);
                }
                (None, Payload::Points(points)) => out.extend_from_slice(points),
                (None, Payload::Nested(tree)) => tree.collect_points(tree.root(), out),
            }
        }
    }

    /// All points, in key order of the innermost axis.
    pub(crate) fn points(&self) -> Vec<Point<T>> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_points(self.root, &mut out);
        out
    }

    /// Append the points inside `rect`.
    pub(crate) fn query(&self, rect: &Rectangle<T>, out: &mut Vec<Point<T>>) {
        let (lo, hi) = self.axis.range(rect);
        for i in self.canonical(lo, hi) {
            match self.node(i).nested() {
                Some(tree) if !tree.is_empty() => tree.query(rect, out),
                Some(_) => {}
                None => self.collect_points(i, out),
            }
        }
    }

    /// Number of points inside `rect`, from subtree weights alone.
    pub(crate) fn count(&self, rect: &Rectangle<T>) -> usize {
        let (lo, hi) = self.axis.range(rect);
        self.canonical(lo, hi)
            .into_iter()
            .map(|i| {
                let node = self.node(i);
                match node.nested() {
                    Some(tree) if node.weight > 0 => tree.count(rect),
                    Some(_) => 0,
                    None => node.weight,
                }
            })
            .sum()
    }
}
