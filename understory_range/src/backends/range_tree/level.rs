// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One axis level of the range tree: a leaf-oriented binary search tree over
//! a single coordinate, stored in an arena.
//!
//! Internal nodes are separators whose key is the largest leaf key of their
//! left subtree. Every level keeps two sentinel leaves (`NegInf`, `PosInf`)
//! bracketing the real keys, so a real leaf always has a predecessor, a
//! successor and a parent.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use super::node::{Axis, Key, Node, NodeIdx, Payload};
use crate::types::{Point, is_comparable};

#[derive(Clone)]
pub(crate) struct AxisTree<T> {
    pub(super) axis: Axis,
    pub(super) alpha: f64,
    pub(super) root: NodeIdx,
    pub(super) arena: Vec<Node<T>>,
    pub(super) free: Vec<NodeIdx>,
}

impl<T: Copy + PartialOrd + Debug> AxisTree<T> {
    /// An empty level: a root separator over the two sentinel leaves.
    pub(crate) fn new(axis: Axis, alpha: f64) -> Self {
        Self::from_sorted(axis, alpha, &[])
    }

    /// Number of real points stored.
    pub(crate) fn len(&self) -> usize {
        self.node(self.root).weight
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn root(&self) -> NodeIdx {
        self.root
    }

    pub(crate) fn node(&self, i: NodeIdx) -> &Node<T> {
        &self.arena[i.get()]
    }

    fn node_mut(&mut self, i: NodeIdx) -> &mut Node<T> {
        &mut self.arena[i.get()]
    }

    /// Arena slots in use, free list excluded.
    pub(crate) fn live_nodes(&self) -> usize {
        self.arena.len() - self.free.len()
    }

    /// Payload for a fresh node on this level.
    pub(super) fn empty_payload(&self) -> Payload<T> {
        match self.axis.next() {
            Some(next) => Payload::Nested(Box::new(Self::new(next, self.alpha))),
            None => Payload::none(),
        }
    }

    pub(super) fn alloc(&mut self, node: Node<T>) -> NodeIdx {
        if let Some(i) = self.free.pop() {
            self.arena[i.get()] = node;
            i
        } else {
            self.arena.push(node);
            NodeIdx::new(self.arena.len() - 1)
        }
    }

    pub(super) fn release(&mut self, i: NodeIdx) {
        let node = self.node_mut(i);
        node.payload = Payload::none();
        node.children = None;
        node.parent = None;
        self.free.push(i);
    }

    /// Leaf with the smallest key `>= key` under `from`. Ties go left.
    pub(crate) fn find(&self, from: NodeIdx, key: Key<T>) -> NodeIdx {
        let mut i = from;
        while let Some((left, right)) = self.node(i).children {
            i = if key <= self.node(i).key { left } else { right };
        }
        i
    }

    pub(crate) fn min_leaf(&self, from: NodeIdx) -> NodeIdx {
        let mut i = from;
        while let Some((left, _)) = self.node(i).children {
            i = left;
        }
        i
    }

    pub(crate) fn max_leaf(&self, from: NodeIdx) -> NodeIdx {
        let mut i = from;
        while let Some((_, right)) = self.node(i).children {
            i = right;
        }
        i
    }

    fn is_left_child(&self, i: NodeIdx) -> bool {
        self.node(i)
            .parent
            .and_then(|p| self.node(p).children)
            .is_some_and(|(left, _)| left == i)
    }

    /// Previous leaf in key order, `None` for the first leaf.
    pub(crate) fn predecessor(&self, leaf: NodeIdx) -> Option<NodeIdx> {
        let mut i = leaf;
        while self.is_left_child(i) {
            i = self.node(i).parent?;
        }
        let parent = self.node(i).parent?;
        let (left, _) = self.node(parent).children?;
        Some(self.max_leaf(left))
    }

    /// Next leaf in key order, `None` for the last leaf.
    pub(crate) fn successor(&self, leaf: NodeIdx) -> Option<NodeIdx> {
        let mut i = leaf;
        while let Some(parent) = self.node(i).parent
            && !self.is_left_child(i)
        {
            i = parent;
        }
        let parent = self.node(i).parent?;
        let (_, right) = self.node(parent).children?;
        Some(self.min_leaf(right))
    }

    /// Number of edges between `i` and the root.
    pub(crate) fn depth(&self, i: NodeIdx) -> usize {
        let mut depth = 0;
        let mut cur = self.node(i).parent;
        while let Some(p) = cur {
            depth += 1;
            cur = self.node(p).parent;
        }
        depth
    }

    /// Number of edges on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = alloc::vec![(self.root, 0_usize)];
        while let Some((i, d)) = stack.pop() {
            match self.node(i).children {
                Some((left, right)) => {
                    stack.push((left, d + 1));
                    stack.push((right, d + 1));
                }
                None => height = height.max(d),
            }
        }
        height
    }

    pub(crate) fn add(&mut self, point: Point<T>) {
        let coord = self.axis.coord(&point);
        debug_assert!(
            is_comparable(&coord),
            "coordinates must be comparable (no NaN): {point:?}"
        );
        let key = Key::At(coord);
        let mut leaf = self.find(self.root, key);
        if self.node(leaf).key != key {
            leaf = self.split(leaf, key);
        }

        match &mut self.node_mut(leaf).payload {
            Payload::Nested(tree) => tree.add(point),
            Payload::Points(points) => points.push(point),
        }
        let mut cur = Some(leaf);
        while let Some(i) = cur {
            let node = self.node_mut(i);
            node.weight += 1;
            if i != leaf
                && let Payload::Nested(tree) = &mut node.payload
            {
                tree.add(point);
            }
            cur = node.parent;
        }

        self.balance(leaf);
    }

    /// Turn `leaf` into a separator over a fresh leaf for `key` and a copy of
    /// itself. Returns the fresh leaf, which holds no points yet.
    fn split(&mut self, leaf: NodeIdx, key: Key<T>) -> NodeIdx {
        let old_key = self.node(leaf).key;
        let weight = self.node(leaf).weight;
        let moved = core::mem::replace(&mut self.node_mut(leaf).payload, Payload::none());
        // The separator keeps a copy of the nested tree; the caller adds the
        // new point to it, making it the union of both children.
        let kept = match &moved {
            Payload::Nested(tree) => Payload::Nested(tree.clone()),
            Payload::Points(_) => Payload::none(),
        };
        let fresh = self.empty_payload();
        let copied = self.alloc(Node::leaf(old_key, weight, moved));
        let created = self.alloc(Node::leaf(key, 0, fresh));
        let (left, right) = if key < old_key {
            (created, copied)
        } else {
            (copied, created)
        };
        let separator = self.node(left).key;

        let node = self.node_mut(leaf);
        node.key = separator;
        node.children = Some((left, right));
        node.size = 2;
        node.payload = kept;
        self.node_mut(left).parent = Some(leaf);
        self.node_mut(right).parent = Some(leaf);

        let mut cur = self.node(leaf).parent;
        while let Some(i) = cur {
            let node = self.node_mut(i);
            node.size += 1;
            cur = node.parent;
        }
        created
    }

    /// Remove one occurrence of `point`. Returns `false` if it was absent.
    pub(crate) fn remove(&mut self, point: Point<T>) -> bool {
        let key = Key::At(self.axis.coord(&point));
        let leaf = self.find(self.root, key);
        if self.node(leaf).key != key {
            return false;
        }
        let removed = match &mut self.node_mut(leaf).payload {
            Payload::Nested(tree) => tree.remove(point),
            Payload::Points(points) => match points.iter().position(|p| *p == point) {
                Some(pos) => {
                    points.swap_remove(pos);
                    true
                }
                None => false,
            },
        };
        if !removed {
            return false;
        }

        let mut cur = Some(leaf);
        while let Some(i) = cur {
            let node = self.node_mut(i);
            node.weight -= 1;
            if i != leaf
                && let Payload::Nested(tree) = &mut node.payload
            {
                let found = tree.remove(point);
                debug_assert!(found, "nested tree is missing {point:?} from its subtree");
            }
            cur = node.parent;
        }

        if self.node(leaf).weight == 0 {
            let collapsed = self.delete(leaf);
            self.balance(collapsed);
        }
        true
    }

    /// Unlink an empty real leaf by promoting its sibling into the parent's
    /// slot. Returns the parent slot, which now holds the sibling.
    fn delete(&mut self, leaf: NodeIdx) -> NodeIdx {
        let deleted_key = self.node(leaf).key;
        let predecessor_key = self.predecessor(leaf).map(|p| self.node(p).key);
        let parent = self
            .node(leaf)
            .parent
            .expect("real leaves always sit below the root separator");
        let (left, right) = self
            .node(parent)
            .children
            .expect("a parent is always a separator");
        let sibling = if left == leaf { right } else { left };

        let payload = core::mem::replace(&mut self.node_mut(sibling).payload, Payload::none());
        let s = self.node(sibling);
        let (key, children, size, weight) = (s.key, s.children, s.size, s.weight);
        let node = self.node_mut(parent);
        node.key = key;
        node.children = children;
        node.size = size;
        node.weight = weight;
        node.payload = payload;
        if let Some((l, r)) = children {
            self.node_mut(l).parent = Some(parent);
            self.node_mut(r).parent = Some(parent);
        }
        self.release(leaf);
        self.release(sibling);

        let mut cur = self.node(parent).parent;
        while let Some(i) = cur {
            let node = self.node_mut(i);
            node.size -= 1;
            if node.key == deleted_key
                && let Some(k) = predecessor_key
            {
                node.key = k;
            }
            cur = node.parent;
        }
        parent
    }

    fn is_balanced(&self, i: NodeIdx) -> bool {
        let Some((left, right)) = self.node(i).children else {
            return true;
        };
        let (a, b) = (self.node(left).size, self.node(right).size);
        a.min(b) as f64 >= self.alpha * a.max(b) as f64
    }

    /// Rebuild the topmost unbalanced node on the path from `from` to the root.
    fn balance(&mut self, from: NodeIdx) {
        let mut topmost = None;
        let mut cur = Some(from);
        while let Some(i) = cur {
            if !self.is_balanced(i) {
                topmost = Some(i);
            }
            cur = self.node(i).parent;
        }
        if let Some(i) = topmost {
            self.rebuild(i);
        }
    }
}
