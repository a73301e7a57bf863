// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural invariant checks, run by the tests after mutations.

use alloc::vec::Vec;
use core::fmt::Debug;

use super::level::AxisTree;
use super::node::{Key, NodeIdx, Payload};
use crate::types::{Point, cmp_points};

struct Summary<T> {
    size: usize,
    weight: usize,
    max_key: Key<T>,
    points: Vec<Point<T>>,
}

impl<T: Copy + PartialOrd + Debug> AxisTree<T> {
    /// Panic unless every structural invariant holds on this level and,
    /// recursively, on every nested level.
    ///
    /// Checks sentinel borders, strictly increasing leaf keys, separator
    /// keys, parent links, `size`/`weight` bookkeeping, weight balance and
    /// that each nested tree holds exactly its subtree's points.
    pub(crate) fn check_invariants(&self) {
        assert!(
            self.node(self.root).parent.is_none(),
            "root must not have a parent"
        );
        assert!(
            self.node(self.root).children.is_some(),
            "root must be a separator over the sentinels"
        );

        let mut keys = Vec::new();
        let mut stack = alloc::vec![self.root];
        while let Some(i) = stack.pop() {
            let node = self.node(i);
            match node.children {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => keys.push((node.key, node.weight)),
            }
        }
        assert_eq!(keys.first().map(|k| k.0), Some(Key::NegInf), "missing low sentinel");
        assert_eq!(keys.last().map(|k| k.0), Some(Key::PosInf), "missing high sentinel");
        assert_eq!(keys[0].1, 0, "low sentinel holds points");
        assert_eq!(keys[keys.len() - 1].1, 0, "high sentinel holds points");
        for pair in keys.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "leaf keys out of order: {:?} then {:?}",
                pair[0].0,
                pair[1].0
            );
        }

        let summary = self.check_subtree(self.root);
        assert_eq!(summary.weight, self.len(), "root weight disagrees with len");
        assert_eq!(summary.points.len(), self.len(), "point count disagrees with len");
    }

    fn check_subtree(&self, i: NodeIdx) -> Summary<T> {
        let node = self.node(i);
        let Some((left, right)) = node.children else {
            let points = match &node.payload {
                Payload::Nested(tree) => {
                    tree.check_invariants();
                    tree.points()
                }
                Payload::Points(points) => points.clone(),
            };
            for p in &points {
                assert!(
                    Key::At(self.axis.coord(p)) == node.key,
                    "{p:?} stored under leaf {:?}",
                    node.key
                );
            }
            assert_eq!(node.size, 1, "leaf size must be 1");
            assert_eq!(node.weight, points.len(), "leaf weight mismatch at {:?}", node.key);
            return Summary {
                size: 1,
                weight: node.weight,
                max_key: node.key,
                points,
            };
        };

        assert_eq!(self.node(left).parent, Some(i), "broken parent link");
        assert_eq!(self.node(right).parent, Some(i), "broken parent link");
        let l = self.check_subtree(left);
        let r = self.check_subtree(right);
        assert!(
            node.key == l.max_key,
            "separator {:?} is not the left maximum {:?}",
            node.key,
            l.max_key
        );
        assert_eq!(node.size, l.size + r.size, "size mismatch at {:?}", node.key);
        assert_eq!(node.weight, l.weight + r.weight, "weight mismatch at {:?}", node.key);
        let (small, large) = (l.size.min(r.size), l.size.max(r.size));
        assert!(
            small as f64 >= self.alpha * large as f64,
            "unbalanced separator {:?}: {} vs {} leaves",
            node.key,
            l.size,
            r.size
        );

        let mut points = l.points;
        points.extend(r.points);
        match &node.payload {
            Payload::Nested(tree) => {
                tree.check_invariants();
                let mut nested = tree.points();
                let mut expected = points.clone();
                nested.sort_by(cmp_points);
                expected.sort_by(cmp_points);
                assert_eq!(nested, expected, "nested tree differs from its subtree");
            }
            Payload::Points(held) => {
                assert!(held.is_empty(), "separator holds points");
            }
        }
        Summary {
            size: node.size,
            weight: node.weight,
            max_key: r.max_key,
            points,
        }
    }
}
