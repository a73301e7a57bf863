// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena nodes shared by every axis level of the range tree.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::level::AxisTree;
use crate::types::{Point, Rectangle};

/// Coordinate a level is keyed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    pub(crate) fn coord<T: Copy>(self, p: &Point<T>) -> T {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Closed interval the rectangle spans on this axis.
    pub(crate) fn range<T: Copy>(self, rect: &Rectangle<T>) -> (T, T) {
        match self {
            Self::X => (rect.bottom_left.x, rect.top_right.x),
            Self::Y => (rect.bottom_left.y, rect.top_right.y),
        }
    }

    /// Axis of the nested trees hanging off this level, if any.
    pub(crate) fn next(self) -> Option<Self> {
        match self {
            Self::X => Some(Self::Y),
            Self::Y => None,
        }
    }
}

/// Leaf or separator key. Sentinels order below and above every real value.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub(crate) enum Key<T> {
    NegInf,
    At(T),
    PosInf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone)]
pub(crate) enum Payload<T> {
    /// Outer axis: every point of the subtree, keyed on the next axis.
    Nested(Box<AxisTree<T>>),
    /// Inner axis: points sharing a leaf's key. Empty on internal nodes.
    Points(Vec<Point<T>>),
}

impl<T> Payload<T> {
    pub(crate) const fn none() -> Self {
        Self::Points(Vec::new())
    }
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) key: Key<T>,
    pub(crate) parent: Option<NodeIdx>,
    pub(crate) children: Option<(NodeIdx, NodeIdx)>,
    /// Leaves in this subtree, sentinels included.
    pub(crate) size: usize,
    /// Real points in this subtree.
    pub(crate) weight: usize,
    pub(crate) payload: Payload<T>,
}

impl<T> Node<T> {
    pub(crate) const fn leaf(key: Key<T>, weight: usize, payload: Payload<T>) -> Self {
        Self {
            key,
            parent: None,
            children: None,
            size: 1,
            weight,
            payload,
        }
    }

    pub(crate) fn nested(&self) -> Option<&AxisTree<T>> {
        match &self.payload {
            Payload::Nested(tree) => Some(tree),
            Payload::Points(_) => None,
        }
    }
}
