// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations of the range query contract.
//!
//! - `range_tree`: dynamic 2D range tree (tree of trees) with BB[α]-style
//!   rebuilds; `O(log² n + k)` reporting, `O(log² n)` counting.
//! - `flatvec`: flat vector with linear scans (small, simple, the reference).
//!
//! Rebuild note
//! ------------
//! The range tree never rotates. When a separator's children drift apart,
//! i.e. `min(left, right) < alpha * max(left, right)` in leaf counts, the
//! whole subtree is flattened and regenerated by median splits. A rebuild of
//! `k` leaves can only recur after `Ω(k)` further updates below it, which
//! amortizes to `O(log n)` per update and level.

pub mod flatvec;
pub mod range_tree;
