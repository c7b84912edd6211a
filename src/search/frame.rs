// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-branch search state.
//!
//! Each recursion step owns one frame outright. Branching copies the parts
//! it narrows instead of mutating shared arrays in place, so backtracking
//! is simply returning: there is nothing to undo.

use crate::graph::{BipartiteGraph, VertexId};

/// The four sets one branch of the search works with.
#[derive(Debug)]
pub(crate) struct SearchFrame {
    /// Left vertices adjacent to every committed right vertex, ascending.
    ///
    /// Invariant: this is exactly the common neighborhood of `right`
    /// (the whole left side while `right` is empty).
    pub left: Vec<VertexId>,

    /// Right vertices committed so far, in commit order.
    pub right: Vec<VertexId>,

    /// Right vertices still eligible to extend this branch, in search order.
    pub candidates: Vec<VertexId>,

    /// Right vertices already tried at an enclosing level. A candidate
    /// whose new left set is covered by any vertex here would re-derive a
    /// biclique owned by an earlier branch.
    pub excluded: Vec<VertexId>,
}

impl SearchFrame {
    /// Top-level frame: the full left side, no commitments, the ordered
    /// candidate sequence, nothing excluded.
    pub fn root(graph: &BipartiteGraph, candidates: Vec<VertexId>) -> Self {
        Self {
            left: (0..graph.left_count() as VertexId).collect(),
            right: Vec::new(),
            candidates,
            excluded: Vec::new(),
        }
    }
}
