// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate ordering policies.
//!
//! The enumeration commits candidates in a fixed order chosen once per
//! call, before the search starts. The order changes how fast branches are
//! pruned, never which bicliques are found.

use crate::graph::{BipartiteGraph, Side, VertexId};
use std::cmp::Reverse;

/// How the branching side's candidates are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingPolicy {
    /// Identity permutation over vertex ids. Deterministic baseline.
    #[default]
    Index,

    /// Descending degree, ties broken by ascending id. High-degree
    /// vertices intersect to small candidate sets fastest, so attacking
    /// them first shrinks the search tree.
    Degree,
}

/// Produce the permutation of `side`'s vertices dictated by `policy`.
///
/// Pure function of the graph; computed once per enumeration call, not per
/// recursion step.
pub fn candidate_order(
    graph: &BipartiteGraph,
    side: Side,
    policy: OrderingPolicy,
) -> Vec<VertexId> {
    let mut order: Vec<VertexId> = (0..graph.side_count(side) as VertexId).collect();
    if policy == OrderingPolicy::Degree {
        order.sort_by_key(|&vertex| (Reverse(graph.degree(side, vertex)), vertex));
    }
    order
}
