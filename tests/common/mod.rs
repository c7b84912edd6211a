// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The reference enumerator here is deliberately naive: it walks every
//! non-empty right-side subset of the power set, closes it to a biclique,
//! and keeps the maximal ones. Exponential, but trustworthy on the small
//! graphs the tests use, which is exactly what the engine is checked
//! against.

use biclique_search::graph::{BipartiteGraph, GraphBuilder, Side, VertexId};
use biclique_search::search::{Enumerator, SearchConfig};
use biclique_search::sink::BicliqueCollector;
use std::collections::BTreeSet;

/// A biclique with both sides sorted, for order-insensitive comparison.
pub type NormalizedBiclique = (Vec<VertexId>, Vec<VertexId>);

/// Build a graph from labeled edge pairs.
pub fn graph_from_edges(edges: &[(&str, &str)]) -> BipartiteGraph {
    let mut builder = GraphBuilder::new();
    for &(l, r) in edges {
        builder.add_edge(l, r);
    }
    builder.build()
}

/// Run the engine and normalize its output to sorted id pairs.
pub fn enumerate_normalized(
    graph: &BipartiteGraph,
    config: SearchConfig,
) -> BTreeSet<NormalizedBiclique> {
    let mut sink = BicliqueCollector::new();
    Enumerator::new(graph, config).search(&mut sink);
    sink.bicliques()
        .iter()
        .map(|b| {
            let mut left = b.left.clone();
            let mut right = b.right.clone();
            left.sort_unstable();
            right.sort_unstable();
            (left, right)
        })
        .collect()
}

/// Run the engine and return the raw emission sequence (commit order).
pub fn enumerate_raw(graph: &BipartiteGraph, config: SearchConfig) -> BicliqueCollector {
    let mut sink = BicliqueCollector::new();
    Enumerator::new(graph, config).search(&mut sink);
    sink
}

/// Brute-force reference: every maximal biclique meeting the thresholds,
/// found by closing each non-empty right subset.
///
/// Only usable for `right_count` up to the low teens.
pub fn brute_force(
    graph: &BipartiteGraph,
    left_min: usize,
    right_min: usize,
) -> BTreeSet<NormalizedBiclique> {
    let left_min = left_min.max(1);
    let right_min = right_min.max(1);
    let nr = graph.right_count();
    assert!(nr < 16, "brute force is exponential in the right side");

    let mut found = BTreeSet::new();
    for mask in 1u32..(1 << nr) {
        let subset: Vec<VertexId> = (0..nr as VertexId)
            .filter(|r| mask & (1 << r) != 0)
            .collect();

        // Close the subset: left side is everything adjacent to all of it,
        // and the pair is a maximal biclique iff the subset is in turn
        // everything adjacent to all of that left side.
        let left = graph.common_neighbors(Side::Right, &subset);
        if left.is_empty() {
            continue;
        }
        if graph.common_neighbors(Side::Left, &left) != subset {
            continue;
        }
        if left.len() >= left_min && subset.len() >= right_min {
            found.insert((left, subset));
        }
    }
    found
}

/// Assert (A, B) is a biclique that no vertex on either side can extend.
pub fn assert_maximal(graph: &BipartiteGraph, left: &[VertexId], right: &[VertexId]) {
    let mut left_sorted = left.to_vec();
    left_sorted.sort_unstable();
    let mut right_sorted = right.to_vec();
    right_sorted.sort_unstable();

    assert_eq!(
        graph.common_neighbors(Side::Right, &right_sorted),
        left_sorted,
        "left side is not exactly the common neighborhood of the right side"
    );
    assert_eq!(
        graph.common_neighbors(Side::Left, &left_sorted),
        right_sorted,
        "right side is not exactly the common neighborhood of the left side"
    );
}
