// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental graph construction from labeled edge pairs.
//!
//! The builder is the edge-list input path: an external parser hands it
//! `(left_label, right_label)` pairs in any order, it interns each label to
//! a dense id on first sight, drops repeated edges, and produces both
//! sorted adjacency tables at once. The resulting graph is valid by
//! construction, so `build` is infallible.

use crate::graph::{BipartiteGraph, VertexId};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// Accumulates labeled edges into a [`BipartiteGraph`].
///
/// Vertex ids are assigned in first-appearance order, independently per
/// side. A vertex can also be registered without any edges via
/// [`GraphBuilder::add_left`] / [`GraphBuilder::add_right`], so isolated
/// vertices survive into the graph (they matter for degree listings, never
/// for bicliques).
#[derive(Debug, Default)]
pub struct GraphBuilder {
    left_ids: HashMap<String, VertexId>,
    right_ids: HashMap<String, VertexId>,
    left_labels: Vec<String>,
    right_labels: Vec<String>,
    /// Per left vertex, its right neighbors. BTreeSet keeps insertion
    /// dedup'd and extraction sorted.
    edges: Vec<BTreeSet<VertexId>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a left-side label, returning its id.
    pub fn add_left(&mut self, label: &str) -> VertexId {
        match self.left_ids.entry(label.to_string()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = self.left_labels.len() as VertexId;
                self.left_labels.push(label.to_string());
                self.edges.push(BTreeSet::new());
                entry.insert(id);
                id
            }
        }
    }

    /// Intern a right-side label, returning its id.
    pub fn add_right(&mut self, label: &str) -> VertexId {
        match self.right_ids.entry(label.to_string()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = self.right_labels.len() as VertexId;
                self.right_labels.push(label.to_string());
                entry.insert(id);
                id
            }
        }
    }

    /// Record one edge, interning both endpoint labels.
    ///
    /// Repeated edges collapse to one; the graph stays simple. Returns the
    /// ids assigned to the endpoints.
    pub fn add_edge(&mut self, left: &str, right: &str) -> (VertexId, VertexId) {
        let l = self.add_left(left);
        let r = self.add_right(right);
        self.edges[l as usize].insert(r);
        (l, r)
    }

    /// Number of edges recorded so far.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(BTreeSet::len).sum()
    }

    /// Finish construction.
    pub fn build(self) -> BipartiteGraph {
        let right_count = self.right_labels.len();
        let left_adj: Vec<Vec<VertexId>> = self
            .edges
            .into_iter()
            .map(|neighbors| neighbors.into_iter().collect())
            .collect();

        let mut right_adj = vec![Vec::new(); right_count];
        for (l, neighbors) in left_adj.iter().enumerate() {
            for &r in neighbors {
                right_adj[r as usize].push(l as VertexId);
            }
        }

        BipartiteGraph::from_parts(self.left_labels, self.right_labels, left_adj, right_adj)
    }
}
