// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable bipartite graph model.
//!
//! This module contains the read-only adjacency structure the enumeration
//! operates over:
//! - `Side`: selects the left or right vertex side in side-generic APIs
//! - `BipartiteGraph`: labels, sorted neighbor lists, O(1) degree lookup
//! - `GraphBuilder`: incremental construction from labeled edge pairs
//! - intersection primitives over sorted neighbor lists
//!
//! # Memory Model
//!
//! The graph is the immutable tier of the search: it is built once, by one
//! of the constructors here, and never mutated afterwards. Every
//! enumeration call borrows it read-only, so independent calls (different
//! thresholds or orderings over the same graph) may safely share one
//! instance across threads. All mutable search state lives in the per-call
//! frames owned by the enumerator's stack.
//!
//! Both adjacency directions are materialized: for each left vertex the
//! strictly increasing list of its right neighbors, and the mirror table
//! for each right vertex. Strict ordering is what makes the merge-walk
//! intersections in [`intersect`] linear in degree.

pub mod builder;
pub mod errors;
pub mod intersect;

pub use builder::GraphBuilder;
pub use errors::GraphError;
pub use intersect::{intersect_sorted, intersection_size};

use std::fmt;
use tracing::debug;

/// Dense vertex identifier within one side, `0..side_count`.
pub type VertexId = u32;

/// One of the two vertex sides of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Immutable bipartite graph: two dense id spaces, per-vertex labels, and
/// sorted adjacency in both directions.
///
/// Labels exist for result reporting only (see [`BipartiteGraph::degree_listing`]);
/// the enumeration itself never consults them.
#[derive(Debug, Clone)]
pub struct BipartiteGraph {
    left_labels: Vec<String>,
    right_labels: Vec<String>,
    /// For each left vertex, its right neighbors, strictly increasing.
    left_adj: Vec<Vec<VertexId>>,
    /// Mirror of `left_adj`: for each right vertex, its left neighbors.
    right_adj: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl BipartiteGraph {
    /// Construct from one adjacency table; the mirror table is derived.
    ///
    /// `left_adj[u]` lists the right neighbors of left vertex `u` and must
    /// be strictly increasing with every id below `right_labels.len()`.
    /// Derivation cannot introduce asymmetry, so the only rejected defects
    /// are dangling ids, unsorted lists, and label-count mismatches.
    pub fn from_adjacency(
        left_labels: Vec<String>,
        right_labels: Vec<String>,
        left_adj: Vec<Vec<VertexId>>,
    ) -> Result<Self, GraphError> {
        check_labels(Side::Left, &left_labels, left_adj.len())?;
        check_lists(Side::Left, &left_adj, right_labels.len())?;

        let right_adj = mirror(&left_adj, right_labels.len());
        let edge_count = left_adj.iter().map(Vec::len).sum();
        let graph = Self {
            left_labels,
            right_labels,
            left_adj,
            right_adj,
            edge_count,
        };
        graph.log_built();
        Ok(graph)
    }

    /// Construct from both adjacency tables, checking they mirror each other.
    ///
    /// This is the constructor for callers that already hold both
    /// directions; any edge recorded in only one table is rejected as
    /// [`GraphError::AsymmetricEdge`].
    pub fn from_biadjacency(
        left_labels: Vec<String>,
        right_labels: Vec<String>,
        left_adj: Vec<Vec<VertexId>>,
        right_adj: Vec<Vec<VertexId>>,
    ) -> Result<Self, GraphError> {
        check_labels(Side::Left, &left_labels, left_adj.len())?;
        check_labels(Side::Right, &right_labels, right_adj.len())?;
        check_lists(Side::Left, &left_adj, right_adj.len())?;
        check_lists(Side::Right, &right_adj, left_adj.len())?;

        for (u, neighbors) in left_adj.iter().enumerate() {
            for &r in neighbors {
                if right_adj[r as usize].binary_search(&(u as VertexId)).is_err() {
                    return Err(GraphError::AsymmetricEdge {
                        left: u as VertexId,
                        right: r,
                    });
                }
            }
        }
        for (r, neighbors) in right_adj.iter().enumerate() {
            for &u in neighbors {
                if left_adj[u as usize].binary_search(&(r as VertexId)).is_err() {
                    return Err(GraphError::AsymmetricEdge {
                        left: u,
                        right: r as VertexId,
                    });
                }
            }
        }

        let edge_count = left_adj.iter().map(Vec::len).sum();
        let graph = Self {
            left_labels,
            right_labels,
            left_adj,
            right_adj,
            edge_count,
        };
        graph.log_built();
        Ok(graph)
    }

    /// Construct from a dense boolean incidence matrix.
    ///
    /// Rows are left vertices, columns right vertices; `rows[u][r]` means
    /// left `u` is adjacent to right `r`. Row count must match
    /// `row_labels`, and every row must be as wide as `col_labels`.
    pub fn from_incidence(
        row_labels: &[&str],
        col_labels: &[&str],
        rows: &[Vec<bool>],
    ) -> Result<Self, GraphError> {
        if rows.len() != row_labels.len() {
            return Err(GraphError::LabelCountMismatch {
                side: Side::Left,
                labels: row_labels.len(),
                vertices: rows.len(),
            });
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != col_labels.len() {
                return Err(GraphError::RaggedIncidenceRow {
                    row,
                    width: entries.len(),
                    expected: col_labels.len(),
                });
            }
        }

        let left_adj: Vec<Vec<VertexId>> = rows
            .iter()
            .map(|entries| {
                entries
                    .iter()
                    .enumerate()
                    .filter(|(_, &present)| present)
                    .map(|(r, _)| r as VertexId)
                    .collect()
            })
            .collect();

        let left_labels = row_labels.iter().map(|s| s.to_string()).collect();
        let right_labels = col_labels.iter().map(|s| s.to_string()).collect();
        Self::from_adjacency(left_labels, right_labels, left_adj)
    }

    /// Internal constructor for tables already known to be valid
    /// (the builder produces sorted, deduplicated, mirrored lists).
    pub(crate) fn from_parts(
        left_labels: Vec<String>,
        right_labels: Vec<String>,
        left_adj: Vec<Vec<VertexId>>,
        right_adj: Vec<Vec<VertexId>>,
    ) -> Self {
        let edge_count = left_adj.iter().map(Vec::len).sum();
        let graph = Self {
            left_labels,
            right_labels,
            left_adj,
            right_adj,
            edge_count,
        };
        graph.log_built();
        graph
    }

    fn log_built(&self) {
        debug!(
            left = self.left_count(),
            right = self.right_count(),
            edges = self.edge_count,
            "constructed bipartite graph"
        );
    }

    /// Number of vertices on the left side.
    pub fn left_count(&self) -> usize {
        self.left_adj.len()
    }

    /// Number of vertices on the right side.
    pub fn right_count(&self) -> usize {
        self.right_adj.len()
    }

    /// Number of vertices on the given side.
    pub fn side_count(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left_count(),
            Side::Right => self.right_count(),
        }
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn adjacency(&self, side: Side) -> &[Vec<VertexId>] {
        match side {
            Side::Left => &self.left_adj,
            Side::Right => &self.right_adj,
        }
    }

    /// Degree of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside the side's id space (caller bug).
    pub fn degree(&self, side: Side, vertex: VertexId) -> usize {
        self.neighbors(side, vertex).len()
    }

    /// Neighbors of a vertex on the opposite side, strictly increasing.
    ///
    /// The returned slice is a stable view for the lifetime of the graph.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside the side's id space (caller bug).
    pub fn neighbors(&self, side: Side, vertex: VertexId) -> &[VertexId] {
        let adjacency = self.adjacency(side);
        assert!(
            (vertex as usize) < adjacency.len(),
            "{} vertex out of bounds: {}",
            side,
            vertex
        );
        &adjacency[vertex as usize]
    }

    /// Label of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside the side's id space (caller bug).
    pub fn label(&self, side: Side, vertex: VertexId) -> &str {
        let labels = match side {
            Side::Left => &self.left_labels,
            Side::Right => &self.right_labels,
        };
        assert!(
            (vertex as usize) < labels.len(),
            "{} vertex out of bounds: {}",
            side,
            vertex
        );
        &labels[vertex as usize]
    }

    /// Common neighbors of a set of same-side vertices, strictly increasing.
    ///
    /// Computed by repeated merge-walk intersection, short-circuiting as
    /// soon as the running intersection is empty; O(total degree) overall.
    /// The common neighborhood of the empty set is the whole opposite side.
    pub fn common_neighbors(&self, side: Side, vertices: &[VertexId]) -> Vec<VertexId> {
        let Some((&first, rest)) = vertices.split_first() else {
            return (0..self.side_count(side.other()) as VertexId).collect();
        };
        let mut common = self.neighbors(side, first).to_vec();
        for &vertex in rest {
            if common.is_empty() {
                break;
            }
            common = intersect_sorted(&common, self.neighbors(side, vertex));
        }
        common
    }

    /// Labeled per-vertex degree report, left side then right side.
    ///
    /// This is the degree-listing convenience consumer of the graph; the
    /// enumeration never calls it.
    pub fn degree_listing(&self) -> Vec<(&str, usize)> {
        let left = self
            .left_labels
            .iter()
            .zip(&self.left_adj)
            .map(|(label, neighbors)| (label.as_str(), neighbors.len()));
        let right = self
            .right_labels
            .iter()
            .zip(&self.right_adj)
            .map(|(label, neighbors)| (label.as_str(), neighbors.len()));
        left.chain(right).collect()
    }
}

/// Check one side's label table length against its vertex count.
fn check_labels(side: Side, labels: &[String], vertices: usize) -> Result<(), GraphError> {
    if labels.len() != vertices {
        return Err(GraphError::LabelCountMismatch {
            side,
            labels: labels.len(),
            vertices,
        });
    }
    Ok(())
}

/// Check one adjacency table: strictly increasing lists, ids below `limit`.
fn check_lists(side: Side, adjacency: &[Vec<VertexId>], limit: usize) -> Result<(), GraphError> {
    for (vertex, neighbors) in adjacency.iter().enumerate() {
        let vertex = vertex as VertexId;
        for window in neighbors.windows(2) {
            if window[0] >= window[1] {
                return Err(GraphError::UnsortedNeighbors { side, vertex });
            }
        }
        for &neighbor in neighbors {
            if (neighbor as usize) >= limit {
                return Err(GraphError::DanglingNeighbor {
                    side,
                    vertex,
                    neighbor,
                    limit,
                });
            }
        }
    }
    Ok(())
}

/// Derive the opposite-direction adjacency table. Walking vertices in
/// ascending order keeps the mirrored lists strictly increasing.
fn mirror(adjacency: &[Vec<VertexId>], opposite_count: usize) -> Vec<Vec<VertexId>> {
    let mut mirrored = vec![Vec::new(); opposite_count];
    for (vertex, neighbors) in adjacency.iter().enumerate() {
        for &neighbor in neighbors {
            mirrored[neighbor as usize].push(vertex as VertexId);
        }
    }
    mirrored
}
