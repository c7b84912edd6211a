// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Construction-time validation errors.
//!
//! Every structural defect a caller-supplied adjacency table can carry is
//! rejected here, before any search runs. A graph that survives validation
//! cannot fail mid-search, so an enumeration call either completes in full
//! or never starts.

use crate::graph::{Side, VertexId};
use thiserror::Error;

/// A malformed graph structure supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A neighbor list names a vertex outside the opposite side's id space.
    #[error("{side:?} vertex {vertex} lists neighbor {neighbor} outside [0, {limit})")]
    DanglingNeighbor {
        side: Side,
        vertex: VertexId,
        neighbor: VertexId,
        limit: usize,
    },

    /// A neighbor list is not strictly increasing (out of order, or a
    /// duplicated edge).
    #[error("neighbor list of {side:?} vertex {vertex} is not strictly increasing")]
    UnsortedNeighbors { side: Side, vertex: VertexId },

    /// An edge is present in one adjacency table but missing from its mirror.
    #[error("edge ({left}, {right}) is present in only one adjacency table")]
    AsymmetricEdge { left: VertexId, right: VertexId },

    /// A label table's length disagrees with the side's vertex count.
    #[error("{side:?} side has {labels} labels for {vertices} vertices")]
    LabelCountMismatch {
        side: Side,
        labels: usize,
        vertices: usize,
    },

    /// An incidence-matrix row differs in width from the column label table.
    #[error("incidence row {row} has {width} entries, expected {expected}")]
    RaggedIncidenceRow {
        row: usize,
        width: usize,
        expected: usize,
    },
}
