// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive enumeration of maximal bicliques in bipartite graphs.
//!
//! Given two disjoint vertex sides L and R and an edge relation between
//! them, this crate finds every vertex-subset pair (A ⊆ L, B ⊆ R) such
//! that every vertex of A is adjacent to every vertex of B and neither
//! side can be extended without breaking completeness. Each maximal
//! biclique is produced exactly once, without materializing the power set,
//! with configurable minimum-size thresholds per side.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Graph (Immutable)
//!
//! [`graph::BipartiteGraph`] is built once — from labeled edge pairs, an
//! incidence matrix, or prebuilt adjacency tables — and never mutated
//! afterwards. It carries both sorted adjacency directions, per-vertex
//! labels, and O(1) degree lookup. Independent enumeration calls may share
//! one graph read-only.
//!
//! ## Tier 2: Search state (Transient)
//!
//! [`search::Enumerator`] performs a branch-and-bound recursion whose
//! per-branch candidate and exclusion sets are owned by the call stack and
//! discarded on return. Results flow into a caller-supplied
//! [`sink::ResultSink`]; counters and side-size statistics accumulate in a
//! [`profile::Profile`] returned when the call completes.
//!
//! # Example
//!
//! ```
//! use biclique_search::graph::GraphBuilder;
//! use biclique_search::search::{Enumerator, SearchConfig};
//! use biclique_search::sink::BicliqueCollector;
//!
//! let mut builder = GraphBuilder::new();
//! for (l, r) in [("l0", "r0"), ("l0", "r1"), ("l1", "r0"), ("l1", "r1"), ("l1", "r2")] {
//!     builder.add_edge(l, r);
//! }
//! let graph = builder.build();
//!
//! let mut sink = BicliqueCollector::new();
//! let profile = Enumerator::new(&graph, SearchConfig::default()).search(&mut sink);
//!
//! // ({l0, l1}, {r0, r1}) and ({l1}, {r0, r1, r2}).
//! assert_eq!(profile.biclique_count(), 2);
//! assert_eq!(sink.bicliques()[0].left, vec![0, 1]);
//! assert_eq!(sink.bicliques()[1].right, vec![0, 1, 2]);
//! ```

pub mod graph;
pub mod ordering;
pub mod profile;
pub mod search;
pub mod sink;

// Re-export commonly used types
pub use graph::{BipartiteGraph, GraphBuilder, GraphError, Side, VertexId};
pub use ordering::OrderingPolicy;
pub use profile::{Counters, Profile, ProfileSummary};
pub use search::{Enumerator, SearchConfig, Variant};
pub use sink::{Biclique, BicliqueCollector, ResultSink};
