// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximal-biclique enumeration engine.
//!
//! This module implements the branch-and-bound search that produces every
//! maximal biclique of a [`BipartiteGraph`] exactly once, subject to
//! per-side minimum-size thresholds.
//!
//! # Algorithm
//!
//! The search branches over right-side candidates in the order produced by
//! the configured [`OrderingPolicy`]. Each branch owns four sets (a
//! `SearchFrame`): the surviving left vertices `L`, the committed right
//! vertices `R`, the remaining candidates `P`, and the excluded vertices
//! `Q` tried at enclosing levels. For each candidate `x`:
//!
//! 1. `L' = L ∩ N(x)`. An empty `L'` rejects `x` outright.
//! 2. Closure check: if any vertex of `Q` is adjacent to all of `L'`, the
//!    biclique reachable here is owned by an earlier branch; reject `x`.
//! 3. Otherwise commit `x`, absorbing every later candidate adjacent to
//!    all of `L'` into `R'`. At that point `L'` is exactly the common
//!    neighborhood of `R'` and nothing in `P` or `Q` covers `L'`, so
//!    `(L', R')` is a maximal biclique; it is emitted iff both sides meet
//!    the thresholds. The branch then recurses into the partial-overlap
//!    survivors.
//! 4. After the subtree returns, `x` moves to `Q` for the remainder of
//!    this level.
//!
//! Step 2 is what guarantees each maximal biclique is emitted from exactly
//! one canonical branch, regardless of how many commit orders could reach
//! it.
//!
//! # Variants
//!
//! [`Variant::Baseline`] explores every branch and lets the thresholds
//! filter emission only. [`Variant::Lookahead`] also prunes subtrees that
//! provably cannot meet the thresholds: the left set only shrinks along a
//! branch, so `|L'| < left_min` kills the subtree, and the right side can
//! grow by at most the surviving candidates, so `|R'| + |P'| < right_min`
//! kills the recursion. Both variants emit the identical set.

mod frame;

use crate::graph::{intersect_sorted, intersection_size, BipartiteGraph, Side};
use crate::ordering::{candidate_order, OrderingPolicy};
use crate::profile::{Counters, Profile};
use crate::sink::ResultSink;
use frame::SearchFrame;
use tracing::debug;

/// Which enumeration strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Explore every branch; thresholds filter emission only.
    #[default]
    Baseline,

    /// Additionally prune subtrees that cannot reach the size thresholds.
    Lookahead,
}

/// Parameters of one enumeration call.
///
/// Every knob is per call, never process-wide; independent calls over a
/// shared graph can use different configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum left-side size of an emitted biclique. 0 means
    /// unconstrained, but a biclique never has an empty side.
    pub left_min: usize,

    /// Minimum right-side size of an emitted biclique. 0 means
    /// unconstrained, but a biclique never has an empty side.
    pub right_min: usize,

    /// Enumeration strategy.
    pub variant: Variant,

    /// Order in which right-side candidates are committed.
    pub ordering: OrderingPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            left_min: 1,
            right_min: 1,
            variant: Variant::Baseline,
            ordering: OrderingPolicy::Index,
        }
    }
}

/// One enumeration call over a borrowed graph.
///
/// The graph is read-only for the lifetime of the call; all mutable state
/// is owned here and by the recursion frames. [`Enumerator::search`]
/// consumes the enumerator, so a call runs at most once and its profile is
/// only observable after the search has completed.
#[derive(Debug)]
pub struct Enumerator<'g> {
    graph: &'g BipartiteGraph,
    config: SearchConfig,
    /// Effective thresholds: `max(configured, 1)`, since both sides of a
    /// biclique are non-empty by definition.
    left_min: usize,
    right_min: usize,
    profile: Profile,
}

impl<'g> Enumerator<'g> {
    /// Create an enumeration call with the given configuration.
    pub fn new(graph: &'g BipartiteGraph, config: SearchConfig) -> Self {
        Self {
            graph,
            config,
            left_min: config.left_min.max(1),
            right_min: config.right_min.max(1),
            profile: Profile::new(),
        }
    }

    /// Run the search to completion, emitting every maximal biclique that
    /// meets the thresholds into `sink`, exactly once each.
    ///
    /// Consumes the enumerator and returns the call's profile.
    pub fn search<S: ResultSink>(mut self, sink: &mut S) -> Profile {
        let candidates = candidate_order(self.graph, Side::Right, self.config.ordering);
        self.expand(SearchFrame::root(self.graph, candidates), sink);

        debug!(
            bicliques = self.profile.biclique_count(),
            nodes = self.profile.get(Counters::SearchNodes),
            "biclique enumeration complete"
        );
        self.profile
    }

    fn expand<S: ResultSink>(&mut self, frame: SearchFrame, sink: &mut S) {
        let SearchFrame {
            left,
            right,
            candidates,
            mut excluded,
        } = frame;

        for pos in 0..candidates.len() {
            let x = candidates[pos];
            self.profile.increment(Counters::SearchNodes);

            // A candidate with no surviving left support can never join a
            // biclique on this branch.
            let left_new = intersect_sorted(&left, self.graph.neighbors(Side::Right, x));
            if left_new.is_empty() {
                excluded.push(x);
                continue;
            }

            // The left set only shrinks below this point. The candidate
            // still joins the excluded set: any sibling emission it would
            // veto has a left side no larger than left_new, hence already
            // under threshold.
            if self.config.variant == Variant::Lookahead && left_new.len() < self.left_min {
                self.profile.increment(Counters::PrunedBranches);
                excluded.push(x);
                continue;
            }

            // Closure check: an excluded vertex covering all of left_new
            // means every biclique reachable by committing x here is also
            // reachable through that earlier vertex's branch.
            let mut canonical = true;
            let mut excluded_new = Vec::new();
            for &q in &excluded {
                let overlap =
                    intersection_size(self.graph.neighbors(Side::Right, q), &left_new);
                if overlap == left_new.len() {
                    canonical = false;
                    break;
                }
                if overlap > 0 {
                    excluded_new.push(q);
                }
            }
            if !canonical {
                self.profile.increment(Counters::NonCanonicalBranches);
                excluded.push(x);
                continue;
            }

            // Commit x, absorbing every later candidate that keeps all of
            // left_new. Afterwards left_new is exactly the common
            // neighborhood of right_new and no candidate or excluded
            // vertex covers left_new, so (left_new, right_new) is maximal
            // on both sides.
            let mut right_new = right.clone();
            right_new.push(x);
            let mut candidates_new = Vec::new();
            for &p in &candidates[pos + 1..] {
                let overlap =
                    intersection_size(self.graph.neighbors(Side::Right, p), &left_new);
                if overlap == left_new.len() {
                    right_new.push(p);
                } else if overlap > 0 {
                    candidates_new.push(p);
                }
            }

            if left_new.len() >= self.left_min && right_new.len() >= self.right_min {
                sink.record(&left_new, &right_new);
                self.profile.record_biclique(left_new.len(), right_new.len());
            }

            let descend = if candidates_new.is_empty() {
                false
            } else if self.config.variant == Variant::Lookahead
                && right_new.len() + candidates_new.len() < self.right_min
            {
                // The right side can grow by at most the surviving
                // candidates; nothing below can reach the threshold.
                self.profile.increment(Counters::PrunedBranches);
                false
            } else {
                true
            };

            if descend {
                self.expand(
                    SearchFrame {
                        left: left_new,
                        right: right_new,
                        candidates: candidates_new,
                        excluded: excluded_new,
                    },
                    sink,
                );
            }

            excluded.push(x);
        }
    }
}
