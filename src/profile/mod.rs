// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search profile.
//!
//! Counters are accumulated by the enumerator during a call and read by the
//! caller once the call has returned. Alongside the raw counters the
//! profile records the side sizes of every emitted biclique, from which
//! [`Profile::summary`] derives a size-distribution histogram.

use std::collections::BTreeMap;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Counters maintained during one enumeration call.
#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Maximal bicliques emitted (thresholds applied).
    MaximalBicliques,
    /// Candidate commits attempted across the whole search tree.
    SearchNodes,
    /// Branches rejected by the closure check (an excluded vertex covered
    /// the new left set).
    NonCanonicalBranches,
    /// Subtrees cut off by the lookahead variant's threshold bounds.
    PrunedBranches,
}

/// Append-only statistics for one enumeration call.
#[derive(Debug, Default, Clone)]
pub struct Profile {
    stats: [u64; Counters::COUNT],
    /// `(|left|, |right|)` of each emitted biclique, in emission order.
    side_sizes: Vec<(usize, usize)>,
}

impl Profile {
    pub fn new() -> Self {
        Profile::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Record one emitted biclique's side sizes.
    pub(crate) fn record_biclique(&mut self, left_size: usize, right_size: usize) {
        self.increment(Counters::MaximalBicliques);
        self.side_sizes.push((left_size, right_size));
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total number of maximal bicliques emitted.
    pub fn biclique_count(&self) -> u64 {
        self.get(Counters::MaximalBicliques)
    }

    /// Side sizes of every emitted biclique, in emission order.
    pub fn side_sizes(&self) -> &[(usize, usize)] {
        &self.side_sizes
    }

    /// Read-only summary snapshot; meaningful once the search has returned.
    pub fn summary(&self) -> ProfileSummary {
        let mut size_histogram = BTreeMap::new();
        for &sizes in &self.side_sizes {
            *size_histogram.entry(sizes).or_insert(0) += 1;
        }
        ProfileSummary {
            count: self.biclique_count(),
            size_histogram,
        }
    }
}

/// Summary statistics over one completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Total maximal bicliques emitted.
    pub count: u64,
    /// How many bicliques were found per `(|left|, |right|)` size pair.
    pub size_histogram: BTreeMap<(usize, usize), u64>,
}
