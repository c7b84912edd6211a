// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end enumeration scenarios over small graphs with known answers.

mod common;

use biclique_search::graph::Side;
use biclique_search::ordering::OrderingPolicy;
use biclique_search::search::{SearchConfig, Variant};
use common::{
    assert_maximal, brute_force, enumerate_normalized, enumerate_raw, graph_from_edges,
};

/// Every (variant, ordering) combination a caller can select.
fn all_configs(left_min: usize, right_min: usize) -> Vec<SearchConfig> {
    let mut configs = Vec::new();
    for variant in [Variant::Baseline, Variant::Lookahead] {
        for ordering in [OrderingPolicy::Index, OrderingPolicy::Degree] {
            configs.push(SearchConfig {
                left_min,
                right_min,
                variant,
                ordering,
            });
        }
    }
    configs
}

#[test]
fn test_two_by_three_scenario() {
    // L = {l0, l1}, R = {r0, r1, r2},
    // edges {(l0,r0), (l0,r1), (l1,r0), (l1,r1), (l1,r2)}.
    let graph = graph_from_edges(&[
        ("l0", "r0"),
        ("l0", "r1"),
        ("l1", "r0"),
        ("l1", "r1"),
        ("l1", "r2"),
    ]);

    for config in all_configs(1, 1) {
        let found = enumerate_normalized(&graph, config);
        assert_eq!(found.len(), 2, "{:?}", config);
        assert!(found.contains(&(vec![0, 1], vec![0, 1])), "{:?}", config);
        assert!(found.contains(&(vec![1], vec![0, 1, 2])), "{:?}", config);
    }
}

#[test]
fn test_two_by_three_scenario_labels() {
    let graph = graph_from_edges(&[
        ("l0", "r0"),
        ("l0", "r1"),
        ("l1", "r0"),
        ("l1", "r1"),
        ("l1", "r2"),
    ]);
    let sink = enumerate_raw(&graph, SearchConfig::default());

    // Mapping ids back to labels is the caller's side of the contract.
    let labelled: Vec<(Vec<&str>, Vec<&str>)> = sink
        .bicliques()
        .iter()
        .map(|b| {
            (
                b.left.iter().map(|&v| graph.label(Side::Left, v)).collect(),
                b.right.iter().map(|&v| graph.label(Side::Right, v)).collect(),
            )
        })
        .collect();
    assert!(labelled.contains(&(vec!["l0", "l1"], vec!["r0", "r1"])));
    assert!(labelled.contains(&(vec!["l1"], vec!["r0", "r1", "r2"])));
}

#[test]
fn test_path_graph() {
    // A path l0 - r0 - l1 - r1 - l2: maximal bicliques are the stars
    // around r0 and r1 and nothing else.
    let graph = graph_from_edges(&[("l0", "r0"), ("l1", "r0"), ("l1", "r1"), ("l2", "r1")]);

    for config in all_configs(1, 1) {
        let found = enumerate_normalized(&graph, config);
        assert_eq!(found, brute_force(&graph, 1, 1), "{:?}", config);
        assert!(found.contains(&(vec![0, 1], vec![0])));
        assert!(found.contains(&(vec![1, 2], vec![1])));
        assert!(found.contains(&(vec![1], vec![0, 1])));
        assert_eq!(found.len(), 3);
    }
}

#[test]
fn test_crown_graph_matches_brute_force() {
    // Complete bipartite 4x4 minus the perfect matching: every pair of
    // left vertices shares exactly two right vertices, giving a dense
    // biclique structure that exercises the closure check heavily.
    let labels_l = ["a", "b", "c", "d"];
    let labels_r = ["w", "x", "y", "z"];
    let mut edges = Vec::new();
    for (i, &l) in labels_l.iter().enumerate() {
        for (j, &r) in labels_r.iter().enumerate() {
            if i != j {
                edges.push((l, r));
            }
        }
    }
    let graph = graph_from_edges(&edges);

    let expected = brute_force(&graph, 1, 1);
    for config in all_configs(1, 1) {
        assert_eq!(enumerate_normalized(&graph, config), expected, "{:?}", config);
    }
}

#[test]
fn test_every_emission_is_maximal_and_unique() {
    let graph = graph_from_edges(&[
        ("l0", "r0"),
        ("l0", "r2"),
        ("l1", "r0"),
        ("l1", "r1"),
        ("l1", "r3"),
        ("l2", "r1"),
        ("l2", "r2"),
        ("l2", "r3"),
        ("l3", "r0"),
        ("l3", "r3"),
    ]);

    for config in all_configs(1, 1) {
        let sink = enumerate_raw(&graph, config);
        for biclique in sink.bicliques() {
            assert_maximal(&graph, &biclique.left, &biclique.right);
        }
        let normalized = enumerate_normalized(&graph, config);
        assert_eq!(
            normalized.len(),
            sink.len(),
            "duplicate emission under {:?}",
            config
        );
    }
}

#[test]
fn test_threshold_filtering_is_monotone() {
    let graph = graph_from_edges(&[
        ("l0", "r0"),
        ("l0", "r1"),
        ("l1", "r0"),
        ("l1", "r1"),
        ("l1", "r2"),
        ("l2", "r1"),
        ("l2", "r2"),
    ]);

    let unconstrained = enumerate_normalized(&graph, SearchConfig::default());
    for left_min in 0..=3 {
        for right_min in 0..=3 {
            for config in all_configs(left_min, right_min) {
                let found = enumerate_normalized(&graph, config);
                assert_eq!(
                    found,
                    brute_force(&graph, left_min, right_min),
                    "{:?}",
                    config
                );
                // Raising thresholds only ever removes bicliques.
                assert!(found.is_subset(&unconstrained), "{:?}", config);
                for (left, right) in &found {
                    assert!(left.len() >= left_min.max(1));
                    assert!(right.len() >= right_min.max(1));
                }
            }
        }
    }
}

#[test]
fn test_thresholds_beyond_graph_size_yield_nothing() {
    let graph = graph_from_edges(&[("l0", "r0"), ("l1", "r0")]);
    for config in all_configs(3, 1) {
        assert!(enumerate_normalized(&graph, config).is_empty());
    }
    for config in all_configs(1, 2) {
        assert!(enumerate_normalized(&graph, config).is_empty());
    }
}

#[test]
fn test_empty_graph_yields_nothing() {
    let graph = graph_from_edges(&[]);
    for config in all_configs(0, 0) {
        assert!(enumerate_normalized(&graph, config).is_empty());
    }
}

#[test]
fn test_degree_consistency() {
    let graph = graph_from_edges(&[
        ("l0", "r0"),
        ("l0", "r1"),
        ("l1", "r0"),
        ("l2", "r2"),
    ]);
    for side in [Side::Left, Side::Right] {
        for v in 0..graph.side_count(side) as u32 {
            assert_eq!(graph.degree(side, v), graph.neighbors(side, v).len());
        }
    }
}
