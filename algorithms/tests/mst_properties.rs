//! Property-based tests for the spanning tree builders.

use algorithms::graph::{build_mst, MstStrategy, WeightedGraph};
use algorithms::invariant::{Invariant, SpanningTreeOf};
use algorithms::AlgorithmError;
use proptest::prelude::*;

/// Connected graph: a random spanning chain plus random extra edges, all
/// weights distinct.
fn connected_graph() -> impl Strategy<Value = WeightedGraph<u32, u64>> {
    (2u32..24)
        .prop_flat_map(|n| {
            let chain = prop::collection::vec(0u32..1000, (n - 1) as usize);
            let extra = prop::collection::vec((0..n, 0..n), 0..(n as usize * 2));
            (Just(n), chain, extra)
        })
        .prop_map(|(_n, parents, extra)| {
            let mut graph = WeightedGraph::new();
            let mut weight = 0u64;
            for (i, p) in parents.into_iter().enumerate() {
                let child = i as u32 + 1;
                weight += 7;
                graph.add_edge(p % child, child, weight * 31 % 10_007);
            }
            for (a, b) in extra {
                if a != b {
                    weight += 7;
                    graph.add_edge(a, b, weight * 31 % 10_007);
                }
            }
            graph
        })
}

proptest! {
    #[test]
    fn prop_both_strategies_span(graph in connected_graph()) {
        for strategy in [MstStrategy::Kruskal, MstStrategy::Prim] {
            let tree = build_mst(&graph, strategy).unwrap();
            prop_assert_eq!(tree.edge_count() + 1, graph.node_count());
            let spans = SpanningTreeOf { source: &graph }.check(&tree);
            prop_assert!(spans, "{} result is not a spanning tree", strategy);
        }
    }

    #[test]
    fn prop_distinct_weights_give_identical_trees(graph in connected_graph()) {
        let kruskal = build_mst(&graph, MstStrategy::Kruskal).unwrap();
        let prim = build_mst(&graph, MstStrategy::Prim).unwrap();
        prop_assert_eq!(kruskal.total_weight(), prim.total_weight());

        let mut k_edges: Vec<_> = kruskal.edges();
        let mut p_edges: Vec<_> = prim.edges();
        k_edges.sort();
        p_edges.sort();
        prop_assert_eq!(k_edges, p_edges);
    }

    #[test]
    fn prop_extra_component_is_unreachable(graph in connected_graph()) {
        let mut split = graph.clone();
        split.add_edge(10_000, 10_001, 1);
        for strategy in [MstStrategy::Kruskal, MstStrategy::Prim] {
            let result = build_mst(&split, strategy);
            prop_assert!(matches!(result, Err(AlgorithmError::Unreachable(_))));
        }
    }
}
