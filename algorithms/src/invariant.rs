//! Invariant checks shared by the graph and sorting modules.

use crate::graph::weighted::{Weight, WeightedGraph};

/// Invariant trait for algorithm output checks
pub trait Invariant<T: ?Sized> {
    fn check(&self, value: &T) -> bool;
}

/// Non-decreasing order.
pub struct Sorted;

impl<T: Ord> Invariant<[T]> for Sorted {
    fn check(&self, value: &[T]) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<T: Ord> Invariant<Vec<T>> for Sorted {
    fn check(&self, value: &Vec<T>) -> bool {
        Sorted.check(value.as_slice())
    }
}

/// Holds when the checked graph is a spanning tree of `source`: same node
/// set, exactly `V - 1` edges, connected, and every tree edge present in
/// `source` with the same weight.
pub struct SpanningTreeOf<'a, N: Ord, W> {
    pub source: &'a WeightedGraph<N, W>,
}

impl<'a, N, W> Invariant<WeightedGraph<N, W>> for SpanningTreeOf<'a, N, W>
where
    N: Ord + Clone + std::fmt::Debug,
    W: Weight,
{
    fn check(&self, tree: &WeightedGraph<N, W>) -> bool {
        let same_nodes = tree.node_count() == self.source.node_count()
            && tree.nodes().all(|n| self.source.contains(n));
        if !same_nodes || tree.edge_count() + 1 != tree.node_count() {
            return false;
        }
        let edges_exist = tree.edges().into_iter().all(|(a, b, w)| {
            self.source.has_edge(a, b, w) || self.source.has_edge(b, a, w)
        });
        // V - 1 edges plus connectivity rules out cycles.
        edges_exist && tree.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_accepts_non_decreasing() {
        assert!(Sorted.check(&[1, 1, 2, 5][..]));
        assert!(Sorted.check(&Vec::<i32>::new()));
        assert!(!Sorted.check(&vec![2, 1]));
    }

    #[test]
    fn spanning_tree_rejects_cycles_and_foreign_edges() {
        let mut graph = WeightedGraph::new();
        graph.add_edge('a', 'b', 1u32);
        graph.add_edge('b', 'c', 2);
        graph.add_edge('a', 'c', 3);

        let mut tree = WeightedGraph::new();
        tree.add_edge('a', 'b', 1u32);
        tree.add_edge('b', 'c', 2);
        assert!(SpanningTreeOf { source: &graph }.check(&tree));

        // right edge count, but one edge is not in the source graph
        let mut foreign = WeightedGraph::new();
        foreign.add_edge('a', 'b', 1u32);
        foreign.add_edge('b', 'c', 7);
        assert!(!SpanningTreeOf { source: &graph }.check(&foreign));

        let mut cyclic = tree.clone();
        cyclic.add_edge('a', 'c', 3);
        assert!(!SpanningTreeOf { source: &graph }.check(&cyclic));
    }
}
