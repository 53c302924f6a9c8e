//! Undirected weighted graph as an ordered adjacency map.
//!
//! Variables:
//!   V       = number of nodes (map keys)
//!   adj[u]  = Vec<(v, w)> of neighbours of u with edge weight w
//!
//! Equations:
//!   add_edge(u, v, w):  adj[u].push((v, w)),  adj[v].push((u, w))
//!   edge_count()      = (sum_u |adj[u]|) / 2
//!   total_weight()    = sum over undirected edges of w
//!
//! Keys iterate in `Ord` order, which is what every tie-break in the MST
//! builders falls back to.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::union_find::DisjointSet;
use crate::error::{AlgorithmError, Result};

/// Edge weight: ordered, copyable, with `Default` as zero.
pub trait Weight: Copy + PartialOrd + Default + Add<Output = Self> + Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + Default + Add<Output = T> + Debug {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightedGraph<N: Ord, W> {
    adj: BTreeMap<N, Vec<(N, W)>>,
}

impl<N: Ord, W> Default for WeightedGraph<N, W> {
    fn default() -> Self {
        Self {
            adj: BTreeMap::new(),
        }
    }
}

impl<N, W> WeightedGraph<N, W>
where
    N: Ord + Clone + Debug,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a raw adjacency map. Edges listed on only one side still count
    /// as undirected edges for the MST builders.
    pub fn from_adjacency(adj: BTreeMap<N, Vec<(N, W)>>) -> Self {
        Self { adj }
    }

    pub fn into_adjacency(self) -> BTreeMap<N, Vec<(N, W)>> {
        self.adj
    }

    pub fn adjacency(&self) -> &BTreeMap<N, Vec<(N, W)>> {
        &self.adj
    }

    pub fn add_node(&mut self, node: N) {
        self.adj.entry(node).or_default();
    }

    pub fn add_edge(&mut self, a: N, b: N, weight: W) {
        self.adj
            .entry(a.clone())
            .or_default()
            .push((b.clone(), weight));
        self.adj.entry(b).or_default().push((a, weight));
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adj.contains_key(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adj.keys()
    }

    pub fn neighbours(&self, node: &N) -> &[(N, W)] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when `a` lists `b` as a neighbour with weight `weight`.
    pub fn has_edge(&self, a: &N, b: &N, weight: W) -> bool {
        self.neighbours(a)
            .iter()
            .any(|(n, w)| n == b && *w == weight)
    }

    /// Every adjacency entry as `(from, to, weight)`, in key order.
    pub fn half_edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.adj
            .iter()
            .flat_map(|(a, list)| list.iter().map(move |(b, w)| (a, b, *w)))
    }

    /// Each undirected edge once, seen from its smaller endpoint.
    /// Assumes symmetric storage.
    pub fn edges(&self) -> Vec<(&N, &N, W)> {
        self.half_edges().filter(|(a, b, _)| a < b).collect()
    }

    pub fn total_weight(&self) -> W {
        self.edges()
            .into_iter()
            .fold(W::default(), |acc, (_, _, w)| acc + w)
    }

    /// Node -> dense index, in key order.
    pub(crate) fn index(&self) -> BTreeMap<&N, usize> {
        self.adj.keys().enumerate().map(|(i, n)| (n, i)).collect()
    }

    pub fn is_connected(&self) -> bool {
        if self.adj.is_empty() {
            return false;
        }
        let index = self.index();
        let mut sets = DisjointSet::new(index.len());
        for (a, b, _) in self.half_edges() {
            if let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) {
                sets.union(i, j);
            }
        }
        sets.set_count() == 1
    }

    /// Structural checks every MST builder runs before touching the graph.
    pub fn validate(&self) -> Result<()> {
        if self.adj.is_empty() {
            return Err(AlgorithmError::invalid("graph has no nodes"));
        }
        let zero = W::default();
        for (a, b, w) in self.half_edges() {
            if !self.adj.contains_key(b) {
                return Err(AlgorithmError::invalid(format!(
                    "node {a:?} lists unknown neighbour {b:?}"
                )));
            }
            if a == b {
                return Err(AlgorithmError::invalid(format!("self loop on node {a:?}")));
            }
            match w.partial_cmp(&zero) {
                Some(std::cmp::Ordering::Less) => {
                    return Err(AlgorithmError::invalid(format!(
                        "edge {a:?} - {b:?} has negative weight {w:?}"
                    )))
                }
                None => {
                    return Err(AlgorithmError::invalid(format!(
                        "edge {a:?} - {b:?} has incomparable weight {w:?}"
                    )))
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl<N, W> FromIterator<(N, N, W)> for WeightedGraph<N, W>
where
    N: Ord + Clone + Debug,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (a, b, w) in iter {
            graph.add_edge(a, b, w);
        }
        graph
    }
}
