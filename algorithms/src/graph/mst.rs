//! Minimum spanning trees over `WeightedGraph`.
//!
//! Variables:
//!   V, E     = node count, listed half-edge count
//!   T        = tree under construction, |T| = number of undirected edges
//!
//! Equations:
//!   Kruskal:  sort E by w ascending; accept (u, v) iff find(u) != find(v)
//!   Prim:     grow T from the first node; accept the lightest edge (u, v)
//!             with u in T and v not in T
//!   done      <=> |T| = V - 1
//!   E exhausted before done  =>  graph is disconnected
//!
//! Ties on weight are broken by node key order, then by position in the
//! node's neighbour list.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::union_find::DisjointSet;
use super::weighted::{Weight, WeightedGraph};
use crate::error::{AlgorithmError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstStrategy {
    #[default]
    Kruskal,
    Prim,
}

impl fmt::Display for MstStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstStrategy::Kruskal => f.write_str("kruskal"),
            MstStrategy::Prim => f.write_str("prim"),
        }
    }
}

impl FromStr for MstStrategy {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(MstStrategy::Kruskal),
            "prim" => Ok(MstStrategy::Prim),
            other => Err(AlgorithmError::invalid(format!(
                "unknown MST strategy `{other}`"
            ))),
        }
    }
}

pub fn build_mst<N, W>(
    graph: &WeightedGraph<N, W>,
    strategy: MstStrategy,
) -> Result<WeightedGraph<N, W>>
where
    N: Ord + Clone + fmt::Debug,
    W: Weight,
{
    debug!(%strategy, nodes = graph.node_count(), "building minimum spanning tree");
    let tree = match strategy {
        MstStrategy::Kruskal => kruskal(graph)?,
        MstStrategy::Prim => prim(graph)?,
    };
    debug!(
        %strategy,
        edges = tree.edge_count(),
        weight = ?tree.total_weight(),
        "spanning tree complete"
    );
    Ok(tree)
}

/// Kruskal's algorithm with a disjoint-set cycle check.
pub fn kruskal<N, W>(graph: &WeightedGraph<N, W>) -> Result<WeightedGraph<N, W>>
where
    N: Ord + Clone + fmt::Debug,
    W: Weight,
{
    graph.validate()?;
    let target = graph.node_count() - 1;
    let index = graph.index();

    let mut edges: Vec<(&N, &N, W)> = graph.half_edges().collect();
    // stable: equal weights keep key order
    edges.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));

    let mut tree = empty_tree(graph);
    let mut sets = DisjointSet::new(index.len());
    let mut accepted = 0;

    for (a, b, w) in edges {
        if accepted == target {
            break;
        }
        let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) else {
            continue;
        };
        if sets.union(i, j) {
            trace!(from = ?a, to = ?b, weight = ?w, "kruskal accepted edge");
            tree.add_edge(a.clone(), b.clone(), w);
            accepted += 1;
        }
    }

    if accepted < target {
        return Err(disconnected(format!("{} components", sets.set_count())));
    }
    Ok(tree)
}

/// Prim's algorithm grown from the first node in key order.
pub fn prim<N, W>(graph: &WeightedGraph<N, W>) -> Result<WeightedGraph<N, W>>
where
    N: Ord + Clone + fmt::Debug,
    W: Weight,
{
    graph.validate()?;
    let target = graph.node_count() - 1;
    let Some(root) = graph.nodes().next() else {
        return Err(AlgorithmError::invalid("graph has no nodes"));
    };
    let incident = incident_edges(graph);

    let mut tree = empty_tree(graph);
    let mut in_tree: BTreeSet<&N> = BTreeSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0usize;
    let mut accepted = 0;

    in_tree.insert(root);
    push_incident(&incident, root, &in_tree, &mut frontier, &mut seq);

    while accepted < target {
        let Some(Candidate { weight, from, to, .. }) = frontier.pop() else {
            return Err(disconnected(format!(
                "reached {} of {} nodes",
                in_tree.len(),
                graph.node_count()
            )));
        };
        if !in_tree.insert(to) {
            continue;
        }
        trace!(from = ?from, to = ?to, weight = ?weight, "prim accepted edge");
        tree.add_edge(from.clone(), to.clone(), weight);
        accepted += 1;
        push_incident(&incident, to, &in_tree, &mut frontier, &mut seq);
    }
    Ok(tree)
}

fn empty_tree<N, W>(graph: &WeightedGraph<N, W>) -> WeightedGraph<N, W>
where
    N: Ord + Clone + fmt::Debug,
    W: Weight,
{
    let mut tree = WeightedGraph::new();
    for node in graph.nodes() {
        tree.add_node(node.clone());
    }
    tree
}

fn disconnected(detail: String) -> AlgorithmError {
    AlgorithmError::unreachable(format!(
        "graph is disconnected ({detail}), no spanning tree exists"
    ))
}

/// Both directions of every listed edge, so one-sided listings are seen
/// from either endpoint.
fn incident_edges<N, W>(graph: &WeightedGraph<N, W>) -> BTreeMap<&N, Vec<(&N, W)>>
where
    N: Ord + Clone + fmt::Debug,
    W: Weight,
{
    let mut incident: BTreeMap<&N, Vec<(&N, W)>> = BTreeMap::new();
    for (a, b, w) in graph.half_edges() {
        incident.entry(a).or_default().push((b, w));
        incident.entry(b).or_default().push((a, w));
    }
    incident
}

fn push_incident<'g, N: Ord, W: Copy + PartialOrd>(
    incident: &BTreeMap<&'g N, Vec<(&'g N, W)>>,
    node: &'g N,
    in_tree: &BTreeSet<&'g N>,
    frontier: &mut BinaryHeap<Candidate<'g, N, W>>,
    seq: &mut usize,
) {
    let Some(edges) = incident.get(node) else {
        return;
    };
    for &(to, weight) in edges {
        if in_tree.contains(to) {
            continue;
        }
        frontier.push(Candidate {
            weight,
            seq: *seq,
            from: node,
            to,
        });
        *seq += 1;
    }
}

/// Heap entry ordered so `BinaryHeap::pop` yields the lightest, oldest edge.
struct Candidate<'g, N, W> {
    weight: W,
    seq: usize,
    from: &'g N,
    to: &'g N,
}

impl<N, W: PartialOrd> Ord for Candidate<'_, N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N, W: PartialOrd> PartialOrd for Candidate<'_, N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: PartialOrd> PartialEq for Candidate<'_, N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: PartialOrd> Eq for Candidate<'_, N, W> {}
