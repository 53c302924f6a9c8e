use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Determinism {
    Deterministic,
    /// Internal choices are random; the result is still a function of the input.
    Stochastic,
}

/// Mapping of modules in algorithms/src to type of computation
/// and whether deterministic or stochastic
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, Determinism)] = &[
    // Graph algorithms
    ("graph/mst.rs", "Minimum spanning tree", Determinism::Deterministic),
    ("graph/union_find.rs", "Set partition", Determinism::Deterministic),
    // Pathfinding
    ("pathfinding/a_star.rs", "Heuristic search", Determinism::Deterministic),
    // Comparison sorts
    ("sorting/quick_sort.rs", "Comparison sort", Determinism::Stochastic),
    ("sorting/merge_sort.rs", "Comparison sort", Determinism::Deterministic),
    ("sorting/heap_sort.rs", "Comparison sort", Determinism::Deterministic),
    ("sorting/insertion_sort.rs", "Comparison sort", Determinism::Deterministic),
    ("sorting/bubble_sort.rs", "Comparison sort", Determinism::Deterministic),
    ("sorting/selection_sort.rs", "Comparison sort", Determinism::Deterministic),
    // Distribution sorts
    ("sorting/bucket_sort.rs", "Distribution sort", Determinism::Deterministic),
    ("sorting/radix_sort.rs", "Distribution sort", Determinism::Deterministic),
    ("sorting/counting_sort.rs", "Distribution sort", Determinism::Deterministic),
];

pub fn lookup(path: &str) -> Option<(&'static str, Determinism)> {
    ALGORITHMS_COMPUTATION_MAP
        .iter()
        .find(|(p, _, _)| *p == path)
        .map(|&(_, kind, determinism)| (kind, determinism))
}
