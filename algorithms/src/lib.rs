//! # Algorithms Crate
//!
//! Textbook algorithms as pure functions over in-memory inputs.
//!
//! ## Modules
//!
//! - `graph` – Weighted undirected graphs, union-find, minimum spanning trees (Kruskal, Prim)
//! - `pathfinding` – Grid cells and A* search with a Manhattan heuristic
//! - `sorting` – Comparison sorts (quick, merge, heap, insertion, bubble, selection)
//!   and distribution sorts (bucket, radix, counting)
//! - `invariant` – Output checks (`Sorted`, `SpanningTreeOf`)
//! - `config` – Options for the tunable routines
//! - `computation_map` – Catalogue of modules by computation kind
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::sorting::merge_sort::merge_sort;
//!
//! let sorted = merge_sort(&[3,1,2]);
//! assert_eq!(sorted, vec![1,2,3]);
//! ```
//!
//! ```rust
//! use algorithms::graph::{build_mst, MstStrategy, WeightedGraph};
//!
//! let graph: WeightedGraph<&str, u32> =
//!     [("a", "b", 4), ("b", "c", 1), ("a", "c", 2)].into_iter().collect();
//! let tree = build_mst(&graph, MstStrategy::Prim).unwrap();
//! assert_eq!(tree.total_weight(), 3);
//! ```
//!
//! ```rust
//! use algorithms::pathfinding::{find_path, Cell};
//! use algorithms::pathfinding::grid::open_grid;
//!
//! let cells = open_grid(3, 3);
//! let path = find_path(&Cell::open(0, 0), &Cell::open(2, 2), &cells).unwrap();
//! assert_eq!(path.map(|p| p.len()), Some(5));
//! ```
//!
//! Nothing here logs at info level or above; `tracing` events are
//! emitted at debug/trace for callers that install a subscriber.

pub mod computation_map;
pub mod config;
pub mod error;
pub mod graph;
pub mod invariant;
pub mod pathfinding;
pub mod sorting;

pub use error::{AlgorithmError, Result};
