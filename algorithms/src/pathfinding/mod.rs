pub mod a_star;
pub mod grid;

pub use a_star::{find_path, find_path_with, manhattan};
pub use grid::{Cell, Coord};
