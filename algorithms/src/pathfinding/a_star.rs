//! A* shortest path on a 4-connected grid.
//!
//! Variables:
//!   g(c) = steps from start to c along the best known route (unit cost)
//!   h(c) = |c.x - goal.x| + |c.y - goal.y|      (Manhattan, admissible)
//!   f(c) = g(c) + h(c)
//!
//! Equations:
//!   expand  argmin_f(frontier), ties -> earliest discovered
//!   c is a candidate  <=>  c in cells  &&  !c.is_wall  &&  c not expanded
//!   BestKnown:  push c only if g_new < best_g[c]
//!   Lazy:       push every candidate
//!   goal popped  => path = start .. goal,  |path| = g(goal) + 1

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use super::grid::{Cell, Coord};
use crate::config::{FrontierPolicy, PathOptions};
use crate::error::{AlgorithmError, Result};

#[derive(Copy, Clone, Eq, PartialEq)]
struct Node {
    f: u64,
    g: u64,
    seq: u64,
    pos: Coord,
    parent: Option<Coord>,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn manhattan(a: Coord, b: Coord) -> u64 {
    u64::from(a.0.abs_diff(b.0)) + u64::from(a.1.abs_diff(b.1))
}

/// Shortest route from `start` to `goal` through the non-wall `cells`.
///
/// Returns `Ok(None)` when the goal cannot be reached.
pub fn find_path(start: &Cell, goal: &Cell, cells: &[Cell]) -> Result<Option<Vec<Coord>>> {
    find_path_with(start, goal, cells, &PathOptions::default())
}

pub fn find_path_with(
    start: &Cell,
    goal: &Cell,
    cells: &[Cell],
    options: &PathOptions,
) -> Result<Option<Vec<Coord>>> {
    let mut board: HashMap<Coord, &Cell> = HashMap::with_capacity(cells.len());
    for cell in cells {
        board.entry(cell.coord()).or_insert(cell);
    }

    let (start, goal) = (start.coord(), goal.coord());
    let start_cell = board
        .get(&start)
        .ok_or_else(|| AlgorithmError::invalid(format!("start {start:?} is not in the grid")))?;
    if !board.contains_key(&goal) {
        return Err(AlgorithmError::invalid(format!("goal {goal:?} is not in the grid")));
    }
    if start_cell.is_wall {
        return Err(AlgorithmError::invalid(format!("start {start:?} is a wall")));
    }
    debug!(?start, ?goal, cells = cells.len(), frontier = ?options.frontier(), "a* search");

    let mut frontier = BinaryHeap::new();
    let mut best_g: HashMap<Coord, u64> = HashMap::new();
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut seq = 0u64;

    best_g.insert(start, 0);
    frontier.push(Node {
        f: manhattan(start, goal),
        g: 0,
        seq,
        pos: start,
        parent: None,
    });

    while let Some(node) = frontier.pop() {
        if !visited.insert(node.pos) {
            continue;
        }
        if let Some(parent) = node.parent {
            came_from.insert(node.pos, parent);
        }
        if node.pos == goal {
            let path = reconstruct(&came_from, goal);
            debug!(expanded = visited.len(), length = path.len(), "a* reached goal");
            return Ok(Some(path));
        }
        let Some(cell) = board.get(&node.pos) else {
            continue;
        };
        trace!(pos = ?node.pos, g = node.g, f = node.f, "expand");

        for next in cell.neighbour_coords() {
            let open = board.get(&next).is_some_and(|c| !c.is_wall);
            if !open || visited.contains(&next) {
                continue;
            }
            let g = node.g + 1;
            if options.frontier() == FrontierPolicy::BestKnown {
                if best_g.get(&next).is_some_and(|&known| known <= g) {
                    continue;
                }
                best_g.insert(next, g);
            }
            seq += 1;
            frontier.push(Node {
                f: g + manhattan(next, goal),
                g,
                seq,
                pos: next,
                parent: Some(node.pos),
            });
        }
    }

    debug!(expanded = visited.len(), "a* frontier exhausted");
    Ok(None)
}

fn reconstruct(came_from: &HashMap<Coord, Coord>, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came_from.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::grid::{find_goal, find_start, open_grid, parse_grid};

    fn solve(text: &str, options: &PathOptions) -> Option<Vec<Coord>> {
        let cells = parse_grid(text).unwrap();
        let start = *find_start(&cells).unwrap();
        let goal = *find_goal(&cells).unwrap();
        find_path_with(&start, &goal, &cells, options).unwrap()
    }

    #[test]
    fn routes_around_wall_column() {
        let path = solve("S#.\n.#.\n..G", &PathOptions::default());
        assert_eq!(path, Some(vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]));
    }

    #[test]
    fn open_grid_paths_are_manhattan_optimal() {
        let cells = open_grid(6, 6);
        let start = Cell::open(1, 4);
        let goal = Cell::open(5, 0);
        for options in [PathOptions::default(), PathOptions::lazy()] {
            let path = find_path_with(&start, &goal, &cells, &options).unwrap().unwrap();
            assert_eq!(path.len() as u64, manhattan(start.coord(), goal.coord()) + 1);
            assert_eq!(path.first(), Some(&(1, 4)));
            assert_eq!(path.last(), Some(&(5, 0)));
            assert!(path.windows(2).all(|w| manhattan(w[0], w[1]) == 1));
        }
    }

    #[test]
    fn solid_barrier_means_no_path() {
        let text = "
            S.#..
            ..#..
            ..#.G
        ";
        assert_eq!(solve(text, &PathOptions::default()), None);
        assert_eq!(solve(text, &PathOptions::lazy()), None);
    }

    #[test]
    fn start_equal_to_goal_is_single_cell() {
        let cells = open_grid(2, 2);
        let here = Cell::open(1, 1);
        assert_eq!(find_path(&here, &here, &cells), Ok(Some(vec![(1, 1)])));
    }

    #[test]
    fn missing_endpoints_and_walled_start_are_invalid() {
        let mut cells = open_grid(3, 3);
        let outside = Cell::open(9, 9);
        let inside = Cell::open(0, 0);
        assert!(matches!(
            find_path(&outside, &inside, &cells),
            Err(AlgorithmError::InvalidInput(_))
        ));
        assert!(matches!(
            find_path(&inside, &outside, &cells),
            Err(AlgorithmError::InvalidInput(_))
        ));
        cells[0] = Cell::wall(0, 0);
        assert!(matches!(
            find_path(&inside, &Cell::open(2, 2), &cells),
            Err(AlgorithmError::InvalidInput(_))
        ));
    }

    #[test]
    fn walled_goal_is_unreachable_not_invalid() {
        let mut cells = open_grid(3, 1);
        cells[2] = Cell::wall(2, 0);
        assert_eq!(find_path(&Cell::open(0, 0), &Cell::wall(2, 0), &cells), Ok(None));
    }

    #[test]
    fn detours_match_between_frontier_policies() {
        let text = "
            S....#....
            .###.#.##.
            .#...#..#.
            .#.####...
            .#......#G
        ";
        let best = solve(text, &PathOptions::default()).unwrap();
        let lazy = solve(text, &PathOptions::lazy()).unwrap();
        assert_eq!(best.len(), lazy.len());
        assert!(best.windows(2).all(|w| manhattan(w[0], w[1]) == 1));
    }

    #[test]
    fn goal_argument_wins_over_goal_flag() {
        // (1,0) carries the goal flag, but the search runs to the explicit goal
        let cells = vec![Cell::start(0, 0), Cell::goal(1, 0), Cell::open(2, 0)];
        let path = find_path(&cells[0], &Cell::open(2, 0), &cells).unwrap();
        assert_eq!(path, Some(vec![(0, 0), (1, 0), (2, 0)]));

        let flagged = find_path(&cells[0], &cells[1], &cells).unwrap();
        assert_eq!(flagged, Some(vec![(0, 0), (1, 0)]));
    }

    #[test]
    fn caller_cells_are_not_modified() {
        let cells = parse_grid("S..\n.#.\n..G").unwrap();
        let before = cells.clone();
        let _ = find_path(&cells[0], &cells[8], &cells).unwrap();
        assert_eq!(cells, before);
    }
}
