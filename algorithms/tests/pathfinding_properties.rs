use algorithms::config::PathOptions;
use algorithms::pathfinding::grid::open_grid;
use algorithms::pathfinding::{find_path_with, manhattan, Cell};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_open_grid_paths_are_manhattan(
        size in 1i32..12,
        sx in 0i32..12, sy in 0i32..12,
        gx in 0i32..12, gy in 0i32..12,
        lazy in any::<bool>(),
    ) {
        let cells = open_grid(size, size);
        let start = Cell::open(sx % size, sy % size);
        let goal = Cell::open(gx % size, gy % size);
        let options = if lazy { PathOptions::lazy() } else { PathOptions::default() };

        let path = find_path_with(&start, &goal, &cells, &options).unwrap().unwrap();
        prop_assert_eq!(path.len() as u64, manhattan(start.coord(), goal.coord()) + 1);
        prop_assert_eq!(path[0], start.coord());
        prop_assert_eq!(path[path.len() - 1], goal.coord());
    }

    #[test]
    fn prop_full_wall_column_blocks(
        height in 1i32..10,
        wall_x in 1i32..8,
        sy in 0i32..10, gy in 0i32..10,
    ) {
        let width = wall_x + 2;
        let cells: Vec<Cell> = open_grid(width, height)
            .into_iter()
            .map(|c| if c.x == wall_x { Cell::wall(c.x, c.y) } else { c })
            .collect();
        let start = Cell::open(0, sy % height);
        let goal = Cell::open(width - 1, gy % height);
        let path = find_path_with(&start, &goal, &cells, &PathOptions::default()).unwrap();
        prop_assert_eq!(path, None);
    }
}
