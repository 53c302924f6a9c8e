//! Grid cells for the A* pathfinder.
//!
//! ASCII layout accepted by `parse_grid` (x = column, y = row):
//!   `.` open    `#` wall    `S` start    `G` goal

use serde::{Deserialize, Serialize};

use crate::error::{AlgorithmError, Result};

pub type Coord = (i32, i32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub is_wall: bool,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default, alias = "is_end")]
    pub is_goal: bool,
}

impl Cell {
    pub fn open(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn wall(x: i32, y: i32) -> Self {
        Self {
            is_wall: true,
            ..Self::open(x, y)
        }
    }

    pub fn start(x: i32, y: i32) -> Self {
        Self {
            is_start: true,
            ..Self::open(x, y)
        }
    }

    pub fn goal(x: i32, y: i32) -> Self {
        Self {
            is_goal: true,
            ..Self::open(x, y)
        }
    }

    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }

    /// Orthogonal neighbours in +x, -x, +y, -y order, skipping any that
    /// would overflow `i32`.
    pub fn neighbour_coords(&self) -> impl Iterator<Item = Coord> {
        let (x, y) = self.coord();
        [
            (x.checked_add(1), Some(y)),
            (x.checked_sub(1), Some(y)),
            (Some(x), y.checked_add(1)),
            (Some(x), y.checked_sub(1)),
        ]
        .into_iter()
        .filter_map(|(x, y)| Some((x?, y?)))
    }
}

/// Open `width` x `height` grid with no walls and no flags.
pub fn open_grid(width: i32, height: i32) -> Vec<Cell> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::open(x, y)))
        .collect()
}

pub fn parse_grid(text: &str) -> Result<Vec<Cell>> {
    let mut cells = Vec::new();
    let rows = text.lines().map(str::trim).filter(|l| !l.is_empty());
    for (y, row) in rows.enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let (x, y) = (to_i32(x)?, to_i32(y)?);
            let cell = match ch {
                '.' => Cell::open(x, y),
                '#' => Cell::wall(x, y),
                'S' => Cell::start(x, y),
                'G' => Cell::goal(x, y),
                other => {
                    return Err(AlgorithmError::invalid(format!(
                        "unexpected grid character {other:?} at ({x}, {y})"
                    )))
                }
            };
            cells.push(cell);
        }
    }
    Ok(cells)
}

fn to_i32(n: usize) -> Result<i32> {
    i32::try_from(n).map_err(|_| AlgorithmError::invalid("grid dimension exceeds i32"))
}

pub fn find_start(cells: &[Cell]) -> Option<&Cell> {
    cells.iter().find(|c| c.is_start)
}

pub fn find_goal(cells: &[Cell]) -> Option<&Cell> {
    cells.iter().find(|c| c.is_goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_walls() {
        let cells = parse_grid(
            "
            S#.
            .#.
            ..G
            ",
        )
        .unwrap();
        assert_eq!(cells.len(), 9);
        assert_eq!(find_start(&cells).map(Cell::coord), Some((0, 0)));
        assert_eq!(find_goal(&cells).map(Cell::coord), Some((2, 2)));
        let walls: Vec<Coord> = cells.iter().filter(|c| c.is_wall).map(Cell::coord).collect();
        assert_eq!(walls, vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert!(matches!(parse_grid("S.x"), Err(AlgorithmError::InvalidInput(_))));
    }

    #[test]
    fn deserializes_end_flag_alias() {
        let cell: Cell = serde_json::from_str(r#"{"x": 2, "y": 2, "is_end": true}"#).unwrap();
        assert_eq!(cell, Cell::goal(2, 2));
    }

    #[test]
    fn open_grid_is_row_major() {
        let cells = open_grid(3, 2);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4].coord(), (1, 1));
        assert!(cells.iter().all(|c| !c.is_wall));
    }

    #[test]
    fn neighbours_stop_at_integer_bounds() {
        let corner = Cell::open(i32::MAX, i32::MIN);
        let around: Vec<Coord> = corner.neighbour_coords().collect();
        assert_eq!(around, vec![(i32::MAX - 1, i32::MIN), (i32::MAX, i32::MIN + 1)]);
        assert_eq!(Cell::open(0, 0).neighbour_coords().count(), 4);
    }
}
