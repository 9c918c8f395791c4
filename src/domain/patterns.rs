use super::Cell;
use serde::{Deserialize, Serialize};

/// Represents a pattern that can be stamped onto the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cells: Vec<Cell>, // Offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: impl Into<String>, description: impl Into<String>, cells: Vec<(i32, i32)>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cells: cells.into_iter().map(Cell::from).collect(),
        }
    }

    /// Center used when stamping, see [`compute_center`]
    pub fn center(&self) -> Cell {
        compute_center(&self.cells)
    }

    /// Cells the pattern occupies when its center lands on `at`.
    /// `None` if any of them would fall off the plane.
    pub fn placed_at(&self, at: Cell) -> Option<Vec<Cell>> {
        let center = self.center();
        self.cells
            .iter()
            .map(|cell| cell.relative_to(center)?.offset(at.x, at.y))
            .collect()
    }
}

/// Midpoint of the bounding box of `cells`, truncated toward zero.
///
/// The box always includes the origin: min and max start at (0, 0)
/// rather than at the first cell, so a pattern lying entirely on one
/// side of the origin gets a center pulled toward it.
pub fn compute_center(cells: &[Cell]) -> Cell {
    if cells.is_empty() {
        return Cell::ORIGIN;
    }
    let (min, max) = cells.iter().fold((Cell::ORIGIN, Cell::ORIGIN), |(min, max), c| {
        (
            Cell::new(min.x.min(c.x), min.y.min(c.y)),
            Cell::new(max.x.max(c.x), max.y.max(c.y)),
        )
    });
    Cell::new((min.x + max.x) / 2, (min.y + max.y) / 2)
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Pulsar - period 3 oscillator, built from one quadrant mirrored four ways
    pub fn pulsar() -> Pattern {
        let quadrant = [
            (2, 0), (3, 0), (4, 0),
            (0, 2), (5, 2),
            (0, 3), (5, 3),
            (0, 4), (5, 4),
            (2, 5), (3, 5), (4, 5),
        ];
        let cells = quadrant
            .iter()
            .flat_map(|&(x, y)| [(x, y), (12 - x, y), (x, 12 - y), (12 - x, 12 - y)])
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                (0, 4), (0, 5), (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
                (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5), (16, 6), (17, 5),
                (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3), (35, 2), (35, 3),
            ]
        )
    }

    /// R-pentomino - methuselah, settles after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Acorn - methuselah, settles after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_pattern_centers_on_origin() {
        assert_eq!(compute_center(&[]), Cell::ORIGIN);
    }

    #[test]
    fn test_center_seeds_bounds_at_origin() {
        let cells = [Cell::new(1, 0), Cell::new(2, 0), Cell::new(1, 1)];
        assert_eq!(compute_center(&cells), Cell::new(1, 0));

        // Box is (0,0)..(10,10) rather than (8,8)..(10,10)
        let far = [Cell::new(8, 8), Cell::new(10, 10)];
        assert_eq!(compute_center(&far), Cell::new(5, 5));
    }

    #[test]
    fn test_center_truncates_toward_zero() {
        let cells = [Cell::new(-3, -1), Cell::new(0, 0)];
        // (-3 + 0) / 2 = -1, (-1 + 0) / 2 = 0
        assert_eq!(compute_center(&cells), Cell::new(-1, 0));
    }

    #[test]
    fn test_placed_at() {
        let pattern = presets::blinker();
        assert_eq!(
            pattern.placed_at(Cell::ORIGIN),
            Some(vec![Cell::new(-1, 0), Cell::new(0, 0), Cell::new(1, 0)])
        );
        assert_eq!(
            pattern.placed_at(Cell::new(10, -3)),
            Some(vec![Cell::new(9, -3), Cell::new(10, -3), Cell::new(11, -3)])
        );
        assert_eq!(pattern.placed_at(Cell::new(i32::MAX, 0)), None);
    }

    #[test]
    fn test_pulsar_has_48_distinct_cells() {
        let pulsar = presets::pulsar();
        let distinct: HashSet<_> = pulsar.cells.iter().collect();
        assert_eq!(pulsar.cells.len(), 48);
        assert_eq!(distinct.len(), 48);
    }

    #[test]
    fn test_preset_names_are_unique() {
        let names: HashSet<_> = presets::all_patterns().into_iter().map(|p| p.name).collect();
        assert_eq!(names.len(), presets::all_patterns().len());
    }

    #[test]
    fn test_pattern_from_yaml() {
        let yaml = "name: Diehard\ncells: [[6, 0], [0, 1], [1, 1], [1, 2], [5, 2], [6, 2], [7, 2]]\n";
        let pattern: Pattern = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(pattern.name, "Diehard");
        assert!(pattern.description.is_empty());
        assert_eq!(pattern.cells.len(), 7);
        assert_eq!(pattern.cells[0], Cell::new(6, 0));
    }
}
