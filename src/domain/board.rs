use super::{Cell, CellOwner};
use std::collections::HashMap;

/// One generation buffer: owner per live cell.
/// Dead cells are never stored, so `owner` reports `Empty` for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    tiles: HashMap<Cell, CellOwner>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn owner(&self, cell: Cell) -> CellOwner {
        self.tiles.get(&cell).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.owner(cell).is_alive()
    }

    /// Write a tile. Writing `Empty` erases it.
    pub fn set(&mut self, cell: Cell, owner: CellOwner) {
        if owner.is_alive() {
            self.tiles.insert(cell, owner);
        } else {
            self.tiles.remove(&cell);
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellOwner)> + '_ {
        self.tiles.iter().map(|(cell, owner)| (*cell, *owner))
    }
}

/// Half-open integer rectangle `[min.x, max.x) × [min.y, max.y)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub min: Cell,
    pub max: Cell,
}

impl BoundingBox {
    pub const fn new(min: Cell, max: Cell) -> Self {
        Self { min, max }
    }

    /// Region `[-w/2, w/2) × [-h/2, h/2)` around the origin
    pub const fn centered(width: i32, height: i32) -> Self {
        Self {
            min: Cell::new(-width / 2, -height / 2),
            max: Cell::new(width / 2, height / 2),
        }
    }

    /// Box shifted by (dx, dy), `None` if either corner leaves the plane
    pub fn translated(self, dx: i64, dy: i64) -> Option<Self> {
        let shift = |c: Cell| {
            let x = i32::try_from(i64::from(c.x) + dx).ok()?;
            let y = i32::try_from(i64::from(c.y) + dy).ok()?;
            Some(Cell::new(x, y))
        };
        Some(Self { min: shift(self.min)?, max: shift(self.max)? })
    }

    pub const fn width(&self) -> i64 {
        self.max.x as i64 - self.min.x as i64
    }

    pub const fn height(&self) -> i64 {
        self.max.y as i64 - self.min.y as i64
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min.x && cell.x < self.max.x && cell.y >= self.min.y && cell.y < self.max.y
    }

    /// Row-major walk over every cell in the box
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (min, max) = (self.min, self.max);
        (min.x..max.x).flat_map(move |x| (min.y..max.y).map(move |y| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;

    #[test]
    fn test_absent_cells_are_empty() {
        let board = Board::new();
        assert_eq!(board.owner(Cell::new(9, 9)), CellOwner::Empty);
        assert!(!board.is_alive(Cell::new(9, 9)));
    }

    #[test]
    fn test_setting_empty_erases() {
        let mut board = Board::new();
        board.set(Cell::new(1, 1), CellOwner::OwnedBy(PlayerId::First));
        assert_eq!(board.len(), 1);
        board.set(Cell::new(1, 1), CellOwner::Empty);
        assert!(board.is_empty());
    }

    #[test]
    fn test_centered_box_matches_seed_region() {
        let region = BoundingBox::centered(50, 50);
        assert_eq!(region.min, Cell::new(-25, -25));
        assert_eq!(region.max, Cell::new(25, 25));
        assert_eq!(region.cells().count(), 2500);
        assert!(region.contains(Cell::new(-25, 24)));
        assert!(!region.contains(Cell::new(25, 0)));
    }

    #[test]
    fn test_translated_box() {
        let region = BoundingBox::centered(4, 2).translated(-8, 0).unwrap();
        assert_eq!(region.min, Cell::new(-10, -1));
        assert_eq!(region.width(), 4);
        assert_eq!(region.height(), 2);
    }

    #[test]
    fn test_translation_past_plane_edge() {
        let wide = BoundingBox::new(Cell::new(i32::MIN, 0), Cell::new(i32::MAX, 1));
        assert_eq!(wide.width(), u32::MAX as i64);
        assert_eq!(wide.translated(1, 0), None);
        assert_eq!(BoundingBox::centered(10, 10).translated(0, i64::from(i32::MAX)), None);
    }
}
