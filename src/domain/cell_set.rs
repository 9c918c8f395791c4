use super::Cell;
use rayon::prelude::*;
use std::collections::HashSet;
use std::collections::hash_set;

/// Sparse set of live cells. Absence means dead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns true if the cell was not already present
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Returns true if the cell was present
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn par_iter(&self) -> rayon::collections::hash_set::Iter<'_, Cell> {
        self.cells.par_iter()
    }

    /// Owned copy of the current members, stable under later mutation of `self`
    pub fn snapshot(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CellSet::new();
        assert!(set.insert(Cell::new(1, 2)));
        assert!(!set.insert(Cell::new(1, 2)));
        assert!(set.contains(Cell::new(1, 2)));
        assert_eq!(set.len(), 1);

        assert!(set.remove(Cell::new(1, 2)));
        assert!(!set.remove(Cell::new(1, 2)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut set: CellSet = [Cell::new(0, 0), Cell::new(5, 5)].into_iter().collect();
        let snapshot = set.snapshot();
        for cell in &snapshot {
            set.remove(*cell);
            set.insert(Cell::new(cell.x + 100, cell.y));
        }
        assert_eq!(snapshot.len(), 2);
        assert!(set.contains(Cell::new(100, 0)));
        assert!(set.contains(Cell::new(105, 5)));
        assert!(!set.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_parallel_iteration_sees_every_cell() {
        let set: CellSet = (0..100).map(|i| Cell::new(i, -i)).collect();
        let total: i64 = set.par_iter().map(|c| c.x as i64).sum();
        assert_eq!(total, (0..100).sum::<i64>());
    }
}
