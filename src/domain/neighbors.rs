//! Moore-neighborhood queries against the live set and the owner board.

use super::{Board, Cell, CellOwner, CellSet, PlayerId};
use serde::{Deserialize, Serialize};

/// The 8 offsets around a cell, (0, 0) excluded
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// How an ownerless live neighbor is attributed in competitive counting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralNeighbors {
    /// Anything alive that is not First's counts for Second
    #[default]
    CountAsSecond,
    /// Neutral cells count for neither player
    Abstain,
}

/// Per-player neighbor tally for one cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct OwnerCounts {
    pub first: u8,
    pub second: u8,
}

impl OwnerCounts {
    /// Strict majority holder, `None` on a tie
    pub fn majority(&self) -> Option<PlayerId> {
        use std::cmp::Ordering;
        match self.first.cmp(&self.second) {
            Ordering::Greater => Some(PlayerId::First),
            Ordering::Less => Some(PlayerId::Second),
            Ordering::Equal => None,
        }
    }
}

/// The neighbors of `cell`: 8 inside the plane, fewer on its `i32` edge.
/// Positions past the edge do not exist and count as dead.
pub fn neighbors(cell: Cell) -> impl Iterator<Item = Cell> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| cell.offset(dx, dy))
}

/// The 3×3 block centered on `cell`, the cell itself included, clipped to the plane
pub fn block(cell: Cell) -> impl Iterator<Item = Cell> {
    (-1..=1).flat_map(move |dy| (-1..=1).filter_map(move |dx| cell.offset(dx, dy)))
}

/// Number of live neighbors of `cell`
pub fn count_alive(alive: &CellSet, cell: Cell) -> u8 {
    neighbors(cell).filter(|n| alive.contains(*n)).count() as u8
}

/// Live neighbors of `cell` split by owner
pub fn count_by_owner(board: &Board, cell: Cell, neutral: NeutralNeighbors) -> OwnerCounts {
    neighbors(cell).fold(OwnerCounts::default(), |mut counts, n| {
        match (board.owner(n), neutral) {
            (CellOwner::Empty, _) => {}
            (CellOwner::OwnedBy(PlayerId::First), _) => counts.first += 1,
            (CellOwner::OwnedBy(PlayerId::Second), _) => counts.second += 1,
            (CellOwner::Alive, NeutralNeighbors::CountAsSecond) => counts.second += 1,
            (CellOwner::Alive, NeutralNeighbors::Abstain) => {}
        }
        counts
    })
}
