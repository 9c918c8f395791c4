use serde::{Deserialize, Serialize};

/// Cell is a position on the unbounded plane.
/// Serialized as a two-element `[x, y]` array.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy), `None` past the edge of the plane
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// `self - origin`, `None` when not representable
    pub const fn relative_to(self, origin: Cell) -> Option<Self> {
        match (self.x.checked_sub(origin.x), self.y.checked_sub(origin.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

/// One of the two competing players.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    First,
    Second,
}

/// What occupies a cell. Classic boards only use `Empty` and `Alive`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellOwner {
    #[default]
    Empty,
    Alive,
    OwnedBy(PlayerId),
}

impl CellOwner {
    pub const fn is_alive(self) -> bool {
        !matches!(self, CellOwner::Empty)
    }

    /// The owning player, if any
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            CellOwner::OwnedBy(player) => Some(player),
            _ => None,
        }
    }
}

impl From<Option<PlayerId>> for CellOwner {
    fn from(player: Option<PlayerId>) -> Self {
        player.map_or(CellOwner::Alive, CellOwner::OwnedBy)
    }
}
