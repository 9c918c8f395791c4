mod cell;
mod cell_set;
mod board;
mod rules;
mod patterns;
mod score;
mod algorithm;
mod error;
pub mod neighbors;
pub mod engine;

pub use cell::{Cell, CellOwner, PlayerId};
pub use cell_set::CellSet;
pub use board::{Board, BoundingBox};
pub use rules::{Transition, transition};
pub use patterns::{Pattern, compute_center, presets};
pub use score::{ScoreTracker, Outcome};
pub use algorithm::Algorithm;
pub use error::{EngineError, Result};
pub use neighbors::{NeutralNeighbors, OwnerCounts, count_alive, count_by_owner};
pub use engine::{SimulationEngine, Mode, RunState, StepDiff};
