//! Sparse, double-buffered Life engine with an optional two-player mode.
//!
//! Only the frontier (every live cell plus its 8 neighbors) is evaluated
//! each generation, so the board is unbounded. A generation is computed in
//! two phases: every frontier cell is classified against the current
//! buffer, then the changes are written into the next buffer, the buffers
//! are swapped and the spent one is wiped.

use super::error::{EngineError, Result};
use super::neighbors::{block, count_alive, count_by_owner};
use super::rules::{Transition, transition};
use super::{
    Algorithm, Board, BoundingBox, Cell, CellOwner, CellSet, NeutralNeighbors, Outcome, Pattern,
    PlayerId, ScoreTracker,
};
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// Which game is being played.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// Single-population Life
    #[default]
    Classic,
    /// Two-player Life; the player is the one currently placing cells
    Competitive(PlayerId),
}

impl Mode {
    pub const fn is_competitive(self) -> bool {
        matches!(self, Mode::Competitive(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Classic => "Classic",
            Mode::Competitive(PlayerId::First) => "Versus (P1)",
            Mode::Competitive(PlayerId::Second) => "Versus (P2)",
        }
    }
}

/// Whether the external scheduler is currently stepping the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    /// Paused; the board may be edited
    #[default]
    Idle,
    Running,
}

/// Cells that changed in one generation, sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepDiff {
    pub generation: u64,
    pub births: Vec<Cell>,
    pub deaths: Vec<Cell>,
}

/// Per-cell decision of the classification phase.
#[derive(Clone, Copy, Debug)]
enum Change {
    Born(CellOwner),
    Died,
    Kept,
    /// Birth count reached but neither player holds a majority
    Contested,
}

/// The simulation core. Owned by the caller; all mutation goes through `&mut self`,
/// so no edit can interleave with a running `step`.
#[derive(Clone, Debug, Default)]
pub struct SimulationEngine {
    current: Board,
    next: Board,
    alive: CellSet,
    mode: Mode,
    state: RunState,
    scores: ScoreTracker,
    algorithm: Algorithm,
    neutral: NeutralNeighbors,
    generation: u64,
}

impl SimulationEngine {
    /// Empty classic board, idle
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_neutral_neighbors(mut self, neutral: NeutralNeighbors) -> Self {
        self.neutral = neutral;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn neutral_neighbors(&self) -> NeutralNeighbors {
        self.neutral
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch game mode. The board and scores are kept.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            info!(from = ?self.mode, to = ?mode, "mode changed");
        }
        self.mode = mode;
    }

    /// Owner stamped by edits in the current mode
    pub fn selected_owner(&self) -> CellOwner {
        match self.mode {
            Mode::Classic => CellOwner::Alive,
            Mode::Competitive(player) => CellOwner::OwnedBy(player),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn run(&mut self) {
        self.state = RunState::Running;
    }

    pub fn pause(&mut self) {
        self.state = RunState::Idle;
    }

    pub fn toggle_running(&mut self) {
        self.state = match self.state {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        };
    }

    /// Live cells of the current generation
    pub fn alive(&self) -> &CellSet {
        &self.alive
    }

    /// Current buffer, for rendering owners
    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn owner(&self, cell: Cell) -> CellOwner {
        self.current.owner(cell)
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when the live set and the current buffer describe the same cells
    pub fn is_consistent(&self) -> bool {
        self.alive.len() == self.current.len() && self.alive.iter().all(|&c| self.current.is_alive(c))
    }

    /// (first, second) birth counters
    pub fn scores(&self) -> Result<(u64, u64)> {
        self.require_competitive("scores")?;
        Ok(self.scores.totals())
    }

    pub fn score(&self, player: PlayerId) -> Result<u64> {
        self.require_competitive("score")?;
        Ok(self.scores.score(player))
    }

    /// Winner by strict score comparison
    pub fn outcome(&self) -> Result<Outcome> {
        self.require_competitive("outcome")?;
        Ok(self.scores.outcome())
    }

    /// Empty both buffers, the live set and the scores, and go idle
    pub fn clear(&mut self) {
        self.clear_board();
        self.scores.reset();
        self.state = RunState::Idle;
        info!("board cleared");
    }

    /// Manual single-cell edit. Only allowed while idle.
    pub fn toggle_cell(&mut self, cell: Cell, alive: bool, owner: CellOwner) -> Result<()> {
        if self.is_running() {
            return Err(EngineError::invalid("cells cannot be edited while the simulation is running"));
        }
        if alive {
            self.check_owner(owner)?;
            self.place(cell, owner);
        } else {
            self.erase(cell);
        }
        Ok(())
    }

    /// Clear the board, then stamp `pattern` centered on the origin
    pub fn stamp_pattern(&mut self, pattern: &Pattern, owner: CellOwner) -> Result<()> {
        self.check_owner(owner)?;
        let cells = Self::locate(pattern, Cell::ORIGIN)?;
        self.clear_board();
        for cell in cells {
            self.place(cell, owner);
        }
        info!(pattern = %pattern.name, cells = pattern.cells.len(), "pattern stamped");
        Ok(())
    }

    /// Add `pattern` centered on `at` without clearing. Only allowed while idle.
    pub fn place_pattern(&mut self, pattern: &Pattern, at: Cell, owner: CellOwner) -> Result<()> {
        if self.is_running() {
            return Err(EngineError::invalid("patterns cannot be placed while the simulation is running"));
        }
        self.check_owner(owner)?;
        for cell in Self::locate(pattern, at)? {
            self.place(cell, owner);
        }
        Ok(())
    }

    /// Mark every cell of `region` alive with probability `density`.
    ///
    /// Without a player the board is cleared first and cells are generic
    /// alive (classic seeding). With a player the region is shifted two
    /// region-widths left for First and right for Second, and existing
    /// cells are kept so both armies can be seeded in turn.
    ///
    /// Returns the number of cells seeded.
    pub fn seed_random<R: Rng>(
        &mut self,
        rng: &mut R,
        region: BoundingBox,
        density: f64,
        player: Option<PlayerId>,
    ) -> Result<usize> {
        if !(0.0..=1.0).contains(&density) {
            return Err(EngineError::invalid(format!("density {density} is outside [0, 1]")));
        }
        let region = match player {
            None => {
                self.clear_board();
                region
            }
            Some(player) => {
                self.require_competitive("seeding for a player")?;
                let shift = match player {
                    PlayerId::First => -2 * region.width(),
                    PlayerId::Second => 2 * region.width(),
                };
                region
                    .translated(shift, 0)
                    .ok_or_else(|| EngineError::invalid(format!("{player:?} army region falls off the plane")))?
            }
        };

        let owner = CellOwner::from(player);
        let mut seeded = 0;
        for cell in region.cells() {
            if rng.random_bool(density) {
                self.place(cell, owner);
                seeded += 1;
            }
        }
        info!(?player, seeded, density, "board seeded");
        Ok(seeded)
    }

    /// Cells that may change in the next generation: each live cell and its 8 neighbors
    pub fn frontier(&self) -> HashSet<Cell> {
        self.alive.iter().flat_map(|&cell| block(cell)).collect()
    }

    fn par_frontier(&self) -> HashSet<Cell> {
        self.alive.par_iter().flat_map_iter(|&cell| block(cell)).collect()
    }

    /// Advance one generation
    pub fn step(&mut self) -> StepDiff {
        let changes: Vec<(Cell, Change)> = match self.algorithm {
            Algorithm::Sparse => self
                .frontier()
                .into_iter()
                .map(|cell| (cell, self.classify(cell)))
                .collect(),
            Algorithm::SparseParallel => self
                .par_frontier()
                .into_par_iter()
                .map(|cell| (cell, self.classify(cell)))
                .collect(),
        };
        self.apply(changes)
    }

    /// Decide a frontier cell's fate from the current generation only
    fn classify(&self, cell: Cell) -> Change {
        let neighbors = count_alive(&self.alive, cell);
        match transition(self.alive.contains(cell), neighbors) {
            Transition::Birth => match self.mode {
                Mode::Classic => Change::Born(CellOwner::Alive),
                Mode::Competitive(_) => match count_by_owner(&self.current, cell, self.neutral).majority() {
                    Some(player) => Change::Born(CellOwner::OwnedBy(player)),
                    None => Change::Contested,
                },
            },
            Transition::Death => Change::Died,
            Transition::Survive => Change::Kept,
        }
    }

    fn apply(&mut self, changes: Vec<(Cell, Change)>) -> StepDiff {
        debug_assert!(self.next.is_empty(), "next buffer reused without clearing");

        let mut births = Vec::new();
        let mut deaths = Vec::new();
        for (cell, change) in changes {
            match change {
                Change::Born(owner) => {
                    self.next.set(cell, owner);
                    self.alive.insert(cell);
                    if let Some(player) = owner.player() {
                        self.scores.record_birth(player);
                    }
                    births.push(cell);
                }
                Change::Died => {
                    self.alive.remove(cell);
                    deaths.push(cell);
                }
                Change::Kept => self.next.set(cell, self.current.owner(cell)),
                // The cell keeps its previous (empty) tile and stays dead
                Change::Contested => {
                    trace!(x = cell.x, y = cell.y, "contested birth");
                    self.next.set(cell, self.current.owner(cell));
                }
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
        self.generation += 1;
        debug_assert!(self.is_consistent());

        births.sort_unstable();
        deaths.sort_unstable();
        debug!(
            generation = self.generation,
            births = births.len(),
            deaths = deaths.len(),
            population = self.alive.len(),
            "generation advanced"
        );
        StepDiff { generation: self.generation, births, deaths }
    }

    fn place(&mut self, cell: Cell, owner: CellOwner) {
        self.current.set(cell, owner);
        self.alive.insert(cell);
    }

    fn erase(&mut self, cell: Cell) {
        self.current.set(cell, CellOwner::Empty);
        self.alive.remove(cell);
    }

    fn clear_board(&mut self) {
        self.current.clear();
        self.next.clear();
        self.alive.clear();
        self.generation = 0;
    }

    fn locate(pattern: &Pattern, at: Cell) -> Result<Vec<Cell>> {
        pattern
            .placed_at(at)
            .ok_or_else(|| EngineError::invalid(format!("pattern '{}' does not fit on the plane", pattern.name)))
    }

    fn check_owner(&self, owner: CellOwner) -> Result<()> {
        match owner {
            CellOwner::Empty => Err(EngineError::invalid("cannot place a cell with an empty owner")),
            CellOwner::Alive => Ok(()),
            CellOwner::OwnedBy(_) => self.require_competitive("placing player-owned cells"),
        }
    }

    fn require_competitive(&self, operation: &'static str) -> Result<()> {
        if self.mode.is_competitive() {
            Ok(())
        } else {
            Err(EngineError::competitive_only(operation))
        }
    }
}
