use crate::config::Settings;
use crate::domain::{self, Cell, Mode, Outcome, Pattern, PlayerId, SimulationEngine, presets};
use tracing::{info, warn};

/// GameState drives the engine on behalf of the front-end.
/// It owns the generation cadence and decides when a match is over;
/// the engine itself has no notion of time.
pub struct GameState {
    pub engine: SimulationEngine,
    pub settings: Settings,
    pub patterns: Vec<Pattern>,
    pub update_timer: f32,
    pub update_interval: f32,
    pub last_evolution_time_ms: f32, // Evolution performance metric
    pub last_render_time_ms: f32,    // Render performance metric
    /// Index of pattern pending placement (None = normal mode)
    pub pending_pattern_index: Option<usize>,
    /// Result of the last finished competitive match
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Create new game state from settings
    pub fn new(settings: Settings) -> Self {
        let engine = SimulationEngine::new()
            .with_algorithm(settings.simulation.algorithm)
            .with_neutral_neighbors(settings.competitive.neutral_neighbors);
        let patterns = presets::all_patterns()
            .into_iter()
            .chain(settings.patterns.iter().cloned())
            .collect();
        Self {
            engine,
            patterns,
            update_timer: 0.0,
            update_interval: settings.simulation.update_interval_secs,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
            pending_pattern_index: None,
            outcome: None,
            settings,
        }
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.engine.toggle_running();
        if self.engine.is_running() {
            self.outcome = None;
            self.pending_pattern_index = None;
        }
        self
    }

    /// Clear board and scores
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self.outcome = None;
        self
    }

    /// Seed the configured region. In competitive mode the active player's
    /// army is added beside the existing one.
    pub fn randomize(mut self) -> Self {
        let player = match self.engine.mode() {
            Mode::Classic => None,
            Mode::Competitive(player) => Some(player),
        };
        let seeding = &self.settings.seeding;
        if let Err(err) = self.engine.seed_random(&mut rand::rng(), seeding.region(), seeding.density, player) {
            warn!(%err, "random seeding rejected");
        }
        self
    }

    /// Switch to a two-player match, first player placing
    pub fn enable_competitive(mut self) -> Self {
        if !self.engine.mode().is_competitive() {
            self.engine.set_mode(Mode::Competitive(PlayerId::First));
        }
        self
    }

    /// Hand placement over to the second player
    pub fn select_second_player(mut self) -> Self {
        if self.engine.mode().is_competitive() {
            self.engine.set_mode(Mode::Competitive(PlayerId::Second));
        }
        self
    }

    /// External stop signal: pause and settle the match
    pub fn stop(mut self) -> Self {
        self.engine.pause();
        if let Ok(outcome) = self.engine.outcome() {
            let (first, second) = self.engine.scores().unwrap_or_default();
            info!(%outcome, first, second, generation = self.engine.generation(), "match finished");
            self.outcome = Some(outcome);
        }
        self
    }

    /// Change the generation interval, kept within the configured bounds
    pub fn adjust_interval(mut self, delta: f32) -> Self {
        let sim = &self.settings.simulation;
        self.update_interval = (self.update_interval + delta).clamp(sim.min_interval_secs, sim.max_interval_secs);
        self
    }

    /// Switch between serial and parallel frontier evaluation
    pub fn cycle_algorithm(mut self) -> Self {
        let next = self.engine.algorithm().next();
        info!(algorithm = next.name(), description = next.description(), "algorithm changed");
        self.engine.set_algorithm(next);
        self
    }

    /// Enter placement mode with the next pattern, leaving it after the last one
    pub fn cycle_pattern(mut self) -> Self {
        self.pending_pattern_index = match self.pending_pattern_index {
            None if !self.patterns.is_empty() => Some(0),
            Some(idx) if idx + 1 < self.patterns.len() => Some(idx + 1),
            _ => None,
        };
        self
    }

    /// Paint or erase a single cell with the active owner
    pub fn paint(&mut self, cell: Cell, alive: bool) -> domain::Result<()> {
        let owner = self.engine.selected_owner();
        self.engine.toggle_cell(cell, alive, owner)
    }

    /// Drop the pending pattern centered on `at`. A rejected placement
    /// leaves the pattern pending.
    pub fn place_pending_pattern(&mut self, at: Cell) -> domain::Result<()> {
        let Some(idx) = self.pending_pattern_index else {
            return Ok(());
        };
        let owner = self.engine.selected_owner();
        self.engine.place_pattern(&self.patterns[idx], at, owner)?;
        self.pending_pattern_index = None;
        Ok(())
    }

    /// Advance by one frame; steps the engine once the interval has elapsed
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.engine.is_running() {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.update_interval {
            let start = std::time::Instant::now();
            self.engine.step();
            self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.update_timer = 0.0;
        }

        if self.engine.mode().is_competitive() && self.engine.alive().is_empty() {
            return self.stop();
        }
        self
    }
}
