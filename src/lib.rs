// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Driver and coordination
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellOwner, PlayerId, Pattern, presets, Algorithm, SimulationEngine, Mode, Outcome};
pub use application::{GameState, Camera};
pub use config::Settings;
pub use ui::Button;

/// Install the `tracing` subscriber used by the binaries.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
