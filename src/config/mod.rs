//! Configuration management for the simulation

pub mod settings;

pub use settings::{Settings, SimulationConfig, SeedingConfig, CompetitiveConfig, CliOverrides};
