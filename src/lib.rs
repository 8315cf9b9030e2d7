// Domain layer - grid, rules and the double-buffered simulation
pub mod domain;

// Application layer - host-driven scheduling and commands
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellState, Grid, GridError, Rule, ConwayRule, Simulation, Pattern, presets};
pub use application::{Command, Controller, Ticker};
pub use config::{ConfigError, LifeConfig};
