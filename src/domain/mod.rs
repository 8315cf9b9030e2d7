mod cell;
mod error;
mod grid;
mod rules;
mod patterns;
mod simulation;

pub use cell::CellState;
pub use error::GridError;
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, LifeLikeRule, RuleParseError, all_rules, default_rule, rule_from_str};
pub use patterns::{Pattern, presets, demo_seed, random_seed};
pub use simulation::{Simulation, Phase};
