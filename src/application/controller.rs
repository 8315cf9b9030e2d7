use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::Ticker;
use crate::domain::{Simulation, all_rules};

/// Commands a host sends to the controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Host frame time elapsed; runs any generations that are due
    Tick(Duration),
    /// Advance exactly one generation, even while paused
    Step,
    /// Reseed the board and forget pending time
    Restart,
    TogglePause,
    /// Select a rule by index into `all_rules()`
    SetRule(usize),
    SetInterval(Duration),
}

/// Controller orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct Controller {
    simulation: Simulation,
    ticker: Ticker,
    parallel: bool,
    pub is_running: bool,
}

impl Controller {
    /// Wrap a simulation; starts running like the demo board's timer
    pub fn new(simulation: Simulation, ticker: Ticker) -> Self {
        Self {
            simulation,
            ticker,
            parallel: false,
            is_running: true,
        }
    }

    /// Use rayon row-parallel stepping (builder pattern)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Apply one command, returning how many generations it advanced
    pub fn handle(&mut self, command: Command) -> u32 {
        match command {
            Command::Tick(elapsed) => {
                if !self.is_running {
                    return 0;
                }
                let due = self.ticker.advance(elapsed);
                (0..due).for_each(|_| self.advance());
                due
            }
            Command::Step => {
                self.advance();
                1
            }
            Command::Restart => {
                self.simulation.restart();
                self.ticker.reset();
                info!(alive = self.simulation.current_state().count_alive(), "simulation restarted");
                0
            }
            Command::TogglePause => {
                self.is_running = !self.is_running;
                debug!(running = self.is_running, "toggled pause");
                0
            }
            Command::SetRule(index) => {
                match all_rules().into_iter().nth(index) {
                    Some(rule) => {
                        info!(rule = rule.name(), "rule changed");
                        self.simulation.set_rule(rule);
                    }
                    None => warn!(index, "no rule at index"),
                }
                0
            }
            Command::SetInterval(interval) => {
                self.ticker.set_interval(interval);
                debug!(interval_ms = self.ticker.interval().as_millis() as u64, "interval changed");
                0
            }
        }
    }

    fn advance(&mut self) {
        if self.parallel {
            self.simulation.step_parallel();
        } else {
            self.simulation.step();
        }
        trace!(generation = self.simulation.generation(), "generation computed");
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }
}
