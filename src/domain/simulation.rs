use rayon::prelude::*;

use super::{CellState, Grid, GridError, Rule, default_rule};

/// Where the simulation is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fresh from construction or restart, showing the seed
    Seeded,
    /// At least one generation computed since the last seeding
    Advanced,
}

/// Simulation owns a double-buffered pair of grids and advances them
/// one generation at a time.
///
/// `current` is the only externally visible state. `next` is scratch:
/// it is written during a step, never read, and swapped with `current`
/// once every cell has been computed.
pub struct Simulation {
    current: Grid,
    next: Grid,
    seed: Vec<(i64, i64)>,
    rule: Box<dyn Rule>,
    generation: u64,
}

impl Simulation {
    /// Create a Conway simulation seeded with the given (row, col) cells
    pub fn new(rows: i64, cols: i64, seed: Vec<(i64, i64)>) -> Result<Self, GridError> {
        Self::with_rule(rows, cols, seed, default_rule())
    }

    /// Create a simulation driven by a custom rule
    pub fn with_rule(
        rows: i64,
        cols: i64,
        seed: Vec<(i64, i64)>,
        rule: Box<dyn Rule>,
    ) -> Result<Self, GridError> {
        let mut simulation = Self {
            current: Grid::new(rows, cols)?,
            next: Grid::new(rows, cols)?,
            seed,
            rule,
            generation: 0,
        };
        simulation.restart();
        Ok(simulation)
    }

    /// Reinitialize the visible generation to the seed pattern
    pub fn restart(&mut self) {
        self.current.clear();
        for &(row, col) in &self.seed {
            self.current.set(row, col, CellState::Alive);
        }
        self.generation = 0;
    }

    /// Next state of one cell under the installed rule
    pub fn rule_for(&self, state: CellState, alive_neighbors: u8) -> CellState {
        self.rule.evolve(state, alive_neighbors)
    }

    /// Advance exactly one generation.
    /// Every cell of `next` is derived from the frozen `current` before the swap.
    pub fn step(&mut self) {
        let (rows, cols) = self.current.dimensions();
        for row in 0..rows as i64 {
            for col in 0..cols as i64 {
                let state = self.current.get(row, col);
                let neighbors = self.current.count_alive_neighbors(row, col);
                self.next.set(row, col, self.rule.evolve(state, neighbors));
            }
        }
        self.swap_buffers();
    }

    /// Advance one generation computing rows in parallel with rayon.
    /// Produces exactly the same result as `step`.
    pub fn step_parallel(&mut self) {
        let cols = self.current.dimensions().1;
        let current = &self.current;
        let rule = self.rule.as_ref();

        self.next
            .cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                let row = row as i64;
                for (col, cell) in out.iter_mut().enumerate() {
                    let col = col as i64;
                    *cell = rule.evolve(current.get(row, col), current.count_alive_neighbors(row, col));
                }
            });
        self.swap_buffers();
    }

    fn swap_buffers(&mut self) {
        let Ok(()) = self.current.exchange(&mut self.next) else {
            unreachable!("current and next are built with the same dimensions");
        };
        self.generation += 1;
    }

    /// The last computed generation, for rendering
    pub fn current_state(&self) -> &Grid {
        &self.current
    }

    /// Generations computed since the last seeding
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn phase(&self) -> Phase {
        if self.generation == 0 { Phase::Seeded } else { Phase::Advanced }
    }

    pub fn seed(&self) -> &[(i64, i64)] {
        &self.seed
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Replace the rule; takes effect from the next step
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.rule = rule;
    }

    /// Replace the seed and reseed the board
    pub fn reseed(&mut self, seed: Vec<(i64, i64)>) {
        self.seed = seed;
        self.restart();
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }
}
