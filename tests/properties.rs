//! Property-based tests for the grid and simulation.

use proptest::prelude::*;
use toroidal_life::domain::{CellState, Grid, Simulation};

fn seed_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-50i64..50, -50i64..50), 0..40)
}

/// Coordinates anywhere in i64, weighted toward both extremes
fn coordinate() -> impl Strategy<Value = i64> {
    prop_oneof![
        i64::MIN..=i64::MIN + 10,
        i64::MAX - 10..=i64::MAX,
        -1000i64..1000,
        any::<i64>(),
    ]
}

proptest! {
    /// Extreme coordinates read and count exactly like their in-range residues
    #[test]
    fn prop_extreme_coordinates_match_residue(
        rows in 1i64..12,
        cols in 1i64..12,
        seed in seed_strategy(),
        r in coordinate(),
        c in coordinate(),
    ) {
        let mut grid = Grid::new(rows, cols).unwrap();
        for (sr, sc) in seed {
            grid.set(sr, sc, CellState::Alive);
        }
        let (wr, wc) = (r.rem_euclid(rows), c.rem_euclid(cols));
        prop_assert_eq!(grid.get(r, c), grid.get(wr, wc));
        prop_assert_eq!(grid.count_alive_neighbors(r, c), grid.count_alive_neighbors(wr, wc));
    }

    /// Setting through an extreme coordinate lands on its residue
    #[test]
    fn prop_set_at_extremes(rows in 1i64..12, cols in 1i64..12, r in coordinate(), c in coordinate()) {
        let mut grid = Grid::new(rows, cols).unwrap();
        grid.set(r, c, CellState::Alive);
        let expected = (r.rem_euclid(rows) as usize, c.rem_euclid(cols) as usize);
        prop_assert_eq!(grid.alive_cells(), vec![expected]);
    }

    /// get(r, c) == get(r + rows, c + cols) for any integers
    #[test]
    fn prop_wrap_equivalence(
        rows in 1i64..12,
        cols in 1i64..12,
        seed in seed_strategy(),
        r in -1000i64..1000,
        c in -1000i64..1000,
        k in -5i64..5,
    ) {
        let mut grid = Grid::new(rows, cols).unwrap();
        for (sr, sc) in seed {
            grid.set(sr, sc, CellState::Alive);
        }
        prop_assert_eq!(grid.get(r, c), grid.get(r + rows, c + cols));
        prop_assert_eq!(grid.get(r, c), grid.get(r + k * rows, c - k * cols));
    }

    /// A lone alive cell never counts itself
    #[test]
    fn prop_neighbors_exclude_self(rows in 3i64..20, cols in 3i64..20, r in coordinate(), c in coordinate()) {
        let mut grid = Grid::new(rows, cols).unwrap();
        grid.set(r, c, CellState::Alive);
        prop_assert_eq!(grid.count_alive_neighbors(r, c), 0);
    }

    /// Neighbor counts stay in 0..=8 and reading does not mutate
    #[test]
    fn prop_neighbor_count_bounded(rows in 1i64..10, cols in 1i64..10, seed in seed_strategy()) {
        let mut grid = Grid::new(rows, cols).unwrap();
        for (sr, sc) in seed {
            grid.set(sr, sc, CellState::Alive);
        }
        let before = grid.clone();
        for r in 0..rows {
            for c in 0..cols {
                prop_assert!(grid.count_alive_neighbors(r, c) <= 8);
            }
        }
        prop_assert_eq!(grid, before);
    }

    /// restart() restores exactly the seeded board
    #[test]
    fn prop_restart_round_trip(rows in 1i64..16, cols in 1i64..16, seed in seed_strategy(), steps in 0usize..12) {
        let mut sim = Simulation::new(rows, cols, seed.clone()).unwrap();
        for _ in 0..steps {
            sim.step();
        }
        sim.restart();
        let fresh = Simulation::new(rows, cols, seed).unwrap();
        prop_assert_eq!(sim.current_state(), fresh.current_state());
    }

    /// The rayon step computes the same generation as the serial one
    #[test]
    fn prop_parallel_matches_serial(rows in 1i64..24, cols in 1i64..24, seed in seed_strategy(), steps in 1usize..8) {
        let mut serial = Simulation::new(rows, cols, seed.clone()).unwrap();
        let mut parallel = Simulation::new(rows, cols, seed).unwrap();
        for _ in 0..steps {
            serial.step();
            parallel.step_parallel();
        }
        prop_assert_eq!(serial.current_state(), parallel.current_state());
    }

    /// One step equals applying Conway's table to a frozen copy of the board
    #[test]
    fn prop_step_is_synchronous(rows in 1i64..12, cols in 1i64..12, seed in seed_strategy()) {
        let mut sim = Simulation::new(rows, cols, seed).unwrap();
        let frozen = sim.current_state().clone();
        sim.step();
        for r in 0..rows {
            for c in 0..cols {
                let n = frozen.count_alive_neighbors(r, c);
                let expected = match (frozen.get(r, c), n) {
                    (CellState::Alive, 2 | 3) | (CellState::Dead, 3) => CellState::Alive,
                    _ => CellState::Dead,
                };
                prop_assert_eq!(sim.current_state().get(r, c), expected);
            }
        }
    }
}
