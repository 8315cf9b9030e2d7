use rand::Rng;

/// A seed pattern: alive cells given as (row, col) offsets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self { name, description, cells }
    }

    /// Bounding box as (rows, cols)
    pub fn extent(&self) -> (i64, i64) {
        let rows = self.cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
        let cols = self.cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);
        (rows, cols)
    }

    /// Absolute seed coordinates with the pattern's top-left at (row, col)
    pub fn offset_by(&self, row: i64, col: i64) -> Vec<(i64, i64)> {
        self.cells.iter().map(|&(dr, dc)| (row + dr, col + dc)).collect()
    }

    /// Absolute seed coordinates with the pattern centered on a rows x cols board
    pub fn centered_in(&self, rows: i64, cols: i64) -> Vec<(i64, i64)> {
        let (h, w) = self.extent();
        self.offset_by((rows - h) / 2, (cols - w) / 2)
    }
}

/// Seed used by the classic demo board: an R-pentomino near the middle
/// of a 20x20 grid
pub fn demo_seed() -> Vec<(i64, i64)> {
    vec![(10, 11), (10, 12), (11, 10), (11, 11), (12, 11)]
}

/// Random seed coordinates, each cell alive with probability `density`
pub fn random_seed<R: Rng + ?Sized>(rows: i64, cols: i64, density: f64, rng: &mut R) -> Vec<(i64, i64)> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            blinker(),
            block(),
            glider(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            acorn(),
        ]
    }

    /// Look up a preset by name, ignoring case, spaces and dashes
    pub fn by_name(name: &str) -> Option<Pattern> {
        let normalize = |s: &str| {
            s.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        };
        let wanted = normalize(name);
        all_patterns().into_iter().find(|p| normalize(p.name) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_demo_seed_is_offset_r_pentomino() {
        assert_eq!(presets::r_pentomino().offset_by(10, 10), demo_seed());
    }

    #[test]
    fn test_extent() {
        assert_eq!(presets::blinker().extent(), (1, 3));
        assert_eq!(presets::lwss().extent(), (4, 5));
        assert_eq!(Pattern::new("Empty", "", vec![]).extent(), (0, 0));
    }

    #[test]
    fn test_centered_in() {
        let seed = presets::blinker().centered_in(5, 5);
        assert_eq!(seed, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("r-pentomino"), Some(presets::r_pentomino()));
        assert_eq!(presets::by_name("LWSS"), Some(presets::lwss()));
        assert_eq!(presets::by_name("gosper"), None);
    }

    #[test]
    fn test_random_seed_bounds_and_density() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_seed(10, 10, 0.0, &mut rng).is_empty());
        assert_eq!(random_seed(10, 10, 1.0, &mut rng).len(), 100);

        let seed = random_seed(8, 12, 0.3, &mut rng);
        assert!(seed.iter().all(|&(r, c)| (0..8).contains(&r) && (0..12).contains(&c)));
    }

    #[test]
    fn test_random_seed_reproducible() {
        let a = random_seed(16, 16, 0.25, &mut StdRng::seed_from_u64(42));
        let b = random_seed(16, 16, 0.25, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
