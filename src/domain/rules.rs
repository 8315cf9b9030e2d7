use std::str::FromStr;

use thiserror::Error;

use super::CellState;

/// Trait for cellular automaton rules.
/// The simulation consults exactly one rule per cell per generation,
/// so swapping the rule changes the game without touching the engine.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &str;

    /// Short description
    fn description(&self) -> &str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: CellState, alive_neighbors: u8) -> CellState;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &str {
        "Conway"
    }

    fn description(&self) -> &str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: CellState, alive_neighbors: u8) -> CellState {
        match current {
            CellState::Alive if alive_neighbors < 2 || alive_neighbors > 3 => CellState::Dead,
            CellState::Alive => CellState::Alive,
            CellState::Dead if alive_neighbors == 3 => CellState::Alive,
            CellState::Dead => CellState::Dead,
        }
    }
}

/// Errors raised when parsing B/S rule notation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("rule `{0}` must look like B3/S23")]
    Malformed(String),
    #[error("neighbor count `{0}` is not a digit in 0..=8")]
    InvalidDigit(char),
}

/// Any outer-totalistic rule on the Moore neighborhood, written as B/S
/// notation (`B3/S23`, `B36/S23`, ...)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeLikeRule {
    name: String,
    notation: String,
    birth: [bool; 9],
    survival: [bool; 9],
}

impl LifeLikeRule {
    /// Parse B/S notation and attach a display name
    pub fn named(name: impl Into<String>, notation: &str) -> Result<Self, RuleParseError> {
        let mut rule: Self = notation.parse()?;
        rule.name = name.into();
        Ok(rule)
    }

    /// HighLife (B36/S23)
    /// Like Conway's Life but cells with 6 neighbors are born
    pub fn high_life() -> Self {
        Self::from_counts("HighLife", "B36/S23", &[3, 6], &[2, 3])
    }

    /// Seeds (B2/S)
    /// Every live cell dies each generation
    pub fn seeds() -> Self {
        Self::from_counts("Seeds", "B2/S", &[2], &[])
    }

    /// Day & Night (B3678/S34678)
    /// Symmetric rule - inverse of a pattern follows same rules
    pub fn day_and_night() -> Self {
        Self::from_counts("Day&Night", "B3678/S34678", &[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    fn from_counts(name: &str, notation: &str, birth: &[u8], survival: &[u8]) -> Self {
        let mut rule = Self {
            name: name.to_owned(),
            notation: notation.to_owned(),
            birth: [false; 9],
            survival: [false; 9],
        };
        birth.iter().for_each(|&n| rule.birth[n as usize] = true);
        survival.iter().for_each(|&n| rule.survival[n as usize] = true);
        rule
    }

    /// B/S notation of this rule
    pub fn notation(&self) -> &str {
        &self.notation
    }
}

fn parse_counts(digits: &str) -> Result<[bool; 9], RuleParseError> {
    let mut counts = [false; 9];
    for ch in digits.chars() {
        match ch.to_digit(10) {
            Some(n) if n <= 8 => counts[n as usize] = true,
            _ => return Err(RuleParseError::InvalidDigit(ch)),
        }
    }
    Ok(counts)
}

impl FromStr for LifeLikeRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RuleParseError::Malformed(s.to_owned());
        let (b, s_part) = s.trim().split_once('/').ok_or_else(malformed)?;
        let birth = b
            .strip_prefix('B')
            .or_else(|| b.strip_prefix('b'))
            .ok_or_else(malformed)?;
        let survival = s_part
            .strip_prefix('S')
            .or_else(|| s_part.strip_prefix('s'))
            .ok_or_else(malformed)?;

        let notation = format!("B{birth}/S{survival}");
        Ok(Self {
            name: notation.clone(),
            notation,
            birth: parse_counts(birth)?,
            survival: parse_counts(survival)?,
        })
    }
}

impl Rule for LifeLikeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.notation
    }

    fn evolve(&self, current: CellState, alive_neighbors: u8) -> CellState {
        let n = alive_neighbors as usize;
        let table = match current {
            CellState::Alive => &self.survival,
            CellState::Dead => &self.birth,
        };
        CellState::from(table.get(n).copied().unwrap_or(false))
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(LifeLikeRule::high_life()),
        Box::new(LifeLikeRule::seeds()),
        Box::new(LifeLikeRule::day_and_night()),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

/// Resolve a rule from configuration: `conway` or any B/S notation
pub fn rule_from_str(s: &str) -> Result<Box<dyn Rule>, RuleParseError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "conway" | "b3/s23" => Ok(Box::new(ConwayRule)),
        "highlife" => Ok(Box::new(LifeLikeRule::high_life())),
        "seeds" => Ok(Box::new(LifeLikeRule::seeds())),
        "day&night" | "daynight" => Ok(Box::new(LifeLikeRule::day_and_night())),
        _ => Ok(Box::new(s.parse::<LifeLikeRule>()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState::{Alive, Dead};

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert_eq!(rule.evolve(Alive, 0), Dead);
        assert_eq!(rule.evolve(Alive, 1), Dead);

        // Survival
        assert_eq!(rule.evolve(Alive, 2), Alive);
        assert_eq!(rule.evolve(Alive, 3), Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Alive, 4), Dead);
        assert_eq!(rule.evolve(Alive, 8), Dead);

        // Reproduction
        assert_eq!(rule.evolve(Dead, 3), Alive);
        assert_eq!(rule.evolve(Dead, 2), Dead);
        assert_eq!(rule.evolve(Dead, 4), Dead);
    }

    #[test]
    fn test_parsed_conway_matches_builtin() {
        let parsed: LifeLikeRule = "B3/S23".parse().unwrap();
        for n in 0..=8 {
            for state in [Dead, Alive] {
                assert_eq!(parsed.evolve(state, n), ConwayRule.evolve(state, n), "{state:?} {n}");
            }
        }
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule = LifeLikeRule::high_life();

        // HighLife specific: birth with 6 neighbors
        assert_eq!(rule.evolve(Dead, 6), Alive);
        assert_eq!(rule.evolve(Dead, 3), Alive);
        assert_eq!(rule.evolve(Alive, 6), Dead);
    }

    #[test]
    fn test_seeds_always_dies() {
        let rule = LifeLikeRule::seeds();

        // All living cells die
        assert_eq!(rule.evolve(Alive, 0), Dead);
        assert_eq!(rule.evolve(Alive, 2), Dead);
        assert_eq!(rule.evolve(Alive, 8), Dead);

        // Only born with 2 neighbors
        assert_eq!(rule.evolve(Dead, 2), Alive);
        assert_eq!(rule.evolve(Dead, 3), Dead);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("23/3".parse::<LifeLikeRule>(), Err(RuleParseError::Malformed(_))));
        assert!(matches!("B3S23".parse::<LifeLikeRule>(), Err(RuleParseError::Malformed(_))));
        assert_eq!("B39/S23".parse::<LifeLikeRule>(), Err(RuleParseError::InvalidDigit('9')));
    }

    #[test]
    fn test_named_rule() {
        let rule = LifeLikeRule::named("Life without Death", "B3/S012345678").unwrap();
        assert_eq!(rule.name(), "Life without Death");
        assert_eq!(rule.evolve(Alive, 0), Alive);
        assert_eq!(rule.evolve(Dead, 2), Dead);
    }

    #[test]
    fn test_parse_lowercase() {
        let rule: LifeLikeRule = "b36/s23".parse().unwrap();
        assert_eq!(rule.notation(), "B36/S23");
    }

    #[test]
    fn test_rule_from_str() {
        assert_eq!(rule_from_str("conway").unwrap().name(), "Conway");
        assert_eq!(rule_from_str("HighLife").unwrap().name(), "HighLife");
        assert_eq!(rule_from_str("B2/S").unwrap().description(), "B2/S");
        assert!(rule_from_str("nonsense").is_err());
    }

    #[test]
    fn test_all_rules_names_unique() {
        let names: Vec<String> = all_rules().iter().map(|r| r.name().to_owned()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
