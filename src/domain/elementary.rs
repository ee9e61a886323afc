//! Wolfram's elementary cellular automata, stacked as rows of a 2D grid.
//!
//! Row 0 holds the initial generation. Each step computes exactly one more
//! row from the row above it, so the rule only ever looks at the three
//! Moore slots directly above a cell. The row being computed is tracked by
//! the caller and handed in through [`ElementaryRule::at_iteration`].

use super::cell::CellState;
use super::neighborhood::MooreNeighborhood;
use super::rules::TransitionRule;
use crate::error::{AutomatonError, Result};

/// A rule number in 0..=255.
/// Bit `p` holds the output for the 3-cell pattern `left*4 + center*2 + right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WolframCode(u8);

impl WolframCode {
    pub fn new(code: i64) -> Result<Self> {
        u8::try_from(code)
            .map(Self)
            .map_err(|_| AutomatonError::InvalidRule(code))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The rule as an 8-character binary string, most significant bit first
    pub fn binary_string(self) -> String {
        format!("{:08b}", self.0)
    }

    /// Output for a pattern value in 0..=7.
    /// Pattern 7 reads the leftmost character of the binary string, pattern 0 the rightmost.
    pub const fn output(self, pattern: u8) -> CellState {
        (self.0 >> (pattern & 7)) & 1
    }
}

impl Default for WolframCode {
    /// Rule 30
    fn default() -> Self {
        Self(30)
    }
}

impl std::fmt::Display for WolframCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule {}", self.0)
    }
}

/// The elementary automaton for one Wolfram code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementaryRule {
    code: WolframCode,
}

impl ElementaryRule {
    pub const fn new(code: WolframCode) -> Self {
        Self { code }
    }

    /// View the rule as the transition that fills row `iteration`
    /// of a grid `cols` cells wide.
    pub const fn at_iteration(&self, iteration: usize, cols: usize) -> ElementaryStep {
        ElementaryStep {
            code: self.code,
            iteration,
            cols,
        }
    }
}

/// One generation of an elementary automaton: only row `iteration` changes,
/// and its first and last columns stay fixed.
#[derive(Clone, Copy, Debug)]
pub struct ElementaryStep {
    code: WolframCode,
    iteration: usize,
    cols: usize,
}

impl ElementaryStep {
    fn is_eligible(&self, i: usize, j: usize) -> bool {
        i == self.iteration && j >= 1 && j + 1 < self.cols
    }
}

impl TransitionRule for ElementaryStep {
    fn name(&self) -> &'static str {
        "Elementary"
    }

    fn description(&self) -> &'static str {
        "1D Wolfram code, one row per step"
    }

    fn step(&self, i: usize, j: usize, neighborhood: &[CellState], current: CellState) -> CellState {
        if !self.is_eligible(i, j) {
            return current;
        }

        let left = neighborhood[MooreNeighborhood::UP_LEFT];
        let up = neighborhood[MooreNeighborhood::UP];
        let right = neighborhood[MooreNeighborhood::UP_RIGHT];
        let pattern = (left & 1) * 4 + (up & 1) * 2 + (right & 1);

        self.code.output(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_range() {
        assert!(WolframCode::new(0).is_ok());
        assert!(WolframCode::new(255).is_ok());
        assert_eq!(WolframCode::new(256), Err(AutomatonError::InvalidRule(256)));
        assert_eq!(WolframCode::new(-1), Err(AutomatonError::InvalidRule(-1)));
    }

    #[test]
    fn test_binary_string_is_zero_padded() {
        assert_eq!(WolframCode::new(30).unwrap().binary_string(), "00011110");
        assert_eq!(WolframCode::new(0).unwrap().binary_string(), "00000000");
        assert_eq!(WolframCode::new(255).unwrap().binary_string(), "11111111");
    }

    #[test]
    fn test_output_reads_string_from_the_right() {
        for code in [30, 90, 110, 184] {
            let code = WolframCode::new(code).unwrap();
            let bits: Vec<char> = code.binary_string().chars().collect();
            for p in 0..8u8 {
                let expected = bits[7 - p as usize].to_digit(2).unwrap() as CellState;
                assert_eq!(code.output(p), expected, "{code} pattern {p}");
            }
        }
    }

    #[test]
    fn test_rule_30_table() {
        let code = WolframCode::new(30).unwrap();
        let table: Vec<_> = (0..8).rev().map(|p| code.output(p)).collect();
        // 111 110 101 100 011 010 001 000
        assert_eq!(table, vec![0, 0, 0, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_only_active_row_changes() {
        let step = ElementaryRule::new(WolframCode::new(255).unwrap()).at_iteration(2, 5);
        let nb = [0; 8];
        assert_eq!(step.step(1, 2, &nb, 0), 0);
        assert_eq!(step.step(3, 2, &nb, 0), 0);
        assert_eq!(step.step(2, 2, &nb, 0), 1);
    }

    #[test]
    fn test_boundary_columns_stay_fixed() {
        let step = ElementaryRule::new(WolframCode::new(255).unwrap()).at_iteration(1, 5);
        let nb = [0; 8];
        assert_eq!(step.step(1, 0, &nb, 0), 0);
        assert_eq!(step.step(1, 4, &nb, 0), 0);
        assert_eq!(step.step(1, 1, &nb, 0), 1);
        assert_eq!(step.step(1, 3, &nb, 0), 1);
    }

    #[test]
    fn test_pattern_uses_upper_slots() {
        // rule 4 fires only on pattern 010
        let step = ElementaryRule::new(WolframCode::new(4).unwrap()).at_iteration(1, 5);
        let mut nb = [0; 8];
        nb[MooreNeighborhood::UP] = 1;
        assert_eq!(step.step(1, 2, &nb, 0), 1);

        // lower and side slots are ignored
        nb[MooreNeighborhood::LEFT] = 1;
        nb[MooreNeighborhood::DOWN] = 1;
        assert_eq!(step.step(1, 2, &nb, 0), 1);

        nb[MooreNeighborhood::UP_LEFT] = 1;
        assert_eq!(step.step(1, 2, &nb, 0), 0);
    }
}
