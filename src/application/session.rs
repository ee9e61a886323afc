use rand::Rng;

use crate::domain::{
    Automaton, CellState, Grid, MooreNeighborhood, Neighborhood, Pattern, TransitionRule,
    next_generation, next_generation_parallel,
};
use crate::error::Result;

/// What to build: the automaton and its grid size.
/// For the elementary automaton `rows` must already be `cols / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub automaton: Automaton,
    pub rows: usize,
    pub cols: usize,
}

/// AutomatonSession owns a running automaton: its grid plus the counters
/// that live outside the grid. It changes only through `edit`, `step`,
/// `reset` and the pattern helpers.
#[derive(Clone, Debug)]
pub struct AutomatonSession {
    automaton: Automaton,
    grid: Grid,
    /// Elementary only: row filled by the next step
    iteration: usize,
    generation: u64,
}

impl AutomatonSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let SessionConfig { automaton, rows, cols } = config;
        let grid = Grid::from_fn(rows, cols, |i, j| automaton.initial_state(i, j, cols))?;
        log::info!("Started {automaton} on a {rows}x{cols} grid");

        Ok(Self {
            automaton,
            grid,
            iteration: 1,
            generation: 0,
        })
    }

    pub const fn automaton(&self) -> Automaton {
        self.automaton
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True once an elementary automaton has filled every row
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.automaton, Automaton::Elementary(_)) && self.iteration >= self.grid.dimensions().0
    }

    pub fn state_at(&self, i: usize, j: usize) -> Option<CellState> {
        self.grid.get(i, j)
    }

    /// Display color of cell (i, j)
    pub fn color_at(&self, i: usize, j: usize) -> Option<&'static str> {
        self.grid
            .get(i, j)
            .map(|state| self.automaton.color(i, state, self.iteration))
    }

    /// Apply the automaton's toggle to one cell, returning its new state
    pub fn edit(&mut self, i: usize, j: usize) -> Result<CellState> {
        let current = self.grid.get(i, j).unwrap_or_default();
        let next = self.automaton.toggle(current);
        self.grid.set(i, j, next)?;
        Ok(next)
    }

    /// Advance one generation. Returns false when there was nothing to do.
    pub fn step(&mut self) -> bool {
        self.advance(next_generation)
    }

    /// Same as `step`, computed on rayon's thread pool
    pub fn step_parallel(&mut self) -> bool {
        self.advance(next_generation_parallel)
    }

    fn advance(
        &mut self,
        stepper: fn(&Grid, &dyn Neighborhood, &dyn TransitionRule) -> Grid,
    ) -> bool {
        if self.is_exhausted() {
            log::debug!("{} has filled every row; step ignored", self.automaton);
            return false;
        }

        let (_, cols) = self.grid.dimensions();
        let rule = self.automaton.rule(self.iteration, cols);
        self.grid = stepper(&self.grid, &MooreNeighborhood, rule.as_ref());

        if matches!(self.automaton, Automaton::Elementary(_)) {
            self.iteration += 1;
        }
        self.generation += 1;
        log::debug!("{} generation {}", self.automaton, self.generation);
        true
    }

    /// Rebuild the initial grid and reset all counters
    pub fn reset(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        let automaton = self.automaton;
        self.grid = self.grid.map(|i, j, _| automaton.initial_state(i, j, cols));
        self.iteration = 1;
        self.generation = 0;
        log::info!("Reset {automaton} ({rows}x{cols})");
    }

    /// Reset, then fill with random states. The elementary automaton only
    /// randomizes its seed row.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();
        match self.automaton {
            Automaton::Elementary(_) => {
                let (_, cols) = self.grid.dimensions();
                for j in 0..cols {
                    self.grid[(0, j)] = rng.random_range(0..2);
                }
            }
            automaton => self.grid.randomize(rng, automaton.state_count()),
        }
        log::info!("Randomized {}", self.automaton);
    }

    /// Stamp a preset pattern with its top-left corner at (i, j)
    pub fn stamp(&mut self, pattern: &Pattern, i: usize, j: usize) {
        pattern.stamp(&mut self.grid, i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{WolframCode, cell::brain, cell::wireworld, presets};
    use crate::error::AutomatonError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(automaton: Automaton, rows: usize, cols: usize) -> AutomatonSession {
        AutomatonSession::new(SessionConfig { automaton, rows, cols }).unwrap()
    }

    fn elementary(rule: i64, cols: usize) -> AutomatonSession {
        let automaton = Automaton::Elementary(WolframCode::new(rule).unwrap());
        session(automaton, automaton.rows_for(0, cols), cols)
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = AutomatonSession::new(SessionConfig {
            automaton: Automaton::GameOfLife,
            rows: 0,
            cols: 3,
        })
        .unwrap_err();
        assert_eq!(err, AutomatonError::InvalidDimensions { rows: 0, cols: 3 });
    }

    #[test]
    fn test_edit_toggles_one_cell() {
        let mut s = session(Automaton::Wireworld, 3, 3);
        assert_eq!(s.edit(1, 1), Ok(wireworld::CONDUCTOR));
        assert_eq!(s.edit(1, 1), Ok(wireworld::TAIL));
        assert_eq!(s.state_at(1, 1), Some(wireworld::TAIL));
        assert_eq!(s.grid().count(0), 8);
    }

    #[test]
    fn test_edit_out_of_bounds() {
        let mut s = session(Automaton::GameOfLife, 3, 3);
        assert!(matches!(s.edit(3, 0), Err(AutomatonError::OutOfBounds { .. })));
        assert_eq!(s.grid().count(0), 9);
    }

    #[test]
    fn test_lone_head_decays_to_conductor() {
        let mut s = session(Automaton::Wireworld, 5, 5);
        s.grid.set(2, 2, wireworld::HEAD).unwrap();

        s.step();
        assert_eq!(s.state_at(2, 2), Some(wireworld::TAIL));
        s.step();
        assert_eq!(s.state_at(2, 2), Some(wireworld::CONDUCTOR));
        for _ in 0..5 {
            s.step();
            assert_eq!(s.state_at(2, 2), Some(wireworld::CONDUCTOR));
        }
    }

    #[test]
    fn test_firing_cell_always_decays() {
        let mut s = session(Automaton::BriansBrain, 5, 5);
        // surround the centre with firing cells so neighbor count is high
        for (i, j) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2)] {
            s.grid.set(i, j, brain::ON).unwrap();
        }
        s.step();
        assert_eq!(s.state_at(2, 2), Some(brain::DYING));
        s.step();
        assert_eq!(s.state_at(2, 2), Some(brain::OFF));
    }

    #[test]
    fn test_elementary_rule_30() {
        let mut s = elementary(30, 5);
        assert_eq!(s.dimensions(), (2, 5));
        assert_eq!(s.grid().row(0), &[0, 0, 1, 0, 0]);

        assert!(s.step());
        assert_eq!(s.grid().row(1), &[0, 1, 1, 1, 0]);
        assert_eq!(s.grid().row(0), &[0, 0, 1, 0, 0]);
        assert_eq!(s.iteration(), 2);
    }

    #[test]
    fn test_elementary_exhausts_after_last_row() {
        let mut s = elementary(30, 5);
        assert!(s.step());
        assert!(s.is_exhausted());

        let before = s.grid().clone();
        assert!(!s.step());
        assert_eq!(s.grid(), &before);
        assert_eq!(s.iteration(), 2);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_elementary_rule_90_sierpinski() {
        let mut s = elementary(90, 9);
        while s.step() {}
        assert_eq!(s.grid().row(1), &[0, 0, 0, 1, 0, 1, 0, 0, 0]);
        assert_eq!(s.grid().row(2), &[0, 0, 1, 0, 0, 0, 1, 0, 0]);
        assert_eq!(s.grid().row(3), &[0, 1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_elementary_edits_feed_next_row() {
        let mut s = elementary(30, 7);
        s.step();
        // change the row the next generation reads from
        s.edit(1, 3).unwrap();
        s.step();
        assert_eq!(s.grid().row(1), &[0, 0, 1, 0, 1, 0, 0]);
        assert_eq!(s.grid().row(2), &[0, 1, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_reset_restores_initial_grid() {
        let mut s = elementary(110, 12);
        let initial = s.grid().clone();
        s.step();
        s.step();
        s.edit(4, 4).unwrap();
        s.reset();
        assert_eq!(s.grid(), &initial);
        assert_eq!(s.iteration(), 1);
        assert_eq!(s.generation(), 0);

        let mut life = session(Automaton::GameOfLife, 8, 8);
        life.stamp(&presets::glider(), 0, 0);
        life.step();
        life.reset();
        assert_eq!(life.grid(), &Grid::new(8, 8).unwrap());
    }

    #[test]
    fn test_parallel_step_matches_serial() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut serial = session(Automaton::BriansBrain, 24, 17);
        serial.randomize(&mut rng);
        let mut parallel = serial.clone();
        for _ in 0..10 {
            serial.step();
            parallel.step_parallel();
            assert_eq!(serial.grid(), parallel.grid());
        }
    }

    #[test]
    fn test_randomize_elementary_only_touches_seed_row() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = elementary(30, 16);
        s.randomize(&mut rng);
        let (rows, cols) = s.dimensions();
        assert!((1..rows).all(|i| s.grid().row(i).iter().all(|&c| c == 0)));
        assert_eq!(s.grid().row(0).len(), cols);
    }

    #[test]
    fn test_color_at() {
        let mut s = session(Automaton::Wireworld, 2, 2);
        s.edit(0, 0).unwrap();
        assert_eq!(s.color_at(0, 0), Some("#f7ff66"));
        assert_eq!(s.color_at(1, 1), Some("#333"));
        assert_eq!(s.color_at(2, 2), None);
    }
}
