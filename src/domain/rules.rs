use super::cell::{CellState, brain, count_state, life, wireworld};

/// Trait for cellular automaton transition rules.
/// A rule maps a cell's position, its neighborhood and its current state
/// to the state it takes in the next generation.
pub trait TransitionRule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Compute the next state of the cell at (i, j)
    fn step(&self, i: usize, j: usize, neighborhood: &[CellState], current: CellState) -> CellState;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct LifeRule;

impl TransitionRule for LifeRule {
    fn name(&self) -> &'static str {
        "Game of Life"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn step(&self, _i: usize, _j: usize, neighborhood: &[CellState], current: CellState) -> CellState {
        match count_state(neighborhood, life::ALIVE) {
            3 => life::ALIVE,
            2 => current,
            _ => life::DEAD,
        }
    }
}

/// Brian Silverman's Wireworld
/// Electrons (head followed by tail) travel along conductors.
#[derive(Clone, Copy, Debug, Default)]
pub struct WireworldRule;

impl TransitionRule for WireworldRule {
    fn name(&self) -> &'static str {
        "Wireworld"
    }

    fn description(&self) -> &'static str {
        "Electrons on wires"
    }

    fn step(&self, _i: usize, _j: usize, neighborhood: &[CellState], current: CellState) -> CellState {
        match current {
            wireworld::EMPTY => wireworld::EMPTY,
            wireworld::HEAD => wireworld::TAIL,
            wireworld::TAIL => wireworld::CONDUCTOR,
            wireworld::CONDUCTOR => match count_state(neighborhood, wireworld::HEAD) {
                1 | 2 => wireworld::HEAD,
                _ => wireworld::CONDUCTOR,
            },
            other => other,
        }
    }
}

/// Brian's Brain (B2/S/C3)
/// Every firing cell spends one generation dying before it can fire again.
#[derive(Clone, Copy, Debug, Default)]
pub struct BriansBrainRule;

impl TransitionRule for BriansBrainRule {
    fn name(&self) -> &'static str {
        "Brian's Brain"
    }

    fn description(&self) -> &'static str {
        "B2/S/C3 - Always moving"
    }

    fn step(&self, _i: usize, _j: usize, neighborhood: &[CellState], current: CellState) -> CellState {
        match current {
            brain::ON => brain::DYING,
            brain::DYING => brain::OFF,
            _ if count_state(neighborhood, brain::ON) == 2 => brain::ON,
            other => other,
        }
    }
}
