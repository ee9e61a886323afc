/// CellState is the fundamental unit of every automaton grid.
/// Its meaning depends on the automaton; the named constants below
/// spell out each automaton's states.
pub type CellState = u8;

/// Game of Life (and elementary automaton) states
pub mod life {
    use super::CellState;

    pub const DEAD: CellState = 0;
    pub const ALIVE: CellState = 1;
}

/// Wireworld states
pub mod wireworld {
    use super::CellState;

    pub const EMPTY: CellState = 0;
    pub const HEAD: CellState = 1;
    pub const TAIL: CellState = 2;
    pub const CONDUCTOR: CellState = 3;
}

/// Brian's Brain states
pub mod brain {
    use super::CellState;

    pub const OFF: CellState = 0;
    pub const ON: CellState = 1;
    pub const DYING: CellState = 2;
}

/// Count how many entries of a neighborhood are in the given state.
/// Every bundled rule reduces its neighborhood this way.
pub fn count_state(neighborhood: &[CellState], state: CellState) -> usize {
    neighborhood.iter().filter(|&&s| s == state).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_state() {
        let nb = [1, 0, 3, 1, 1, 2, 0, 0];
        assert_eq!(count_state(&nb, 1), 3);
        assert_eq!(count_state(&nb, 0), 3);
        assert_eq!(count_state(&nb, 2), 1);
        assert_eq!(count_state(&nb, 7), 0);
    }

    #[test]
    fn test_count_state_empty() {
        assert_eq!(count_state(&[], life::ALIVE), 0);
    }
}
