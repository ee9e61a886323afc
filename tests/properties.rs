use cellular_automata::domain::{
    Automaton, BriansBrainRule, Grid, LifeRule, MooreNeighborhood, Neighborhood, TransitionRule,
    WireworldRule, WolframCode, next_generation, next_generation_parallel, presets,
};
use cellular_automata::{AutomatonSession, SessionConfig};
use proptest::prelude::*;

fn automaton_strategy() -> impl Strategy<Value = Automaton> {
    prop_oneof![
        Just(Automaton::GameOfLife),
        Just(Automaton::Wireworld),
        Just(Automaton::BriansBrain),
        (0i64..=255).prop_map(|code| Automaton::Elementary(WolframCode::new(code).unwrap())),
    ]
}

/// Random grid together with the state count it was drawn from
fn grid_strategy(max_side: usize, states: u8) -> impl Strategy<Value = Grid> {
    (1..=max_side, 1..=max_side).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(0..states, rows * cols).prop_map(move |cells| {
            Grid::from_fn(rows, cols, |i, j| cells[i * cols + j]).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn empty_grid_has_no_spontaneous_activity(rows in 1usize..20, cols in 1usize..20) {
        let grid = Grid::new(rows, cols).unwrap();
        let rules: [&dyn TransitionRule; 3] = [&LifeRule, &WireworldRule, &BriansBrainRule];
        for rule in rules {
            prop_assert_eq!(&next_generation(&grid, &MooreNeighborhood, rule), &grid);
        }
    }

    #[test]
    fn block_is_stable_anywhere(side in 4usize..16, i in 0usize..16, j in 0usize..16) {
        let mut grid = Grid::new(side, side).unwrap();
        presets::block().stamp(&mut grid, i % side, j % side);
        prop_assert_eq!(&next_generation(&grid, &MooreNeighborhood, &LifeRule), &grid);
    }

    #[test]
    fn blinker_has_period_two(side in 5usize..16, i in 0usize..16, j in 0usize..16) {
        let mut grid = Grid::new(side, side).unwrap();
        presets::blinker().stamp(&mut grid, i % side, j % side);
        let once = next_generation(&grid, &MooreNeighborhood, &LifeRule);
        let twice = next_generation(&once, &MooreNeighborhood, &LifeRule);
        prop_assert_ne!(&once, &grid);
        prop_assert_eq!(&twice, &grid);
    }

    #[test]
    fn toggle_cycles_back(automaton in automaton_strategy(), start in 0u8..4) {
        let start = start % automaton.state_count();
        let end = (0..automaton.state_count()).fold(start, |s, _| automaton.toggle(s));
        prop_assert_eq!(end, start);
    }

    #[test]
    fn neighborhood_never_leaves_the_grid(grid in grid_strategy(6, 4)) {
        let (rows, cols) = grid.dimensions();
        for (i, j) in [(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)] {
            let nb = MooreNeighborhood.neighbors(i, j, &grid);
            prop_assert_eq!(nb.len(), 8);
            // slots wrap across the seams
            prop_assert_eq!(nb[MooreNeighborhood::UP], grid[((i + rows - 1) % rows, j)]);
            prop_assert_eq!(nb[MooreNeighborhood::RIGHT], grid[(i, (j + 1) % cols)]);
        }
    }

    #[test]
    fn parallel_stepper_matches_serial(grid in grid_strategy(12, 4)) {
        let rules: [&dyn TransitionRule; 3] = [&LifeRule, &WireworldRule, &BriansBrainRule];
        for rule in rules {
            prop_assert_eq!(
                next_generation(&grid, &MooreNeighborhood, rule),
                next_generation_parallel(&grid, &MooreNeighborhood, rule)
            );
        }
    }

    #[test]
    fn reset_restores_initial_grid(
        automaton in automaton_strategy(),
        cols in 2usize..24,
        steps in 0usize..10,
        edits in prop::collection::vec((0usize..24, 0usize..24), 0..10),
    ) {
        let rows = automaton.rows_for(cols, cols);
        let mut session = AutomatonSession::new(SessionConfig { automaton, rows, cols }).unwrap();
        let initial = session.grid().clone();

        for _ in 0..steps {
            session.step();
        }
        for &(i, j) in &edits {
            let _ = session.edit(i % rows, j % cols);
        }
        session.reset();

        prop_assert_eq!(session.grid(), &initial);
        prop_assert_eq!(session.iteration(), 1);
        prop_assert_eq!(session.generation(), 0);
    }

    #[test]
    fn elementary_only_writes_the_active_row(code in 0i64..=255, cols in 4usize..40) {
        let automaton = Automaton::Elementary(WolframCode::new(code).unwrap());
        let rows = automaton.rows_for(0, cols);
        let mut session = AutomatonSession::new(SessionConfig { automaton, rows, cols }).unwrap();

        let before = session.grid().clone();
        session.step();
        let after = session.grid();
        for i in (0..rows).filter(|&i| i != 1) {
            prop_assert_eq!(after.row(i), before.row(i));
        }
        prop_assert_eq!(after[(1, 0)], 0);
        prop_assert_eq!(after[(1, cols - 1)], 0);
    }
}
