//! Generation stepping.
//!
//! Every cell's next state is computed from the frozen pre-step grid and
//! collected into a fresh grid; callers swap it in with a single assignment.

use super::{Grid, Neighborhood, TransitionRule};

/// Advance the whole grid by one generation (serial)
pub fn next_generation(
    grid: &Grid,
    neighborhood: &dyn Neighborhood,
    rule: &dyn TransitionRule,
) -> Grid {
    grid.map(|i, j, current| rule.step(i, j, &neighborhood.neighbors(i, j, grid), current))
}

/// Advance the whole grid by one generation, rows spread over rayon's pool.
/// Produces exactly the same grid as [`next_generation`].
pub fn next_generation_parallel(
    grid: &Grid,
    neighborhood: &dyn Neighborhood,
    rule: &dyn TransitionRule,
) -> Grid {
    grid.par_map(|i, j, current| rule.step(i, j, &neighborhood.neighbors(i, j, grid), current))
}
