//! Timing comparison of serial and parallel generation stepping

use std::time::Instant;

use cellular_automata::{Automaton, AutomatonSession, SessionConfig};

/// Average milliseconds per generation for a randomized session
fn benchmark(automaton: Automaton, size: usize, iterations: u32, parallel: bool) -> cellular_automata::Result<f64> {
    let mut session = AutomatonSession::new(SessionConfig {
        automaton,
        rows: automaton.rows_for(size, size),
        cols: size,
    })?;
    session.randomize(&mut rand::rng());

    let start = Instant::now();
    for _ in 0..iterations {
        let advanced = if parallel { session.step_parallel() } else { session.step() };
        // elementary sessions run out of rows; start them over
        if !advanced {
            session.reset();
        }
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations))
}

fn main() -> cellular_automata::Result<()> {
    env_logger::init();
    println!("=== Generation Stepping Benchmark ===\n");

    let sizes = [32, 64, 128];
    let iterations = 50;

    println!("{:>14} {:>10} {:>12} {:>12} {:>10}", "Automaton", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<62}", "");

    for automaton in Automaton::all() {
        for size in sizes {
            let serial_ms = benchmark(automaton, size, iterations, false)?;
            let parallel_ms = benchmark(automaton, size, iterations, true)?;

            println!(
                "{:>14} {:>10} {:>12.3} {:>12.3} {:>9.1}x",
                automaton.name(),
                format!("{size}x{size}"),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms.max(f64::EPSILON)
            );
        }
    }
    Ok(())
}
