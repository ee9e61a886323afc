use super::{AutomatonSession, DragPainter, SessionConfig};
use crate::domain::{Automaton, Pattern, presets};
use crate::error::Result;

/// GameState orchestrates the interactive simulation.
/// This is the application layer between the UI and the automaton session.
pub struct GameState {
    pub session: AutomatonSession,
    pub painter: DragPainter,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32, // Step performance metric
    pub help_visible: bool,
    pub pending_pattern: Option<Pattern>, // placed on the next grid click
}

impl GameState {
    /// Create new game state for a validated configuration
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            session: AutomatonSession::new(config)?,
            painter: DragPainter::new(),
            is_running: false,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
            help_visible: true,
            pending_pattern: None,
        })
    }

    /// Replace the session with a new automaton and/or grid size.
    /// On failure the current session is kept.
    pub fn rebuild(&mut self, automaton: Automaton, rows: usize, cols: usize) -> Result<()> {
        let config = SessionConfig {
            automaton,
            rows: automaton.rows_for(rows, cols),
            cols,
        };
        self.session = AutomatonSession::new(config)?;
        self.painter.release();
        self.is_running = false;
        self.update_timer = 0.0;
        self.pending_pattern = None;
        Ok(())
    }

    /// Enter placement mode with the automaton's `index`-th preset
    pub fn arm_pattern(mut self, index: usize) -> Self {
        self.pending_pattern = presets::for_automaton(self.session.automaton())
            .into_iter()
            .nth(index);
        match &self.pending_pattern {
            Some(pattern) => log::info!("Click the grid to place {}", pattern.name),
            None => log::warn!("No preset {index} for {}", self.session.automaton()),
        }
        self
    }

    pub fn cancel_pattern(mut self) -> Self {
        self.pending_pattern = None;
        self
    }

    /// Stamp the pending pattern centered on (i, j) and leave placement mode
    pub fn place_pattern(mut self, i: usize, j: usize) -> Self {
        if let Some(pattern) = self.pending_pattern.take() {
            let (rows, cols) = self.session.dimensions();
            let (top, left) = pattern.centered_at(i, j, rows, cols);
            self.session.stamp(&pattern, top, left);
            log::info!("Placed {} at ({top}, {left})", pattern.name);
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::info!("Simulation {}", if self.is_running { "running" } else { "paused" });
        self
    }

    /// Reset the grid to its initial state
    pub fn reset(mut self) -> Self {
        self.session.reset();
        self.is_running = false;
        self
    }

    /// Randomize the grid
    pub fn randomize(mut self) -> Self {
        self.session.randomize(&mut rand::rng());
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        log::info!("Speed: {:.0} gen/s", self.updates_per_second);
        self
    }

    pub fn toggle_help(mut self) -> Self {
        self.help_visible = !self.help_visible;
        self
    }

    /// Advance exactly one generation (manual step)
    pub fn step_once(mut self) -> Self {
        let start = std::time::Instant::now();
        let advanced = self.session.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        // an exhausted elementary automaton has nothing left to run
        if !advanced {
            self.is_running = false;
        }
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            self = self.step_once();
        }

        self
    }
}
