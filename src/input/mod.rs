use macroquad::prelude::*;

use crate::application::{GameState, GridLayout};
use crate::ui::{Button, ButtonAction};

/// Delay before a held key starts repeating, in seconds
const REPEAT_DELAY: f32 = 0.35;
/// Interval between repeats once repeating
const REPEAT_INTERVAL: f32 = 0.05;

/// Key repeat for holding space to keep stepping
#[derive(Debug, Default)]
pub struct KeyRepeat {
    held_for: f32,
    since_last: f32,
}

impl KeyRepeat {
    /// Feed one frame; returns how many repeats fire this frame
    pub fn update(&mut self, down: bool, delta_time: f32) -> u32 {
        if !down {
            *self = Self::default();
            return 0;
        }
        self.held_for += delta_time;
        if self.held_for < REPEAT_DELAY {
            return 0;
        }
        self.since_last += delta_time;
        let fired = (self.since_last / REPEAT_INTERVAL) as u32;
        self.since_last -= fired as f32 * REPEAT_INTERVAL;
        fired
    }
}

/// Mouse on the grid: places a pending pattern, otherwise paints through the
/// drag painter
pub fn handle_grid_mouse(mut state: GameState, layout: &GridLayout, mouse_pos: (f32, f32)) -> GameState {
    let cell = layout.screen_to_cell(mouse_pos.0, mouse_pos.1);

    if is_mouse_button_released(MouseButton::Left) {
        state.painter.release();
        return state;
    }

    let Some((i, j)) = cell else {
        if state.painter.is_dragging() {
            log::debug!("Drag left the grid");
            state.painter.release();
        }
        return state;
    };

    if state.pending_pattern.is_some() {
        return if is_mouse_button_pressed(MouseButton::Left) {
            state.place_pattern(i, j)
        } else {
            state
        };
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        state.painter.press(&mut state.session, i, j);
    } else if is_mouse_button_down(MouseButton::Left) {
        state.painter.hover(&mut state.session, i, j);
    }
    state
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, space_repeat: &mut KeyRepeat) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, GameState::step_once),
        (KeyCode::P, GameState::toggle_running),
        (KeyCode::R, GameState::reset),
        (KeyCode::N, GameState::randomize),
        (KeyCode::H, GameState::toggle_help),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
        (KeyCode::Escape, GameState::cancel_pattern),
    ];

    let state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    let repeats = space_repeat.update(is_key_down(KeyCode::Space), get_frame_time());
    (0..repeats).fold(state, |s, _| s.step_once())
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| match btn.action {
            ButtonAction::Step => s.step_once(),
            ButtonAction::PlayPause => s.toggle_running(),
            ButtonAction::Reset => s.reset(),
            ButtonAction::Randomize => s.randomize(),
        })
}
