mod button;
mod dropdown;

pub use button::{Button, ButtonAction};
pub use dropdown::Dropdown;

use macroquad::prelude::{Color, screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const PANEL_MARGIN: f32 = 10.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

pub const ACCENT: Color = Color::new(0.27, 0.51, 0.71, 1.0);
pub const ACCENT_HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);
pub const PANEL_BG: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH - PANEL_MARGIN
}

/// Width of the grid area left of the panel
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH - 2.0 * PANEL_MARGIN
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Square grid sizes offered in the size dropdown
pub const GRID_SIZES: &[(usize, &str)] = &[
    (8, "8x8"),
    (16, "16x16"),
    (32, "32x32"),
    (64, "64x64"),
    (128, "128x128"),
];

/// Wolfram codes offered in the rule dropdown
pub const ELEMENTARY_RULES: &[i64] = &[30, 90, 110, 150, 184, 22, 45, 73];

/// Help panel text
pub const HELP_LINES: &[&str] = &[
    "Click on a cell to update its status. Click and drag to update multiple cells.",
    "Press/hold space to advance the automaton. P plays/pauses.",
    "Press r to reset the grid. H hides this help.",
];

/// Dropdown slots, top to bottom
pub const AUTOMATON_DROPDOWN: usize = 0;
pub const SIZE_DROPDOWN: usize = 1;
pub const RULE_DROPDOWN: usize = 2;
pub const PATTERN_DROPDOWN: usize = 3;

/// Header y of the dropdown in `slot`
pub fn dropdown_y(slot: usize) -> f32 {
    20.0 + 50.0 * slot as f32
}

/// Create panel buttons stacked below the dropdowns
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 240.0, "Step", ButtonAction::Step),
        Button::new(px, 290.0, "Play/Pause", ButtonAction::PlayPause),
        Button::new(px, 340.0, "Reset", ButtonAction::Reset),
        Button::new(px, 390.0, "Random", ButtonAction::Randomize),
    ]
}

/// Route one left click to the dropdowns.
/// An open menu overlaps the headers below it, so while one is open it alone
/// sees the click. Returns `(dropdown, item)` when an item was picked.
pub fn click_dropdowns(dropdowns: &mut [Dropdown], mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    if let Some(open) = dropdowns.iter().position(Dropdown::is_open) {
        return dropdowns[open].click(mouse_pos).map(|item| (open, item));
    }

    // headers do not overlap, so at most one of these opens
    for dropdown in dropdowns.iter_mut() {
        dropdown.click(mouse_pos);
    }
    None
}
