use macroquad::prelude::*;

use crate::application::{GameState, GridLayout};
use crate::ui::{Button, Dropdown, HELP_LINES, PANEL_BG, PANEL_MARGIN, PANEL_WIDTH, panel_x};

/// Parse a `#rgb` or `#rrggbb` color. Anything else renders magenta so a
/// bad palette entry is obvious on screen.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    let rgb = match digits.len() {
        _ if !digits.is_ascii() => None,
        3 => digits
            .chars()
            .map(|c| channel(&c.to_string()).map(|v| v * 17))
            .collect::<Option<Vec<u8>>>(),
        6 => (0..3)
            .map(|k| channel(&digits[2 * k..2 * k + 2]))
            .collect::<Option<Vec<u8>>>(),
        _ => None,
    };

    match rgb.as_deref() {
        Some(&[r, g, b]) => Color::from_rgba(r, g, b, 255),
        _ => MAGENTA,
    }
}

const BORDER_COLOR: Color = BLACK;

/// Draw every cell of the session's grid, fitted to the grid area
pub fn draw_grid(state: &GameState, layout: &GridLayout, hovered: Option<(usize, usize)>) {
    let session = &state.session;
    let (w, h) = (layout.cell_width, layout.cell_height);
    let border = (w.min(h) * 0.1).clamp(0.5, 2.0);

    for (i, j, _) in session.grid().iter_cells() {
        let (x, y) = layout.cell_to_screen(i, j);
        let mut color = session.color_at(i, j).map(hex_color).unwrap_or(MAGENTA);
        if hovered == Some((i, j)) {
            color.a = 0.75;
        }
        draw_rectangle(x, y, w, h, color);
        if w >= 4.0 && h >= 4.0 {
            draw_rectangle_lines(x, y, w, h, border, BORDER_COLOR);
        }
    }
}

/// Ghost of the pending pattern centered on the hovered cell
pub fn draw_pattern_preview(state: &GameState, layout: &GridLayout, hovered: Option<(usize, usize)>) {
    let (Some(pattern), Some((i, j))) = (&state.pending_pattern, hovered) else {
        return;
    };
    let session = &state.session;
    let (rows, cols) = session.dimensions();
    let (top, left) = pattern.centered_at(i, j, rows, cols);

    for &(di, dj, cell) in &pattern.cells {
        let (ci, cj) = ((top + di) % rows, (left + dj) % cols);
        let (x, y) = layout.cell_to_screen(ci, cj);
        let mut color = hex_color(session.automaton().color(ci, cell, session.iteration()));
        color.a = 0.5;
        draw_rectangle(x, y, layout.cell_width, layout.cell_height, color);
    }
}

/// Draw the collapsible help bar along the bottom of the grid area
pub fn draw_help(area_width: f32) {
    let bar_height = 100.0;
    let x = area_width * 0.05;
    let y = screen_height() - bar_height - 25.0;
    let width = area_width * 0.9;

    draw_rectangle(x, y, width, bar_height, Color::from_rgba(170, 170, 170, 244));
    for (k, line) in HELP_LINES.iter().enumerate() {
        let size = measure_text(line, None, 16, 1.0);
        let tx = x + ((width - size.width) / 2.0).max(5.0);
        draw_text(line, tx, y + 30.0 + k as f32 * 25.0, 16.0, BLACK);
    }
}

fn draw_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, dropdowns, and status
pub fn draw_controls(state: &GameState, buttons: &[Button], dropdowns: &[Dropdown], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px - PANEL_MARGIN, 0.0, PANEL_WIDTH + 2.0 * PANEL_MARGIN, screen_height(), PANEL_BG);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let session = &state.session;
    let (rows, cols) = session.dimensions();
    let info = Color::from_rgba(180, 180, 180, 255);

    let rule = session.automaton().rule(session.iteration(), cols);
    let mut labels = vec![
        (rule.name().to_owned(), 460.0, 16.0, WHITE),
        (rule.description().to_owned(), 480.0, 14.0, info),
        (format!("Grid: {rows}x{cols}"), 500.0, 14.0, info),
        (format!("Generation: {}", session.generation()), 525.0, 16.0, WHITE),
        (format!("Speed: {:.0} gen/s", state.updates_per_second), 545.0, 14.0, info),
        (format!("Step: {:.2}ms", state.last_step_time_ms), 565.0, 14.0, info),
    ];
    if let Some(code) = session.automaton().wolfram_code() {
        labels.push((format!("{code}: {}", code.binary_string()), 585.0, 14.0, info));
        let status = if session.is_exhausted() {
            "All rows filled".to_owned()
        } else {
            format!("Next row: {}", session.iteration())
        };
        labels.push((status, 605.0, 14.0, info));
    }
    if let Some(pattern) = &state.pending_pattern {
        labels.push((format!("Placing {} (Esc cancels)", pattern.name), 655.0, 14.0, YELLOW));
    }

    let (status, color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    labels.push((status.to_owned(), 635.0, 18.0, color));

    labels
        .iter()
        .for_each(|(text, y, size, color)| draw_label(text, px, *y, *size, *color));

    // closed dropdowns first so an open menu draws on top
    dropdowns
        .iter()
        .filter(|d| !d.is_open())
        .chain(dropdowns.iter().filter(|d| d.is_open()))
        .for_each(|d| d.draw(mouse_pos));
}
