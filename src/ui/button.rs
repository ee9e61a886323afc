use macroquad::prelude::*;

use super::{ACCENT, ACCENT_HOVER, BUTTON_HEIGHT, PANEL_WIDTH};

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Step,
    PlayPause,
    Reset,
    Randomize,
}

/// Panel button with hover and click detection
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: &'static str,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(x: f32, y: f32, label: &'static str, action: ButtonAction) -> Self {
        Self {
            rect: Rect::new(x, y, PANEL_WIDTH, BUTTON_HEIGHT),
            label,
            action,
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) { ACCENT_HOVER } else { ACCENT };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(self.label, None, 20, 1.0);
        draw_text(self.label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 20.0, WHITE);
    }

    /// Clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
