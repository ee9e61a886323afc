use macroquad::prelude::*;

use super::{ACCENT, ACCENT_HOVER, PANEL_BG};

const ITEM_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Shorten `text` with an ellipsis until it fits `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty() && width(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    label: &'static str,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: &'static str, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            label,
            items,
            selected: 0,
            is_open: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn header_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, ITEM_HEIGHT)
    }

    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(self.x, self.y + ITEM_HEIGHT * (index + 1) as f32, self.width, ITEM_HEIGHT)
    }

    fn hovered_item(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        let point = vec2(mouse_pos.0, mouse_pos.1);
        (0..self.items.len()).find(|&i| self.item_rect(i).contains(point))
    }

    fn is_hovered_header(&self, mouse_pos: (f32, f32)) -> bool {
        self.header_rect().contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Replace the items, selecting the first
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = 0;
        self.is_open = false;
    }

    /// Handle a left click. A click on the header opens or closes the menu;
    /// with the menu open, any other click closes it. Returns the item picked,
    /// which becomes the selection.
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if self.is_hovered_header(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }

        if !self.is_open {
            return None;
        }

        self.is_open = false;
        let picked = self.hovered_item(mouse_pos)?;
        self.selected = picked;
        Some(picked)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header = self.header_rect();
        let fill = if self.is_hovered_header(mouse_pos) { ACCENT_HOVER } else { ACCENT };
        draw_rectangle(header.x, header.y, header.w, header.h, fill);
        draw_rectangle_lines(header.x, header.y, header.w, header.h, 2.0, WHITE);

        let current = self.items.get(self.selected).map_or("none", String::as_str);
        let text = fit_text(current, self.width - 30.0);
        draw_text(&text, self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        draw_rectangle(self.x, self.y + ITEM_HEIGHT, self.width, menu_height, PANEL_BG);

        let hovered = self.hovered_item(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let rect = self.item_rect(i);
            let fill = if hovered == Some(i) {
                ACCENT_HOVER
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&fit_text(item, self.width - 10.0), rect.x + 5.0, rect.y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + ITEM_HEIGHT, self.width, menu_height, 2.0, WHITE);
    }
}
