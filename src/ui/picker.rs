use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 26.0;
const ARROW_WIDTH: f32 = 26.0;

/// Compact option selector: a label row plus a value row with < and >
/// arrows cycling through a fixed option list.
pub struct Picker {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    options: Vec<String>,
    selected: usize,
}

impl Picker {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            options,
            selected: 0,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    fn arrow_rects(&self) -> (Rect, Rect) {
        let y = self.y + ROW_HEIGHT;
        let left = Rect::new(self.x, y, ARROW_WIDTH, ROW_HEIGHT);
        let right = Rect::new(
            self.x + self.width - ARROW_WIDTH,
            y,
            ARROW_WIDTH,
            ROW_HEIGHT,
        );
        (left, right)
    }

    /// Handle clicks; returns true when the selection changed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) || self.options.is_empty() {
            return false;
        }
        let point = vec2(mouse_pos.0, mouse_pos.1);
        let (left, right) = self.arrow_rects();
        if left.contains(point) {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
            return true;
        }
        if right.contains(point) {
            self.selected = (self.selected + 1) % self.options.len();
            return true;
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y + 16.0, 16.0, WHITE);

        let point = vec2(mouse_pos.0, mouse_pos.1);
        let (left, right) = self.arrow_rects();
        for (rect, glyph) in [(left, "<"), (right, ">")] {
            let color = if rect.contains(point) {
                Color::from_rgba(100, 149, 237, 255)
            } else {
                Color::from_rgba(70, 130, 180, 255)
            };
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
            draw_text(glyph, rect.x + 9.0, rect.y + 18.0, 18.0, WHITE);
        }

        let Some(value) = self.options.get(self.selected) else {
            return;
        };
        let text_size = measure_text(value, None, 18, 1.0);
        draw_text(
            value,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + ROW_HEIGHT + 18.0,
            18.0,
            WHITE,
        );
    }
}
