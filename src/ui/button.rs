use macroquad::prelude::*;

/// Button UI component with hover, click, and active-selection states
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    /// Override the idle color; palette swatches use their material color.
    /// The hover color is a lightened shade of the same.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.hover_color = Color::new(
            (color.r + 0.12).min(1.0),
            (color.g + 0.12).min(1.0),
            (color.b + 0.12).min(1.0),
            color.a,
        );
        self
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button; active buttons get a bright outline
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        let (outline, thickness) = if active {
            (YELLOW, 3.0)
        } else {
            (WHITE, 2.0)
        };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, thickness, outline);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
