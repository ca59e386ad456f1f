use macroquad::prelude::*;

use crate::application::{BrushKind, SimState};
use crate::ui::{self, Button, Picker};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Streams the grid's color buffer into a texture drawn scaled to fit
/// the world viewport. Recreated whenever the grid is resized.
pub struct WorldTexture {
    image: Image,
    texture: Texture2D,
}

impl WorldTexture {
    pub fn new(width: usize, height: usize) -> Self {
        let image = Image::gen_image_color(width as u16, height as u16, BLACK);
        let texture = Texture2D::from_image(&image);
        // Crisp cells, no smearing between neighbors.
        texture.set_filter(FilterMode::Nearest);
        Self { image, texture }
    }

    /// True when the backing image still matches the grid size.
    pub fn matches(&self, (width, height): (usize, usize)) -> bool {
        self.image.width as usize == width && self.image.height as usize == height
    }

    /// Upload the frame buffer and draw it scaled into the world area.
    pub fn draw(&mut self, frame: &[u32], grid_size: (usize, usize)) {
        for (pixel, &color) in self.image.get_image_data_mut().iter_mut().zip(frame) {
            *pixel = color.to_le_bytes();
        }
        self.texture.update(&self.image);

        let scale = ui::world_scale(grid_size);
        let (w, h) = grid_size;
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w as f32 * scale, h as f32 * scale)),
                ..Default::default()
            },
        );
    }
}

/// Outline the brush footprint under the cursor.
pub fn draw_brush_cursor(state: &SimState, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= ui::world_area_width() {
        return;
    }
    let scale = ui::world_scale(state.grid.dimensions());
    let radius = state.brush.radius as f32 * scale;
    let color = if state.brush.kind == BrushKind::Erase {
        Color::from_rgba(255, 90, 90, 200)
    } else {
        Color::from_rgba(255, 255, 255, 160)
    };
    draw_circle_lines(mouse_pos.0, mouse_pos.1, radius.max(2.0), 1.5, color);
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        ui::panel_x(),
        0.0,
        ui::PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Pick a label color for a frame-time metric
fn timing_color(ms: f32) -> Color {
    if ms < 4.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if ms < 16.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 80, 80, 255)
    }
}

/// Draw the control panel: palette, buttons, picker, and HUD labels
pub fn draw_controls(
    state: &SimState,
    buttons: &[Button],
    palette: &[(BrushKind, Button)],
    size_picker: &Picker,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    let px = ui::panel_x() + ui::PADDING;

    draw_text("Material", px, ui::PALETTE_Y - 8.0, 16.0, WHITE);
    for (kind, btn) in palette {
        btn.draw(mouse_pos, *kind == state.brush.kind);
    }
    for btn in buttons {
        btn.draw(mouse_pos, false);
    }
    size_picker.draw(mouse_pos);

    let (gw, gh) = state.grid.dimensions();
    let step_ms = state.last_step_time_ms;
    let render_ms = state.last_render_time_ms;

    // Static help block under the picker.
    let controls = [
        ("Controls:", 400.0, 14.0, WHITE),
        ("LMB: Paint", 416.0, 12.0, GRAY),
        ("RMB: Erase", 430.0, 12.0, GRAY),
        ("1-4: Material", 444.0, 12.0, GRAY),
        ("[ ]: Brush size", 458.0, 12.0, GRAY),
        ("Space: Pause", 472.0, 12.0, GRAY),
        ("Up/Down: Speed", 486.0, 12.0, GRAY),
        ("C: Clear", 500.0, 12.0, GRAY),
    ];
    for (text, y, size, color) in controls {
        draw_text(text, px, y, size, color);
    }

    let info = [
        (
            format!("Grid: {gw}\u{d7}{gh}"),
            540.0,
            13.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
        (
            format!("Cells: {}", format_number(gw * gh)),
            556.0,
            13.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
        (
            format!("Particles: {}", format_number(state.grid.population())),
            572.0,
            13.0,
            Color::from_rgba(100, 200, 255, 255),
        ),
        (format!("Step: {step_ms:.2}ms"), 600.0, 13.0, timing_color(step_ms)),
        (
            format!("Render: {render_ms:.2}ms"),
            616.0,
            13.0,
            timing_color(render_ms),
        ),
        (format!("FPS: {}", get_fps()), 632.0, 13.0, GRAY),
        (
            format!("Speed: {:.0} ticks/s", state.updates_per_second),
            664.0,
            14.0,
            WHITE,
        ),
        (
            format!(
                "Brush: {} ({})",
                state.brush.kind.label(),
                state.brush.radius
            ),
            684.0,
            14.0,
            WHITE,
        ),
        (format!("Tick: {}", state.ticks), 712.0, 16.0, Color::from_rgba(0, 255, 150, 255)),
    ];
    for (text, y, size, color) in &info {
        draw_text(text, px, *y, *size, *color);
    }

    let (status, status_color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 740.0, 16.0, status_color);
}
