mod button;
mod picker;

pub use button::Button;
pub use picker::Picker;

use macroquad::prelude::{screen_height, screen_width, Color};

use crate::application::BrushKind;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const PADDING: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the world viewport
pub fn world_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the world viewport
pub fn world_area_height() -> f32 {
    screen_height()
}

/// Pixels per cell when the grid is scaled to fit the viewport.
pub fn world_scale((width, height): (usize, usize)) -> f32 {
    (world_area_width() / width as f32).min(world_area_height() / height as f32)
}

/// Convert a packed RGBA value into a macroquad color.
pub fn packed_color(c: u32) -> Color {
    let [r, g, b, a] = c.to_le_bytes();
    Color::from_rgba(r, g, b, a)
}

/// Grid size presets for the size picker.
pub const GRID_SIZES: &[(usize, usize, &str)] = &[
    (192, 144, "192×144"),
    (256, 192, "256×192"),
    (384, 288, "384×288"),
    (512, 384, "512×384"),
];

/// Index into `GRID_SIZES` used at startup.
pub const DEFAULT_GRID_SIZE: usize = 1;

// Panel layout, top to bottom.
pub const PALETTE_Y: f32 = 40.0;
pub const PALETTE_ROW: f32 = 40.0;
pub const BUTTONS_Y: f32 = 220.0;
pub const PICKER_Y: f32 = 320.0;

/// Create control buttons with the standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + PADDING;
    let w = PANEL_WIDTH - 2.0 * PADDING;
    vec![
        Button::new(px, BUTTONS_Y, w, BUTTON_HEIGHT, "Play/Pause"),
        Button::new(px, BUTTONS_Y + 44.0, w, BUTTON_HEIGHT, "Clear"),
    ]
}

/// Create the material palette: one swatch button per brush kind.
pub fn create_palette() -> Vec<(BrushKind, Button)> {
    let px = panel_x() + PADDING;
    let w = PANEL_WIDTH - 2.0 * PADDING;
    BrushKind::all()
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let button = Button::new(
                px,
                PALETTE_Y + i as f32 * PALETTE_ROW,
                w,
                BUTTON_HEIGHT,
                kind.label(),
            )
            .with_color(packed_color(kind.swatch()));
            (kind, button)
        })
        .collect()
}
