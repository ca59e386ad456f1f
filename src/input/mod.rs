use macroquad::prelude::*;

use crate::application::{BrushKind, SimState};
use crate::ui::{self, Button};

/// Convert a screen position to grid coordinates under the current
/// world-to-screen scale.
pub fn screen_to_grid(state: &SimState, mouse_pos: (f32, f32)) -> (i32, i32) {
    let scale = ui::world_scale(state.grid.dimensions());
    ((mouse_pos.0 / scale) as i32, (mouse_pos.1 / scale) as i32)
}

/// Handle mouse painting on the grid. Left deposits the selected brush
/// kind, right always erases. Painting is allowed while the simulation
/// runs; that is the whole point of a sandbox.
pub fn handle_mouse_paint(state: &mut SimState, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= ui::world_area_width() {
        return;
    }

    let (gx, gy) = screen_to_grid(state, mouse_pos);
    if is_mouse_button_down(MouseButton::Left) {
        state.brush.paint(&mut state.grid, gx, gy);
    } else if is_mouse_button_down(MouseButton::Right) {
        state.brush.erase(&mut state.grid, gx, gy);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: SimState) -> SimState {
    type KeyAction = (KeyCode, fn(SimState) -> SimState);

    let actions: [KeyAction; 10] = [
        (KeyCode::Space, SimState::toggle_running),
        (KeyCode::C, SimState::clear),
        (KeyCode::Key1, |s| s.with_brush_kind(BrushKind::Sand)),
        (KeyCode::Key2, |s| s.with_brush_kind(BrushKind::Water)),
        (KeyCode::Key3, |s| s.with_brush_kind(BrushKind::Stone)),
        (KeyCode::Key4, |s| s.with_brush_kind(BrushKind::Erase)),
        (KeyCode::Up, |s| s.adjust_speed(10.0)),
        (KeyCode::Down, |s| s.adjust_speed(-10.0)),
        (KeyCode::RightBracket, SimState::with_brush_grown),
        (KeyCode::LeftBracket, SimState::with_brush_shrunk),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process control button clicks functionally
pub fn process_button_clicks(
    state: SimState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> SimState {
    buttons.iter().enumerate().fold(state, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.toggle_running(),
            1 => s.clear(),
            _ => s,
        }
    })
}

/// Select a brush kind from the palette swatches
pub fn process_palette_clicks(
    state: SimState,
    palette: &[(BrushKind, Button)],
    mouse_pos: (f32, f32),
) -> SimState {
    palette.iter().fold(state, |s, (kind, btn)| {
        if btn.is_clicked(mouse_pos) {
            s.with_brush_kind(*kind)
        } else {
            s
        }
    })
}
