use macroquad::prelude::*;

use falling_sand::{
    input,
    rendering::{self, WorldTexture},
    ui::{self, Picker, DEFAULT_GRID_SIZE, GRID_SIZES},
    SimState,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Falling Sand".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (gw, gh, _) = GRID_SIZES[DEFAULT_GRID_SIZE];
    let mut state = SimState::new(gw, gh);
    let mut world = WorldTexture::new(gw, gh);

    let size_items: Vec<String> = GRID_SIZES
        .iter()
        .map(|(_, _, name)| name.to_string())
        .collect();
    let mut size_picker = Picker::new(
        ui::panel_x() + ui::PADDING,
        ui::PICKER_Y,
        ui::PANEL_WIDTH - 2.0 * ui::PADDING,
        "Grid Size",
        size_items,
    );
    size_picker.set_selected(DEFAULT_GRID_SIZE);

    loop {
        let mouse_pos = mouse_position();

        // Keep the panel glued to the right edge on resize.
        size_picker.set_position(ui::panel_x() + ui::PADDING, ui::PICKER_Y);
        let buttons = ui::create_buttons();
        let palette = ui::create_palette();

        if size_picker.update(mouse_pos) {
            let (w, h, _) = GRID_SIZES[size_picker.selected()];
            state.resize_grid(w, h);
        }

        // One frame: spawn from input first, then advance the grid.
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_palette_clicks(state, &palette, mouse_pos);
        input::handle_mouse_paint(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        if !world.matches(state.grid.dimensions()) {
            let (w, h) = state.grid.dimensions();
            world = WorldTexture::new(w, h);
        }

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        world.draw(&state.frame, state.grid.dimensions());
        rendering::draw_brush_cursor(&state, mouse_pos);
        rendering::draw_controls(&state, &buttons, &palette, &size_picker, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
