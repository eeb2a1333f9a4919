use macroquad::prelude::*;
use seeded_life::{
    GameState, Phase,
    application::{parse_dimension, validate_dimensions},
    domain::random_seed,
    input, rendering,
    ui::{self, Dropdown, GRID_SIZES},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Seeded Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Read optional `width height [seed]` overrides from the command line.
/// Invalid dimensions are rejected before the simulation core is touched.
fn parse_args() -> Result<(usize, usize, String), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok((20, 20, random_seed())),
        [width, height, rest @ ..] if rest.len() <= 1 => {
            let width = parse_dimension(width).map_err(|e| e.to_string())?;
            let height = parse_dimension(height).map_err(|e| e.to_string())?;
            validate_dimensions(width, height).map_err(|e| e.to_string())?;
            let seed = rest.first().cloned().unwrap_or_else(random_seed);
            Ok((width, height, seed))
        }
        _ => Err("usage: seeded_life [width height [seed]]".to_owned()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (width, height, seed) = match parse_args() {
        Ok(params) => params,
        Err(message) => {
            error!("{}", message);
            std::process::exit(1);
        }
    };

    info!("previewing {}x{} board with seed {:?}", width, height, seed);
    let mut state = GameState::new(width, height, seed);

    let size_items: Vec<String> = GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut size_dropdown = Dropdown::new(ui::panel_x(), 40.0, ui::PANEL_WIDTH, "Board Size", size_items);
    if let Some(i) = GRID_SIZES.iter().position(|&(size, _)| size == width) {
        size_dropdown.set_selected(i);
    }

    loop {
        let mouse_pos = mouse_position();

        // Recreate panel widgets with the current layout and phase
        size_dropdown.set_position(ui::panel_x(), 40.0);
        size_dropdown.set_enabled(state.phase == Phase::Preview);
        let buttons = ui::create_buttons(state.phase);

        if size_dropdown.update(mouse_pos) {
            let (size, _) = GRID_SIZES[size_dropdown.selected()];
            state = state.resize(size, size);
        }

        let was_preview = state.phase == Phase::Preview;
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);
        if was_preview && state.phase == Phase::Running {
            info!("starting {}x{} run with seed {:?}", state.width, state.height, state.seed);
        }

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, state.phase == Phase::Preview);
        rendering::draw_controls(&state, &buttons, &size_dropdown, mouse_pos);

        next_frame().await;
    }
}
