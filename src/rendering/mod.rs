use crate::application::{GameState, Phase};
use crate::domain::Grid;
use crate::ui::{Button, ButtonAction, Dropdown, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};
use macroquad::prelude::*;

/// Draw the board, scaled to fit the grid area.
/// A preview is rendered at half opacity so it reads as "not started yet".
pub fn draw_grid(grid: &Grid, preview: bool) {
    let (width, height) = grid.dimensions();
    let cell_size = (grid_area_width() / width as f32).min(grid_area_height() / height as f32);
    let alpha = if preview { 0.5 } else { 1.0 };

    let alive_color = Color::new(0.0, 1.0, 0.59, alpha);
    let dead_color = Color::new(0.06, 0.06, 0.06, alpha);
    let line_color = Color::new(0.16, 0.16, 0.16, alpha);
    let draw_lines = cell_size >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let sx = x as f32 * cell_size;
        let sy = y as f32 * cell_size;

        let fill = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(sx, sy, cell_size, cell_size, fill);

        if draw_lines {
            draw_rectangle_lines(sx, sy, cell_size, cell_size, 1.0, line_color);
        }
    }
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel: buttons, size selector, seed readout,
/// generation counter, speed, and status.
pub fn draw_controls(
    state: &GameState,
    buttons: &[(ButtonAction, Button)],
    size_dropdown: &Dropdown,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let px = panel_x();

    let controls = [
        ("Controls:", 110.0, 14.0, WHITE),
        ("Space: Start/Pause", 125.0, 12.0, GRAY),
        ("N: New seed", 138.0, 12.0, GRAY),
        ("R: Reset", 151.0, 12.0, GRAY),
        ("Up/Down: Speed", 164.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Seed readout, split across lines so long seeds stay inside the panel
    draw_text("Seed:", px, 210.0, 16.0, WHITE);
    let seed_color = Color::from_rgba(180, 180, 180, 255);
    for (i, chunk) in state.seed.as_bytes().chunks(16).take(4).enumerate() {
        let line = String::from_utf8_lossy(chunk);
        draw_text(&line, px, 228.0 + i as f32 * 15.0, 14.0, seed_color);
    }

    let labels = [
        ("Speed:", px, 300.0, 16.0, WHITE),
        (
            &format!("{:.0} gen/s", state.updates_per_second),
            px,
            320.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Generation:", px, 350.0, 16.0, WHITE),
        (
            &format!("{}", state.generation),
            px,
            370.0,
            20.0,
            Color::new(0.0, 1.0, 0.59, 1.0),
        ),
        ("Status:", px, 400.0, 16.0, WHITE),
        (
            match state.phase {
                Phase::Preview => "Preview",
                Phase::Running => "Running",
                Phase::Paused => "Paused",
            },
            px,
            420.0,
            16.0,
            match state.phase {
                Phase::Preview => Color::from_rgba(180, 180, 180, 255),
                Phase::Running => Color::from_rgba(0, 255, 0, 255),
                Phase::Paused => Color::from_rgba(255, 165, 0, 255),
            },
        ),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    // Dropdown last so its open menu sits on top of everything
    size_dropdown.draw(mouse_pos);
}
