mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use crate::application::Phase;
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Board size options; the dimension cap keeps rendering cost bounded
pub const GRID_SIZES: &[(usize, &str)] = &[
    (10, "10×10"),
    (20, "20×20"),
    (50, "50×50"),
    (100, "100×100"),
];

/// What a panel button does when clicked
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    Start,
    Pause,
    Resume,
    Reset,
    NewSeed,
}

impl ButtonAction {
    fn label(self) -> &'static str {
        match self {
            ButtonAction::Start => "Start",
            ButtonAction::Pause => "Pause",
            ButtonAction::Resume => "Resume",
            ButtonAction::Reset => "Reset",
            ButtonAction::NewSeed => "New Seed",
        }
    }
}

/// Create the panel buttons for the current phase.
/// Mirrors the show/hide dance of the controls: a preview offers
/// Start/New Seed, a run offers Pause-or-Resume/Reset.
pub fn create_buttons(phase: Phase) -> Vec<(ButtonAction, Button)> {
    let actions: &[ButtonAction] = match phase {
        Phase::Preview => &[ButtonAction::Start, ButtonAction::NewSeed],
        Phase::Running => &[ButtonAction::Pause, ButtonAction::Reset],
        Phase::Paused => &[ButtonAction::Resume, ButtonAction::Reset],
    };

    let px = panel_x();
    actions
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = 470.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
            (
                action,
                Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, action.label()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_sizes_pass_validation() {
        for &(size, _) in GRID_SIZES {
            assert!(crate::application::validate_dimensions(size, size).is_ok());
        }
    }
}
