use crate::application::{GameState, Phase};
use crate::domain::random_seed;
use crate::ui::{Button, ButtonAction};
use macroquad::prelude::*;

fn apply_action(state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::Start => state.start(),
        ButtonAction::Pause | ButtonAction::Resume => state.toggle_running(),
        ButtonAction::Reset => state.reset(),
        ButtonAction::NewSeed => state.reseed(random_seed()),
    }
}

/// Process panel button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, (action, btn)| {
        if btn.is_clicked(mouse_pos) {
            apply_action(s, *action)
        } else {
            s
        }
    })
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, start_or_toggle),
        (KeyCode::R, GameState::reset),
        (KeyCode::N, |s| s.reseed(random_seed())),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Space starts a preview and toggles pause afterwards
fn start_or_toggle(state: GameState) -> GameState {
    if state.phase == Phase::Preview {
        state.start()
    } else {
        state.toggle_running()
    }
}
