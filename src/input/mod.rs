use macroquad::prelude::*;
use crate::application::{GameState, Camera};
use crate::ui::{Button, ButtonAction, board_area_width, CELL_SIZE};

/// Handle zoom with mouse wheel and Q/E
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 || is_key_down(KeyCode::E) {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 || is_key_down(KeyCode::Q) {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32)) {
    camera.drag(mouse_pos, is_mouse_button_down(MouseButton::Middle));
}

/// Paint with LMB, erase with RMB. Edits only land while paused.
pub fn handle_mouse_paint(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    if state.is_running() || mouse_pos.0 >= board_area_width() {
        return;
    }

    let cell = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    let edit = if is_mouse_button_down(MouseButton::Left) {
        Some(true)
    } else if is_mouse_button_down(MouseButton::Right) {
        Some(false)
    } else {
        None
    };

    if let Some(alive) = edit {
        if let Err(err) = state.paint(cell, alive) {
            tracing::debug!(%err, "paint ignored");
        }
    }
}

/// Place or cancel the pending pattern
pub fn handle_pattern_placement(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    if state.pending_pattern_index.is_none() {
        return;
    }
    if is_mouse_button_pressed(MouseButton::Right) {
        state.pending_pattern_index = None;
    } else if is_mouse_button_pressed(MouseButton::Left) && mouse_pos.0 < board_area_width() {
        let at = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, CELL_SIZE);
        if let Err(err) = state.place_pending_pattern(at) {
            tracing::warn!(%err, "pattern placement rejected");
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut Camera) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 10] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::Escape, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::M, GameState::enable_competitive),
        (KeyCode::N, GameState::select_second_player),
        (KeyCode::S, GameState::stop),
        (KeyCode::P, GameState::cycle_pattern),
        (KeyCode::Up, |s| s.adjust_interval(-0.01)),
        (KeyCode::Down, |s| s.adjust_interval(0.01)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset(board_area_width(), screen_height());
    }

    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| match btn.action {
            ButtonAction::PlayPause => s.toggle_running(),
            ButtonAction::Clear => s.clear(),
            ButtonAction::Random => s.randomize(),
            ButtonAction::Versus => s.enable_competitive(),
            ButtonAction::SecondPlayer => s.select_second_player(),
            ButtonAction::Stop => s.stop(),
            ButtonAction::Algorithm => s.cycle_algorithm(),
        })
}
