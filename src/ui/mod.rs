mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const CELL_SIZE: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// What a panel button does when clicked
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    PlayPause,
    Clear,
    Random,
    Versus,
    SecondPlayer,
    Stop,
    Algorithm,
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        (ButtonAction::PlayPause, "Play/Pause"),
        (ButtonAction::Clear, "Clear"),
        (ButtonAction::Random, "Random"),
        (ButtonAction::Versus, "Versus"),
        (ButtonAction::SecondPlayer, "Player 2"),
        (ButtonAction::Stop, "Stop"),
        (ButtonAction::Algorithm, "Algorithm"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (action, label))| {
        Button::new(px, 20.0 + i as f32 * (BUTTON_HEIGHT + 8.0), PANEL_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
