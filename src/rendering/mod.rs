use macroquad::prelude::*;
use crate::application::{GameState, Camera};
use crate::domain::{CellOwner, Mode, Pattern, PlayerId, SimulationEngine};
use crate::ui::{Button, ButtonAction, panel_x, board_area_width, board_area_height, CELL_SIZE, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const FIRST_COLOR: Color = Color::new(0.25, 0.6, 1.0, 1.0);
const SECOND_COLOR: Color = Color::new(1.0, 0.35, 0.3, 1.0);

fn owner_color(owner: CellOwner) -> Color {
    match owner {
        CellOwner::OwnedBy(PlayerId::First) => FIRST_COLOR,
        CellOwner::OwnedBy(PlayerId::Second) => SECOND_COLOR,
        _ => ALIVE_COLOR,
    }
}

/// Draw live cells inside the viewport
pub fn draw_board(engine: &SimulationEngine, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let visible = camera.visible_bounds(board_area_width(), board_area_height(), CELL_SIZE);
    let draw_outlines = cell_size >= 6.0;
    let outline_color = Color::from_rgba(40, 40, 40, 255);

    for (cell, owner) in engine.board().iter().filter(|(cell, _)| visible.contains(*cell)) {
        let (x, y) = camera.cell_to_screen(cell, CELL_SIZE);
        draw_rectangle(x, y, cell_size, cell_size, owner_color(owner));
        if draw_outlines {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, outline_color);
        }
    }
}

/// Draw a semi-transparent preview of a pattern centered on the cursor
pub fn draw_pattern_preview(pattern: &Pattern, owner: CellOwner, camera: &Camera, mouse_pos: (f32, f32)) {
    let cell_size = CELL_SIZE * camera.zoom;
    let at = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    let base = owner_color(owner);

    for cell in pattern.placed_at(at).into_iter().flatten() {
        let (x, y) = camera.cell_to_screen(cell, CELL_SIZE);
        draw_rectangle(x, y, cell_size, cell_size, Color { a: 0.47, ..base });
        draw_rectangle_lines(x, y, cell_size, cell_size, 1.5, Color { a: 0.8, ..base });
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with buttons, status and scores
pub fn draw_controls(state: &GameState, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();

    let engine = &state.engine;
    let mode = engine.mode();
    buttons.iter().for_each(|btn| {
        let highlighted = match btn.action {
            ButtonAction::PlayPause => engine.is_running(),
            ButtonAction::Versus => mode.is_competitive(),
            ButtonAction::SecondPlayer => mode == Mode::Competitive(PlayerId::Second),
            _ => false,
        };
        btn.draw(mouse_pos, highlighted);
    });

    let px = panel_x();
    let mut y = buttons.len() as f32 * 44.0 + 40.0;
    let mut line = |text: &str, size: f32, color: Color| {
        draw_text(text, px + 6.0, y, size, color);
        y += size + 4.0;
    };

    line(mode.label(), 18.0, WHITE);
    line(&format!("Generation: {}", engine.generation()), 14.0, GRAY);
    line(&format!("Population: {}", engine.population()), 14.0, GRAY);
    line(&format!("Interval: {:.3}s", state.update_interval), 14.0, GRAY);
    line(&format!("{} {:.1}ms", engine.algorithm().name(), state.last_evolution_time_ms), 14.0, GRAY);
    line(&format!("Render: {:.1}ms | FPS: {}", state.last_render_time_ms, get_fps()), 12.0, GRAY);
    line(&format!("Zoom: {:.1}x", camera.zoom), 12.0, GRAY);
    line(if engine.is_running() { "Running" } else { "Paused" }, 16.0, if engine.is_running() { GREEN } else { ORANGE });

    if let Ok((first, second)) = engine.scores() {
        line(&format!("First Player Score: {first}"), 14.0, FIRST_COLOR);
        line(&format!("Second Player Score: {second}"), 14.0, SECOND_COLOR);
    }

    if let Some(idx) = state.pending_pattern_index {
        line(&format!("Placing: {}", state.patterns[idx].name), 14.0, YELLOW);
    }

    line("Space/Esc: Play  S: Stop", 12.0, GRAY);
    line("R: Random  C: Clear  P: Pattern", 12.0, GRAY);
    line("M: Versus  N: Player 2", 12.0, GRAY);
}

/// Grey out the board and announce the match result
pub fn draw_outcome(state: &GameState) {
    let Some(outcome) = state.outcome else {
        return;
    };
    draw_rectangle(0.0, 0.0, board_area_width(), board_area_height(), Color::new(0.5, 0.5, 0.5, 0.6));

    let text = outcome.to_string();
    let size = measure_text(&text, None, 48, 1.0);
    draw_text(
        &text,
        (board_area_width() - size.width) / 2.0,
        (board_area_height() + size.height) / 2.0,
        48.0,
        WHITE,
    );
}
