use macroquad::prelude::*;
use super::ButtonAction;

/// Panel button with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, action: ButtonAction) -> Self {
        Self { x, y, width, height, text: text.into(), action }
    }

    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&mouse_pos.0)
            && (self.y..=self.y + self.height).contains(&mouse_pos.1)
    }

    /// Draw the button; `highlighted` marks an active toggle such as the current mode
    pub fn draw(&self, mouse_pos: (f32, f32), highlighted: bool) {
        let fill = match (highlighted, self.contains(mouse_pos)) {
            (true, _) => Color::from_rgba(60, 150, 90, 255),
            (false, true) => Color::from_rgba(100, 149, 237, 255),
            (false, false) => Color::from_rgba(70, 130, 180, 255),
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
