use crate::domain::{BoundingBox, Cell};

/// Camera manages viewport and zoom over the unbounded board
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            drag_anchor: None,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.1, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.1, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Follow a drag gesture: pans by the mouse movement while `held`
    pub fn drag(&mut self, mouse_pos: (f32, f32), held: bool) {
        if !held {
            self.drag_anchor = None;
            return;
        }
        if let Some((last_x, last_y)) = self.drag_anchor {
            self.pan(mouse_pos.0 - last_x, mouse_pos.1 - last_y);
        }
        self.drag_anchor = Some(mouse_pos);
    }

    /// Convert screen coordinates to the cell under them.
    /// Floors, so positions left of or above the origin map to negative cells.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Cell {
        let size = cell_size * self.zoom;
        Cell::new(
            ((screen_x - self.offset_x) / size).floor() as i32,
            ((screen_y - self.offset_y) / size).floor() as i32,
        )
    }

    /// Convert a cell to the screen position of its top-left corner
    pub fn cell_to_screen(&self, cell: Cell, cell_size: f32) -> (f32, f32) {
        let size = cell_size * self.zoom;
        (cell.x as f32 * size + self.offset_x, cell.y as f32 * size + self.offset_y)
    }

    /// Cells overlapping the viewport, for culling
    pub fn visible_bounds(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> BoundingBox {
        let min = self.screen_to_cell(0.0, 0.0, cell_size);
        let max = self.screen_to_cell(viewport_width, viewport_height, cell_size);
        BoundingBox::new(min, Cell::new(max.x.saturating_add(1), max.y.saturating_add(1)))
    }

    /// Reset zoom and put the origin in the middle of the viewport
    pub fn reset(&mut self, viewport_width: f32, viewport_height: f32) {
        self.zoom = 1.0;
        self.offset_x = viewport_width / 2.0;
        self.offset_y = viewport_height / 2.0;
        self.drag_anchor = None;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_positions_floor() {
        let mut camera = Camera::new();
        camera.reset(200.0, 100.0);
        assert_eq!(camera.screen_to_cell(100.0, 50.0, 10.0), Cell::ORIGIN);
        assert_eq!(camera.screen_to_cell(95.0, 45.0, 10.0), Cell::new(-1, -1));
        assert_eq!(camera.cell_to_screen(Cell::new(-1, 2), 10.0), (90.0, 70.0));
    }

    #[test]
    fn test_visible_bounds_cover_viewport() {
        let mut camera = Camera::new();
        camera.reset(200.0, 100.0);
        let bounds = camera.visible_bounds(200.0, 100.0, 10.0);
        assert!(bounds.contains(Cell::new(-10, -5)));
        assert!(bounds.contains(Cell::new(10, 5)));
        assert!(!bounds.contains(Cell::new(12, 0)));
    }

    #[test]
    fn test_drag_pans_by_mouse_delta() {
        let mut camera = Camera::new();
        camera.drag((10.0, 10.0), true);
        camera.drag((25.0, 5.0), true);
        assert_eq!((camera.offset_x, camera.offset_y), (15.0, -5.0));

        camera.drag((100.0, 100.0), false);
        camera.drag((110.0, 100.0), true);
        assert_eq!((camera.offset_x, camera.offset_y), (15.0, -5.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_in(2.0);
        }
        assert_eq!(camera.zoom, 10.0);
    }
}
