//! Drag-paint session over the grid.

use crate::grid::PixelGrid;

/// One press-to-release paint gesture.
///
/// The cell under the initial press is toggled and its new state becomes
/// the paint value for the whole gesture; every cell entered while the
/// button stays held is set to that value. The paint value lives here
/// instead of in ambient state so two gestures can never bleed into each
/// other.
pub struct PaintSession {
    paint_value: bool,
}

impl PaintSession {
    pub fn begin(grid: &mut PixelGrid, x: usize, y: usize) -> Self {
        let paint_value = grid.toggle(x, y);
        PaintSession { paint_value }
    }

    pub fn paint(&self, grid: &mut PixelGrid, x: usize, y: usize) {
        grid.set(x, y, self.paint_value);
    }

    pub fn paint_value(&self) -> bool {
        self.paint_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_on_empty_cell_paints_on() {
        let mut grid = PixelGrid::new();
        let session = PaintSession::begin(&mut grid, 1, 1);
        assert!(session.paint_value());
        assert!(grid.get(1, 1));
        session.paint(&mut grid, 2, 1);
        session.paint(&mut grid, 3, 1);
        assert!(grid.get(2, 1) && grid.get(3, 1));
    }

    #[test]
    fn press_on_set_cell_erases() {
        let mut grid = PixelGrid::new();
        grid.set(1, 1, true);
        grid.set(2, 1, true);
        let session = PaintSession::begin(&mut grid, 1, 1);
        assert!(!session.paint_value());
        assert!(!grid.get(1, 1));
        session.paint(&mut grid, 2, 1);
        assert!(!grid.get(2, 1));
    }

    #[test]
    fn revisiting_a_cell_keeps_the_paint_value() {
        let mut grid = PixelGrid::new();
        let session = PaintSession::begin(&mut grid, 0, 0);
        session.paint(&mut grid, 1, 0);
        session.paint(&mut grid, 0, 0);
        assert!(grid.get(0, 0));
    }
}
