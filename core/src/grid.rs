use alloc::vec;
use alloc::vec::Vec;
use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};

pub const WIDTH: usize = 112;
pub const HEIGHT: usize = 38;
pub const BYTES_PER_ROW: usize = WIDTH.div_ceil(8);

/// Fixed-size monochrome pixel grid, row-major, `true` = on (black).
///
/// The cell vector always holds exactly `WIDTH * HEIGHT` entries; there is
/// no way to construct or shrink it into a partial grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PixelGrid {
    cells: Vec<bool>,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelGrid {
    /// All cells off.
    pub fn new() -> Self {
        PixelGrid {
            cells: vec![false; WIDTH * HEIGHT],
        }
    }

    /// Takes ownership of a full cell vector. Panics if the length is not
    /// exactly `WIDTH * HEIGHT`; callers produce full buffers.
    pub fn from_cells(cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), WIDTH * HEIGHT);
        PixelGrid { cells }
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.cells[y * WIDTH + x]
    }

    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        self.cells[y * WIDTH + x] = on;
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let on = !self.get(x, y);
        self.set(x, y, on);
        on
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(WIDTH)
    }
}

impl OriginDimensions for PixelGrid {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for PixelGrid {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            self.set(coord.x as usize, coord.y as usize, color.is_on());
        }
        Ok(())
    }
}
