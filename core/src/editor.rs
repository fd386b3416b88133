//! Editor state with one-directional data flow.
//!
//! The original tool regenerated the text from the grid inside the same
//! callback chain that rebuilt the grid from the text, which invites
//! feedback loops. Here every mutation has its own entry point and the text
//! is regenerated in exactly one place per user action:
//!
//! - image cells in  -> grid -> re-encode text
//! - text edit in    -> decode -> grid (render only, text kept verbatim)
//! - paint gesture   -> grid, re-encode once on release

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};

use crate::codec;
use crate::grid::PixelGrid;
use crate::session::PaintSession;

pub struct Editor {
    grid: PixelGrid,
    text: String,
    session: Option<PaintSession>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        let grid = PixelGrid::new();
        let text = codec::encode(&grid);
        Editor {
            grid,
            text,
            session: None,
        }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the grid with thresholder output and regenerates the text.
    pub fn load_cells(&mut self, cells: Vec<bool>) {
        self.grid = PixelGrid::from_cells(cells);
        self.text = codec::encode(&self.grid);
    }

    /// Rebuilds the grid from a hand-edited text buffer. The buffer is kept
    /// verbatim, including any lines the permissive parse skipped; no
    /// re-encode happens on this path.
    pub fn apply_text(&mut self, text: &str) {
        self.grid = codec::rows_to_grid(&codec::decode(text));
        self.text = String::from(text);
    }

    /// Clears every cell and regenerates the text.
    pub fn clear(&mut self) {
        self.grid.clear(BinaryColor::Off).ok();
        self.text = codec::encode(&self.grid);
    }

    pub fn pointer_down(&mut self, x: usize, y: usize) {
        if self.session.is_none() {
            self.session = Some(PaintSession::begin(&mut self.grid, x, y));
        }
    }

    pub fn pointer_over(&mut self, x: usize, y: usize) {
        if let Some(session) = &self.session {
            session.paint(&mut self.grid, x, y);
        }
    }

    /// Ends the paint gesture; the grid is stable again and the text is
    /// regenerated once.
    pub fn pointer_up(&mut self) {
        if self.session.take().is_some() {
            self.text = codec::encode(&self.grid);
        }
    }

    pub fn is_painting(&self) -> bool {
        self.session.is_some()
    }
}
