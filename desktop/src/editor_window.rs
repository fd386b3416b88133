use pixgrid_core::grid::{HEIGHT, PixelGrid, WIDTH};

pub const CELL_SIZE: usize = 8;
const BUFFER_WIDTH: usize = WIDTH * CELL_SIZE;
const BUFFER_HEIGHT: usize = HEIGHT * CELL_SIZE;

const ON_COLOR: u32 = 0xFF202020;
const OFF_COLOR: u32 = 0xFFFFFFFF;
const LINE_COLOR: u32 = 0xFFC8C8C8;

/// Grid window: one logo pixel per `CELL_SIZE` square, with hairline cell
/// borders so individual cells stay visible while painting.
pub struct EditorWindow {
    window: minifb::Window,
    buffer: Vec<u32>,
}

impl EditorWindow {
    pub fn new() -> Self {
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: false,
            ..minifb::WindowOptions::default()
        };
        let mut window =
            minifb::Window::new("pixgrid", BUFFER_WIDTH, BUFFER_HEIGHT, options)
                .unwrap_or_else(|e| {
                    panic!("Unable to open window: {}", e);
                });
        window.set_target_fps(60);

        EditorWindow {
            window,
            buffer: vec![OFF_COLOR; BUFFER_WIDTH * BUFFER_HEIGHT],
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    pub fn render(&mut self, grid: &PixelGrid) {
        for (y, row) in grid.rows().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                self.draw_cell(x, y, on);
            }
        }
        self.window
            .update_with_buffer(&self.buffer, BUFFER_WIDTH, BUFFER_HEIGHT)
            .unwrap();
    }

    fn draw_cell(&mut self, x: usize, y: usize, on: bool) {
        let fill = if on { ON_COLOR } else { OFF_COLOR };
        for py in 0..CELL_SIZE {
            for px in 0..CELL_SIZE {
                let border = px == 0 || py == 0;
                let color = if border { LINE_COLOR } else { fill };
                let idx = (y * CELL_SIZE + py) * BUFFER_WIDTH + x * CELL_SIZE + px;
                self.buffer[idx] = color;
            }
        }
    }

    /// Grid cell under the mouse, if the cursor is inside the window.
    pub fn cell_under_mouse(&self) -> Option<(usize, usize)> {
        let (mx, my) = self.window.get_mouse_pos(minifb::MouseMode::Discard)?;
        let x = mx as usize / CELL_SIZE;
        let y = my as usize / CELL_SIZE;
        (x < WIDTH && y < HEIGHT).then_some((x, y))
    }

    pub fn left_button_down(&self) -> bool {
        self.window.get_mouse_down(minifb::MouseButton::Left)
    }

    /// +1 / -1 per Up/Down key press, with key repeat.
    pub fn threshold_delta(&self) -> i16 {
        let mut delta = 0;
        if self.window.is_key_pressed(minifb::Key::Up, minifb::KeyRepeat::Yes) {
            delta += 1;
        }
        if self.window.is_key_pressed(minifb::Key::Down, minifb::KeyRepeat::Yes) {
            delta -= 1;
        }
        delta
    }

    pub fn clear_requested(&self) -> bool {
        self.window.is_key_pressed(minifb::Key::C, minifb::KeyRepeat::No)
    }

    pub fn save_requested(&self) -> bool {
        self.window.is_key_pressed(minifb::Key::S, minifb::KeyRepeat::No)
    }
}
