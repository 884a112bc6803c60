mod button;

pub use button::Button;

pub const MARGIN: f32 = 20.0;
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const CELL_SIZE: f32 = 20.0;

/// Baseline of the "Generation: N" label
pub const INFO_Y: f32 = MARGIN + BUTTON_HEIGHT + 30.0;

/// Top edge of the grid
pub const GRID_TOP: f32 = INFO_Y + 20.0;

/// Index of each control in [`create_buttons`]
pub const BUTTON_RUN: usize = 0;
pub const BUTTON_CLEAR: usize = 1;
pub const BUTTON_SEED: usize = 2;

/// Maps between screen positions and grid cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            origin_x: MARGIN,
            origin_y: GRID_TOP,
            cell_size: CELL_SIZE,
            rows,
            cols,
        }
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Top-left screen corner of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }

    /// Cell under a screen position, if any
    pub fn cell_at(&self, pos: (f32, f32)) -> Option<(usize, usize)> {
        let x = pos.0 - self.origin_x;
        let y = pos.1 - self.origin_y;
        if x < 0.0 || y < 0.0 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(((y / self.cell_size) as usize, (x / self.cell_size) as usize))
    }
}

/// Create the three control buttons in a row above the grid
pub fn create_buttons() -> Vec<Button> {
    ["Start", "Clear", "Seed"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = MARGIN + i as f32 * (BUTTON_WIDTH + BUTTON_GAP);
            Button::new(x, MARGIN, BUTTON_WIDTH, BUTTON_HEIGHT, *label)
        })
        .collect()
}

/// Window size that fits the controls and the whole grid
pub fn window_size(layout: &GridLayout) -> (i32, i32) {
    let buttons_width = 3.0 * BUTTON_WIDTH + 2.0 * BUTTON_GAP;
    let width = layout.width().max(buttons_width) + 2.0 * MARGIN;
    let height = GRID_TOP + layout.height() + MARGIN;
    (width.ceil() as i32, height.ceil() as i32)
}
