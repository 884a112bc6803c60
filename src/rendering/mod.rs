use macroquad::prelude::*;

use crate::domain::Grid;
use crate::ui::{Button, GridLayout, INFO_Y, MARGIN};

mod palette;

pub use palette::{DEAD_COLOR, PALETTE, alive_color, palette_index};

/// Draw every cell; alive cells take their palette color for this generation
pub fn draw_grid(grid: &Grid, generation: u64, layout: &GridLayout) {
    let size = layout.cell_size;
    let grid_line_color = Color::from_rgba(200, 200, 200, 255);

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let color = if cell.is_alive() {
            alive_color(row, col, generation)
        } else {
            DEAD_COLOR
        };

        draw_rectangle(x, y, size, size, color);
        draw_rectangle_lines(x, y, size, size, 1.0, grid_line_color);
    }
}

/// Label text for the run button
pub fn run_label(running: bool) -> &'static str {
    if running { "Stop" } else { "Start" }
}

/// Draw the buttons and the generation counter
pub fn draw_controls(buttons: &[Button], generation: u64, mouse_pos: (f32, f32)) {
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    draw_text(
        &format!("Generation: {}", generation),
        MARGIN,
        INFO_Y,
        22.0,
        DARKGRAY,
    );
}
