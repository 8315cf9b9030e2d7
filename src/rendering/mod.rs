use macroquad::prelude::*;

use crate::application::Controller;
use crate::domain::Grid;
use crate::ui::{BUTTON_WIDTH, Button, CELL_MARGIN, MARGIN};

const BACKGROUND: Color = Color::new(0.56, 0.93, 0.56, 1.0);

/// Screen rectangle of one cell when a rows x cols board fills `area`
pub fn cell_rect(area: Rect, (rows, cols): (usize, usize), row: usize, col: usize) -> Rect {
    let cell_w = area.w / cols as f32;
    let cell_h = area.h / rows as f32;
    Rect::new(
        area.x + col as f32 * cell_w + 0.5 * CELL_MARGIN,
        area.y + row as f32 * cell_h + 0.5 * CELL_MARGIN,
        (cell_w - CELL_MARGIN).max(1.0),
        (cell_h - CELL_MARGIN).max(1.0),
    )
}

/// Draw the visible generation: alive cells black, dead cells white
pub fn draw_board(grid: &Grid, area: Rect) {
    let dims = grid.dimensions();
    for (row, col, cell) in grid.iter_cells() {
        let r = cell_rect(area, dims, row, col);
        let color = if cell.is_alive() { BLACK } else { WHITE };
        draw_rectangle(r.x, r.y, r.w, r.h, color);
    }
}

/// Draw buttons and the status line
pub fn draw_controls(controller: &Controller, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let sim = controller.simulation();
    let status = format!(
        "{} | gen {} | alive {} | {} ms{}",
        sim.rule().name(),
        sim.generation(),
        sim.current_state().count_alive(),
        controller.ticker().interval().as_millis(),
        if controller.is_running { "" } else { " | paused" },
    );
    let x = MARGIN + buttons.len() as f32 * (BUTTON_WIDTH + 10.0);
    draw_text(&status, x, 33.0, 16.0, BLACK);
}

pub fn clear() {
    clear_background(BACKGROUND);
}
