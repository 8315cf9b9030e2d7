mod button;

pub use button::Button;

use macroquad::prelude::{Rect, screen_height, screen_width};

pub const MARGIN: f32 = 20.0;
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 25.0;
/// Space above the board reserved for buttons and status text
pub const HEADER_HEIGHT: f32 = 55.0;
/// Gap left between neighboring cells
pub const CELL_MARGIN: f32 = 2.0;

/// Screen area the board is drawn into
pub fn board_area() -> Rect {
    board_area_for(screen_width(), screen_height())
}

/// Board area for a window of the given size
pub fn board_area_for(width: f32, height: f32) -> Rect {
    Rect::new(
        MARGIN,
        HEADER_HEIGHT,
        (width - 2.0 * MARGIN).max(0.0),
        (height - HEADER_HEIGHT - MARGIN).max(0.0),
    )
}

/// Create header buttons: Restart, Pause, Step (in that order)
pub fn create_buttons() -> Vec<Button> {
    ["Restart", "Pause", "Step"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = MARGIN + i as f32 * (BUTTON_WIDTH + 10.0);
            Button::new(Rect::new(x, 15.0, BUTTON_WIDTH, BUTTON_HEIGHT), *label)
        })
        .collect()
}
