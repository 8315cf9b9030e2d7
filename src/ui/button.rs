use macroquad::prelude::*;

/// Text button with hover and click detection
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    label: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(bounds: Rect, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
            color: Color::from_rgba(235, 235, 235, 255),
            hover_color: Color::from_rgba(200, 220, 255, 255),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(Vec2::new(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) { self.hover_color } else { self.color };
        let Rect { x, y, w, h } = self.bounds;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 1.0, DARKGRAY);

        let text_size = measure_text(&self.label, None, 18, 1.0);
        draw_text(
            &self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            18.0,
            BLACK,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
