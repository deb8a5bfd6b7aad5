use crate::{object::GameObject, surface::Surface};

/// Write `text` left to right starting at `(row, col)`.
pub fn print_string(surface: &mut dyn Surface, row: i32, col: i32, text: &str) {
    for (offset, ch) in text.chars().enumerate() {
        surface.set_cell(col + offset as i32, row, ch);
    }
}

/// Write `text` so that its middle lands on `col`.
pub fn print_centered(surface: &mut dyn Surface, row: i32, col: i32, text: &str) {
    let half = text.chars().count() as i32 / 2;
    print_string(surface, row, col - half, text);
}

/// Fill the object's footprint with its glyph.
pub fn draw_object(surface: &mut dyn Surface, object: &GameObject) {
    for r in 0..object.height() {
        for c in 0..object.width() {
            surface.set_cell(object.col + c, object.row + r, object.glyph());
        }
    }
}
