//! Filled circle drawn with block characters.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const FILL: &str = "█";

/// A solid disc filling its area. Terminal cells are roughly twice as tall
/// as they are wide, so give it an area about twice as wide as it is high.
pub struct Disc {
    color: Color,
}

impl Disc {
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// Whether the cell at `(col, row)` of a `width` x `height` grid lies inside
/// the inscribed ellipse. Sampled at cell centers.
pub fn covers(width: u16, height: u16, col: u16, row: u16) -> bool {
    if width == 0 || height == 0 || col >= width || row >= height {
        return false;
    }
    let nx = (f32::from(col) + 0.5) / f32::from(width) * 2.0 - 1.0;
    let ny = (f32::from(row) + 0.5) / f32::from(height) * 2.0 - 1.0;
    nx * nx + ny * ny <= 1.0
}

/// Centered rect for a disc `height` rows tall, clipped to `area`.
pub fn disc_area(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let width = height.saturating_mul(2).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

impl Widget for Disc {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                if !covers(area.width, area.height, col, row) {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(FILL).set_fg(self.color);
                }
            }
        }
    }
}
