/// Paint commands produced by layout and consumed by the rasterizer

use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill the whole canvas
    Clear { color: Color },
    /// Draw a single line of text with its top-left corner at (x, y)
    Text {
        x: i64,
        y: i64,
        text: String,
        color: Color,
    },
}
