//! Built-in bitmap bold face used for placeholder labels.
//!
//! Glyphs are 5x7 cell bitmaps (bit 4 is the leftmost column) scaled up to
//! the requested point size and emboldened by widening every stroke.

pub const COLS: u32 = 5;
pub const ROWS: u32 = 7;

type Bitmap = [u8; ROWS as usize];

const DIGITS: [Bitmap; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

const SPACE: Bitmap = [0; ROWS as usize];
// U+2A2F VECTOR OR CROSS PRODUCT; the crossing sits on the middle cell
const CROSS: Bitmap = [0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b00000];
const MISSING: Bitmap = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

/// Points to pixels at the conventional 96 DPI.
const PX_PER_PT: f32 = 96.0 / 72.0;
/// Cap height as a fraction of the em square for a typical sans-serif bold.
const CAP_HEIGHT_EM: f32 = 0.716;

pub fn bitmap(c: char) -> &'static Bitmap {
    match c {
        '0'..='9' => &DIGITS[(c as u32 - '0' as u32) as usize],
        ' ' => &SPACE,
        '\u{2A2F}' => &CROSS,
        _ => &MISSING,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoldFace {
    /// Pixels per bitmap cell
    pub scale: u32,
    /// Extra pixels added to the right of every lit cell
    pub embolden: u32,
}

impl BoldFace {
    pub fn at_point_size(points: f32) -> Self {
        let em_px = (points * PX_PER_PT).round();
        let cap_px = (em_px * CAP_HEIGHT_EM).round() as u32;
        let scale = (cap_px / ROWS).max(1);
        Self { scale, embolden: (scale / 2).max(1) }
    }

    /// Width of one glyph's ink box.
    pub fn glyph_width(&self) -> u32 {
        COLS * self.scale + self.embolden
    }

    /// Horizontal distance between consecutive glyph origins.
    pub fn advance(&self) -> u32 {
        self.glyph_width() + self.scale
    }

    pub fn line_height(&self) -> u32 {
        ROWS * self.scale
    }

    /// Blank pixels between wrapped lines.
    pub fn line_gap(&self) -> u32 {
        self.embolden
    }

    /// Size of a block of stacked lines with the given widths.
    pub fn measure_block(&self, widths: &[u32]) -> (u32, u32) {
        let n = widths.len() as u32;
        let width = widths.iter().copied().max().unwrap_or(0);
        let height = n * self.line_height() + n.saturating_sub(1) * self.line_gap();
        (width, height)
    }

    /// Size of the single-line box `text` occupies.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let n = text.chars().count() as u32;
        let width = match n {
            0 => 0,
            n => (n - 1) * self.advance() + self.glyph_width(),
        };
        (width, self.line_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_point_metrics() {
        let face = BoldFace::at_point_size(40.0);
        assert_eq!(face.scale, 5);
        assert_eq!(face.embolden, 2);
        assert_eq!(face.glyph_width(), 27);
        assert_eq!(face.advance(), 32);
        assert_eq!(face.line_height(), 35);
        assert_eq!(face.line_gap(), 2);
    }

    #[test]
    fn measure_label() {
        let face = BoldFace::at_point_size(40.0);
        assert_eq!(face.measure(""), (0, 35));
        assert_eq!(face.measure("1"), (27, 35));
        assert_eq!(face.measure("200 \u{2A2F} 100"), (8 * 32 + 27, 35));
    }

    #[test]
    fn measure_stacked_lines() {
        let face = BoldFace::at_point_size(40.0);
        assert_eq!(face.measure_block(&[155, 91]), (155, 72));
        assert_eq!(face.measure_block(&[27]), (27, 35));
        assert_eq!(face.measure_block(&[]), (0, 0));
    }

    #[test]
    fn cross_glyph_is_lit_at_its_center() {
        let rows = bitmap('\u{2A2F}');
        assert_eq!(rows[(ROWS / 2) as usize] & (1 << (COLS / 2)), 1 << (COLS / 2));
        assert_eq!(bitmap('x'), &MISSING);
    }
}
