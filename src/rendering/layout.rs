/// Label layout: wraps text at spaces and centers the block in a box

use super::glyphs::BoldFace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// The text box for a `width x height` canvas: inset so the far edges
    /// stop one pixel short of the canvas size.
    pub fn label_box(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: width.saturating_sub(1),
            height: height.saturating_sub(1),
        }
    }
}

/// One placed line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Top-left corner of the first glyph; may lie outside the canvas
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub text: String,
}

/// Greedily break `text` at spaces into lines no wider than `max_width`.
/// A single word wider than `max_width` still gets a line of its own.
pub fn wrap_words(text: &str, face: &BoldFace, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if cur.is_empty() {
            cur.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", cur, word);
        if face.measure(&candidate).0 <= max_width {
            cur = candidate;
        } else {
            lines.push(std::mem::replace(&mut cur, word.to_string()));
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Wrap `text` to the width of `bounds`, then center the block vertically
/// and each line horizontally. Whatever still does not fit overflows evenly
/// on both sides and is clipped by the rasterizer.
pub fn layout_label(text: &str, face: &BoldFace, bounds: Rect) -> Vec<TextLine> {
    let lines = wrap_words(text, face, bounds.width);
    let widths: Vec<u32> = lines.iter().map(|l| face.measure(l).0).collect();
    let (_, block_height) = face.measure_block(&widths);

    let offset = |outer: u32, inner: u32| (i64::from(outer) - i64::from(inner)).div_euclid(2);
    let top = bounds.y + offset(bounds.height, block_height);
    let step = i64::from(face.line_height() + face.line_gap());

    lines
        .into_iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (text, width))| TextLine {
            x: bounds.x + offset(bounds.width, width),
            y: top + i as i64 * step,
            width,
            text,
        })
        .collect()
}
