/// Rasterizer: executes paint commands on an RGB canvas and encodes PNG

use super::glyphs::{self, BoldFace, COLS};
use super::paint::PaintCommand;
use crate::color::Color;
use crate::Result;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbImage};

/// An owned RGB pixel buffer. Dropping it releases the pixels.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a `width x height` canvas, or `None` when the buffer cannot
    /// be reserved.
    pub fn allocate(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).ok()?;
        buf.resize(len, 0);
        RgbImage::from_raw(width, height, buf).map(|image| Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let [r, g, b] = self.image.get_pixel(x, y).0;
        Color::rgb(r, g, b)
    }

    pub fn execute(&mut self, commands: &[PaintCommand], face: &BoldFace) {
        for cmd in commands {
            match cmd {
                PaintCommand::Clear { color } => {
                    let px = color.to_rgb();
                    self.image.pixels_mut().for_each(|p| *p = px);
                }
                PaintCommand::Text { x, y, text, color } => self.draw_text(*x, *y, text, *color, face),
            }
        }
    }

    fn draw_text(&mut self, x: i64, y: i64, text: &str, color: Color, face: &BoldFace) {
        let advance = i64::from(face.advance());
        for (i, c) in text.chars().enumerate() {
            self.draw_glyph(x + i as i64 * advance, y, c, color, face);
        }
    }

    fn draw_glyph(&mut self, x: i64, y: i64, c: char, color: Color, face: &BoldFace) {
        let bitmap = glyphs::bitmap(c);
        let s = i64::from(face.scale);
        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..COLS {
                if bits & (1 << (COLS - 1 - col)) == 0 {
                    continue;
                }
                self.fill_rect(
                    x + i64::from(col) * s,
                    y + row as i64 * s,
                    face.scale + face.embolden,
                    face.scale,
                    color,
                );
            }
        }
    }

    /// Fill a rectangle, clipped to the canvas.
    fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) {
        let clip = |start: i64, len: u32, max: u32| {
            let lo = start.clamp(0, i64::from(max));
            let hi = (start + i64::from(len)).clamp(0, i64::from(max));
            (lo as u32, hi as u32)
        };
        let (x0, x1) = clip(x, width, self.width());
        let (y0, y1) = clip(y, height, self.height());
        let px = color.to_rgb();
        for py in y0..y1 {
            for px_x in x0..x1 {
                self.image.put_pixel(px_x, py, px);
            }
        }
    }

    /// Encode as 8-bit RGB PNG, consuming the canvas.
    pub fn encode_png(self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            image::ColorType::Rgb8,
        )?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_rejects_empty_canvas() {
        assert!(Canvas::allocate(0, 10).is_none());
        assert!(Canvas::allocate(10, 0).is_none());
        let c = Canvas::allocate(3, 2).expect("small canvas");
        assert_eq!((c.width(), c.height()), (3, 2));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut c = Canvas::allocate(4, 4).unwrap();
        let face = BoldFace::at_point_size(40.0);
        c.execute(&[PaintCommand::Clear { color: Color::rgb(9, 8, 7) }], &face);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(c.pixel(x, y), Color::rgb(9, 8, 7));
            }
        }
    }

    #[test]
    fn text_is_clipped_to_canvas() {
        let mut c = Canvas::allocate(10, 10).unwrap();
        let face = BoldFace::at_point_size(40.0);
        c.execute(
            &[
                PaintCommand::Clear { color: Color::rgb(0, 0, 0) },
                PaintCommand::Text { x: -100, y: -100, text: "8888".into(), color: Color::rgb(255, 255, 255) },
                PaintCommand::Text { x: 3, y: 3, text: "\u{2A2F}".into(), color: Color::rgb(0, 255, 0) },
            ],
            &face,
        );
        // cross glyph's second row starts one cell down at its left edge
        assert_eq!(c.pixel(3, 3 + 5), Color::rgb(0, 255, 0));
        assert_eq!(c.pixel(0, 0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn encodes_png_signature() {
        let c = Canvas::allocate(2, 2).unwrap();
        let bytes = c.encode_png().unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
