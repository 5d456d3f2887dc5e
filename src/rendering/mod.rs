//! Placeholder rendering: layout -> paint -> raster -> PNG

pub mod glyphs;
pub mod layout;
pub mod paint;
pub mod raster;

use crate::color::Color;
use crate::{Error, RenderConfig, Result};
use glyphs::BoldFace;
use layout::{layout_label, Rect};
use paint::PaintCommand;
use raster::Canvas;

/// Point size of the label text.
pub const LABEL_POINT_SIZE: f32 = 40.0;

/// Parameters for one placeholder image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub width: i64,
    pub height: i64,
    pub background: Color,
    pub foreground: Color,
}

impl RenderRequest {
    pub fn new(width: i64, height: i64, background: Color, foreground: Color) -> Self {
        Self { width, height, background, foreground }
    }

    /// The text drawn on the image, e.g. `200 ⨯ 100`.
    pub fn label(&self) -> String {
        format!("{} \u{2A2F} {}", self.width, self.height)
    }
}

/// An encoded placeholder image
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Renders placeholder images under a fixed [`RenderConfig`].
///
/// A `Renderer` holds no mutable state and can be shared freely between
/// threads; every call owns its own canvas and encoder buffer.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, req: &RenderRequest) -> Result<Placeholder> {
        let invalid = || Error::InvalidDimensions { width: req.width, height: req.height };
        let (width, height) = self.checked_size(req.width, req.height).ok_or_else(invalid)?;
        let mut canvas = Canvas::allocate(width, height).ok_or_else(invalid)?;

        let face = BoldFace::at_point_size(LABEL_POINT_SIZE);
        canvas.execute(&display_list(req, width, height, &face), &face);

        let png_data = canvas.encode_png()?;
        log::debug!(
            "rendered {}x{} placeholder bg={} fg={} ({} bytes)",
            width,
            height,
            req.background.to_hex(),
            req.foreground.to_hex(),
            png_data.len()
        );
        Ok(Placeholder { width, height, png_data })
    }

    fn checked_size(&self, width: i64, height: i64) -> Option<(u32, u32)> {
        let side = |v: i64| {
            u32::try_from(v)
                .ok()
                .filter(|&v| v > 0 && v <= self.config.max_dimension)
        };
        Some((side(width)?, side(height)?))
    }
}

fn display_list(req: &RenderRequest, width: u32, height: u32, face: &BoldFace) -> Vec<PaintCommand> {
    let mut cmds = vec![PaintCommand::Clear { color: req.background }];
    cmds.extend(
        layout_label(&req.label(), face, Rect::label_box(width, height))
            .into_iter()
            .map(|line| PaintCommand::Text { x: line.x, y: line.y, text: line.text, color: req.foreground }),
    );
    cmds
}

/// Render a placeholder PNG with the default [`RenderConfig`].
///
/// Fails with [`Error::InvalidDimensions`] when either side is not positive,
/// exceeds the configured maximum, or the canvas cannot be allocated.
pub fn render_placeholder(width: i64, height: i64, background: Color, foreground: Color) -> Result<Placeholder> {
    Renderer::default().render(&RenderRequest::new(width, height, background, foreground))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);

    #[test]
    fn label_uses_multiplication_sign() {
        let req = RenderRequest::new(200, 100, RED, GREEN);
        assert_eq!(req.label(), "200 ⨯ 100");
        assert!(!req.label().contains('x'));
    }

    #[test]
    fn display_list_draws_one_command_per_line() {
        let face = BoldFace::at_point_size(LABEL_POINT_SIZE);
        let req = RenderRequest::new(200, 100, RED, GREEN);
        let cmds = display_list(&req, 200, 100, &face);
        assert_eq!(
            cmds,
            [
                PaintCommand::Clear { color: RED },
                PaintCommand::Text { x: 22, y: 13, text: "200 ⨯".into(), color: GREEN },
                PaintCommand::Text { x: 54, y: 50, text: "100".into(), color: GREEN },
            ]
        );
    }

    #[test]
    fn wide_canvas_keeps_label_on_one_line() {
        let face = BoldFace::at_point_size(LABEL_POINT_SIZE);
        let req = RenderRequest::new(640, 480, RED, GREEN);
        let cmds = display_list(&req, 640, 480, &face);
        assert_eq!(cmds.len(), 2);
        assert!(matches!(&cmds[1], PaintCommand::Text { x, text, .. } if *x >= 0 && text == "640 ⨯ 480"));
    }

    #[test]
    fn rejects_non_positive_sizes() {
        for (w, h) in [(0, 100), (-5, 100), (100, 0), (100, -1), (i64::MIN, 1)] {
            let err = render_placeholder(w, h, RED, GREEN).unwrap_err();
            assert!(matches!(err, Error::InvalidDimensions { width, height } if width == w && height == h));
        }
    }

    #[test]
    fn rejects_sizes_above_limit() {
        let renderer = Renderer::new(RenderConfig { max_dimension: 64 });
        assert!(renderer.render(&RenderRequest::new(64, 64, RED, GREEN)).is_ok());
        let err = renderer.render(&RenderRequest::new(65, 10, RED, GREEN)).unwrap_err();
        assert!(err.is_client_error());
        assert!(render_placeholder(i64::from(u32::MAX) + 1, 1, RED, GREEN).is_err());
    }

    #[test]
    fn renders_requested_size() {
        let p = render_placeholder(200, 100, RED, GREEN).unwrap();
        assert_eq!((p.width, p.height), (200, 100));
        assert_eq!(&p.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
