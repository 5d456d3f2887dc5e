//! placeholdr
//!
//! Renders placeholder PNG images on demand: a solid background with the
//! label `"{width} ⨯ {height}"` centered in a contrasting color.
//!
//! # Features
//!
//! - **server** (default): a `tiny_http` adapter serving
//!   `GET /img/{width}x{height}/{bg}/{fg}`
//! - **async** (default): a tokio wrapper that renders on the blocking pool
//!
//! # Example
//!
//! ```
//! use placeholdr::{parse_color, render_placeholder, Color};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bg = parse_color("FF0000", Color::LIGHT_GRAY);
//! let fg = parse_color("not-a-color", Color::DARK_GRAY);
//! let image = render_placeholder(200, 100, bg, fg)?;
//! assert_eq!(image.width, 200);
//! assert!(image.png_data.starts_with(b"\x89PNG"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub use color::{parse_color, Color};

pub mod rendering;
pub use rendering::{render_placeholder, Placeholder, RenderRequest, Renderer};

// HTTP adapter
#[cfg(feature = "server")]
pub mod server;

// Async-friendly rendering on the tokio blocking pool
#[cfg(feature = "async")]
pub mod async_api;

/// Limits applied to every render.
///
/// The default bounds each side at 8192 pixels so a single request cannot
/// ask for a multi-gigabyte canvas.
///
/// ```
/// let cfg = placeholdr::RenderConfig::default();
/// assert_eq!(cfg.max_dimension, 8192);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Largest accepted width or height, in pixels
    pub max_dimension: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { max_dimension: 8192 }
    }
}

/// Configuration for the HTTP adapter
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Number of threads accepting and rendering requests
    pub workers: usize,
    /// Limits passed to the renderer
    pub render: RenderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            workers: num_cpus::get(),
            render: RenderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert!(config.workers >= 1);
        assert_eq!(config.render, RenderConfig::default());
    }
}
