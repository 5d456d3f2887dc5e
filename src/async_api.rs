//! Async-friendly rendering.
//!
//! Rendering is CPU-bound, so async hosts should not run it on a reactor
//! thread. [`render_placeholder_async`] moves the work onto tokio's blocking
//! pool. Dropping the returned future abandons the result; the blocking task
//! still runs to completion and frees its canvas and buffers.

use crate::rendering::{Placeholder, RenderRequest, Renderer};
use crate::{Error, RenderConfig, Result};

/// Render on the blocking pool of the current tokio runtime.
pub async fn render_placeholder_async(req: RenderRequest, config: RenderConfig) -> Result<Placeholder> {
    tokio::task::spawn_blocking(move || Renderer::new(config).render(&req))
        .await
        .map_err(|e| Error::Other(format!("Render task failed: {}", e)))?
}
