//! HTTP adapter serving placeholder images over `tiny_http`.
//!
//! Routing and response construction live in [`handle`], which is a pure
//! function of the request line; the socket loop in [`PlaceholderServer`]
//! only moves bytes.

use crate::rendering::{RenderRequest, Renderer};
use crate::{parse_color, Color, Error, Result, ServerConfig};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Method, Response, Server};

/// Usage string advertised by the welcome document.
pub const IMAGE_ROUTE: &str = "/img/{width}x{height}/{bgColor}/{fgColor}";

/// A matched route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Image {
        width: i32,
        height: i32,
        background: String,
        foreground: String,
    },
}

/// Match a request target (path plus optional query) against the known routes.
pub fn route(target: &str) -> Option<Route> {
    let path = target.split_once('?').map_or(target, |(p, _)| p);
    let path = path.strip_prefix('/')?;
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        return Some(Route::Welcome);
    }

    let segments: Vec<&str> = path.split('/').collect();
    match segments.as_slice() {
        [img, size, bg, fg] if img.eq_ignore_ascii_case("img") && !bg.is_empty() && !fg.is_empty() => {
            let (w, h) = size.split_once(['x', 'X'])?;
            Some(Route::Image {
                width: w.parse().ok()?,
                height: h.parse().ok()?,
                background: (*bg).to_string(),
                foreground: (*fg).to_string(),
            })
        }
        _ => None,
    }
}

/// A fully built response, independent of the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl Reply {
    fn new(status: u16, content_type: Option<&'static str>, body: impl Into<Vec<u8>>) -> Self {
        Self { status, content_type, body: body.into() }
    }

    fn text(status: u16, body: &str) -> Self {
        Self::new(status, Some("text/plain; charset=utf-8"), body)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Welcome {
    service: &'static str,
    version: &'static str,
    usage: &'static str,
    max_dimension: u32,
}

/// Produce the reply for one request.
pub fn handle(renderer: &Renderer, method: &Method, target: &str) -> Reply {
    let Some(route) = route(target) else {
        return Reply::text(404, "Not Found");
    };
    if !matches!(method, Method::Get | Method::Head) {
        return Reply::text(405, "Method Not Allowed");
    }

    match route {
        Route::Welcome => welcome(renderer),
        Route::Image { width, height, background, foreground } => {
            let req = RenderRequest::new(
                i64::from(width),
                i64::from(height),
                parse_color(&background, Color::LIGHT_GRAY),
                parse_color(&foreground, Color::DARK_GRAY),
            );
            match renderer.render(&req) {
                Ok(image) => Reply::new(200, Some("image/png"), image.png_data),
                Err(e) if e.is_client_error() => {
                    log::warn!("rejecting {}: {}", target, e);
                    Reply::new(400, None, Vec::new())
                }
                Err(e) => {
                    log::error!("failed to render {}: {}", target, e);
                    Reply::text(500, "Rendering failed")
                }
            }
        }
    }
}

fn welcome(renderer: &Renderer) -> Reply {
    let doc = Welcome {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        usage: IMAGE_ROUTE,
        max_dimension: renderer.config().max_dimension,
    };
    match serde_json::to_vec(&doc) {
        Ok(body) => Reply::new(200, Some("application/json"), body),
        Err(e) => Reply::text(500, &format!("serialization failed: {}", e)),
    }
}

/// A bound HTTP server with a fixed pool of worker threads.
pub struct PlaceholderServer {
    server: Arc<Server>,
    renderer: Renderer,
    workers: usize,
}

/// Stops a running [`PlaceholderServer`] from another thread.
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
    workers: usize,
}

impl ShutdownHandle {
    /// Wake every worker blocked on accept so it exits its loop.
    pub fn shutdown(&self) {
        for _ in 0..self.workers {
            self.server.unblock();
        }
    }
}

impl PlaceholderServer {
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let server = Server::http(config.bind.as_str())
            .map_err(|e| Error::Server(format!("cannot bind {}: {}", config.bind, e)))?;
        Ok(Self {
            server: Arc::new(server),
            renderer: Renderer::new(config.render),
            workers: config.workers.max(1),
        })
    }

    /// The address actually bound (useful with port 0).
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle { server: Arc::clone(&self.server), workers: self.workers }
    }

    /// Serve until shut down, blocking the calling thread.
    pub fn run(self) -> Result<()> {
        if let Some(addr) = self.local_addr() {
            log::info!("listening on http://{} with {} workers", addr, self.workers);
        }
        let handles: Vec<JoinHandle<()>> = (0..self.workers)
            .map(|i| {
                let server = Arc::clone(&self.server);
                let renderer = self.renderer.clone();
                thread::Builder::new()
                    .name(format!("placeholdr-worker-{}", i))
                    .spawn(move || worker_loop(&server, &renderer))
                    .map_err(|e| Error::Server(format!("cannot spawn worker: {}", e)))
            })
            .collect::<Result<_>>()?;

        for h in handles {
            if h.join().is_err() {
                log::error!("worker thread panicked");
            }
        }
        log::info!("server stopped");
        Ok(())
    }
}

fn worker_loop(server: &Server, renderer: &Renderer) {
    for request in server.incoming_requests() {
        let reply = handle(renderer, request.method(), request.url());
        log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);

        let mut response = Response::from_data(reply.body).with_status_code(reply.status);
        if let Some(ct) = reply.content_type {
            if let Ok(header) = Header::from_bytes("Content-Type", ct) {
                response = response.with_header(header);
            }
        }
        if reply.status == 405 {
            if let Ok(header) = Header::from_bytes("Allow", "GET, HEAD") {
                response = response.with_header(header);
            }
        }
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {}", e);
        }
    }
}
