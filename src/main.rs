use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use placeholdr::server::PlaceholderServer;
use placeholdr::{parse_color, Color, RenderConfig, RenderRequest, Renderer, ServerConfig};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "placeholdr", version, about = "Placeholder image service")]
struct Cli {
    /// Log at info level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve GET /img/{width}x{height}/{bg}/{fg}
    Serve {
        #[arg(long, env = "PLACEHOLDR_BIND", default_value = "127.0.0.1:8080")]
        bind: String,

        /// Worker threads (defaults to the number of CPUs)
        #[arg(long, env = "PLACEHOLDR_WORKERS")]
        workers: Option<usize>,

        #[arg(long, env = "PLACEHOLDR_MAX_DIMENSION", default_value_t = RenderConfig::default().max_dimension)]
        max_dimension: u32,
    },
    /// Render one placeholder to a PNG file
    Render {
        /// Size as WIDTHxHEIGHT, e.g. 200x100
        size: String,

        /// Background color as hex without '#'
        #[arg(default_value = "D3D3D3")]
        background: String,

        /// Foreground color as hex without '#'
        #[arg(default_value = "A9A9A9")]
        foreground: String,

        #[arg(short, long)]
        output: PathBuf,
    },
}

/// `RUST_LOG` wins unless a level flag was passed; WARN when neither is set.
fn log_filter(rust_log: Option<&str>, verbose: bool, debug: bool) -> EnvFilter {
    let level = if debug {
        LevelFilter::DEBUG
    } else if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default());
    if verbose || debug {
        filter.add_directive(level.into())
    } else {
        filter
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), cli.verbose, cli.debug))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match cli.command {
        Command::Serve { bind, workers, max_dimension } => {
            let defaults = ServerConfig::default();
            let config = ServerConfig {
                bind,
                workers: workers.unwrap_or(defaults.workers),
                render: RenderConfig { max_dimension },
            };
            let server = PlaceholderServer::bind(&config)?;
            server.run()?;
        }
        Command::Render { size, background, foreground, output } => {
            let Some((w, h)) = size.split_once(['x', 'X']) else {
                bail!("size must look like WIDTHxHEIGHT, got {:?}", size);
            };
            let req = RenderRequest::new(
                w.parse().with_context(|| format!("invalid width {:?}", w))?,
                h.parse().with_context(|| format!("invalid height {:?}", h))?,
                parse_color(&background, Color::LIGHT_GRAY),
                parse_color(&foreground, Color::DARK_GRAY),
            );
            let image = Renderer::default().render(&req)?;
            std::fs::write(&output, &image.png_data)
                .with_context(|| format!("failed to write {}", output.display()))?;
            log::info!("wrote {} ({} bytes)", output.display(), image.png_data.len());
        }
    }
    Ok(())
}
