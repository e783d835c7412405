//! segment-router command line.
//!
//! ```text
//!   routes file ─┐
//!   config [[routes]] ─┴─▶ RouteIndex ──▶ resolve each stdin path ──▶ stdout
//! ```
//!
//! `resolve` is the one-shot batch mode, `watch` keeps running and reloads the
//! route table when it changes, `check` validates a table, `gaps` runs the
//! interval utility.

use std::io::{self, BufWriter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

use segment_router::batch::{load_index, read_paths, resolve_all, write_resolutions};
use segment_router::config::watcher::RouteTableWatcher;
use segment_router::config::{load_config, OutputFormat, RouterConfig};
use segment_router::gaps;
use segment_router::lifecycle::{signals, Shutdown, WatchSession};
use segment_router::observability::{logging, metrics};
use segment_router::routing::SharedIndex;

/// Resolve request paths against segment route patterns
#[derive(Parser)]
#[command(name = "segment-router")]
#[command(version)]
#[command(about = "Resolve request paths against segment route patterns", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths read from stdin, one result line per path
    Resolve {
        /// Route table file (`<pattern> <endpoint>` per line)
        routes: Option<PathBuf>,
    },
    /// Build the route index and report its size
    Check {
        /// Route table file
        routes: Option<PathBuf>,
    },
    /// Resolve paths from stdin continuously, reloading the route table on change
    Watch {
        /// Route table file
        routes: Option<PathBuf>,
    },
    /// Print gaps between the `<start> <end>` ranges read from stdin
    Gaps,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => RouterConfig::default(),
    };

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.observability.log_level.as_str()
    };
    logging::init_logging(log_level);

    let format = cli.format.unwrap_or(config.output.format);

    let result = match cli.command {
        Commands::Resolve { routes } => resolve(routes_file(routes, &config), &config, format),
        Commands::Check { routes } => check(routes_file(routes, &config), &config),
        Commands::Watch { routes } => {
            let path = routes_file(routes, &config)
                .ok_or_else(|| anyhow!("watch needs a route table file to watch"))?;
            watch(path, config, format)
        }
        Commands::Gaps => run_gaps(),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}

/// Route table from the command line, falling back to the config file.
fn routes_file(arg: Option<PathBuf>, config: &RouterConfig) -> Option<PathBuf> {
    arg.or_else(|| config.routing.routes_file.as_ref().map(PathBuf::from))
}

fn resolve(routes: Option<PathBuf>, config: &RouterConfig, format: OutputFormat) -> anyhow::Result<()> {
    let index = load_index(routes.as_deref(), config)?;
    if index.is_empty() {
        tracing::warn!("Route table is empty; every path will resolve to not found");
    }

    let paths = read_paths(io::stdin().lock())?;
    let results = resolve_all(&index, &paths);

    let mut out = BufWriter::new(io::stdout().lock());
    write_resolutions(&mut out, &paths, &results, format, &config.routing.not_found)?;

    tracing::info!(
        paths = paths.len(),
        matched = results.iter().filter(|r| r.is_match()).count(),
        "Resolution complete"
    );
    Ok(())
}

fn check(routes: Option<PathBuf>, config: &RouterConfig) -> anyhow::Result<()> {
    let index = load_index(routes.as_deref(), config)?;
    println!(
        "ok: {} routes, {} nodes, wildcard '{}'",
        index.len(),
        index.node_count(),
        index.wildcard()
    );
    Ok(())
}

fn watch(path: PathBuf, config: RouterConfig, format: OutputFormat) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run_watch(path, config, format));
    // A pending stdin read would otherwise hold the runtime open.
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

async fn run_watch(path: PathBuf, config: RouterConfig, format: OutputFormat) -> anyhow::Result<()> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let index = load_index(Some(path.as_path()), &config)?;
    let shared = Arc::new(SharedIndex::new(index));

    let (watcher, updates) = RouteTableWatcher::new(&path, config.clone());
    let _watcher = watcher.run()?;

    let shutdown = Arc::new(Shutdown::new());
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::shutdown_on_ctrl_c(&signal_shutdown).await;
    });

    let session = WatchSession::new(shared, format, config.routing.not_found.clone());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session
        .run(stdin, tokio::io::stdout(), updates, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn run_gaps() -> anyhow::Result<()> {
    let intervals = gaps::read_intervals(io::stdin().lock())?;
    let uncovered = gaps::uncovered(intervals);

    let mut out = BufWriter::new(io::stdout().lock());
    gaps::write_intervals(&mut out, &uncovered)?;
    Ok(())
}
