//! Batch resolution subsystem.
//!
//! # Data Flow
//! ```text
//! route table file ──▶ reader.rs (read_routes) ──┐
//! config [[routes]] ─────────────────────────────┼─▶ load_index → RouteIndex
//!                                                │
//! path lines ──▶ reader.rs (read_paths) ──▶ resolve_all ──▶ writer.rs ──▶ stdout
//! ```
//!
//! # Design Decisions
//! - Input is validated line by line before anything reaches the index
//! - Output mirrors input order exactly, one line per path
//! - A failed load yields no index at all

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::RouterConfig;
use crate::observability::metrics;
use crate::routing::{Resolution, Resolve, Route, RouteIndex, RoutingError};

pub mod reader;
pub mod writer;

pub use reader::{read_paths, read_routes, InputError};
pub use writer::{write_resolution, write_resolutions};

/// Error type for building an index from its sources.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read route table '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: InputError,
    },

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Read a route table file.
pub fn read_route_file(path: &Path) -> Result<Vec<Route>, LoadError> {
    let input = |source: InputError| LoadError::Input {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|e| input(e.into()))?;
    read_routes(BufReader::new(file)).map_err(input)
}

/// Build an index from an optional route table file plus the inline routes in
/// `config`, using the configured wildcard token.
pub fn load_index(routes_file: Option<&Path>, config: &RouterConfig) -> Result<RouteIndex, LoadError> {
    let routes = match routes_file {
        Some(path) => read_route_file(path).inspect_err(record_failure)?,
        None => Vec::new(),
    };
    index_from_routes(routes, config)
}

/// Build an index from already-read table routes plus the inline routes in
/// `config`.
pub fn index_from_routes(routes: Vec<Route>, config: &RouterConfig) -> Result<RouteIndex, LoadError> {
    let result = build_index(routes, config);
    match &result {
        Ok(index) => metrics::record_index_build(true, index.len()),
        Err(e) => record_failure(e),
    }
    result
}

fn build_index(mut routes: Vec<Route>, config: &RouterConfig) -> Result<RouteIndex, LoadError> {
    routes.extend(config.routes.iter().map(Route::from));

    let mut index = RouteIndex::with_wildcard(config.routing.wildcard.clone())?;
    index.insert_all(routes)?;
    Ok(index)
}

fn record_failure(e: &LoadError) {
    tracing::error!(error = %e, "Failed to build route index");
    metrics::record_index_build(false, 0);
}

/// Resolve every path in order.
pub fn resolve_all<R: Resolve + ?Sized>(resolver: &R, paths: &[String]) -> Vec<Resolution> {
    paths
        .iter()
        .map(|path| {
            let resolution = resolver.resolve(path);
            tracing::trace!(path = %path, matched = resolution.is_match(), "Path resolved");
            metrics::record_resolution(&resolution);
            resolution
        })
        .collect()
}
