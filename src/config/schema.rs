//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML. Every field
//! has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::routing::{Route, NOT_FOUND, WILDCARD};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Matching behaviour and route table location.
    pub routing: RoutingConfig,

    /// Inline routes, inserted after the route table file.
    pub routes: Vec<RouteConfig>,

    /// Result output settings.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Matching behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Reserved segment matching any single path segment.
    pub wildcard: String,

    /// Sentinel printed for unmatched paths.
    pub not_found: String,

    /// Route table used when none is given on the command line.
    pub routes_file: Option<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            wildcard: WILDCARD.to_string(),
            not_found: NOT_FOUND.to_string(),
            routes_file: None,
        }
    }
}

/// Inline route definition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// `/`-separated pattern.
    pub pattern: String,

    /// Endpoint identifier returned on match.
    pub endpoint: String,
}

impl From<&RouteConfig> for Route {
    fn from(config: &RouteConfig) -> Self {
        Route::new(config.pattern.clone(), config.endpoint.clone())
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Output line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Endpoint or sentinel, one per line.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Expose Prometheus metrics while watching.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
