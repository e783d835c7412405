//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!
//! On route table change (watch mode):
//!     watcher.rs detects change
//!     → batch::load_index rebuilds the index
//!     → new RouteIndex sent over a channel
//!     → SharedIndex swaps it in atomically
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ObservabilityConfig;
pub use schema::OutputConfig;
pub use schema::OutputFormat;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
pub use schema::RoutingConfig;
