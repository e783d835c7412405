//! Segment-trie path router.
//!
//! Builds a prefix tree from `/`-separated route patterns, where a reserved
//! token matches any single segment, and resolves concrete paths to endpoints
//! with literal-first backtracking.
//!
//! ```
//! use segment_router::routing::{Route, RouteIndex};
//!
//! let index = RouteIndex::build(vec![
//!     Route::new("/a/b/x", "E1"),
//!     Route::new("/a/X/y", "E2"),
//! ])
//! .unwrap();
//!
//! assert_eq!(index.resolve("/a/b/x").to_string(), "E1");
//! assert_eq!(index.resolve("/a/b/y").to_string(), "E2");
//! assert_eq!(index.resolve("/a/b").to_string(), "404");
//! ```

// Core
pub mod routing;

// Input/output around the core
pub mod batch;
pub mod config;

// Standalone utilities
pub mod gaps;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::RouterConfig;
pub use routing::{Resolution, Route, RouteIndex, RoutingError};
