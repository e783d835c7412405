//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (build phase):
//!     Route[] (pattern, endpoint)
//!     → types.rs (split pattern on '/', keep empty segments)
//!     → router.rs (descend/create one trie node per segment)
//!     → reject duplicate patterns
//!     → Freeze as immutable RouteIndex
//!
//! Lookup (query phase):
//!     concrete path
//!     → types.rs (same segment split)
//!     → matcher.rs (literal first, wildcard second, backtrack on dead ends)
//!     → Return: Matched(endpoint) or NotFound
//! ```
//!
//! # Design Decisions
//! - Index built once, immutable at lookup time
//! - Single-segment wildcard only; no regex
//! - Deterministic: same index and path always give the same result
//! - Reloads swap whole indexes (shared.rs); nothing is patched in place

pub mod matcher;
pub mod router;
pub mod shared;
pub mod types;

pub use router::{NodeId, RouteIndex, TrieNode, ROOT};
pub use shared::SharedIndex;
pub use types::{Resolution, Route, RoutingError, RoutingResult, NOT_FOUND, WILDCARD};

/// Anything paths can be resolved against.
pub trait Resolve: Send + Sync + std::fmt::Debug {
    /// Resolve one concrete path.
    fn resolve(&self, path: &str) -> Resolution;
}

impl<T: Resolve + ?Sized> Resolve for std::sync::Arc<T> {
    fn resolve(&self, path: &str) -> Resolution {
        (**self).resolve(path)
    }
}
