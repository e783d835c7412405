//! Atomically replaceable route index.
//!
//! Readers take a snapshot and resolve against it without locking. A reload
//! builds a fresh index and swaps the pointer; no index is mutated once it is
//! shared.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::router::RouteIndex;
use crate::routing::types::Resolution;
use crate::routing::Resolve;

#[derive(Debug)]
pub struct SharedIndex {
    current: ArcSwap<RouteIndex>,
}

impl SharedIndex {
    pub fn new(index: RouteIndex) -> Self {
        Self {
            current: ArcSwap::from_pointee(index),
        }
    }

    /// Snapshot of the current index.
    pub fn load(&self) -> Arc<RouteIndex> {
        self.current.load_full()
    }

    /// Swap in a new index, returning the previous one.
    pub fn replace(&self, index: RouteIndex) -> Arc<RouteIndex> {
        tracing::info!(
            route_count = index.len(),
            node_count = index.node_count(),
            "Route index replaced"
        );
        self.current.swap(Arc::new(index))
    }
}

impl Default for SharedIndex {
    fn default() -> Self {
        Self::new(RouteIndex::default())
    }
}

impl Resolve for SharedIndex {
    fn resolve(&self, path: &str) -> Resolution {
        self.current.load().resolve(path)
    }
}
