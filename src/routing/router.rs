//! Route index construction and lookup.
//!
//! # Responsibilities
//! - Store compiled routes in a segment trie
//! - Reject duplicate patterns at build time
//! - Look up the endpoint for a concrete path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) expected child lookup via HashMap, keyed by the raw segment
//! - The wildcard token is an ordinary child key; only lookup treats it specially
//! - Explicit NotFound rather than silent default

use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::matcher;
use crate::routing::types::{
    segments, Resolution, Route, RoutingError, RoutingResult, PATH_SEPARATOR, WILDCARD,
};
use crate::routing::Resolve;

/// Position of a node in the index arena.
pub type NodeId = usize;

/// The root node, present in every index.
pub const ROOT: NodeId = 0;

/// One path prefix in the trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Endpoint of the route whose pattern ends exactly here.
    pub(crate) endpoint: Option<Arc<str>>,
    pub(crate) children: HashMap<String, NodeId>,
}

impl TrieNode {
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn child(&self, segment: &str) -> Option<NodeId> {
        self.children.get(segment).copied()
    }
}

/// Prefix tree of route patterns.
///
/// Nodes live in a flat arena and refer to their children by id, so building,
/// cloning, comparing and dropping never recurse regardless of pattern depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteIndex {
    pub(crate) nodes: Vec<TrieNode>,
    wildcard: String,
    route_count: usize,
}

impl Default for RouteIndex {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            wildcard: WILDCARD.to_string(),
            route_count: 0,
        }
    }
}

impl RouteIndex {
    /// Create an empty index using the default wildcard token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with a custom wildcard token.
    ///
    /// The token must be non-empty and contain no separator, otherwise no
    /// single segment could ever equal it.
    pub fn with_wildcard(wildcard: impl Into<String>) -> RoutingResult<Self> {
        let wildcard = wildcard.into();
        if wildcard.is_empty() || wildcard.contains(PATH_SEPARATOR) {
            return Err(RoutingError::InvalidWildcard(wildcard));
        }
        Ok(Self {
            wildcard,
            ..Self::default()
        })
    }

    /// Build an index from a full route set with the default wildcard.
    pub fn build<I>(routes: I) -> RoutingResult<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        let mut index = Self::new();
        index.insert_all(routes)?;
        Ok(index)
    }

    /// Insert every route in order, stopping at the first duplicate.
    pub fn insert_all<I>(&mut self, routes: I) -> RoutingResult<()>
    where
        I: IntoIterator<Item = Route>,
    {
        for route in routes {
            self.insert(route)?;
        }
        tracing::info!(
            route_count = self.route_count,
            node_count = self.node_count(),
            wildcard = %self.wildcard,
            "Route index built"
        );
        Ok(())
    }

    /// Insert a single route.
    ///
    /// Fails if another route already terminates at the same node.
    pub fn insert(&mut self, route: Route) -> RoutingResult<()> {
        let mut current = ROOT;
        for segment in route.segments() {
            current = match self.nodes[current].child(segment) {
                Some(id) => id,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(segment.to_string(), id);
                    id
                }
            };
        }

        let node = &mut self.nodes[current];
        if let Some(existing) = &node.endpoint {
            tracing::warn!(
                pattern = %route.pattern,
                existing = %existing,
                rejected = %route.endpoint,
                "Duplicate route pattern"
            );
            return Err(RoutingError::DuplicateRoute {
                pattern: route.pattern,
                existing: existing.to_string(),
                rejected: route.endpoint,
            });
        }

        tracing::debug!(pattern = %route.pattern, endpoint = %route.endpoint, "Route registered");
        node.endpoint = Some(Arc::from(route.endpoint));
        self.route_count += 1;
        Ok(())
    }

    /// Resolve a concrete path to its endpoint.
    ///
    /// Literal children are tried before the wildcard at every level, with
    /// full backtracking. Worst case is exponential in the path length when
    /// many levels offer both a literal and a wildcard child that dead-end
    /// deep in the tree.
    pub fn resolve(&self, path: &str) -> Resolution {
        let parts: Vec<&str> = segments(path).collect();
        match matcher::find(&self.nodes, &parts, &self.wildcard) {
            Some(endpoint) => Resolution::Matched(endpoint.clone()),
            None => Resolution::NotFound,
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    /// Follow `path` segment by segment from the root, literally.
    pub fn walk<'a, I>(&self, path: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = ROOT;
        for segment in path {
            current = self.nodes[current].child(segment)?;
        }
        self.nodes.get(current)
    }

    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// Number of routes registered.
    pub fn len(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Resolve for RouteIndex {
    fn resolve(&self, path: &str) -> Resolution {
        RouteIndex::resolve(self, path)
    }
}
