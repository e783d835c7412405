//! Routing types and error definitions.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Reserved pattern segment matching exactly one arbitrary path segment.
pub const WILDCARD: &str = "X";

/// Sentinel rendered for paths no route matches.
pub const NOT_FOUND: &str = "404";

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Split a path or pattern into segments.
///
/// Empty segments are preserved, so `"/a/"` yields `["", "a", ""]` and the
/// empty string yields a single empty segment.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR)
}

/// A route pattern mapped to an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// `/`-separated template; segments equal to the wildcard token match any
    /// single segment.
    pub pattern: String,

    /// Opaque endpoint identifier.
    pub endpoint: String,
}

impl Route {
    pub fn new(pattern: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Segments of this route's pattern.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        segments(&self.pattern)
    }
}

/// Outcome of resolving one path.
///
/// `NotFound` is an ordinary value, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(Arc<str>),
    NotFound,
}

impl Resolution {
    /// The matched endpoint, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Resolution::Matched(endpoint) => Some(endpoint),
            Resolution::NotFound => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    /// Render with a custom not-found sentinel.
    pub fn or_sentinel<'a>(&'a self, sentinel: &'a str) -> &'a str {
        self.endpoint().unwrap_or(sentinel)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.or_sentinel(NOT_FOUND))
    }
}

/// Errors raised while building a route index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Two routes share an identical segment sequence.
    #[error("Duplicate route pattern '{pattern}': already mapped to '{existing}', rejected '{rejected}'")]
    DuplicateRoute {
        pattern: String,
        existing: String,
        rejected: String,
    },

    /// Wildcard token is empty or would never appear as a single segment.
    #[error("Invalid wildcard token '{0}'")]
    InvalidWildcard(String),
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;
