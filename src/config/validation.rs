//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the wildcard token and sentinel are usable
//! - Check inline routes are well formed and unique
//! - Validate the metrics address when metrics are enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("routing.wildcard must be a non-empty token without '/' or whitespace, got '{0}'")]
    InvalidWildcard(String),

    #[error("routing.not_found must not be empty")]
    EmptySentinel,

    #[error("routes[{index}]: {reason}")]
    InvalidRoute { index: usize, reason: String },

    #[error("routes[{index}]: pattern '{pattern}' already defined at routes[{first}]")]
    DuplicateRoute {
        index: usize,
        first: usize,
        pattern: String,
    },

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let wildcard = &config.routing.wildcard;
    if !is_token(wildcard) || wildcard.contains('/') {
        errors.push(ValidationError::InvalidWildcard(wildcard.clone()));
    }

    if config.routing.not_found.is_empty() {
        errors.push(ValidationError::EmptySentinel);
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, route) in config.routes.iter().enumerate() {
        if !is_token(&route.pattern) {
            errors.push(ValidationError::InvalidRoute {
                index,
                reason: format!("pattern '{}' must be non-empty without whitespace", route.pattern),
            });
        }
        if !is_token(&route.endpoint) {
            errors.push(ValidationError::InvalidRoute {
                index,
                reason: format!("endpoint '{}' must be non-empty without whitespace", route.endpoint),
            });
        }
        if let Some(&first) = seen.get(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicateRoute {
                index,
                first,
                pattern: route.pattern.clone(),
            });
        } else {
            seen.insert(&route.pattern, index);
        }
    }

    let observability = &config.observability;
    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
