//! Shared helpers for integration tests.

use std::io::Write;

use segment_router::routing::{Route, RouteIndex};

/// Build an index from `(pattern, endpoint)` pairs, panicking on duplicates.
#[allow(dead_code)]
pub fn index(routes: &[(&str, &str)]) -> RouteIndex {
    RouteIndex::build(routes.iter().map(|(p, e)| Route::new(*p, *e))).unwrap()
}

/// Resolve and render with the default sentinel.
#[allow(dead_code)]
pub fn resolve(index: &RouteIndex, path: &str) -> String {
    index.resolve(path).to_string()
}

/// Write `content` to a fresh temporary file.
#[allow(dead_code)]
pub fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
