//! End-to-end resolution behaviour of the route index.

use std::sync::Arc;
use std::thread;

use segment_router::routing::{Resolution, Route, RouteIndex, RoutingError};

mod common;
use common::{index, resolve};

#[test]
fn test_literal_routes_resolve_to_their_endpoint() {
    let routes = [
        ("/", "root"),
        ("/users", "users"),
        ("/users/list", "user-list"),
        ("/a/b/c/d/e", "deep"),
        ("", "empty"),
        ("/trailing/", "trailing"),
    ];
    let idx = index(&routes);
    for (pattern, endpoint) in routes {
        assert_eq!(resolve(&idx, pattern), endpoint, "pattern {:?}", pattern);
    }
}

#[test]
fn test_literal_over_wildcard() {
    let idx = index(&[("/a/b", "E1"), ("/a/X", "E2")]);
    assert_eq!(resolve(&idx, "/a/b"), "E1");
    assert_eq!(resolve(&idx, "/a/c"), "E2");
}

#[test]
fn test_wildcard_fallback_when_literal_missing() {
    let idx = index(&[("/a/b/c", "E1"), ("/a/X/d", "E2")]);
    assert_eq!(resolve(&idx, "/a/z/d"), "E2");
}

#[test]
fn test_backtracking_out_of_dead_end_literal() {
    let idx = index(&[("/a/b/x", "E1"), ("/a/X/y", "E2")]);
    assert_eq!(resolve(&idx, "/a/b/y"), "E2");
    assert_eq!(resolve(&idx, "/a/b/x"), "E1");
}

#[test]
fn test_literal_deeper_match_wins_over_earlier_wildcard() {
    let idx = index(&[("/X/b/c", "wild-first"), ("/a/X/c", "wild-second")]);
    // Literal "a" is tried first and succeeds through its own wildcard.
    assert_eq!(resolve(&idx, "/a/b/c"), "wild-second");
    assert_eq!(resolve(&idx, "/q/b/c"), "wild-first");
}

#[test]
fn test_unregistered_paths_are_not_found() {
    let idx = index(&[("/a/b", "E1"), ("/c/X", "E2")]);
    for path in ["/zzz", "/a/c", "/c", "a/b", "/", ""] {
        assert_eq!(idx.resolve(path), Resolution::NotFound, "path {:?}", path);
        assert_eq!(resolve(&idx, path), "404");
    }
}

#[test]
fn test_segment_count_mismatch_never_matches() {
    let idx = index(&[("/a/b", "E1"), ("/a/X", "E2")]);
    assert_eq!(resolve(&idx, "/a"), "404");
    assert_eq!(resolve(&idx, "/a/b/c"), "404");
    assert_eq!(resolve(&idx, "/a/b/"), "404");
}

#[test]
fn test_wildcard_matches_empty_segment() {
    let idx = index(&[("/a/X", "E")]);
    assert_eq!(resolve(&idx, "/a/"), "E");
}

#[test]
fn test_empty_path_matched_literally() {
    let idx = index(&[("X", "wild"), ("/", "root")]);
    // "" is one empty segment; no literal "" route of length one, so the
    // single-segment wildcard takes it.
    assert_eq!(resolve(&idx, ""), "wild");
    let literal = index(&[("", "empty"), ("X", "wild")]);
    assert_eq!(resolve(&literal, ""), "empty");
}

#[test]
fn test_resolution_is_idempotent_and_side_effect_free() {
    let idx = index(&[("/a/b/x", "E1"), ("/a/X/y", "E2"), ("/X/X/X", "E3")]);
    let before = idx.clone();

    for path in ["/a/b/y", "/a/b/x", "/q/r/s", "/nope"] {
        let first = idx.resolve(path);
        let second = idx.resolve(path);
        assert_eq!(first, second);
    }
    assert_eq!(idx, before);
}

#[test]
fn test_duplicate_patterns_fail_build() {
    let err = RouteIndex::build(vec![
        Route::new("/a/X", "E1"),
        Route::new("/b", "E2"),
        Route::new("/a/X", "E3"),
    ])
    .unwrap_err();
    assert!(matches!(err, RoutingError::DuplicateRoute { ref pattern, .. } if pattern == "/a/X"));
    assert!(err.to_string().contains("/a/X"));
}

#[test]
fn test_concurrent_resolution_shares_index() {
    let idx = Arc::new(index(&[("/a/b/x", "E1"), ("/a/X/y", "E2")]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let idx = Arc::clone(&idx);
            thread::spawn(move || {
                for _ in 0..1000 {
                    assert_eq!(idx.resolve("/a/b/y").to_string(), "E2");
                    assert_eq!(idx.resolve("/a/b/x").to_string(), "E1");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
