//! Segment matching logic.
//!
//! # Responsibilities
//! - Walk the trie one segment at a time
//! - Prefer the literal child over the wildcard child at every level
//! - Backtrack out of literal branches that dead-end deeper down
//!
//! # Design Decisions
//! - Segment counts must align exactly (no multi-segment wildcard)
//! - No regex, no allocation per segment beyond the pending-branch stack
//! - Depth-first with an explicit stack, so path length never bounds the call stack

use std::sync::Arc;

use crate::routing::router::{NodeId, TrieNode, ROOT};

/// Find the endpoint reachable from the root by consuming all of `segments`.
///
/// Returns the first match in literal-before-wildcard order, or `None`.
pub(crate) fn find<'a>(nodes: &'a [TrieNode], segments: &[&str], wildcard: &str) -> Option<&'a Arc<str>> {
    // (node, number of segments consumed to reach it)
    let mut pending: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

    while let Some((id, depth)) = pending.pop() {
        let node = nodes.get(id)?;
        let Some(&segment) = segments.get(depth) else {
            match &node.endpoint {
                Some(endpoint) => return Some(endpoint),
                None => continue,
            }
        };

        // Pushed first so it is explored after the literal branch is exhausted.
        // A segment spelled like the wildcard already tries that child literally.
        if segment != wildcard {
            if let Some(child) = node.child(wildcard) {
                pending.push((child, depth + 1));
            }
        }
        if let Some(child) = node.child(segment) {
            pending.push((child, depth + 1));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Route, RouteIndex};

    fn find_in(routes: &[(&str, &str)], path: &str) -> Option<String> {
        let idx = RouteIndex::build(routes.iter().map(|(p, e)| Route::new(*p, *e))).unwrap();
        let segments: Vec<&str> = path.split('/').collect();
        find(&idx.nodes, &segments, idx.wildcard()).map(|e| e.to_string())
    }

    #[test]
    fn test_no_segments_returns_node_endpoint() {
        let node = TrieNode {
            endpoint: Some(Arc::from("here")),
            ..TrieNode::default()
        };
        assert_eq!(find(&[node], &[], "X").map(|e| &**e), Some("here"));
        assert_eq!(find(&[TrieNode::default()], &[], "X"), None);
    }

    #[test]
    fn test_literal_preferred() {
        let routes = [("/a/b", "E1"), ("/a/X", "E2")];
        assert_eq!(find_in(&routes, "/a/b").as_deref(), Some("E1"));
        assert_eq!(find_in(&routes, "/a/c").as_deref(), Some("E2"));
    }

    #[test]
    fn test_backtracks_out_of_literal_branch() {
        let routes = [("/a/b/x", "E1"), ("/a/X/y", "E2")];
        assert_eq!(find_in(&routes, "/a/b/y").as_deref(), Some("E2"));
        assert_eq!(find_in(&routes, "/a/b/x").as_deref(), Some("E1"));
        assert_eq!(find_in(&routes, "/a/b/z"), None);
    }

    #[test]
    fn test_deep_backtracking_across_levels() {
        // Literal path exists for three levels and only fails at the last.
        let routes = [("/a/b/c/d", "E1"), ("/X/b/c/e", "E2")];
        assert_eq!(find_in(&routes, "/a/b/c/e").as_deref(), Some("E2"));
    }

    #[test]
    fn test_path_segment_equal_to_wildcard() {
        let routes = [("/a/X", "E1")];
        assert_eq!(find_in(&routes, "/a/X").as_deref(), Some("E1"));
        assert_eq!(find_in(&routes, "/b/X"), None);
    }

    #[test]
    fn test_segment_count_must_align() {
        let routes = [("/a/X", "E1")];
        assert_eq!(find_in(&routes, "/a"), None);
        assert_eq!(find_in(&routes, "/a/b/c"), None);
    }

    #[test]
    fn test_long_path_with_backtracking() {
        // Literal chain of 50k levels dead-ends at the last segment; the
        // wildcard branch at the very first level has to take over.
        let literal = format!("/a{}", "/b".repeat(50_000));
        let wild = format!("/X{}/c", "/b".repeat(49_999));
        let routes = [(literal.as_str(), "E1"), (wild.as_str(), "E2")];
        let path = format!("/a{}/c", "/b".repeat(49_999));
        assert_eq!(find_in(&routes, &path).as_deref(), Some("E2"));
    }
}
