//! Line-oriented input loading.
//!
//! Every input is a block of lines ending at EOF or the first empty line.
//! Malformed lines are rejected here, before anything reaches the index.
//! Bytes that are not valid UTF-8 are decoded lossily rather than failing the
//! whole block.

use std::io::BufRead;

use thiserror::Error;

use crate::routing::Route;

/// Errors raised while reading line input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A route line without both a pattern and an endpoint.
    #[error("Malformed route on line {line}: '{content}' (expected '<pattern> <endpoint>')")]
    MalformedRoute { line: usize, content: String },

    /// An interval line without two integers.
    #[error("Malformed interval on line {line}: '{content}' (expected '<start> <end>')")]
    MalformedInterval { line: usize, content: String },
}

/// Read lines until EOF or the first empty line.
///
/// Returns `(line_number, content)` pairs with 1-based numbering and any
/// trailing carriage return removed.
pub fn read_block<R: BufRead>(mut reader: R) -> Result<Vec<(usize, String)>, InputError> {
    let mut block = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        if buf.is_empty() {
            break;
        }
        block.push((line, String::from_utf8_lossy(&buf).into_owned()));
    }
    Ok(block)
}

/// Parse one `<pattern> <endpoint>` line. Fields past the second are ignored.
pub fn parse_route(line: usize, content: &str) -> Result<Route, InputError> {
    let mut fields = content.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(pattern), Some(endpoint)) => Ok(Route::new(pattern, endpoint)),
        _ => Err(InputError::MalformedRoute {
            line,
            content: content.to_string(),
        }),
    }
}

/// Read a route table.
pub fn read_routes<R: BufRead>(reader: R) -> Result<Vec<Route>, InputError> {
    let routes = read_block(reader)?
        .into_iter()
        .map(|(line, content)| parse_route(line, &content))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = routes.len(), "Routes read");
    Ok(routes)
}

/// Read request paths verbatim.
pub fn read_paths<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    Ok(read_block(reader)?.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_routes() {
        let input = "/a/b E1\n/a/X\tE2\n";
        let routes = read_routes(Cursor::new(input)).unwrap();
        assert_eq!(routes, vec![Route::new("/a/b", "E1"), Route::new("/a/X", "E2")]);
    }

    #[test]
    fn test_blank_line_ends_block() {
        let input = "/a E1\n\n/b E2\n";
        let routes = read_routes(Cursor::new(input)).unwrap();
        assert_eq!(routes, vec![Route::new("/a", "E1")]);
    }

    #[test]
    fn test_crlf_input() {
        let input = "/a E1\r\n\r\n/b E2\r\n";
        let routes = read_routes(Cursor::new(input)).unwrap();
        assert_eq!(routes, vec![Route::new("/a", "E1")]);
    }

    #[test]
    fn test_malformed_route_reports_line() {
        let input = "/a E1\n/b\n";
        match read_routes(Cursor::new(input)) {
            Err(InputError::MalformedRoute { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "/b");
            }
            other => panic!("expected malformed route, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let route = parse_route(1, "/a E1 trailing").unwrap();
        assert_eq!(route, Route::new("/a", "E1"));
    }

    #[test]
    fn test_read_paths_verbatim() {
        let input = "/a/b\n/\n/a/b/\n";
        let paths = read_paths(Cursor::new(input)).unwrap();
        assert_eq!(paths, vec!["/a/b", "/", "/a/b/"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_paths(Cursor::new("")).unwrap().is_empty());
        assert!(read_routes(Cursor::new("\n/a E\n")).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_decoded_lossily() {
        let input: &[u8] = b"/a/\xff\n/b\r\n\n/c\n";
        let paths = read_paths(Cursor::new(input)).unwrap();
        assert_eq!(paths, vec!["/a/\u{FFFD}", "/b"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let paths = read_paths(Cursor::new("/a\n/b")).unwrap();
        assert_eq!(paths, vec!["/a", "/b"]);
    }
}
