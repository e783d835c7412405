//! Result output.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::routing::Resolution;

/// JSON line emitted per resolved path.
#[derive(Debug, Serialize)]
struct ResolutionRecord<'a> {
    path: &'a str,
    endpoint: Option<&'a str>,
    matched: bool,
}

/// Write the result for a single path as one line.
pub fn write_resolution<W: Write>(
    writer: &mut W,
    path: &str,
    resolution: &Resolution,
    format: OutputFormat,
    not_found: &str,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(writer, "{}", resolution.or_sentinel(not_found)),
        OutputFormat::Json => {
            let record = ResolutionRecord {
                path,
                endpoint: resolution.endpoint(),
                matched: resolution.is_match(),
            };
            serde_json::to_writer(&mut *writer, &record)?;
            writeln!(writer)
        }
    }
}

/// Write one line per path, in input order.
pub fn write_resolutions<W: Write>(
    writer: &mut W,
    paths: &[String],
    resolutions: &[Resolution],
    format: OutputFormat,
    not_found: &str,
) -> std::io::Result<()> {
    for (path, resolution) in paths.iter().zip(resolutions) {
        write_resolution(writer, path, resolution, format, not_found)?;
    }
    writer.flush()
}
