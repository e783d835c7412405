//! Streaming resolution with live route table reloads.
//!
//! # Responsibilities
//! - Answer each input line against the latest index
//! - Swap in rebuilt indexes as they arrive
//! - Stop on end of input or shutdown
//!
//! # Design Decisions
//! - Every path resolves against exactly one complete index snapshot
//! - Output is flushed after each line so callers can pipe interactively
//! - Empty lines are skipped instead of ending the stream

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, mpsc};

use crate::batch::write_resolution;
use crate::config::OutputFormat;
use crate::observability::metrics;
use crate::routing::{Resolve, RouteIndex, SharedIndex};

/// Long-running resolution loop over a shared index.
#[derive(Debug)]
pub struct WatchSession {
    index: Arc<SharedIndex>,
    format: OutputFormat,
    not_found: String,
}

impl WatchSession {
    pub fn new(index: Arc<SharedIndex>, format: OutputFormat, not_found: impl Into<String>) -> Self {
        Self {
            index,
            format,
            not_found: not_found.into(),
        }
    }

    pub fn index(&self) -> &Arc<SharedIndex> {
        &self.index
    }

    /// Run until `input` is exhausted or shutdown fires.
    ///
    /// Returns the number of paths resolved.
    pub async fn run<R, W>(
        &self,
        input: R,
        mut output: W,
        mut updates: mpsc::UnboundedReceiver<RouteIndex>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut resolved = 0;
        let mut updates_open = true;
        let mut shutdown_open = true;
        let mut buf = Vec::new();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::debug!("Input exhausted");
                        break;
                    };
                    let path = line.trim_end_matches('\r');
                    if path.is_empty() {
                        continue;
                    }

                    let resolution = self.index.resolve(path);
                    metrics::record_resolution(&resolution);

                    buf.clear();
                    write_resolution(&mut buf, path, &resolution, self.format, &self.not_found)?;
                    output.write_all(&buf).await?;
                    output.flush().await?;
                    resolved += 1;
                }
                update = updates.recv(), if updates_open => {
                    match update {
                        Some(index) => {
                            self.index.replace(index);
                        }
                        None => {
                            tracing::debug!("Route table updates closed");
                            updates_open = false;
                        }
                    }
                }
                signal = shutdown.recv(), if shutdown_open => {
                    if let Err(broadcast::error::RecvError::Closed) = signal {
                        shutdown_open = false;
                        continue;
                    }
                    tracing::info!("Watch session stopping");
                    break;
                }
            }
        }

        tracing::info!(resolved, "Watch session finished");
        Ok(resolved)
    }
}
