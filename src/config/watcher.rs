//! Route table watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::batch::{index_from_routes, read_route_file};
use crate::config::schema::RouterConfig;
use crate::routing::RouteIndex;

/// A watcher that rebuilds the route index when the route table changes.
///
/// A rebuild that fails keeps the current index. So does a table that reads
/// back empty after holding routes, which is what a truncating rewrite looks
/// like between its two events.
pub struct RouteTableWatcher {
    path: PathBuf,
    config: RouterConfig,
    update_tx: mpsc::UnboundedSender<RouteIndex>,
}

impl RouteTableWatcher {
    /// Create a new RouteTableWatcher.
    ///
    /// Returns the watcher and a receiver for freshly built indexes.
    pub fn new(path: &Path, config: RouterConfig) -> (Self, mpsc::UnboundedReceiver<RouteIndex>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                config,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for events to keep arriving.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();
        let config = self.config;
        let mut table_routes = read_route_file(&path).map(|routes| routes.len()).unwrap_or(0);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Route table change detected, reloading...");
                        let routes = match read_route_file(&path) {
                            Ok(routes) => routes,
                            Err(e) => {
                                tracing::error!("Failed to reload route table: {}. Keeping current index.", e);
                                return;
                            }
                        };
                        if routes.is_empty() && table_routes > 0 {
                            tracing::warn!(path = ?path, "Route table is empty, keeping current index");
                            return;
                        }

                        let count = routes.len();
                        match index_from_routes(routes, &config) {
                            Ok(index) => {
                                table_routes = count;
                                let _ = tx.send(index);
                            }
                            Err(e) => {
                                tracing::error!("Failed to reload route table: {}. Keeping current index.", e);
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, routes = table_routes, "Route table watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reload_on_modify() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "/a old").unwrap();
        file.flush().unwrap();

        let (watcher, mut updates) = RouteTableWatcher::new(file.path(), RouterConfig::default());
        let _guard = watcher.run().unwrap();

        std::fs::write(file.path(), "/a new\n").unwrap();

        let index = tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                let index = updates.recv().await.expect("watcher channel closed");
                if index.resolve("/a").to_string() == "new" {
                    return index;
                }
            }
        })
        .await
        .expect("no reload observed");
        assert_eq!(index.len(), 1);
    }

    fn watched_table(content: &str) -> (tempfile::NamedTempFile, mpsc::UnboundedReceiver<RouteIndex>, RecommendedWatcher) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();

        let (watcher, updates) = RouteTableWatcher::new(file.path(), RouterConfig::default());
        let guard = watcher.run().unwrap();
        (file, updates, guard)
    }

    async fn assert_no_update(updates: &mut mpsc::UnboundedReceiver<RouteIndex>) {
        let received = tokio::time::timeout(Duration::from_secs(3), updates.recv()).await;
        assert!(received.is_err(), "unexpected index update: {:?}", received);
        assert!(updates.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_duplicate_rewrite_keeps_current_index() {
        let (file, mut updates, _guard) = watched_table("/a old\n");

        std::fs::write(file.path(), "/a E1\n/a E2\n").unwrap();

        assert_no_update(&mut updates).await;
    }

    #[tokio::test]
    async fn test_malformed_rewrite_keeps_current_index() {
        let (file, mut updates, _guard) = watched_table("/a old\n");

        std::fs::write(file.path(), "/a\n").unwrap();

        assert_no_update(&mut updates).await;
    }

    #[tokio::test]
    async fn test_truncated_table_keeps_current_index() {
        let (file, mut updates, _guard) = watched_table("/a old\n");

        std::fs::write(file.path(), "").unwrap();

        assert_no_update(&mut updates).await;
    }
}
