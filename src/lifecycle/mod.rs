//! Lifecycle management for watch mode.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Build index → Start route table watcher → Read stdin
//!
//! Running (watch.rs):
//!     path line → SharedIndex snapshot → result line
//!     watcher update → SharedIndex swap
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C or EOF → stop reading → drop watcher → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: an invalid initial route table is fatal
//! - Failed reloads are not fatal; the last good index stays active

pub mod shutdown;
pub mod signals;
pub mod watch;

pub use shutdown::Shutdown;
pub use watch::WatchSession;
