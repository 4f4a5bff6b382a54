//! Diagnostic output sinks.
//!
//! # Responsibilities
//! - Define the seam between line formatting and where lines end up
//! - Provide the stderr default and a `tracing`-backed alternative
//!
//! # Design Decisions
//! - Sinks receive fully formatted lines; they never inspect operations
//! - A sink must be shareable across in-flight operations (`Send + Sync`)

use tracing::debug;

/// Destination for formatted log lines.
pub trait LogSink: Send + Sync {
    /// Write one formatted log line.
    fn write_line(&self, line: &str);
}

/// Writes styled lines to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Routes lines through `tracing::debug!` for hosts that already run a
/// subscriber and want GraphQL traffic in the same stream.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) {
        debug!(target: "graphql_logger_link", "{line}");
    }
}
