//! The console logging link.
//!
//! # Responsibilities
//! - Resolve each outgoing operation's kind from its document AST
//! - Correlate request and response lines with a per-instance sequence id
//! - Observe result streams without altering items, order, or errors
//!
//! # Design Decisions
//! - Subscriptions are never logged: a single request/response pair is not
//!   meaningful for a long-lived stream of pushed results
//! - Sequence ids are allocated only for operations that will be logged
//! - Per-operation state (id, start instant) is captured by closure; no
//!   correlation maps

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;

use crate::format;
use crate::graphql::{Operation, OperationKind};
use crate::link::{Link, NextLink, ResultStream};
use crate::options::LoggerOptions;
use crate::sink::{ConsoleSink, LogSink};

/// Middleware link that logs every query and mutation passing through it,
/// leaving the operation and its results untouched.
pub struct ConsoleLoggerLink {
    options: LoggerOptions,
    sink: Arc<dyn LogSink>,
    sequence: AtomicU64,
}

impl ConsoleLoggerLink {
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            options,
            sink: Arc::new(ConsoleSink),
            sequence: AtomicU64::new(0),
        }
    }

    /// Replace the stderr sink, e.g. with [`TracingSink`](crate::TracingSink)
    /// or a capturing sink in tests.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Pre-incremented so the first logged operation is `#1`.
    fn next_sequence_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for ConsoleLoggerLink {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl Link for ConsoleLoggerLink {
    fn request(&self, operation: Operation, forward: NextLink) -> ResultStream {
        let kind = match operation.kind() {
            Some(kind) => kind,
            // Unresolvable kind is nothing to log, not an error.
            None => return forward(operation),
        };
        if kind == OperationKind::Subscription {
            return forward(operation);
        }

        let id = self.next_sequence_id();
        self.sink
            .write_line(&format::request_line(&operation, kind, id, &self.options));

        let start = Instant::now();
        let sink = Arc::clone(&self.sink);
        let options = self.options.clone();
        let name = operation.operation_name().map(str::to_owned);

        forward(operation)
            .map(move |item| {
                // Errored items propagate silently; only results are logged.
                if let Ok(result) = &item {
                    sink.write_line(&format::response_line(
                        name.as_deref(),
                        kind,
                        id,
                        result,
                        start.elapsed(),
                        &options,
                    ));
                }
                item
            })
            .boxed()
    }
}
