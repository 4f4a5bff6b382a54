//! Shared utilities for logging link integration tests.

use std::sync::{Arc, Mutex};

use futures_util::{stream, StreamExt};
use graphql_logger_link::{FetchResult, LogSink, Operation, ResultStream};

/// Sink that records every line so tests can assert on output.
#[derive(Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Terminating stage that emits the given results in order.
pub fn fixture_dispatch(results: Vec<FetchResult>) -> impl Fn(Operation) -> ResultStream {
    move |_operation| {
        let results = results.clone();
        stream::iter(results.into_iter().map(Ok)).boxed()
    }
}

/// Remove ANSI escape sequences so assertions read the plain content.
#[allow(dead_code)]
pub fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for escape in chars.by_ref() {
                if escape == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
