//! Link composition.

use std::sync::Arc;

use crate::graphql::Operation;
use crate::link::{Link, NextLink, ResultStream};

/// A linear chain of links over a terminating dispatch function.
///
/// Links run in the order they were added: the first link added is the
/// outermost stage, the terminating function dispatches the operation for
/// real (network client, mock, fixture).
pub struct LinkChain {
    links: Vec<Arc<dyn Link>>,
    terminal: Arc<dyn Fn(Operation) -> ResultStream + Send + Sync>,
}

impl LinkChain {
    pub fn new<F>(terminal: F) -> Self
    where
        F: Fn(Operation) -> ResultStream + Send + Sync + 'static,
    {
        Self {
            links: Vec::new(),
            terminal: Arc::new(terminal),
        }
    }

    /// Append a link as the innermost stage so far.
    pub fn with<L: Link + 'static>(mut self, link: L) -> Self {
        self.links.push(Arc::new(link));
        self
    }

    /// Run an operation through the chain, building the nested continuations
    /// at call time so each execution is independent.
    pub fn execute(&self, operation: Operation) -> ResultStream {
        let terminal = Arc::clone(&self.terminal);
        let mut forward: NextLink = Box::new(move |op| terminal(op));
        for link in self.links.iter().rev() {
            let link = Arc::clone(link);
            let inner = forward;
            forward = Box::new(move |op| link.request(op, inner));
        }
        forward(operation)
    }
}
