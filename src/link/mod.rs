//! Link chain middleware seam.
//!
//! # Data Flow
//! ```text
//! LinkChain::execute(operation)
//!     → outermost Link::request(operation, forward)
//!     → ... nested continuations ...
//!     → terminating dispatch fn
//!     → ResultStream flows back up through each link unchanged
//! ```
//!
//! # Design Decisions
//! - Continuations are one-shot (`FnOnce`): a link forwards an operation at
//!   most once
//! - Result streams are boxed and `Send` so chains hop tasks freely
//! - Links share nothing; per-operation state lives in closures

use std::pin::Pin;

use futures_util::Stream;

use crate::error::LinkError;
use crate::graphql::{FetchResult, Operation};

pub mod chain;
pub mod logger;

pub use chain::LinkChain;
pub use logger::ConsoleLoggerLink;

/// Lazy sequence of results produced by dispatching one operation.
pub type ResultStream = Pin<Box<dyn Stream<Item = Result<FetchResult, LinkError>> + Send>>;

/// Continuation that forwards an operation to the next stage.
pub type NextLink = Box<dyn FnOnce(Operation) -> ResultStream + Send>;

/// A middleware stage in a linear request-processing chain.
pub trait Link: Send + Sync {
    /// Handle an outgoing operation, forwarding it via `forward` and
    /// returning the (possibly observed) result stream.
    fn request(&self, operation: Operation, forward: NextLink) -> ResultStream;
}
