//! Link chain error definitions.

use thiserror::Error;

/// Errors that can flow through a link chain.
///
/// The logging link never produces one of these itself; it only passes them
/// through. `InvalidQuery` comes from operation construction, `Transport`
/// from whichever terminating link dispatches the operation.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The operation source text is not a parseable GraphQL document.
    #[error("invalid query document: {0}")]
    InvalidQuery(#[from] graphql_parser::query::ParseError),

    /// The terminating link failed to dispatch the operation.
    #[error("transport error: {0}")]
    Transport(String),
}
