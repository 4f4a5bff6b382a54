//! GraphQL pipeline data model.
//!
//! # Data Flow
//! ```text
//! Caller builds Operation (parsed document, name, variables, headers)
//!     → operation.rs (kind resolution against the document AST)
//!     → link chain forwards the Operation unchanged
//!     → response.rs (FetchResult: data / errors / extensions)
//! ```
//!
//! # Design Decisions
//! - The document is parsed once at construction and held as an owned AST
//! - Kind resolution mirrors GraphQL's getOperationAST: named lookup when a
//!   name is supplied, single-definition fallback otherwise
//! - Results round-trip the standard GraphQL response JSON shape

pub mod operation;
pub mod response;

pub use operation::{Operation, OperationContext, OperationKind};
pub use response::{FetchResult, GraphQLError, Location};
