//! GraphQL Client Logging Link Library

pub mod error;
pub mod format;
pub mod graphql;
pub mod link;
pub mod options;
pub mod sink;
pub mod style;

pub use error::LinkError;
pub use graphql::{FetchResult, GraphQLError, Operation, OperationKind};
pub use link::{ConsoleLoggerLink, Link, LinkChain, NextLink, ResultStream};
pub use options::LoggerOptions;
pub use sink::{ConsoleSink, LogSink, TracingSink};
