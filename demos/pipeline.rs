//! Demo pipeline: a logging link over a mock dispatch stage.
//!
//! Run with `cargo run --example pipeline` and watch stderr for the styled
//! request/response lines.

use std::time::Duration;

use futures_util::{stream, StreamExt};
use serde_json::json;

use graphql_logger_link::{
    ConsoleLoggerLink, FetchResult, GraphQLError, LinkChain, LoggerOptions, Operation,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // Terminating stage standing in for a network client.
    let chain = LinkChain::new(|operation: Operation| {
        let failing = operation.operation_name() == Some("AddUser");
        stream::once(async move {
            tokio::time::sleep(Duration::from_millis(40)).await;
            if failing {
                Ok(FetchResult::from_errors(vec![GraphQLError::new(
                    "user already exists",
                )]))
            } else {
                Ok(FetchResult::from_data(json!({"user": {"name": "Ada"}})))
            }
        })
        .boxed()
    })
    .with(ConsoleLoggerLink::new(LoggerOptions::default()));

    let query = Operation::new("query GetUser($id: ID!) { user(id: $id) { name } }")?
        .with_operation_name("GetUser")
        .with_variable("id", json!("42"))
        .with_header("authorization", "Bearer demo-token");
    chain.execute(query).collect::<Vec<_>>().await;

    let mutation = Operation::new("mutation AddUser($name: String!) { addUser(name: $name) { id } }")?
        .with_operation_name("AddUser")
        .with_variable("name", json!("Ada"));
    chain.execute(mutation).collect::<Vec<_>>().await;

    Ok(())
}
