//! Outgoing operation descriptor and kind resolution.

use std::collections::BTreeMap;
use std::fmt;

use graphql_parser::query::{Definition, Document, OperationDefinition};
use serde_json::{Map, Value};

use crate::error::LinkError;

/// The kind of a GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    fn of(definition: &OperationDefinition<'static, String>) -> Self {
        match definition {
            // A bare selection set is shorthand for a query.
            OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Query(_) => Self::Query,
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

/// Context bag carried alongside an operation. Holds transport-level headers
/// the dispatching link will attach to the request.
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    headers: BTreeMap<String, String>,
}

impl OperationContext {
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn insert_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }
}

/// An outgoing GraphQL request descriptor.
///
/// Immutable once built; links forward it unchanged. The document is parsed
/// at construction so downstream stages can inspect the AST without
/// re-parsing.
#[derive(Debug, Clone)]
pub struct Operation {
    query: Document<'static, String>,
    operation_name: Option<String>,
    variables: Map<String, Value>,
    context: OperationContext,
}

impl Operation {
    /// Parse `source` into an operation with no name, variables, or headers.
    pub fn new(source: &str) -> Result<Self, LinkError> {
        let query = graphql_parser::parse_query::<String>(source)?.into_static();
        Ok(Self {
            query,
            operation_name: None,
            variables: Map::new(),
            context: OperationContext::default(),
        })
    }

    /// Select which definition to execute in a multi-definition document.
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert_header(name, value);
        self
    }

    pub fn query(&self) -> &Document<'static, String> {
        &self.query
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    pub fn context(&self) -> &OperationContext {
        &self.context
    }

    /// The operation definition this operation executes.
    ///
    /// With a name set, looks up the matching named definition. Without one,
    /// resolves only when the document contains exactly one operation
    /// definition; an ambiguous document yields `None`.
    pub fn operation_ast(&self) -> Option<&OperationDefinition<'static, String>> {
        let mut unnamed_match = None;
        for definition in &self.query.definitions {
            let Definition::Operation(op) = definition else {
                continue;
            };
            match self.operation_name.as_deref() {
                Some(wanted) => {
                    if definition_name(op) == Some(wanted) {
                        return Some(op);
                    }
                }
                None => {
                    if unnamed_match.is_some() {
                        return None; // ambiguous
                    }
                    unnamed_match = Some(op);
                }
            }
        }
        unnamed_match
    }

    /// Kind of the resolved operation definition, if resolvable.
    pub fn kind(&self) -> Option<OperationKind> {
        self.operation_ast().map(OperationKind::of)
    }
}

fn definition_name<'a>(op: &'a OperationDefinition<'static, String>) -> Option<&'a str> {
    match op {
        OperationDefinition::SelectionSet(_) => None,
        OperationDefinition::Query(q) => q.name.as_deref(),
        OperationDefinition::Mutation(m) => m.name.as_deref(),
        OperationDefinition::Subscription(s) => s.name.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_query_resolves() {
        let op = Operation::new("query GetUser { user { name } }").unwrap();
        assert_eq!(op.kind(), Some(OperationKind::Query));
    }

    #[test]
    fn test_anonymous_selection_set_is_a_query() {
        let op = Operation::new("{ hero { name } }").unwrap();
        assert_eq!(op.kind(), Some(OperationKind::Query));
        assert!(op.operation_name().is_none());
    }

    #[test]
    fn test_mutation_and_subscription_kinds() {
        let m = Operation::new("mutation AddUser { addUser { id } }").unwrap();
        assert_eq!(m.kind(), Some(OperationKind::Mutation));

        let s = Operation::new("subscription OnUser { userChanged { id } }").unwrap();
        assert_eq!(s.kind(), Some(OperationKind::Subscription));
    }

    #[test]
    fn test_name_disambiguates_multi_definition_document() {
        let source = "query A { a } mutation B { b }";
        let op = Operation::new(source).unwrap().with_operation_name("B");
        assert_eq!(op.kind(), Some(OperationKind::Mutation));
    }

    #[test]
    fn test_ambiguous_document_does_not_resolve() {
        let op = Operation::new("query A { a } query B { b }").unwrap();
        assert_eq!(op.kind(), None);
    }

    #[test]
    fn test_unknown_operation_name_does_not_resolve() {
        let op = Operation::new("query A { a }").unwrap().with_operation_name("C");
        assert_eq!(op.kind(), None);
    }

    #[test]
    fn test_fragments_are_skipped_during_resolution() {
        let source = "fragment F on User { name } query A { user { ...F } }";
        let op = Operation::new(source).unwrap();
        assert_eq!(op.kind(), Some(OperationKind::Query));
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        let err = Operation::new("query {{{").unwrap_err();
        assert!(matches!(err, LinkError::InvalidQuery(_)));
    }

    #[test]
    fn test_builder_accumulates_variables_and_headers() {
        let op = Operation::new("query GetUser { user { name } }")
            .unwrap()
            .with_operation_name("GetUser")
            .with_variable("id", json!("42"))
            .with_header("authorization", "Bearer token");
        assert_eq!(op.variables().get("id"), Some(&json!("42")));
        assert_eq!(
            op.context().headers().get("authorization").map(String::as_str),
            Some("Bearer token")
        );
    }
}
