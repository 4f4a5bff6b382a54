//! Operation results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Position of an error within the query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// A GraphQL execution error, per the standard response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }
}

/// The outcome of a dispatched operation.
///
/// Owned by whichever stage produced it; the logging link passes it through
/// untouched and only reads it for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl FetchResult {
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::default()
        }
    }

    /// Success means the error list is absent or empty.
    pub fn is_success(&self) -> bool {
        self.errors.as_ref().map_or(true, |errors| errors.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_classification() {
        assert!(FetchResult::default().is_success());
        assert!(FetchResult::from_data(json!({"user": null})).is_success());
        assert!(FetchResult {
            errors: Some(vec![]),
            ..FetchResult::default()
        }
        .is_success());
        assert!(!FetchResult::from_errors(vec![GraphQLError::new("boom")]).is_success());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let json = serde_json::to_string(&FetchResult::from_data(json!({"ok": true}))).unwrap();
        assert_eq!(json, r#"{"data":{"ok":true}}"#);
    }

    #[test]
    fn test_standard_response_shape_round_trips() {
        let raw = r#"{"data":null,"errors":[{"message":"not found","path":["user"],"locations":[{"line":1,"column":9}]}]}"#;
        let result: FetchResult = serde_json::from_str(raw).unwrap();
        assert!(!result.is_success());
        let errors = result.errors.as_ref().unwrap();
        assert_eq!(errors[0].message, "not found");
        assert_eq!(errors[0].locations.as_ref().unwrap()[0].line, 1);
    }
}
