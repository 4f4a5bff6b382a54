//! Log line assembly.
//!
//! # Responsibilities
//! - Build the `>>` request line: badge, name, structured payload
//! - Build the `<<` response line: badge, warning, name, size/time suffixes
//! - Decide when variables/headers are worth including at all
//!
//! # Design Decisions
//! - One emptiness policy for every call site: only a keyed mapping with at
//!   least one key is non-empty; truthy scalars count as empty
//! - Payloads are pretty-printed JSON so multi-line queries stay readable

use std::time::Duration;

use serde_json::{Map, Value};

use crate::graphql::{FetchResult, Operation, OperationKind};
use crate::options::LoggerOptions;
use crate::style;

/// Emptiness predicate governing variables/headers suppression.
///
/// A value is non-empty only when it is a keyed mapping (object, or array
/// viewed as index-keyed) holding at least one entry. Everything else —
/// null, booleans, numbers, strings — is empty and gets suppressed.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}

/// Serialized size as `N.N kB` (bytes / 1024, one decimal).
pub fn kilobytes(bytes: usize) -> String {
    format!("{:.1} kB", bytes as f64 / 1024.0)
}

fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("<anonymous>")
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// The `>>` line emitted before an operation is forwarded.
///
/// `kind` is the already-resolved kind of the operation; callers log only
/// after resolution succeeds.
pub fn request_line(
    operation: &Operation,
    kind: OperationKind,
    id: u64,
    options: &LoggerOptions,
) -> String {
    let background = options.colors.pair(kind).map(|pair| pair.request);
    let badge = style::badge(&format!(" >> {kind} #{id} "), background);
    let name = style::bold(display_name(operation.operation_name()));

    let mut payload = Map::new();
    let query = operation
        .operation_ast()
        .map(|ast| ast.to_string())
        .unwrap_or_else(|| operation.query().to_string());
    payload.insert("query".to_string(), Value::String(query));

    let variables = Value::Object(operation.variables().clone());
    if !is_empty(&variables) {
        payload.insert("variables".to_string(), variables);
    }

    let headers: Value = operation
        .context()
        .headers()
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect::<Map<String, Value>>()
        .into();
    if !is_empty(&headers) {
        payload.insert("headers".to_string(), headers);
    }

    let mut line = format!("{badge} {name}\n{}", pretty(&Value::Object(payload)));
    if options.multiline {
        line.push('\n');
    }
    line
}

/// The `<<` line emitted for each result an operation produces.
///
/// `elapsed` is always supplied; the `response_time` option decides here
/// whether it shows up in the line.
pub fn response_line(
    name: Option<&str>,
    kind: OperationKind,
    id: u64,
    result: &FetchResult,
    elapsed: Duration,
    options: &LoggerOptions,
) -> String {
    let background = options.colors.pair(kind).map(|pair| pair.response);
    let badge = style::badge(&format!(" << {kind} #{id} "), background);

    let success = result.is_success();
    let warning = if success { "" } else { "⚠️ " };
    let name = if success {
        style::success(display_name(name))
    } else {
        style::failure(display_name(name))
    };

    let mut line = format!("{badge} {warning}{name}");

    if options.response_size {
        let bytes = serde_json::to_vec(result).map(|body| body.len()).unwrap_or(0);
        line.push(' ');
        line.push_str(&style::dim(&kilobytes(bytes)));
    }

    if options.response_time {
        line.push(' ');
        line.push_str(&style::dim(&format!("{} ms", elapsed.as_millis())));
    }

    let raw = serde_json::to_value(result).unwrap_or(Value::Null);
    line.push('\n');
    line.push_str(&pretty(&raw));
    if options.multiline {
        line.push('\n');
    }
    line
}
