//! Logger configuration.
//!
//! All types derive Serde traits so options can be loaded from config files;
//! missing fields fall back to the documented defaults. The snapshot is fixed
//! for the lifetime of a logger instance.

use serde::{Deserialize, Serialize};

use crate::graphql::OperationKind;
use crate::style::Rgb;

/// Default query badge colors (request/response).
pub const QUERY_COLORS: ColorPair = ColorPair {
    request: Rgb::new(0xE1, 0x7E, 0x00),
    response: Rgb::new(0xA6, 0x5D, 0x00),
};

/// Default mutation badge colors (request/response).
pub const MUTATION_COLORS: ColorPair = ColorPair {
    request: Rgb::new(0xE1, 0x00, 0x98),
    response: Rgb::new(0xA5, 0x00, 0x6F),
};

/// Background colors for the request and response badge of one operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub request: Rgb,
    pub response: Rgb,
}

/// Badge colors per operation kind.
///
/// Subscriptions have no entry: subscription operations are never logged, so
/// styling for them would be unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindColors {
    pub query: ColorPair,
    pub mutation: ColorPair,
}

impl Default for KindColors {
    fn default() -> Self {
        Self {
            query: QUERY_COLORS,
            mutation: MUTATION_COLORS,
        }
    }
}

impl KindColors {
    /// Color pair for the given kind, if that kind is ever logged.
    pub fn pair(&self, kind: OperationKind) -> Option<ColorPair> {
        match kind {
            OperationKind::Query => Some(self.query),
            OperationKind::Mutation => Some(self.mutation),
            OperationKind::Subscription => None,
        }
    }
}

/// Configuration snapshot for [`ConsoleLoggerLink`](crate::ConsoleLoggerLink).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Badge colors by operation kind.
    pub colors: KindColors,

    /// Append the serialized response size in kB to response lines.
    pub response_size: bool,

    /// Append elapsed wall-clock milliseconds to response lines.
    pub response_time: bool,

    /// Append a trailing line break to each log line.
    pub multiline: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            colors: KindColors::default(),
            response_size: true,
            response_time: true,
            multiline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LoggerOptions::default();
        assert!(options.response_size);
        assert!(options.response_time);
        assert!(!options.multiline);
        assert_eq!(options.colors.query, QUERY_COLORS);
        assert_eq!(options.colors.mutation, MUTATION_COLORS);
    }

    #[test]
    fn test_subscription_has_no_colors() {
        let colors = KindColors::default();
        assert!(colors.pair(OperationKind::Subscription).is_none());
        assert_eq!(colors.pair(OperationKind::Query), Some(QUERY_COLORS));
    }

    #[test]
    fn test_partial_deserialization_falls_back_to_defaults() {
        let options: LoggerOptions = serde_json::from_str(r#"{"response_time": false}"#).unwrap();
        assert!(!options.response_time);
        assert!(options.response_size);
        assert_eq!(options.colors, KindColors::default());
    }

    #[test]
    fn test_color_override_from_hex_strings() {
        let options: LoggerOptions = serde_json::from_str(
            r##"{"colors": {"query": {"request": "#112233", "response": "#445566"}}}"##,
        )
        .unwrap();
        assert_eq!(options.colors.query.request, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(options.colors.query.response, Rgb::new(0x44, 0x55, 0x66));
        // Mutation stays at its default when only query is overridden.
        assert_eq!(options.colors.mutation, MUTATION_COLORS);
    }
}
