//! Codec configuration options.

use serde::{Deserialize, Serialize};

/// Output quoting rule for serialized fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuotingStyle {
    /// Wrap every field in quotes. Safe for commas, quotes, and line breaks
    /// without any detection.
    #[default]
    Always,
    /// Quote only fields that contain a comma, quote, or line break.
    Minimal,
}

/// Policy for data rows with more fields than the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExtraFieldPolicy {
    /// Drop fields beyond the header width and log a warning.
    #[default]
    Drop,
    /// Append synthesized `column_{n}` keys (1-based field position) for the
    /// extra fields.
    Extend,
}

/// Options for serializing records to CSV text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializeOptions {
    /// Quoting rule (default: quote every field).
    pub quoting: QuotingStyle,

    /// Header columns used when no schema is given and the first record has
    /// no keys. Explicit schema and record key order both take precedence.
    pub fallback_columns: Option<Vec<String>>,
}

impl SerializeOptions {
    /// Create serialize options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quoting rule.
    #[must_use]
    pub fn with_quoting(mut self, quoting: QuotingStyle) -> Self {
        self.quoting = quoting;
        self
    }

    /// Quote only fields that need it.
    #[must_use]
    pub fn minimal_quoting(mut self) -> Self {
        self.quoting = QuotingStyle::Minimal;
        self
    }

    /// Set the fallback header columns.
    #[must_use]
    pub fn with_fallback_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

/// Options for parsing CSV text into records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Extra-field handling (default: drop with a warning).
    pub extra_fields: ExtraFieldPolicy,
}

impl ParseOptions {
    /// Create parse options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extra-field policy.
    #[must_use]
    pub fn with_extra_fields(mut self, policy: ExtraFieldPolicy) -> Self {
        self.extra_fields = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(SerializeOptions::default().quoting, QuotingStyle::Always);
        assert_eq!(
            ParseOptions::default().extra_fields,
            ExtraFieldPolicy::Drop
        );
    }

    #[test]
    fn test_builders() {
        let opts = SerializeOptions::new()
            .minimal_quoting()
            .with_fallback_columns(["a", "b"]);
        assert_eq!(opts.quoting, QuotingStyle::Minimal);
        assert_eq!(
            opts.fallback_columns,
            Some(vec!["a".to_string(), "b".to_string()])
        );

        let opts = ParseOptions::new().with_extra_fields(ExtraFieldPolicy::Extend);
        assert_eq!(opts.extra_fields, ExtraFieldPolicy::Extend);
    }
}
