//! Error types for metadata parsing.

/// Error raised when a metadata block or companion file cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Malformed YAML syntax.
    #[error("Invalid YAML: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// Opening `---` delimiter without a matching closing line.
    #[error("Unterminated front matter: missing closing `---` delimiter")]
    Unterminated,

    /// Well-formed YAML whose root has the wrong kind.
    #[error("Unexpected YAML structure: expected {expected}, found {found}")]
    Shape {
        /// Kind the caller asked for (e.g. "a mapping").
        expected: &'static str,
        /// Kind actually found at the root.
        found: &'static str,
    },
}

/// Human-readable name of a YAML value's kind, for [`ParseError::Shape`].
pub(crate) fn kind_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
