//! Standalone YAML parsing for companion metadata and data files.
//!
//! Empty or whitespace-only content is treated as "nothing declared" and
//! yields an empty result. Anything else must parse and must have the root
//! kind the caller asked for; there is no coercion between kinds.

use serde_yaml::{Mapping, Value};

use crate::error::{ParseError, kind_name};

/// Parse YAML content whose root must be a mapping.
///
/// Used for `<id>.yaml` override files and for the embedded front matter block.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed YAML and
/// [`ParseError::Shape`] if the root is not a mapping.
pub fn parse_yaml_map(content: &str) -> Result<Mapping, ParseError> {
    match parse_root(content)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => Ok(map),
        other => Err(ParseError::Shape {
            expected: "a mapping",
            found: kind_name(&other),
        }),
    }
}

/// Parse YAML content whose root must be a sequence of mappings.
///
/// Used for `<id>.data.yaml` record files. Order is preserved.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed YAML and
/// [`ParseError::Shape`] if the root is not a sequence or an element is not
/// a mapping.
pub fn parse_records(content: &str) -> Result<Vec<Mapping>, ParseError> {
    let items = match parse_root(content)? {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(items) => items,
        other => {
            return Err(ParseError::Shape {
                expected: "a sequence of mappings",
                found: kind_name(&other),
            });
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Mapping(map) => Ok(map),
            other => Err(ParseError::Shape {
                expected: "a mapping record",
                found: kind_name(&other),
            }),
        })
        .collect()
}

fn parse_root(content: &str) -> Result<Value, ParseError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(trimmed)?)
}
