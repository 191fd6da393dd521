use serde_json::Value;
use thiserror::Error;

/// Errors raised while parsing, serializing or persisting a menu tree.
///
/// All variants surface synchronously at the point of parse or save and
/// abort the whole operation; no partial tree is ever produced. Command
/// execution is deliberately absent here: runner output is opaque text and
/// never becomes a structured error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A node value had a JSON type that maps to no node kind.
    #[error("invalid node type at {key:?}: expected string, array or object, got {actual}")]
    InvalidNodeType { key: String, actual: &'static str },

    /// A menu was built from something other than a JSON object.
    #[error("invalid menu data at {key:?}: expected object, got {actual}")]
    InvalidMenuData { key: String, actual: &'static str },

    /// A text block or one of its lines had the wrong JSON shape.
    #[error(
        "invalid text block data at {key:?}: expected string or object of strings, got {actual}"
    )]
    InvalidTextBlockData { key: String, actual: &'static str },

    /// The top-level JSON value of a menu file was not an object.
    #[error("invalid root type: expected object, got {actual}")]
    InvalidRootType { actual: &'static str },

    /// Save was attempted on a tree with no source path.
    #[error("no source path specified")]
    NoSourcePath,

    /// The input text was not valid JSON.
    #[error("malformed json: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Reading or writing the source file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
