use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::data::{
    error::{ConfigError, json_type_name},
    menu::Menu,
    text::TextBlock,
};

/// Case-insensitive suffix marking a command the executor should pause after.
const READ_SUFFIX: &str = "&read";

/// One entry in the menu tree.
///
/// The node kind is picked by the shape of the JSON value it was parsed
/// from: strings are command entries, arrays are text blocks, objects are
/// submenus. Nodes are immutable once constructed; the tree is replaced
/// wholesale on reload.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    /// An executable command line.
    Command(CommandEntry),
    /// A block of renderable text lines.
    Text(TextBlock),
    /// A nested submenu.
    Menu(Menu),
}

impl ConfigNode {
    /// Parse a node spec from a JSON value.
    ///
    /// This is the single dispatch point for node kinds; any JSON type
    /// other than string, array or object is rejected.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidNodeType`] for numbers, booleans and null,
    /// naming the offending key; nested shape errors from the child
    /// constructors otherwise.
    pub fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::String(raw) => Ok(ConfigNode::Command(CommandEntry::new(key, raw))),
            Value::Array(_) => Ok(ConfigNode::Text(TextBlock::from_value(key, value)?)),
            Value::Object(_) => Ok(ConfigNode::Menu(Menu::from_object(Some(key), value)?)),
            other => Err(ConfigError::InvalidNodeType {
                key: key.to_string(),
                actual: json_type_name(other),
            }),
        }
    }

    /// The node's menu label.
    ///
    /// `None` only for the unkeyed root menu.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigNode::Command(entry) => Some(&entry.key),
            ConfigNode::Text(block) => Some(&block.key),
            ConfigNode::Menu(menu) => menu.key.as_deref(),
        }
    }

    /// Serialize the node back into the JSON shape it was parsed from.
    pub fn as_json(&self) -> Value {
        match self {
            ConfigNode::Command(entry) => entry.as_json(),
            ConfigNode::Text(block) => block.as_json(),
            ConfigNode::Menu(menu) => menu.as_json(),
        }
    }

    /// Serialize the node to pretty-printed JSON text.
    pub fn to_json_str(&self, indent: usize) -> Result<String, ConfigError> {
        to_json_str(&self.as_json(), indent)
    }
}

/// An executable command line plus a "wait for key press" flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Menu label.
    pub key: String,
    /// Command line, with any `&read` suffix stripped.
    pub command: String,
    /// Whether the executor should wait for a key press after running.
    pub wait_for_key_press: bool,
}

impl CommandEntry {
    /// Build an entry from the raw command string.
    ///
    /// A trailing `&read` (case-insensitive, exactly the last five
    /// characters) sets the wait flag and is stripped from the stored
    /// command; the rest of the string keeps its original casing.
    pub fn new(key: &str, raw: &str) -> Self {
        let (command, wait_for_key_press) = match raw.len().checked_sub(READ_SUFFIX.len()) {
            Some(cut) if raw.is_char_boundary(cut) && raw[cut..].eq_ignore_ascii_case(READ_SUFFIX) => {
                (raw[..cut].to_string(), true)
            }
            _ => (raw.to_string(), false),
        };
        Self {
            key: key.to_string(),
            command,
            wait_for_key_press,
        }
    }

    /// Serialize back to the raw command string.
    ///
    /// The `&read` suffix is re-appended in lowercase when the wait flag is
    /// set; the original casing of a stripped suffix is not preserved.
    pub fn as_json(&self) -> Value {
        if self.wait_for_key_press {
            Value::String(format!("{}{READ_SUFFIX}", self.command))
        } else {
            Value::String(self.command.clone())
        }
    }
}

/// Serialize a JSON value to text with the given indent width in spaces.
pub fn to_json_str(value: &Value, indent: usize) -> Result<String, ConfigError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
}
