use serde_json::{Map, Value};

use crate::data::{
    error::{ConfigError, json_type_name},
    node::ConfigNode,
};

/// A menu: an ordered list of uniquely-keyed child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    /// Menu label; `None` only for the tree root.
    pub key: Option<String>,
    /// Child nodes in source order.
    pub items: Vec<ConfigNode>,
}

impl Menu {
    /// Parse a menu from a JSON object.
    ///
    /// Child order follows the object's key order. Duplicate keys never
    /// reach this constructor: the JSON decoder resolves them first, keeping
    /// the last value under the first occurrence's position.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidMenuData`] when `value` is not an object;
    /// child parse errors propagate unchanged.
    pub fn from_object(key: Option<&str>, value: &Value) -> Result<Self, ConfigError> {
        let Value::Object(entries) = value else {
            return Err(ConfigError::InvalidMenuData {
                key: key.unwrap_or("<root>").to_string(),
                actual: json_type_name(value),
            });
        };
        let mut items = Vec::with_capacity(entries.len());
        for (item_key, item_value) in entries {
            items.push(ConfigNode::from_value(item_key, item_value)?);
        }
        Ok(Self {
            key: key.map(str::to_string),
            items,
        })
    }

    /// Look up a direct child by its key.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.items.iter().find(|item| item.key() == Some(key))
    }

    /// Serialize the menu back into a JSON object, children in order.
    pub fn as_json(&self) -> Value {
        let mut content = Map::new();
        for item in &self.items {
            // only the root menu is unkeyed, and it is never an item
            let key = item.key().unwrap_or_default().to_string();
            content.insert(key, item.as_json());
        }
        Value::Object(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_keep_source_order() {
        let menu = Menu::from_object(None, &json!({"B": "cmd1", "A": "cmd2"})).unwrap();
        let keys: Vec<_> = menu.items.iter().map(|i| i.key().unwrap()).collect();
        assert_eq!(keys, ["B", "A"]);
        assert_eq!(menu.as_json(), json!({"B": "cmd1", "A": "cmd2"}));
    }

    #[test]
    fn duplicate_keys_last_value_wins_at_decode() {
        let value: Value = serde_json::from_str(r#"{"A": "one", "B": "x", "A": "two"}"#).unwrap();
        let menu = Menu::from_object(None, &value).unwrap();
        assert_eq!(menu.items.len(), 2);
        let keys: Vec<_> = menu.items.iter().map(|i| i.key().unwrap()).collect();
        assert_eq!(keys, ["A", "B"]);
        match menu.get("A").unwrap() {
            ConfigNode::Command(entry) => assert_eq!(entry.command, "two"),
            other => panic!("expected command entry, got {other:?}"),
        }
    }

    #[test]
    fn get_finds_children_by_key() {
        let menu = Menu::from_object(Some("Main"), &json!({"Run": "ls", "Sub": {}})).unwrap();
        assert!(matches!(menu.get("Run"), Some(ConfigNode::Command(_))));
        assert!(matches!(menu.get("Sub"), Some(ConfigNode::Menu(_))));
        assert!(menu.get("Missing").is_none());
    }

    #[test]
    fn non_object_data_is_rejected() {
        let err = Menu::from_object(Some("M"), &json!(["not", "a", "menu"])).unwrap_err();
        match err {
            ConfigError::InvalidMenuData { key, actual } => {
                assert_eq!(key, "M");
                assert_eq!(actual, "array");
            }
            other => panic!("expected InvalidMenuData, got {other:?}"),
        }
    }

    #[test]
    fn child_errors_abort_the_whole_parse() {
        let err = Menu::from_object(None, &json!({"Good": "ls", "Bad": 5})).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNodeType { .. }));
    }
}
