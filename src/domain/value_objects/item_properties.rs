//! Loosely-typed item property bag
//!
//! Item data comes from the game system's `system` object, whose shape
//! varies between item types and system versions. Lookups are typed at the
//! call site instead of deserializing into a fixed struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemProperties(Map<String, Value>);

impl ItemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Boolean value of `key`, `None` when missing or not a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// String value of `key`, `None` when missing, not a string, or empty
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_lookups() {
        let props = ItemProperties::new()
            .with("major", true)
            .with("severity", "")
            .with("level", 3);

        assert_eq!(props.get_bool("major"), Some(true));
        assert_eq!(props.get_bool("level"), None);
        // Empty strings count as missing
        assert_eq!(props.get_str("severity"), None);
        assert_eq!(props.get_str("level"), None);
        assert_eq!(props.get_str("absent"), None);
    }

    #[test]
    fn test_deserializes_from_object() {
        let props: ItemProperties =
            serde_json::from_str(r#"{"description": "<p>Fast</p>", "major": false}"#)
                .expect("deserialization should succeed");
        assert_eq!(props.description(), Some("<p>Fast</p>"));
        assert_eq!(props.get_bool("major"), Some(false));
    }
}
