//! Copied shape snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A copied shape, stored as an opaque JSON payload.
///
/// The rendering engine defines what a shape looks like; this crate only
/// carries the data between copy and paste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeSnapshot(Value);

impl ShapeSnapshot {
    pub fn new(data: Value) -> Self {
        Self(data)
    }

    /// The `"id"` field of the payload, if it has a string one.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn data(&self) -> &Value {
        &self.0
    }

    pub fn into_data(self) -> Value {
        self.0
    }
}

impl From<Value> for ShapeSnapshot {
    fn from(data: Value) -> Self {
        Self(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id() {
        let snapshot = ShapeSnapshot::new(json!({"id": "sh1", "type": "rect"}));
        assert_eq!(snapshot.id(), Some("sh1"));

        let anonymous = ShapeSnapshot::new(json!({"id": 4}));
        assert_eq!(anonymous.id(), None);
    }

    #[test]
    fn test_payload_is_passed_through() {
        let data = json!([1, "two", {"three": null}]);
        let snapshot = ShapeSnapshot::from(data.clone());

        assert_eq!(serde_json::to_value(&snapshot).unwrap(), data);
        assert_eq!(snapshot.into_data(), data);
    }
}
