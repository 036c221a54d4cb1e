//! Testimonial display items.
//!
//! Items arrive from callers as already-fetched data that may still be
//! incomplete. Every field is optional; nothing here ever fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One testimonial entry, addressed purely by its position in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, alias = "name")]
    pub author_name: Option<String>,
    /// Expected 0-5 but not validated
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub initial: Option<char>,
}

impl DisplayItem {
    pub fn new(comment: impl Into<String>, author_name: impl Into<String>, rating: i64) -> Self {
        Self {
            comment: Some(comment.into()),
            author_name: Some(author_name.into()),
            rating: Some(rating),
            initial: None,
        }
    }

    /// Lenient conversion from an arbitrary JSON value.
    ///
    /// Non-objects become an empty item and wrongly typed fields are dropped.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            comment: text("comment"),
            author_name: text("authorName").or_else(|| text("name")),
            rating: obj.get("rating").and_then(Value::as_i64),
            initial: obj
                .get("initial")
                .and_then(Value::as_str)
                .and_then(|s| s.chars().next()),
        }
    }

    /// Lenient conversion of a JSON list. Anything that is not an array
    /// (including `null`) is treated as an empty list.
    pub fn list_from_json(value: &Value) -> Vec<Self> {
        value
            .as_array()
            .map(|entries| entries.iter().map(Self::from_json).collect())
            .unwrap_or_default()
    }
}

/// Treat absent input as an empty sequence.
pub fn normalize_items(items: Option<Vec<DisplayItem>>) -> Vec<DisplayItem> {
    items.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_input_is_empty() {
        assert!(DisplayItem::list_from_json(&Value::Null).is_empty());
        assert!(DisplayItem::list_from_json(&json!({"comment": "hi"})).is_empty());
        assert!(DisplayItem::list_from_json(&json!("testimonials")).is_empty());
    }

    #[test]
    fn wrong_types_degrade_to_absent() {
        let items = DisplayItem::list_from_json(&json!([
            {"comment": 42, "name": "Asha", "rating": "five"},
            "not an object",
        ]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].comment, None);
        assert_eq!(items[0].author_name.as_deref(), Some("Asha"));
        assert_eq!(items[0].rating, None);
        assert_eq!(items[1], DisplayItem::default());
    }

    #[test]
    fn author_name_preferred_over_name() {
        let item = DisplayItem::from_json(&json!({"authorName": "Ravi", "name": "R", "initial": "rk"}));
        assert_eq!(item.author_name.as_deref(), Some("Ravi"));
        assert_eq!(item.initial, Some('r'));
    }

    #[test]
    fn serde_accepts_name_alias() {
        let item: DisplayItem =
            serde_json::from_value(json!({"comment": "Fresh!", "name": "Meera", "rating": 4})).unwrap();
        assert_eq!(item, DisplayItem::new("Fresh!", "Meera", 4));
    }

    #[test]
    fn absent_list_normalizes_to_empty() {
        assert!(normalize_items(None).is_empty());
        assert_eq!(normalize_items(Some(vec![DisplayItem::default()])).len(), 1);
    }
}
