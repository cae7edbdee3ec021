//! Convert untyped values to inline content
//!
//! Structured front ends (configuration files, API payloads) hand over
//! content as JSON. This module normalizes such values into the typed
//! content model, rejecting shapes that have no inline meaning.

use serde_json::Value;

use pandown_core::InlineContent;

use crate::{PandownError, Result};

/// Convert a JSON value to inline content.
///
/// `null` becomes absent content, a string becomes plain text, and an
/// array becomes a sequence with its elements converted recursively
/// (`null` elements are dropped). Any other value has no inline form and
/// fails with [`PandownError::TypeMismatch`].
pub fn inline_content_from_value(value: &Value) -> Result<Option<InlineContent>> {
    match value {
        Value::Null => Ok(None),

        Value::String(text) => Ok(Some(InlineContent::Text(text.clone()))),

        Value::Array(items) => {
            let mut elements = Vec::with_capacity(items.len());
            for item in items {
                if let Some(content) = inline_content_from_value(item)? {
                    elements.push(content);
                }
            }
            Ok(Some(InlineContent::Seq(elements)))
        }

        other => Err(PandownError::TypeMismatch(json_type_name(other))),
    }
}

/// Name of a JSON value's runtime type, for error reporting
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pandown_core::inline_content_to_string;
    use serde_json::json;

    #[test]
    fn test_null_is_absent() {
        let content = inline_content_from_value(&Value::Null).unwrap();
        assert_eq!(content, None);
        assert_eq!(inline_content_to_string(content.as_ref()), "");
    }

    #[test]
    fn test_string() {
        let content = inline_content_from_value(&json!("hello")).unwrap();
        assert_eq!(content, Some(InlineContent::Text("hello".to_string())));
    }

    #[test]
    fn test_array() {
        let content = inline_content_from_value(&json!(["a", "", "b"])).unwrap();
        assert_eq!(inline_content_to_string(content.as_ref()), "a b");
    }

    #[test]
    fn test_array_drops_null_elements() {
        let content = inline_content_from_value(&json!(["a", null, "b"])).unwrap();
        assert_eq!(
            content,
            Some(InlineContent::Seq(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn test_nested_array() {
        let content = inline_content_from_value(&json!(["a", ["b", "c"]])).unwrap();
        assert_eq!(inline_content_to_string(content.as_ref()), "a b c");
    }

    #[test]
    fn test_object_is_rejected() {
        let err = inline_content_from_value(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, PandownError::TypeMismatch("object")));
        assert_eq!(err.to_string(), "Could not process type: object");
    }

    #[test]
    fn test_number_is_rejected() {
        let err = inline_content_from_value(&json!(1)).unwrap_err();
        assert!(matches!(err, PandownError::TypeMismatch("number")));
    }

    #[test]
    fn test_boolean_is_rejected() {
        let err = inline_content_from_value(&json!(true)).unwrap_err();
        assert!(matches!(err, PandownError::TypeMismatch("boolean")));
    }

    #[test]
    fn test_nested_rejection_propagates() {
        let err = inline_content_from_value(&json!(["a", {"b": 2}])).unwrap_err();
        assert!(matches!(err, PandownError::TypeMismatch("object")));
    }
}
