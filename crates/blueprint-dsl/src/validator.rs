//! Blueprint schema validation
//!
//! Thin wrapper over the JSON Schema engine: the embedded schema is
//! compiled once and applied to arbitrary instances, collecting every
//! violation in a single pass rather than stopping at the first.

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, JSONSchema, ValidationError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema;

static COMPILED: Lazy<JSONSchema> = Lazy::new(|| {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema::document())
        .expect("embedded schema compiles")
});

/// Result of validating a blueprint instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when the instance satisfies the schema
    pub ok: bool,

    /// Human-readable error messages, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,

    /// Warning messages, reserved; empty list on failure, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Validate an arbitrary JSON instance against the blueprint schema.
///
/// Pure and exhaustive: the instance is never mutated, and all applicable
/// errors across the whole document are reported at once. Each message is
/// normalized to `"<field-path>: <message>"`; a required property missing
/// at the top level uses the property name as the path, and errors with no
/// path at all are emitted bare.
pub fn validate_dsl(instance: &Value) -> ValidationResult {
    match COMPILED.validate(instance) {
        Ok(()) => ValidationResult {
            ok: true,
            errors: None,
            warnings: None,
        },
        Err(errors) => ValidationResult {
            ok: false,
            errors: Some(errors.map(|e| format_error(&e)).collect()),
            warnings: Some(Vec::new()),
        },
    }
}

fn format_error(error: &ValidationError<'_>) -> String {
    let pointer = error.instance_path.to_string();
    let path = pointer.strip_prefix('/').unwrap_or(&pointer);
    if !path.is_empty() {
        return format!("{}: {}", path, error);
    }
    if let ValidationErrorKind::Required { property } = &error.kind
        && let Some(name) = property.as_str()
    {
        return format!("{}: {}", name, error);
    }
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn base_blueprint() -> Value {
        json!({
            "id": "bp-1",
            "name": "Test Blueprint",
            "version": "0.1.0",
            "apps": ["zapier"],
            "scopes": ["crm"],
            "trigger": { "app": "zapier", "event": "new_record" },
            "retry": { "attempts": 3, "delayMs": 1000 },
            "steps": [{
                "id": "s1",
                "app": "slack",
                "action": "send_message",
                "transforms": [{ "field": "text", "operation": "uppercase" }]
            }]
        })
    }

    #[test]
    fn test_valid_blueprint_passes() {
        let result = validate_dsl(&base_blueprint());
        assert!(result.ok);
        assert!(result.errors.is_none());
        assert!(result.warnings.is_none());
    }

    #[rstest]
    #[case("id")]
    #[case("name")]
    #[case("version")]
    #[case("apps")]
    #[case("trigger")]
    #[case("steps")]
    fn test_missing_required_field_named(#[case] field: &str) {
        let mut instance = base_blueprint();
        instance.as_object_mut().unwrap().remove(field);
        let result = validate_dsl(&instance);
        assert!(!result.ok);
        let errors = result.errors.unwrap();
        assert!(
            errors.iter().any(|e| e.starts_with(&format!("{field}:"))),
            "{errors:?}"
        );
    }

    #[test]
    fn test_partial_retry_mentions_delay_ms() {
        let mut instance = base_blueprint();
        instance["retry"] = json!({ "attempts": 3 });
        let result = validate_dsl(&instance);
        assert!(!result.ok);
        let errors = result.errors.unwrap();
        assert!(errors.iter().any(|e| e.contains("delayMs")), "{errors:?}");
        assert!(errors.iter().any(|e| e.starts_with("retry:")), "{errors:?}");
    }

    #[test]
    fn test_nested_paths_keep_inner_segments() {
        let mut instance = base_blueprint();
        instance["steps"][0].as_object_mut().unwrap().remove("action");
        let result = validate_dsl(&instance);
        let errors = result.errors.unwrap();
        assert!(
            errors.iter().any(|e| e.starts_with("steps/0:")),
            "{errors:?}"
        );
    }

    #[test]
    fn test_errors_collected_exhaustively() {
        let mut instance = base_blueprint();
        instance["name"] = json!("ab");
        instance["version"] = json!("not-semver");
        let result = validate_dsl(&instance);
        let errors = result.errors.unwrap();
        assert!(errors.iter().any(|e| e.starts_with("name:")), "{errors:?}");
        assert!(
            errors.iter().any(|e| e.starts_with("version:")),
            "{errors:?}"
        );
    }

    #[test]
    fn test_failure_has_empty_warnings() {
        let result = validate_dsl(&json!({}));
        assert!(!result.ok);
        assert_eq!(result.warnings, Some(vec![]));
    }

    #[test]
    fn test_success_serializes_without_optional_fields() {
        let value = serde_json::to_value(validate_dsl(&base_blueprint())).unwrap();
        assert_eq!(value, json!({ "ok": true }));
    }

    #[test]
    fn test_non_object_instance_reported_bare() {
        let result = validate_dsl(&json!("not a blueprint"));
        assert!(!result.ok);
        let errors = result.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].contains(": is"), "{errors:?}");
    }
}
