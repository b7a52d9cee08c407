//! Zapier platform adapter
//!
//! Produces a Zapier developer platform definition. Only the trigger is
//! mapped: steps are not modeled as Zapier actions in this version, so
//! `searches` and `creates` stay empty.

use blueprint_dsl::Blueprint;
use serde_json::{Map, Value, json};

use crate::Adapter;

/// Converts blueprints into Zapier platform definitions
#[derive(Debug, Default)]
pub struct ZapierAdapter;

impl Adapter for ZapierAdapter {
    fn runtime(&self) -> &'static str {
        "zapier"
    }

    fn convert(&self, blueprint: &Blueprint) -> Value {
        tracing::debug!("converting '{}' to zapier format", blueprint.name);

        let event = blueprint.trigger.event.as_deref().unwrap_or("trigger");

        let mut triggers = Map::new();
        triggers.insert(
            event.to_string(),
            json!({
                "operation": {
                    "perform": {
                        "url": format!("https://example.com/trigger/{event}"),
                        "method": "POST"
                    }
                }
            }),
        );

        json!({
            "name": blueprint.name,
            "version": blueprint.version,
            "triggers": triggers,
            "searches": {},
            "creates": {}
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trigger_keyed_by_event() {
        let blueprint = Blueprint::from_value(&json!({
            "name": "BP One",
            "version": "1.0.0",
            "trigger": { "app": "crm", "event": "new_record" }
        }))
        .unwrap();

        let doc = ZapierAdapter.convert(&blueprint);
        assert_eq!(doc["name"], "BP One");
        assert_eq!(doc["version"], "1.0.0");
        let perform = &doc["triggers"]["new_record"]["operation"]["perform"];
        assert_eq!(perform["url"], "https://example.com/trigger/new_record");
        assert_eq!(perform["method"], "POST");
    }

    #[test]
    fn test_absent_event_defaults_to_trigger() {
        let blueprint = Blueprint::from_value(&json!({})).unwrap();

        let doc = ZapierAdapter.convert(&blueprint);
        let triggers = doc["triggers"].as_object().unwrap();
        assert_eq!(triggers.len(), 1);
        assert!(triggers.contains_key("trigger"));
        assert_eq!(
            doc["triggers"]["trigger"]["operation"]["perform"]["url"],
            "https://example.com/trigger/trigger"
        );
    }

    #[test]
    fn test_searches_and_creates_stay_empty() {
        let blueprint = Blueprint::from_value(&json!({
            "steps": [{ "id": "s1", "app": "slack", "action": "send" }]
        }))
        .unwrap();

        let doc = ZapierAdapter.convert(&blueprint);
        assert_eq!(doc["searches"], json!({}));
        assert_eq!(doc["creates"], json!({}));
    }
}
