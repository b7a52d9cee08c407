//! Make (Integromat) scenario adapter
//!
//! Produces a Make scenario: one flow entry synthesized from the trigger
//! followed by one entry per step, with the designer layout metadata the
//! Make editor expects. The layout has no semantic effect but must be
//! present for the scenario to import cleanly.

use blueprint_dsl::Blueprint;
use serde_json::{Value, json};

use crate::Adapter;

/// Converts blueprints into Make scenario documents
#[derive(Debug, Default)]
pub struct MakeAdapter;

impl Adapter for MakeAdapter {
    fn runtime(&self) -> &'static str {
        "make"
    }

    fn convert(&self, blueprint: &Blueprint) -> Value {
        tracing::debug!("converting '{}' to make scenario", blueprint.name);

        let trigger_app = blueprint.trigger.app.as_deref().unwrap_or("webhook");
        let trigger_event = blueprint.trigger.event.as_deref().unwrap_or("trigger");

        let mut flow = vec![json!({
            "id": 1,
            "module": format!("{trigger_app}:{trigger_event}"),
            "version": 1,
            "parameters": {},
            "mapper": {},
            "metadata": {
                "designer": { "x": 0, "y": 0 },
                "restore": {},
                "expect": [{
                    "name": "event",
                    "type": "text",
                    "label": "Event Type",
                    "required": false
                }]
            }
        })];

        for (index, step) in blueprint.steps.iter().enumerate() {
            let app = step.app.as_deref().unwrap_or("tools");
            let action = step.action.as_deref().unwrap_or("set-variable");

            flow.push(json!({
                "id": index + 2,
                "module": format!("{app}:{action}"),
                "version": 1,
                "parameters": step.inputs,
                "mapper": step.transforms,
                "metadata": {
                    "designer": { "x": 0, "y": (index + 1) * 150 },
                    "restore": {}
                }
            }));
        }

        json!({
            "name": blueprint.name,
            "flow": flow,
            "metadata": {
                "version": 1,
                "scenario": { "roundtrips": 1, "maxErrors": 3 }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_steps_yield_three_modules() {
        let blueprint = Blueprint::from_value(&json!({
            "name": "Two Steps",
            "trigger": { "app": "crm", "event": "new_lead" },
            "steps": [
                { "id": "s1", "app": "slack", "action": "send_message" },
                { "id": "s2", "app": "sheets", "action": "append_row" }
            ]
        }))
        .unwrap();

        let doc = MakeAdapter.convert(&blueprint);
        let flow = doc["flow"].as_array().unwrap();
        assert_eq!(flow.len(), 3);
        assert_eq!(flow[0]["id"], 1);
        assert_eq!(flow[1]["id"], 2);
        assert_eq!(flow[2]["id"], 3);
        assert_eq!(flow[0]["module"], "crm:new_lead");
        assert_eq!(flow[1]["module"], "slack:send_message");
        assert_eq!(flow[2]["module"], "sheets:append_row");
    }

    #[test]
    fn test_trigger_and_step_defaults() {
        let blueprint = Blueprint::from_value(&json!({ "steps": [{}] })).unwrap();

        let doc = MakeAdapter.convert(&blueprint);
        assert_eq!(doc["name"], "automation-blueprint");
        assert_eq!(doc["flow"][0]["module"], "webhook:trigger");
        assert_eq!(doc["flow"][1]["module"], "tools:set-variable");
    }

    #[test]
    fn test_designer_offsets_grow_per_step() {
        let blueprint = Blueprint::from_value(&json!({
            "steps": [
                { "id": "a", "app": "x", "action": "y" },
                { "id": "b", "app": "x", "action": "y" }
            ]
        }))
        .unwrap();

        let doc = MakeAdapter.convert(&blueprint);
        assert_eq!(doc["flow"][0]["metadata"]["designer"], json!({ "x": 0, "y": 0 }));
        assert_eq!(doc["flow"][1]["metadata"]["designer"], json!({ "x": 0, "y": 150 }));
        assert_eq!(doc["flow"][2]["metadata"]["designer"], json!({ "x": 0, "y": 300 }));
    }

    #[test]
    fn test_inputs_and_transforms_copied() {
        let blueprint = Blueprint::from_value(&json!({
            "steps": [{
                "id": "s1",
                "app": "slack",
                "action": "send_message",
                "inputs": { "channel": "#general", "text": "hi" },
                "transforms": [{ "field": "text", "operation": "uppercase" }]
            }]
        }))
        .unwrap();

        let doc = MakeAdapter.convert(&blueprint);
        assert_eq!(
            doc["flow"][1]["parameters"],
            json!({ "channel": "#general", "text": "hi" })
        );
        assert_eq!(
            doc["flow"][1]["mapper"],
            json!([{ "field": "text", "operation": "uppercase" }])
        );
    }

    #[test]
    fn test_scenario_metadata_fixed() {
        let blueprint = Blueprint::from_value(&json!({})).unwrap();

        let doc = MakeAdapter.convert(&blueprint);
        assert_eq!(
            doc["metadata"],
            json!({ "version": 1, "scenario": { "roundtrips": 1, "maxErrors": 3 } })
        );
        assert_eq!(
            doc["flow"][0]["metadata"]["expect"],
            json!([{ "name": "event", "type": "text", "label": "Event Type", "required": false }])
        );
    }
}
