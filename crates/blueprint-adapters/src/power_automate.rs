//! Power Automate workflow adapter
//!
//! Produces an Azure Logic Apps workflow definition. Steps fold into an
//! explicit sequential dependency chain via `runAfter`; each transform
//! becomes its own follow-on `Compose` action hanging off the owning step.

use blueprint_dsl::{Blueprint, Step};
use serde_json::{Map, Value, json};

use crate::Adapter;

const WORKFLOW_SCHEMA: &str = "https://schema.management.azure.com/providers/Microsoft.Logic/schemas/2016-06-01/workflowdefinition.json#";

/// Converts blueprints into Power Automate workflow definitions
#[derive(Debug, Default)]
pub struct PowerAutomateAdapter;

fn trigger_type(app: Option<&str>) -> &'static str {
    match app.unwrap_or("http") {
        "http" => "Request",
        "webhook" => "HttpWebhook",
        "recurrence" => "Recurrence",
        _ => "Request",
    }
}

fn action_type(step: &Step) -> &'static str {
    if step.app.as_deref() == Some("http") {
        "Http"
    } else if step.action.as_deref() == Some("compose") {
        "Compose"
    } else {
        "ApiConnection"
    }
}

fn action_name(step: &Step, index: usize) -> String {
    step.id.clone().unwrap_or_else(|| format!("Action_{index}"))
}

fn run_after(previous: Option<&str>) -> Value {
    let mut deps = Map::new();
    if let Some(name) = previous {
        deps.insert(name.to_string(), json!(["Succeeded"]));
    }
    Value::Object(deps)
}

impl Adapter for PowerAutomateAdapter {
    fn runtime(&self) -> &'static str {
        "power-automate"
    }

    fn convert(&self, blueprint: &Blueprint) -> Value {
        tracing::debug!(
            "converting '{}' to power automate workflow",
            blueprint.name
        );

        let trigger_name = blueprint.trigger.event.as_deref().unwrap_or("manual");

        let mut triggers = Map::new();
        triggers.insert(
            trigger_name.to_string(),
            json!({
                "type": trigger_type(blueprint.trigger.app.as_deref()),
                "kind": "Http",
                "inputs": { "schema": {}, "method": "POST" }
            }),
        );

        let mut actions = Map::new();
        let mut previous: Option<String> = None;

        for (index, step) in blueprint.steps.iter().enumerate() {
            let name = action_name(step, index);

            actions.insert(
                name.clone(),
                json!({
                    "type": action_type(step),
                    "inputs": step.inputs,
                    "runAfter": run_after(previous.as_deref())
                }),
            );

            for (t_index, transform) in step.transforms.iter().enumerate() {
                let t_name = format!("{name}_Transform_{t_index}");
                actions.insert(
                    t_name,
                    json!({
                        "type": "Compose",
                        "inputs": format!(
                            "@{{{}(body('{}')?['{}'])}}",
                            transform.operation, name, transform.field
                        ),
                        "runAfter": run_after(Some(&name))
                    }),
                );
            }

            // The chain advances to the step's own action; transform
            // actions fan off it and never become the predecessor.
            previous = Some(name);
        }

        json!({
            "$schema": WORKFLOW_SCHEMA,
            "contentVersion": "1.0.0.0",
            "parameters": {},
            "triggers": triggers,
            "actions": actions,
            "outputs": {}
        })
    }
}
