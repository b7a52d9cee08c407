//! n8n workflow adapter
//!
//! Produces an n8n workflow: a synthesized webhook node followed by one
//! node per step, wired into a linear chain. Transforms become n8n
//! expression parameters on the owning node rather than separate nodes.

use blueprint_dsl::{Blueprint, Step};
use serde_json::{Map, Value, json};

use crate::Adapter;

/// Converts blueprints into n8n workflow documents
#[derive(Debug, Default)]
pub struct N8nAdapter;

fn node_name(step: &Step, index: usize) -> String {
    step.id.clone().unwrap_or_else(|| format!("Step_{index}"))
}

impl Adapter for N8nAdapter {
    fn runtime(&self) -> &'static str {
        "n8n"
    }

    fn convert(&self, blueprint: &Blueprint) -> Value {
        tracing::debug!("converting '{}' to n8n workflow", blueprint.name);

        let trigger_event = blueprint.trigger.event.as_deref().unwrap_or("webhook");
        let webhook_id = blueprint.trigger.event.as_deref().unwrap_or("default");

        let mut nodes = vec![json!({
            "parameters": {
                "path": format!("/{trigger_event}"),
                "responseMode": "onReceived",
                "options": {}
            },
            "name": "Webhook",
            "type": "n8n-nodes-base.webhook",
            "typeVersion": 1,
            "position": [250, 300],
            "webhookId": webhook_id
        })];

        // The webhook always has exactly one outgoing edge list; with no
        // steps it stays empty.
        let first_edge = match blueprint.steps.first() {
            Some(first) => json!([{ "node": node_name(first, 0), "type": "main", "index": 0 }]),
            None => json!([]),
        };
        let mut connections = Map::new();
        connections.insert("Webhook".to_string(), json!({ "main": [first_edge] }));

        for (index, step) in blueprint.steps.iter().enumerate() {
            let name = node_name(step, index);
            let app = step.app.as_deref().unwrap_or("set");

            let mut parameters = step.inputs.clone();
            for transform in &step.transforms {
                if !transform.field.is_empty() && !transform.operation.is_empty() {
                    parameters.insert(
                        transform.field.clone(),
                        Value::String(format!(
                            "={{{{ $json[\"{}\"].{}() }}}}",
                            transform.field, transform.operation
                        )),
                    );
                }
            }

            nodes.push(json!({
                "parameters": parameters,
                "name": name,
                "type": format!("n8n-nodes-base.{app}"),
                "typeVersion": 1,
                "position": [250 + (index + 1) * 200, 300]
            }));

            // Link to the next step; the final node has no outgoing edge.
            if index + 1 < blueprint.steps.len() {
                let next = node_name(&blueprint.steps[index + 1], index + 1);
                connections.insert(
                    name,
                    json!({ "main": [[{ "node": next, "type": "main", "index": 0 }]] }),
                );
            }
        }

        json!({
            "name": blueprint.name,
            "nodes": nodes,
            "connections": connections,
            "active": false,
            "settings": {},
            "tags": []
        })
    }
}
