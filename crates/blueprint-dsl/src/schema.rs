//! Embedded blueprint schema and introspection
//!
//! The JSON Schema document ships inside the crate and is parsed exactly
//! once; callers get a shared reference to the parsed value.

use once_cell::sync::Lazy;
use serde_json::Value;

const SCHEMA_SOURCE: &str = include_str!("../schema/blueprint.schema.json");

static DOCUMENT: Lazy<Value> =
    Lazy::new(|| serde_json::from_str(SCHEMA_SOURCE).expect("embedded schema is valid JSON"));

static INFO: Lazy<SchemaInfo> = Lazy::new(|| {
    let doc = document();
    SchemaInfo {
        id: doc["$id"].as_str().unwrap_or_default().to_string(),
        title: doc["title"].as_str().unwrap_or_default().to_string(),
        required: doc["required"]
            .as_array()
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|f| f.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    }
});

/// Summary of the schema document for display and tooling
#[derive(Debug, Clone)]
pub struct SchemaInfo {
    /// Stable schema identifier (`$id`)
    pub id: String,

    /// Schema title
    pub title: String,

    /// Required top-level blueprint fields
    pub required: Vec<String>,
}

/// The full schema document
pub fn document() -> &'static Value {
    &DOCUMENT
}

/// Derived schema summary: id, title, and required top-level fields
pub fn info() -> &'static SchemaInfo {
    &INFO
}
