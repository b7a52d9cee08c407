//! Blueprint data model
//!
//! A blueprint is a platform-neutral description of an automation: one
//! trigger plus an ordered sequence of steps. Deserialization is the single
//! normalization step: every optional field is defaulted here, so adapters
//! operate on a fully-shaped value and never default fields themselves
//! beyond their own platform placeholders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A platform-neutral automation blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blueprint {
    /// Opaque blueprint identifier
    #[serde(default)]
    pub id: String,

    /// Human-readable name
    #[serde(default = "default_name")]
    pub name: String,

    /// Semantic version (MAJOR.MINOR.PATCH)
    #[serde(default = "default_version")]
    pub version: String,

    /// App identifiers this blueprint touches
    #[serde(default)]
    pub apps: Vec<String>,

    /// Permission scopes required by the blueprint
    #[serde(default)]
    pub scopes: Vec<String>,

    /// The event that starts the automation
    #[serde(default)]
    pub trigger: Trigger,

    /// Retry policy, passed through to targets that interpret it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryPolicy>,

    /// Ordered sequence of steps
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Declarative test cases, carried verbatim and never converted
    #[serde(default)]
    pub tests: Vec<Value>,

    /// Sample payloads keyed by name, carried verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<Value>,

    /// Governance policies, carried verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Value>,

    /// Per-platform compatibility notes, carried verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<Value>,
}

fn default_name() -> String {
    "automation-blueprint".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// The event that starts an automation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trigger {
    /// App that emits the trigger event
    #[serde(default)]
    pub app: Option<String>,

    /// Event name within the app
    #[serde(default)]
    pub event: Option<String>,

    /// Conditions the event payload must satisfy
    #[serde(default)]
    pub filters: Vec<TriggerFilter>,
}

/// A single trigger filter condition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerFilter {
    /// Payload field the condition applies to
    #[serde(default)]
    pub field: String,

    /// Comparison operator (e.g. `equals`, `contains`)
    #[serde(default)]
    pub operator: String,

    /// Comparison value
    #[serde(default)]
    pub value: Value,
}

/// Retry policy attached to a blueprint
///
/// If a blueprint declares a retry policy at all, both fields must be
/// present; the schema enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Maximum number of attempts
    pub attempts: i64,

    /// Delay between attempts in milliseconds
    pub delay_ms: i64,
}

/// One action within a blueprint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Step {
    /// Step identifier, should be unique within the blueprint
    #[serde(default)]
    pub id: Option<String>,

    /// App the step acts against
    #[serde(default)]
    pub app: Option<String>,

    /// Action to perform within the app
    #[serde(default)]
    pub action: Option<String>,

    /// Action inputs, arbitrary key/value pairs
    #[serde(default)]
    pub inputs: serde_json::Map<String, Value>,

    /// Field transforms applied in order during conversion
    #[serde(default)]
    pub transforms: Vec<Transform>,
}

/// A named operation applied to one field's value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transform {
    /// Field the operation applies to
    #[serde(default)]
    pub field: String,

    /// Operation name (e.g. `uppercase`, `trim`)
    #[serde(default)]
    pub operation: String,
}

impl Blueprint {
    /// Normalize an arbitrary JSON value into a fully-defaulted blueprint.
    ///
    /// Lenient: unknown fields are ignored and absent fields take their
    /// defaults. Fails only on type-level mismatches (e.g. `steps` that is
    /// not an array), which schema validation would also reject.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }
}

impl Default for Blueprint {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: default_name(),
            version: default_version(),
            apps: Vec::new(),
            scopes: Vec::new(),
            trigger: Trigger::default(),
            retry: None,
            steps: Vec::new(),
            tests: Vec::new(),
            fixtures: None,
            policies: None,
            compatibility: None,
        }
    }
}
