//! Automation Blueprint DSL
//!
//! This crate provides the core of the blueprint toolchain:
//! - The typed blueprint data model with up-front defaulting
//! - The embedded JSON Schema and its introspection surface
//! - Schema validation with normalized error messages
//! - Loading blueprint files from disk (JSON or YAML)
//!
//! # Example
//!
//! ```rust,ignore
//! use blueprint_dsl::{validate_dsl, Blueprint};
//!
//! let instance = serde_json::json!({
//!     "id": "bp-1",
//!     "name": "My Blueprint",
//!     "version": "1.0.0",
//!     "apps": ["slack"],
//!     "trigger": { "app": "slack", "event": "message" },
//!     "steps": [{ "id": "s1", "app": "slack", "action": "send" }]
//! });
//!
//! let result = validate_dsl(&instance);
//! assert!(result.ok);
//! let blueprint = Blueprint::from_value(&instance)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blueprint;
pub mod error;
pub mod load;
pub mod schema;
pub mod validator;

pub use blueprint::{Blueprint, RetryPolicy, Step, Transform, Trigger, TriggerFilter};
pub use error::{Error, Result};
pub use load::{load_blueprint, load_value};
pub use validator::{ValidationResult, validate_dsl};
