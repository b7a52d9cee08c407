//! CLI command implementations

pub mod convert;
pub mod export;
pub mod init;
pub mod platforms;
pub mod schema;
pub mod validate;

use anyhow::{Context, Result};
use blueprint_dsl::{Blueprint, load_value, validate_dsl};

/// Load a blueprint file, check it against the schema, and normalize it.
///
/// Every command that consumes a blueprint goes through here, so schema
/// failures always list the offending fields before the command bails.
fn load_checked(file: &str) -> Result<Blueprint> {
    let value =
        load_value(file).with_context(|| format!("Failed to load blueprint from {}", file))?;

    let result = validate_dsl(&value);
    if !result.ok {
        let errors = result.errors.unwrap_or_default();
        for error in &errors {
            tracing::warn!("{}", error);
        }
        anyhow::bail!("Blueprint failed validation with {} error(s)", errors.len());
    }

    Blueprint::from_value(&value).context("Failed to normalize blueprint")
}
