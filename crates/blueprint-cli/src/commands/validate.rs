//! Validate a blueprint command

use anyhow::Result;

use super::load_checked;

/// Run the validate command
pub fn run(file: &str) -> Result<()> {
    tracing::info!("Validating blueprint: {}", file);

    let blueprint = load_checked(file)?;

    tracing::info!("✓ Blueprint: {}", blueprint.name);
    tracing::info!("✓ Version: {}", blueprint.version);
    tracing::info!("✓ Steps: {}", blueprint.steps.len());
    tracing::info!("✓ Blueprint is valid");

    Ok(())
}
