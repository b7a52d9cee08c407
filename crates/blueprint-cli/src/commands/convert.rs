//! Convert a blueprint to one platform's native format

use anyhow::{Context, Result};
use blueprint_adapters::AdapterRegistry;
use std::fs;

use super::load_checked;

/// Run the convert command
pub fn run(file: &str, target: &str, output: Option<&str>) -> Result<()> {
    tracing::debug!("Converting {} for target '{}'", file, target);

    let blueprint = load_checked(file)?;

    let registry = AdapterRegistry::with_builtins();
    let adapter = registry.get(target).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown target platform '{}'. Available: {}",
            target,
            registry.list().join(", ")
        )
    })?;

    if !adapter.supports(&blueprint) {
        anyhow::bail!(
            "Platform '{}' does not support blueprint '{}'",
            target,
            blueprint.id
        );
    }

    let document = adapter.convert(&blueprint);
    let rendered = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write {}", path))?;
            tracing::info!("✓ Wrote {} document to {}", target, path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
