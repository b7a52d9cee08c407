//! Export a blueprint for every registered platform

use anyhow::{Context, Result};
use blueprint_adapters::AdapterRegistry;
use std::fs;
use std::path::Path;

use super::load_checked;

/// Run the export command
pub fn run(file: &str, dir: &str) -> Result<()> {
    let blueprint = load_checked(file)?;

    let out_dir = Path::new(dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", dir))?;

    let registry = AdapterRegistry::with_builtins();
    let mut exported = 0;

    for (runtime, adapter) in registry.iter() {
        if !adapter.supports(&blueprint) {
            tracing::warn!("Skipping '{}': blueprint not supported", runtime);
            continue;
        }

        let document = adapter.convert(&blueprint);
        let path = out_dir.join(format!("{}.json", runtime));
        let rendered = serde_json::to_string_pretty(&document)?;
        fs::write(&path, format!("{}\n", rendered))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("✓ {} -> {}", runtime, path.display());
        exported += 1;
    }

    tracing::info!("✓ Exported {} platform document(s) to {}", exported, dir);

    Ok(())
}
