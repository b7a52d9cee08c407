//! List registered target platforms

use anyhow::Result;
use blueprint_adapters::AdapterRegistry;

/// Run the platforms command
pub fn run() -> Result<()> {
    let registry = AdapterRegistry::with_builtins();

    for runtime in registry.list() {
        println!("{}", runtime);
    }

    Ok(())
}
