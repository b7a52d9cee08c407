//! Target platform adapters
//!
//! One adapter per automation platform, each converting a normalized
//! blueprint into that platform's native workflow document:
//! - Zapier developer platform definitions
//! - Make (Integromat) scenarios
//! - n8n workflows
//! - Power Automate (Azure Logic Apps) workflow definitions
//!
//! Conversion is total: every structurally valid blueprint converts without
//! error, with absent optional fields falling back to platform-specific
//! placeholders inside each adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use blueprint_adapters::AdapterRegistry;
//! use blueprint_dsl::Blueprint;
//!
//! let registry = AdapterRegistry::with_builtins();
//! let adapter = registry.get("n8n").expect("built-in adapter");
//! let workflow = adapter.convert(&blueprint);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod make;
pub mod n8n;
pub mod power_automate;
pub mod registry;
pub mod zapier;

use blueprint_dsl::Blueprint;
use serde_json::Value;

pub use make::MakeAdapter;
pub use n8n::N8nAdapter;
pub use power_automate::PowerAutomateAdapter;
pub use registry::AdapterRegistry;
pub use zapier::ZapierAdapter;

/// A conversion unit for one target platform
pub trait Adapter: Send + Sync {
    /// Stable identifier used as the registry key (e.g. `"zapier"`)
    fn runtime(&self) -> &'static str;

    /// Whether this adapter accepts the given blueprint.
    ///
    /// Callers may check this before converting. The default accepts every
    /// structurally valid blueprint; none of the built-ins override it.
    fn supports(&self, _blueprint: &Blueprint) -> bool {
        true
    }

    /// Convert a blueprint into the platform's native workflow document.
    ///
    /// Pure and total: no I/O, no mutation of the blueprint, and no failure
    /// mode for structurally valid input.
    fn convert(&self, blueprint: &Blueprint) -> Value;
}
