//! ORM-agnostic persistence contract for ormbridge.
//! This crate is the single source of truth for the adapter interface.

pub mod adapter;
pub mod logging;
pub mod model;

pub use adapter::contract::{AdapterFamily, ModelAdapter};
pub use adapter::error::{AdapterError, AdapterResult, Operation};
pub use adapter::registry::AdapterRegistry;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attributes::{AttributeValue, Attributes, Conditions};
pub use model::class::{ModelClass, ModelClassError};
pub use model::record::{Record, ID_FIELD};
pub use model::value::FieldValue;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
