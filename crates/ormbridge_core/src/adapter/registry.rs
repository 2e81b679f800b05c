//! In-process adapter family registry.
//!
//! # Responsibility
//! - Track every adapter family the host process declares, in declaration
//!   order.
//! - Expose read-only enumeration for adapter bootstrap code.
//!
//! # Invariants
//! - Registration appends; entries are never reordered or removed.
//! - Duplicate registrations are preserved, not coalesced.

use crate::adapter::contract::AdapterFamily;
use log::debug;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Ordered, append-only registry of adapter families.
///
/// The registry is explicit state owned by whichever component bootstraps
/// adapters; nothing here is process-global. Registration is expected to
/// finish before concurrent reads begin; no concurrent-registration guarantee
/// is made.
#[derive(Default)]
pub struct AdapterRegistry {
    families: Vec<Arc<dyn AdapterFamily>>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one adapter family.
    ///
    /// Never fails: declaration order and duplicates are kept exactly as
    /// registered.
    pub fn register(&mut self, family: Arc<dyn AdapterFamily>) {
        debug!(
            "event=adapter_registered module=registry family_id={} position={}",
            family.family_id(),
            self.families.len()
        );
        self.families.push(family);
    }

    /// Returns every registered family in registration order.
    pub fn all_variants(&self) -> &[Arc<dyn AdapterFamily>] {
        &self.families
    }

    /// Returns registered family ids in registration order.
    pub fn family_ids(&self) -> Vec<String> {
        self.families
            .iter()
            .map(|family| family.family_id().to_string())
            .collect()
    }

    /// Returns the first family registered under `family_id`.
    ///
    /// Lookup input is trimmed; on duplicate ids the earliest registration
    /// stays authoritative.
    pub fn family(&self, family_id: &str) -> Option<Arc<dyn AdapterFamily>> {
        let normalized = family_id.trim();
        self.families
            .iter()
            .find(|family| family.family_id() == normalized)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Debug for AdapterRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Families are trait objects; report ids instead of contents.
        f.debug_struct("AdapterRegistry")
            .field("families", &self.family_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AdapterRegistry;
    use crate::adapter::contract::{AdapterFamily, ModelAdapter};
    use crate::adapter::error::AdapterResult;
    use crate::model::class::ModelClass;
    use std::sync::Arc;

    struct NamedFamily {
        family_id: &'static str,
    }

    impl NamedFamily {
        fn new(family_id: &'static str) -> Arc<Self> {
            Arc::new(Self { family_id })
        }
    }

    impl AdapterFamily for NamedFamily {
        fn family_id(&self) -> &str {
            self.family_id
        }

        fn adapter_for(&self, _model: &ModelClass) -> AdapterResult<Box<dyn ModelAdapter>> {
            unimplemented!("registry tests never build adapter instances")
        }
    }

    #[test]
    fn starts_empty() {
        let registry = AdapterRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.all_variants().is_empty());
    }

    #[test]
    fn preserves_declaration_order() {
        let mut registry = AdapterRegistry::new();
        registry.register(NamedFamily::new("sql_mapper"));
        registry.register(NamedFamily::new("document_store"));

        assert_eq!(registry.family_ids(), vec!["sql_mapper", "document_store"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn keeps_duplicate_registrations() {
        let mut registry = AdapterRegistry::new();
        registry.register(NamedFamily::new("sql_mapper"));
        registry.register(NamedFamily::new("sql_mapper"));

        assert_eq!(registry.family_ids(), vec!["sql_mapper", "sql_mapper"]);
    }

    #[test]
    fn lookup_trims_input_and_prefers_first_registration() {
        let first: Arc<dyn AdapterFamily> = NamedFamily::new("sql_mapper");
        let mut registry = AdapterRegistry::new();
        registry.register(Arc::clone(&first));
        registry.register(NamedFamily::new("sql_mapper"));

        let found = registry
            .family("  sql_mapper  ")
            .expect("registered family should resolve");
        assert!(Arc::ptr_eq(&found, &first));
        assert!(registry.family("missing").is_none());
    }

    #[test]
    fn debug_output_lists_family_ids() {
        let mut registry = AdapterRegistry::new();
        registry.register(NamedFamily::new("sql_mapper"));

        let rendered = format!("{registry:?}");
        assert!(rendered.contains("sql_mapper"));
    }
}
