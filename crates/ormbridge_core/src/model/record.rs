//! Model instance snapshots.
//!
//! # Responsibility
//! - Represent one model instance as plain data, decoupled from whichever ORM
//!   object it came from.
//!
//! # Invariants
//! - Every record references exactly one model class, fixed at construction.
//! - Field names are unique per record; later assignments replace earlier ones.

use crate::model::class::ModelClass;
use crate::model::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Conventional primary-key field name used by `Record::id`.
pub const ID_FIELD: &str = "id";

/// One model instance as seen through the adapter contract.
///
/// Adapters translate between their ORM's native objects and this shape. The
/// contract itself never interprets field names beyond the `id` convention;
/// equality is structural over model class and fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    model: ModelClass,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record for one model class.
    pub fn new(model: ModelClass) -> Self {
        Self {
            model,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment for construction sites.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Sets one field, replacing any previous value under the same name.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the model class this record belongs to.
    pub fn model(&self) -> &ModelClass {
        &self.model
    }

    /// Returns one field value by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns field names in stable lexicographic order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates fields in stable lexicographic order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Convenience accessor for the conventional `id` primary-key field.
    ///
    /// Adapters with a different key naming scheme use `field` directly.
    pub fn id(&self) -> Option<&FieldValue> {
        self.field(ID_FIELD)
    }
}
