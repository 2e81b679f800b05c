//! Tagged attribute and condition mappings.
//!
//! # Responsibility
//! - Carry find/create inputs as an explicit scalar/to-one/to-many tagging so
//!   adapters pattern-match on the tag instead of inspecting runtime types.
//!
//! # Invariants
//! - The mapping is unordered; attribute names are unique per set.
//! - No schema is enforced here. Validity of names and values is entirely the
//!   concrete adapter's responsibility.

use crate::model::record::Record;
use crate::model::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One attribute or condition value.
///
/// Relationship values carry full records rather than foreign-key scalars. How
/// a nested record is matched (by key, by identity) is adapter-defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Plain scalar column value.
    Scalar(FieldValue),
    /// Single related instance for a to-one relation.
    One(Record),
    /// Related instances for a to-many relation.
    Many(Vec<Record>),
}

/// Attribute-name to value mapping consumed by find and create operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    values: BTreeMap<String, AttributeValue>,
}

/// Condition sets share the attribute shape.
pub type Conditions = Attributes;

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one pre-tagged value, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.values.insert(name.into(), value);
    }

    /// Inserts a scalar value.
    pub fn insert_scalar(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.insert(name, AttributeValue::Scalar(value.into()));
    }

    /// Inserts a single related record for a to-one relation.
    pub fn insert_one(&mut self, name: impl Into<String>, record: Record) {
        self.insert(name, AttributeValue::One(record));
    }

    /// Inserts related records for a to-many relation.
    pub fn insert_many(&mut self, name: impl Into<String>, records: Vec<Record>) {
        self.insert(name, AttributeValue::Many(records));
    }

    /// Builder-style scalar insertion.
    pub fn with_scalar(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert_scalar(name, value);
        self
    }

    /// Builder-style to-one insertion.
    pub fn with_one(mut self, name: impl Into<String>, record: Record) -> Self {
        self.insert_one(name, record);
        self
    }

    /// Builder-style to-many insertion.
    pub fn with_many(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.insert_many(name, records);
        self
    }

    /// Returns one value by attribute name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    /// Iterates entries in stable lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
