//! Adapter contract traits.
//!
//! # Responsibility
//! - Define the six operations application code may request from whichever
//!   ORM adapter is plugged in.
//! - Give every unimplemented operation one uniform unsupported failure.
//!
//! # Invariants
//! - An adapter instance wraps exactly one model class, fixed at construction.
//! - Default operation bodies never return a value; they fail `Unsupported`.
//! - Every operation is a single-shot synchronous call. Retry and
//!   partial-failure policy belong to concrete adapters.

use crate::adapter::error::{AdapterError, AdapterResult, Operation};
use crate::model::attributes::{Attributes, Conditions};
use crate::model::class::ModelClass;
use crate::model::record::Record;
use crate::model::value::FieldValue;

/// One concrete ORM integration (adapter variant).
///
/// A family is registered once in an `AdapterRegistry` and acts as the factory
/// for per-model adapter instances.
pub trait AdapterFamily {
    /// Stable identifier for this adapter family.
    fn family_id(&self) -> &str;

    /// Lists the model classes this family knows how to serve.
    ///
    /// Base-contract stub; concrete families override it.
    fn model_classes(&self) -> AdapterResult<Vec<ModelClass>> {
        Err(AdapterError::unsupported(Operation::ModelClasses))
    }

    /// Returns an adapter instance bound to `model`.
    ///
    /// This is the consumption point application code goes through to obtain
    /// ORM-agnostic access to one model class.
    fn adapter_for(&self, model: &ModelClass) -> AdapterResult<Box<dyn ModelAdapter>>;
}

/// Adapter instance bound to exactly one model class.
///
/// Concrete adapters override the operations their ORM supports; anything left
/// on the default body fails with the unsupported-operation error.
pub trait ModelAdapter {
    /// The model class this instance serves.
    fn model_class(&self) -> &ModelClass;

    /// Lists column/property/field names of the wrapped model class.
    fn column_names(&self) -> AdapterResult<Vec<String>> {
        Err(AdapterError::unsupported(Operation::ColumnNames))
    }

    /// Fetches the single instance with primary key `id`.
    ///
    /// Concrete adapters fail with `NotFound` when no instance has that id.
    fn get(&self, id: &FieldValue) -> AdapterResult<Record> {
        let _ = id;
        Err(AdapterError::unsupported(Operation::Get))
    }

    /// Returns the first instance matching `conditions`, or `None` on no match.
    fn find_first(&self, conditions: &Conditions) -> AdapterResult<Option<Record>> {
        let _ = conditions;
        Err(AdapterError::unsupported(Operation::FindFirst))
    }

    /// Returns all instances matching `conditions` in the adapter's stable
    /// order, or an empty sequence on no match.
    fn find_all(&self, conditions: &Conditions) -> AdapterResult<Vec<Record>> {
        let _ = conditions;
        Err(AdapterError::unsupported(Operation::FindAll))
    }

    /// Creates one instance from `attributes`.
    ///
    /// Attributes may carry relationship values: a single related record for
    /// to-one relations, a sequence for to-many relations. Concrete adapters
    /// fail with `Validation` when attributes violate the underlying schema.
    fn create(&self, attributes: &Attributes) -> AdapterResult<Record> {
        let _ = attributes;
        Err(AdapterError::unsupported(Operation::Create))
    }
}

impl std::fmt::Debug for dyn ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("model_class", self.model_class())
            .finish()
    }
}
