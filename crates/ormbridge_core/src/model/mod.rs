//! ORM-neutral value shapes exchanged across the adapter boundary.
//!
//! # Responsibility
//! - Define model class handles, field values, record snapshots and the tagged
//!   attribute/condition mapping consumed by adapter operations.
//! - Stay free of any storage or ORM specifics.
//!
//! # Invariants
//! - Every record references exactly one model class.
//! - Attribute values are explicitly tagged as scalar, to-one or to-many;
//!   adapters never rely on runtime type inspection.

pub mod attributes;
pub mod class;
pub mod record;
pub mod value;
