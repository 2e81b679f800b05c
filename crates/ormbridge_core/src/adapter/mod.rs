//! Adapter contract and in-process registry wiring.
//!
//! # Responsibility
//! - Define the operation set every concrete ORM adapter implements.
//! - Track declared adapter families in declaration order.
//!
//! # Invariants
//! - The base contract never performs data access; unimplemented operations
//!   fail with one uniform unsupported-operation error.
//! - Registration appends; registered families are never removed.

pub mod contract;
pub mod error;
pub mod registry;
