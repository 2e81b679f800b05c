//! Adapter failure taxonomy.
//!
//! # Responsibility
//! - Provide one semantic error type shared by the base contract and every
//!   concrete adapter implementation.
//!
//! # Invariants
//! - Failures surface immediately to the caller; nothing here retries or
//!   recovers locally.
//! - "No match" is not an error: `find_first`/`find_all` report it through
//!   their success value.

use crate::model::class::ModelClass;
use crate::model::value::FieldValue;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AdapterResult<T> = Result<T, AdapterError>;

/// Contract operation identifiers used in error text and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ModelClasses,
    ColumnNames,
    Get,
    FindFirst,
    FindAll,
    Create,
}

impl Operation {
    /// Stable string id for this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModelClasses => "model_classes",
            Self::ColumnNames => "column_names",
            Self::Get => "get",
            Self::FindFirst => "find_first",
            Self::FindAll => "find_all",
            Self::Create => "create",
        }
    }

    /// All contract operations in declaration order.
    pub fn all() -> &'static [Operation] {
        &[
            Self::ModelClasses,
            Self::ColumnNames,
            Self::Get,
            Self::FindFirst,
            Self::FindAll,
            Self::Create,
        ]
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic error for adapter operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterError {
    /// The adapter in use does not implement the operation.
    Unsupported { operation: Operation },
    /// `get` found no instance for the requested id.
    NotFound { model: ModelClass, id: FieldValue },
    /// Attributes violate the underlying schema.
    Validation { model: ModelClass, message: String },
    /// Storage or transport fault inside a concrete adapter.
    Backend { message: String },
}

impl AdapterError {
    pub fn unsupported(operation: Operation) -> Self {
        Self::Unsupported { operation }
    }

    pub fn not_found(model: ModelClass, id: FieldValue) -> Self {
        Self::NotFound { model, id }
    }

    pub fn validation(model: ModelClass, message: impl Into<String>) -> Self {
        Self::Validation {
            model,
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Returns whether this is an unsupported-operation failure.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl Display for AdapterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { operation } => {
                write!(f, "operation `{operation}` is not supported by this orm adapter")
            }
            Self::NotFound { model, id } => write!(f, "no {model} found for id {id}"),
            Self::Validation { model, message } => {
                write!(f, "validation failed for {model}: {message}")
            }
            Self::Backend { message } => write!(f, "adapter backend failure: {message}"),
        }
    }
}

impl Error for AdapterError {}
