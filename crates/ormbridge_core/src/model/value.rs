//! Scalar field values.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Scalar value for one model field.
///
/// The variants cover what typical storage backends exchange without forcing
/// adapters onto one ORM's native value type. Relationship values are not
/// scalars; see `AttributeValue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Uuid(Uuid),
}

impl FieldValue {
    /// Returns whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Uuid(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use uuid::Uuid;

    #[test]
    fn converts_from_common_rust_types() {
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(7), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(7i64), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(1.5), FieldValue::Real(1.5));
        assert_eq!(
            FieldValue::from("Fred"),
            FieldValue::Text("Fred".to_string())
        );

        let id = Uuid::new_v4();
        assert_eq!(FieldValue::from(id), FieldValue::Uuid(id));
    }

    #[test]
    fn displays_values_for_error_text() {
        assert_eq!(FieldValue::Null.to_string(), "null");
        assert_eq!(FieldValue::Integer(42).to_string(), "42");
        assert_eq!(FieldValue::Text("Betty".to_string()).to_string(), "Betty");
    }

    #[test]
    fn null_check_only_matches_null() {
        assert!(FieldValue::Null.is_null());
        assert!(!FieldValue::Integer(0).is_null());
    }

    #[test]
    fn serializes_with_snake_case_tags() {
        let json = serde_json::to_string(&FieldValue::Integer(3)).expect("serialize");
        assert_eq!(json, r#"{"integer":3}"#);

        let back: FieldValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, FieldValue::Integer(3));
    }
}
