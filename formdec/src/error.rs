//! Error types. Two disjoint classes: validation errors are expected,
//! per-field, and collected across the whole input; everything else is
//! fatal and halts the decode immediately. Callers distinguish the two by
//! matching on [`DecodeError`] variants, never by message text.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// A single field failing validation for one input key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValidationError {}

/// Every validation failure from one decode call.
///
/// Never partial: either the decode reports no validation failures, or
/// this carries all of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompoundValidationError {
    errors: Vec<ValidationError>,
}

impl CompoundValidationError {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl fmt::Display for CompoundValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation errors occurred: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl StdError for CompoundValidationError {}

/// Error type returned by setter hooks.
pub type SetterError = Box<dyn StdError + Send + Sync>;

/// The decode result's error side.
///
/// `Validation` is the expected class: the record is populated with every
/// field that passed, and the compound error lists every field that did
/// not. All other variants are fatal: the decode stopped at the first one
/// and the record is in an unspecified partial state.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// One or more fields failed validation; all other fields were decoded.
    #[error(transparent)]
    Validation(#[from] CompoundValidationError),

    /// A key was submitted with no values for a field that requires one.
    #[error("field `{field}`: no values submitted")]
    NoValues { field: &'static str },

    /// A submitted value could not be coerced to the field's storage kind.
    #[error("field `{field}`: invalid {kind} value {value:?}")]
    Parse {
        field: &'static str,
        kind: &'static str,
        value: String,
    },

    /// A setter hook failed. Setters stop the world, unlike validators.
    #[error("field `{field}`: setter failed: {source}")]
    Setter {
        field: &'static str,
        #[source]
        source: SetterError,
    },

    /// A key matched no field, under [`UnknownKeys::Deny`](crate::UnknownKeys).
    #[error("unknown form key {0:?}")]
    UnknownKey(String),
}

impl DecodeError {
    /// True for the expected, per-field validation class.
    pub fn is_validation(&self) -> bool {
        matches!(self, DecodeError::Validation(_))
    }

    /// The collected validation failures, if this is the validation class.
    pub fn validation_errors(&self) -> Option<&CompoundValidationError> {
        match self {
            DecodeError::Validation(compound) => Some(compound),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_display_joins_messages() {
        let compound = CompoundValidationError::new(vec![
            ValidationError::new("state", "state is required"),
            ValidationError::new("street", "street cannot be FAIL"),
        ]);
        assert_eq!(
            compound.to_string(),
            "validation errors occurred: state is required; street cannot be FAIL"
        );
    }

    #[test]
    fn validation_class_is_distinguishable() {
        let err = DecodeError::from(CompoundValidationError::new(vec![ValidationError::new(
            "zip", "bad zip",
        )]));
        assert!(err.is_validation());
        assert_eq!(err.validation_errors().unwrap().len(), 1);

        let fatal = DecodeError::NoValues { field: "City" };
        assert!(!fatal.is_validation());
        assert!(fatal.validation_errors().is_none());
    }

    #[test]
    fn setter_error_carries_source() {
        let err = DecodeError::Setter {
            field: "City",
            source: "city is required".into(),
        };
        assert!(err.to_string().contains("city is required"));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn validation_error_serializes_to_json() {
        let err = ValidationError::new("state", "unknown state");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "state", "message": "unknown state"})
        );
    }
}
