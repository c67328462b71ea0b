// ABOUTME: Error types raised by the personalization pipeline
// ABOUTME: Missing numeric intake fields, invalid values, and unknown meal slot references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! # Engine Error Types
//!
//! The pipeline degrades gracefully on categorical input, so the error surface
//! is small: only arithmetic inputs that cannot be defaulted and references to
//! records that do not exist produce an error.

use thiserror::Error;

/// Errors produced by the personalization engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A numeric intake field required for arithmetic was absent
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Name of the absent field (e.g. `weight_kg`)
        field: &'static str,
    },

    /// A numeric intake field was present but unusable
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A meal check-in referenced a slot the plan does not contain
    #[error("unknown meal slot: {slot_id}")]
    UnknownMealSlot {
        /// Identifier that was looked up
        slot_id: String,
    },
}

impl EngineError {
    /// Create a "missing required field" error
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    /// Create an "invalid value" error
    #[must_use]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Create an "unknown meal slot" error
    #[must_use]
    pub fn unknown_slot(slot_id: impl Into<String>) -> Self {
        Self::UnknownMealSlot {
            slot_id: slot_id.into(),
        }
    }

    /// Name of the intake field this error refers to, if any
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField { field } | Self::InvalidValue { field, .. } => {
                Some(*field)
            }
            Self::UnknownMealSlot { .. } => None,
        }
    }
}

/// Result alias used across the engine
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = EngineError::missing("weight_kg");
        assert_eq!(err.to_string(), "missing required field: weight_kg");
        assert_eq!(err.field(), Some("weight_kg"));
    }

    #[test]
    fn test_unknown_slot_has_no_field() {
        let err = EngineError::unknown_slot("brunch");
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("brunch"));
    }
}
