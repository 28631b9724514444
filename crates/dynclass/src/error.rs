// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error taxonomy for schema construction and instance access.

use thiserror::Error;

/// Errors raised by schema construction and instance access.
///
/// All of these are caller errors: none is transient and none is retried.
/// Once a descriptor has been published by the synthesizer, reading it never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynClassError {
    #[error("Invalid schema: {reason}")]
    InvalidSchema { reason: String },

    #[error("Field not found: {0}")]
    UnknownField(String),

    #[error("Type mismatch on field {field}: expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },

    #[error("Constructor arity mismatch: expected {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Unknown type name: {0}")]
    UnknownType(String),
}

impl DynClassError {
    pub(crate) fn invalid_schema(reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DynClassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DynClassError::ArityMismatch {
            expected: 2,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "Constructor arity mismatch: expected 2 arguments, got 3"
        );

        let err = DynClassError::TypeMismatch {
            field: "Id".into(),
            expected: "i32".into(),
            got: "string".into(),
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch on field Id: expected i32, got string"
        );

        assert_eq!(
            DynClassError::UnknownField("Nome".into()).to_string(),
            "Field not found: Nome"
        );
    }
}
