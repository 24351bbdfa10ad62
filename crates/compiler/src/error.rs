// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for the statement compiler
//!
//! Every compiler error is a usage error: the options value or its schema is malformed.
//! Constraint failures on well-formed values are reported by the validation engine before
//! compilation is attempted.

use serde::Serialize;

/// Result type alias for compilation
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur while compiling options into SQL
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum CompileError {
    /// No options value was supplied
    #[error("Options must not be nil")]
    NilOptions,

    /// A field's value does not fit its declared directive
    #[error(
        "Field '{object}.{field}' is declared as {directive} but holds a {value} value"
    )]
    DirectiveMismatch {
        object: String,
        field: String,
        directive: String,
        value: String,
    },

    /// Nested structures are deeper than the configured limit
    #[error("Recursion limit exceeded: {context} (depth: {depth}, limit: {limit})")]
    RecursionLimitExceeded {
        context: String,
        depth: usize,
        limit: usize,
    },
}

impl CompileError {
    /// Name of the field involved, when the error concerns a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            CompileError::DirectiveMismatch { field, .. } => Some(field),
            CompileError::NilOptions | CompileError::RecursionLimitExceeded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_directive_mismatch() {
        let err = CompileError::DirectiveMismatch {
            object: "CreateTableOptions".to_string(),
            field: "name".to_string(),
            directive: "identifier".to_string(),
            value: "text".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("CreateTableOptions.name"));
        assert!(msg.contains("identifier"));
        assert!(msg.contains("text"));
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_error_display_nil_options() {
        assert_eq!(CompileError::NilOptions.to_string(), "Options must not be nil");
        assert_eq!(CompileError::NilOptions.field(), None);
    }

    #[test]
    fn test_error_serialization() {
        let err = CompileError::RecursionLimitExceeded {
            context: "Chain".to_string(),
            depth: 4,
            limit: 3,
        };
        let json = serde_json::to_string(&err);
        assert!(json.is_ok());
    }
}
