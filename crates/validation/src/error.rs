// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for the validation engine

use serde::Serialize;

use crate::violation::{ViolationKind, ViolationSet};

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation failure
///
/// `Violations` is the only outcome for a well-formed value; the other variants are
/// usage errors in the value or its schema.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// No options value was supplied
    #[error("Options must not be nil")]
    NilOptions,

    /// A rule names a field the schema does not declare
    #[error("Rule on '{object}' references unknown field '{field}'")]
    UnknownField { object: String, field: String },

    /// A rule was applied to a field whose value it cannot inspect
    #[error("Rule {rule} cannot inspect field '{object}.{field}' holding a {value} value")]
    RuleMismatch {
        object: String,
        field: String,
        rule: String,
        value: String,
    },

    /// One or more constraints failed
    #[error("{0}")]
    Violations(ViolationSet),
}

impl ValidationError {
    /// The violation set, when this is a constraint failure
    pub fn violations(&self) -> Option<&ViolationSet> {
        match self {
            ValidationError::Violations(set) => Some(set),
            _ => None,
        }
    }

    /// Whether this error carries a violation of `kind` naming `field`
    pub fn contains(&self, kind: ViolationKind, field: &str) -> bool {
        self.violations()
            .is_some_and(|set| set.contains(kind, field))
    }
}
