// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for Catalog operations
//!
//! Execution errors surfaced by the executor and the catalog probes. The backend reports
//! a missing object and a missing (or inaccessible) ancestor with the same text, so those
//! messages are decoded into dedicated variants that the safe wrappers know how to
//! disambiguate. Several failures can be combined into one [`CatalogError::Joined`] error
//! that keeps every cause.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

const NOT_EXIST_OR_NOT_AUTHORIZED: &str = "does not exist or not authorized";
const NOT_EXIST_OR_CANNOT_BE_PERFORMED: &str = "does not exist or operation cannot be performed";

/// Recognised error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorClass {
    ObjectNotFound,
    ObjectNotExistOrNotAuthorized,
    DoesNotExistOrOperationCannotBePerformed,
    Backend,
    Cancelled,
    Timeout,
}

/// Errors that can occur during Catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogError {
    /// The object is known not to exist
    #[error("Object '{0}' not found")]
    ObjectNotFound(String),

    /// The object or one of its ancestors is missing, or access was denied
    #[error("Object does not exist or not authorized: {0}")]
    ObjectNotExistOrNotAuthorized(String),

    /// The object or one of its ancestors is missing, or the operation is not allowed
    #[error("Object does not exist or operation cannot be performed: {0}")]
    DoesNotExistOrOperationCannotBePerformed(String),

    /// Any other backend failure
    #[error("Backend error {code}: {message}")]
    Backend { code: String, message: String },

    /// The operation context was cancelled
    #[error("Operation cancelled")]
    Cancelled,

    /// The operation did not finish within the context timeout
    #[error("Operation timed out after {millis}ms")]
    Timeout { millis: u64 },

    /// Several causes reported together
    #[error("{0}")]
    Joined(Causes),
}

impl CatalogError {
    /// Decode a raw backend failure into a recognised error
    pub fn from_backend(code: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase().replace(',', "");
        if lowered.contains(NOT_EXIST_OR_NOT_AUTHORIZED) {
            CatalogError::ObjectNotExistOrNotAuthorized(message)
        } else if lowered.contains(NOT_EXIST_OR_CANNOT_BE_PERFORMED) {
            CatalogError::DoesNotExistOrOperationCannotBePerformed(message)
        } else {
            CatalogError::Backend {
                code: code.into(),
                message,
            }
        }
    }

    pub fn not_found(object: impl fmt::Display) -> Self {
        CatalogError::ObjectNotFound(object.to_string())
    }

    pub fn timeout(limit: Duration) -> Self {
        CatalogError::Timeout {
            millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Class of this error; `None` for a joined error
    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            CatalogError::ObjectNotFound(_) => Some(ErrorClass::ObjectNotFound),
            CatalogError::ObjectNotExistOrNotAuthorized(_) => {
                Some(ErrorClass::ObjectNotExistOrNotAuthorized)
            }
            CatalogError::DoesNotExistOrOperationCannotBePerformed(_) => {
                Some(ErrorClass::DoesNotExistOrOperationCannotBePerformed)
            }
            CatalogError::Backend { .. } => Some(ErrorClass::Backend),
            CatalogError::Cancelled => Some(ErrorClass::Cancelled),
            CatalogError::Timeout { .. } => Some(ErrorClass::Timeout),
            CatalogError::Joined(_) => None,
        }
    }

    /// Whether this error itself (not a joined cause) has `class`
    pub fn is(&self, class: ErrorClass) -> bool {
        self.class() == Some(class)
    }

    /// Whether this error, or any cause of a joined error, has `class`
    pub fn contains(&self, class: ErrorClass) -> bool {
        match self {
            CatalogError::Joined(causes) => causes.iter().any(|cause| cause.contains(class)),
            other => other.is(class),
        }
    }

    /// Cancellation and timeouts are never reinterpreted
    pub fn is_interruption(&self) -> bool {
        matches!(self, CatalogError::Cancelled | CatalogError::Timeout { .. })
    }

    /// Combine `primary` with additional failures
    ///
    /// Returns `primary` unchanged when there is nothing to add.
    pub fn join(primary: CatalogError, others: Vec<CatalogError>) -> CatalogError {
        if others.is_empty() {
            return primary;
        }
        let mut causes = Vec::with_capacity(others.len() + 1);
        for error in std::iter::once(primary).chain(others) {
            match error {
                CatalogError::Joined(inner) => causes.extend(inner.0),
                other => causes.push(other),
            }
        }
        CatalogError::Joined(Causes(causes))
    }

    /// Every cause, flattened; a single error is its own only cause
    pub fn causes(&self) -> Vec<&CatalogError> {
        match self {
            CatalogError::Joined(causes) => causes.iter().collect(),
            other => vec![other],
        }
    }
}

/// Ordered causes of a joined error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Causes(Vec<CatalogError>);

impl Causes {
    pub fn iter(&self) -> impl Iterator<Item = &CatalogError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Causes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {}", i + 1, cause)?;
        }
        Ok(())
    }
}
