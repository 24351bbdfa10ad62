// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error type aggregating every failure the client can report

use warehouse_sql_catalog::{CatalogError, ErrorClass};
use warehouse_sql_compiler::CompileError;
use warehouse_sql_ir::IdentifierError;
use warehouse_sql_validation::ValidationError;

use crate::config::ConfigError;

/// Result type alias for client operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors returned by the client
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum SdkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// Options failed validation; nothing was executed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Execution or catalog failure
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl SdkError {
    /// Whether this is an execution failure containing `class`
    pub fn contains(&self, class: ErrorClass) -> bool {
        match self {
            SdkError::Catalog(err) => err.contains(class),
            _ => false,
        }
    }
}
