// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQL execution collaborator
//!
//! Connection handling and result decoding live outside this crate. Implementations
//! should decode backend failures with
//! [`CatalogError::from_backend`](warehouse_sql_catalog::CatalogError::from_backend) so the
//! safe wrappers can recognise ambiguous "not found" errors.

use warehouse_sql_catalog::CatalogResult;

/// Executes one compiled SQL statement
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, sql: &str) -> CatalogResult<()>;
}
