// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog trait for container lookups
//!
//! The safe wrappers disambiguate errors by asking the catalog whether the ancestors of an
//! object still exist.

use warehouse_sql_ir::{AccountObjectIdentifier, DatabaseObjectIdentifier};

use crate::error::CatalogResult;
use crate::metadata::{DatabaseMetadata, SchemaMetadata};

/// Catalog trait for database and schema lookups
///
/// Implementations typically issue `SHOW DATABASES LIKE ...` / `SHOW SCHEMAS LIKE ... IN
/// DATABASE ...` against the backend.
///
/// # Examples
///
/// ```rust,ignore
/// use warehouse_sql_catalog::{Catalog, ErrorClass};
///
/// match catalog.show_database(&id).await {
///     Ok(db) => println!("{} exists", db.name),
///     Err(err) if err.is(ErrorClass::ObjectNotFound) => println!("{} is gone", id),
///     Err(err) => return Err(err),
/// }
/// ```
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Look up a database
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ObjectNotFound` if the database does not exist.
    async fn show_database(&self, id: &AccountObjectIdentifier) -> CatalogResult<DatabaseMetadata>;

    /// Look up a schema
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ObjectNotFound` if the schema or its database does not exist.
    async fn show_schema(&self, id: &DatabaseObjectIdentifier) -> CatalogResult<SchemaMetadata>;
}
