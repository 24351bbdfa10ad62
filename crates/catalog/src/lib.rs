// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Warehouse SQL - Catalog Layer
//!
//! This crate covers everything that happens after a statement is compiled:
//!
//! - **Errors**: [`CatalogError`] decodes backend failures into recognised classes and
//!   joins several failures into one multi-cause error
//! - **Probes**: the [`Catalog`] trait looks up databases and schemas
//! - **Context**: [`OperationContext`] bounds every call with cancellation and a timeout
//! - **Safe wrappers**: [`safe_drop`] and [`safe_show_by_id`] disambiguate "does not exist
//!   or not authorized" failures by probing the ancestors of the target object
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warehouse_sql_catalog::{safe_drop, OperationContext, StaticCatalog};
//! use warehouse_sql_ir::{Identifier, SchemaObjectIdentifier};
//!
//! let id = Identifier::from(SchemaObjectIdentifier::new("DB1", "SCHEMA1", "TABLE1"));
//! safe_drop(&ctx, &id, &catalog, executor.execute("DROP TABLE DB1.SCHEMA1.TABLE1")).await?;
//! ```
//!
//! ## Implementing the Catalog Trait
//!
//! ```rust,ignore
//! use warehouse_sql_catalog::{Catalog, CatalogResult, DatabaseMetadata, SchemaMetadata};
//! use async_trait::async_trait;
//!
//! struct MyCatalog;
//!
//! #[async_trait]
//! impl Catalog for MyCatalog {
//!     async fn show_database(&self, id: &AccountObjectIdentifier) -> CatalogResult<DatabaseMetadata> {
//!         // Your implementation here
//!     }
//!
//!     async fn show_schema(&self, id: &DatabaseObjectIdentifier) -> CatalogResult<SchemaMetadata> {
//!         // Your implementation here
//!     }
//! }
//! ```

pub mod context;
pub mod error;
pub mod metadata;
pub mod safe;
pub mod r#static;
pub mod r#trait;

// Re-exports
pub use context::OperationContext;
pub use error::{CatalogError, CatalogResult, Causes, ErrorClass};
pub use metadata::{DatabaseMetadata, SchemaMetadata};
pub use r#static::StaticCatalog;
pub use r#trait::Catalog;
pub use safe::{probe_ancestor, safe_drop, safe_show_by_id};
