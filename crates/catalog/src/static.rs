// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Catalog
//!
//! In-memory registry of databases and schemas, used for demos and tests without a
//! backend.
//!
//! ## Usage
//!
//! ```rust
//! use warehouse_sql_catalog::StaticCatalog;
//! use warehouse_sql_ir::{AccountObjectIdentifier, DatabaseObjectIdentifier};
//!
//! let catalog = StaticCatalog::new()
//!     .with_database(AccountObjectIdentifier::new("DB1"))
//!     .with_schema(DatabaseObjectIdentifier::new("DB1", "PUBLIC"));
//! assert!(catalog.has_schema(&DatabaseObjectIdentifier::new("DB1", "PUBLIC")));
//! ```

use async_trait::async_trait;
use std::collections::HashMap;

use warehouse_sql_ir::{AccountObjectIdentifier, DatabaseObjectIdentifier};

use crate::metadata::{DatabaseMetadata, SchemaMetadata};
use crate::{Catalog, CatalogError, CatalogResult};

/// Static catalog with predefined databases and schemas
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    databases: HashMap<AccountObjectIdentifier, DatabaseMetadata>,
    schemas: HashMap<DatabaseObjectIdentifier, SchemaMetadata>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database(self, id: AccountObjectIdentifier) -> Self {
        self.with_database_metadata(DatabaseMetadata::new(id))
    }

    pub fn with_database_metadata(mut self, metadata: DatabaseMetadata) -> Self {
        self.databases.insert(metadata.name.clone(), metadata);
        self
    }

    /// Register a schema, creating its database when missing
    pub fn with_schema(self, id: DatabaseObjectIdentifier) -> Self {
        self.with_schema_metadata(SchemaMetadata::new(id))
    }

    pub fn with_schema_metadata(mut self, metadata: SchemaMetadata) -> Self {
        let database = metadata.database();
        self.databases
            .entry(database.clone())
            .or_insert_with(|| DatabaseMetadata::new(database));
        self.schemas.insert(metadata.name.clone(), metadata);
        self
    }

    /// Remove a database together with its schemas
    pub fn remove_database(&mut self, id: &AccountObjectIdentifier) -> Option<DatabaseMetadata> {
        self.schemas.retain(|schema, _| schema.database_id() != *id);
        self.databases.remove(id)
    }

    pub fn remove_schema(&mut self, id: &DatabaseObjectIdentifier) -> Option<SchemaMetadata> {
        self.schemas.remove(id)
    }

    pub fn has_database(&self, id: &AccountObjectIdentifier) -> bool {
        self.databases.contains_key(id)
    }

    pub fn has_schema(&self, id: &DatabaseObjectIdentifier) -> bool {
        self.schemas.contains_key(id)
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn show_database(&self, id: &AccountObjectIdentifier) -> CatalogResult<DatabaseMetadata> {
        self.databases
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(id))
    }

    async fn show_schema(&self, id: &DatabaseObjectIdentifier) -> CatalogResult<SchemaMetadata> {
        self.schemas
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(id))
    }
}
