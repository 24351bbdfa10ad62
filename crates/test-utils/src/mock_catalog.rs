// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Scripted catalog implementation for testing
//!
//! Answers probes from an in-memory registry, lets tests force specific probe failures,
//! and records every probe in the order it was made.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use warehouse_sql_catalog::{
    Catalog, CatalogError, CatalogResult, DatabaseMetadata, SchemaMetadata, StaticCatalog,
};
use warehouse_sql_ir::{AccountObjectIdentifier, AncestorProbe, DatabaseObjectIdentifier};

/// Catalog with scripted failures and a probe log
#[derive(Debug, Default)]
pub struct ScriptedCatalog {
    registry: StaticCatalog,
    failures: HashMap<AncestorProbe, CatalogError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<AncestorProbe>>,
}

impl ScriptedCatalog {
    /// Create a catalog answering from `registry`
    pub fn new(registry: StaticCatalog) -> Self {
        Self {
            registry,
            ..Default::default()
        }
    }

    /// Make the given probe fail with `error` regardless of the registry
    pub fn failing(mut self, probe: AncestorProbe, error: CatalogError) -> Self {
        self.failures.insert(probe, error);
        self
    }

    /// Sleep before answering each probe
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Probes made so far, in order
    pub fn calls(&self) -> Vec<AncestorProbe> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    async fn record(&self, probe: AncestorProbe) -> Option<CatalogError> {
        tracing::trace!(probe = %probe, "scripted catalog probe");
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(probe.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.failures.get(&probe).cloned()
    }
}

#[async_trait::async_trait]
impl Catalog for ScriptedCatalog {
    async fn show_database(&self, id: &AccountObjectIdentifier) -> CatalogResult<DatabaseMetadata> {
        if let Some(err) = self.record(AncestorProbe::Database(id.clone())).await {
            return Err(err);
        }
        self.registry.show_database(id).await
    }

    async fn show_schema(&self, id: &DatabaseObjectIdentifier) -> CatalogResult<SchemaMetadata> {
        if let Some(err) = self.record(AncestorProbe::Schema(id.clone())).await {
            return Err(err);
        }
        self.registry.show_schema(id).await
    }
}

/// Builder for creating scripted catalogs with a fluent API
#[derive(Debug, Default)]
pub struct ScriptedCatalogBuilder {
    registry: StaticCatalog,
    failures: Vec<(AncestorProbe, CatalogError)>,
    delay: Option<Duration>,
}

impl ScriptedCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a database
    pub fn database(mut self, name: &str) -> Self {
        self.registry = self.registry.with_database(AccountObjectIdentifier::new(name));
        self
    }

    /// Register a schema (and its database)
    pub fn schema(mut self, database: &str, schema: &str) -> Self {
        self.registry = self
            .registry
            .with_schema(DatabaseObjectIdentifier::new(database, schema));
        self
    }

    pub fn fail_database(mut self, name: &str, error: CatalogError) -> Self {
        self.failures.push((
            AncestorProbe::Database(AccountObjectIdentifier::new(name)),
            error,
        ));
        self
    }

    pub fn fail_schema(mut self, database: &str, schema: &str, error: CatalogError) -> Self {
        self.failures.push((
            AncestorProbe::Schema(DatabaseObjectIdentifier::new(database, schema)),
            error,
        ));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn build(self) -> ScriptedCatalog {
        let mut catalog = ScriptedCatalog::new(self.registry);
        for (probe, error) in self.failures {
            catalog = catalog.failing(probe, error);
        }
        if let Some(delay) = self.delay {
            catalog = catalog.with_delay(delay);
        }
        catalog
    }
}
