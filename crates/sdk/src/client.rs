// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Client
//!
//! Runs options through validation and compilation, then hands the SQL to the
//! [`Executor`]. Validation always completes before anything is executed; a value with
//! violations never reaches the executor.
//!
//! ```text
//! options ─validate─▶ ─compile─▶ SQL ─execute─▶ Executor
//!                                     └─(drop)─▶ safe_drop ─probe─▶ Catalog
//! ```

use std::sync::Arc;

use warehouse_sql_catalog::{
    Catalog, DatabaseMetadata, OperationContext, SchemaMetadata, safe_drop, safe_show_by_id,
};
use warehouse_sql_compiler::Compiler;
use warehouse_sql_ir::{AccountObjectIdentifier, DatabaseObjectIdentifier, Identifier, Node};

use crate::config::SdkConfig;
use crate::error::SdkResult;
use crate::executor::Executor;
use crate::objects::DropStatement;

/// Entry point for executing typed statements
pub struct Client {
    config: SdkConfig,
    executor: Arc<dyn Executor>,
    catalog: Arc<dyn Catalog>,
    compiler: Compiler,
}

impl Client {
    /// Create a client; fails if the configuration is invalid
    pub fn new(
        config: SdkConfig,
        executor: Arc<dyn Executor>,
        catalog: Arc<dyn Catalog>,
    ) -> SdkResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            executor,
            catalog,
            compiler: Compiler::new(),
        })
    }

    pub fn with_compiler(mut self, compiler: Compiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// A fresh context bounded by the configured timeout
    pub fn context(&self) -> OperationContext {
        self.config.operation_context()
    }

    /// Validate and compile without executing
    pub fn prepare(&self, options: &dyn Node) -> SdkResult<String> {
        warehouse_sql_validation::validate(options)?;
        Ok(self.compiler.compile(options)?)
    }

    /// Validate, compile and execute one statement
    pub async fn execute(
        &self,
        ctx: &OperationContext,
        options: &(dyn Node + Sync),
    ) -> SdkResult<()> {
        let sql = self.prepare(options)?;
        self.log_statement(options.object_name(), &sql);
        ctx.run(self.executor.execute(&sql)).await?;
        Ok(())
    }

    /// Execute a drop, succeeding when the object's container is already gone
    ///
    /// Ancestors are probed for the object the options name.
    pub async fn drop_safely<T>(&self, ctx: &OperationContext, options: &T) -> SdkResult<()>
    where
        T: DropStatement + Sync,
    {
        let id = options.target();
        let sql = self.prepare(options)?;
        self.log_statement(options.object_name(), &sql);
        safe_drop(ctx, &id, self.catalog.as_ref(), self.executor.execute(&sql)).await?;
        Ok(())
    }

    /// Look up a database, enriching ambiguous failures with ancestor context
    pub async fn show_database_safely(
        &self,
        ctx: &OperationContext,
        id: &AccountObjectIdentifier,
    ) -> SdkResult<DatabaseMetadata> {
        let target = Identifier::from(id.clone());
        let found = safe_show_by_id(
            ctx,
            &target,
            self.catalog.as_ref(),
            self.catalog.show_database(id),
        )
        .await?;
        Ok(found)
    }

    /// Look up a schema, enriching ambiguous failures with ancestor context
    pub async fn show_schema_safely(
        &self,
        ctx: &OperationContext,
        id: &DatabaseObjectIdentifier,
    ) -> SdkResult<SchemaMetadata> {
        let target = Identifier::from(id.clone());
        let found = safe_show_by_id(
            ctx,
            &target,
            self.catalog.as_ref(),
            self.catalog.show_schema(id),
        )
        .await?;
        Ok(found)
    }

    fn log_statement(&self, object: &str, sql: &str) {
        if self.config.log_queries {
            tracing::info!(object, sql, "executing statement");
        } else {
            tracing::debug!(object, sql, "executing statement");
        }
    }
}
