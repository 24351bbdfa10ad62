// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Warehouse SQL - SDK
//!
//! Ties the statement compiler, the validation engine and the safe wrappers together
//! behind a [`Client`].
//!
//! - **Configuration**: [`SdkConfig`] with session defaults, timeout and logging settings
//! - **Logging**: [`logging::init`] installs a `tracing` subscriber
//! - **Execution**: the [`Executor`] trait runs compiled SQL; transport is out of scope
//! - **Options**: typed statement options in [`objects`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use warehouse_sql_catalog::StaticCatalog;
//! use warehouse_sql_ir::AccountObjectIdentifier;
//! use warehouse_sql_sdk::objects::databases::CreateDatabaseOptions;
//! use warehouse_sql_sdk::{Client, SdkConfig};
//!
//! let client = Client::new(SdkConfig::new("myorg-account1"), executor, Arc::new(StaticCatalog::new()))?;
//! let ctx = client.context();
//! client
//!     .execute(&ctx, &CreateDatabaseOptions::new(AccountObjectIdentifier::new("DB1")).if_not_exists())
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod objects;

// Re-exports
pub use client::Client;
pub use config::{ConfigError, SdkConfig};
pub use error::{SdkError, SdkResult};
pub use executor::Executor;
