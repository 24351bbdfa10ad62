// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SDK Configuration
//!
//! Session defaults, timeouts and logging settings for a [`Client`](crate::Client).
//!
//! ## Example
//!
//! ```rust
//! use warehouse_sql_sdk::SdkConfig;
//!
//! let config = SdkConfig::new("myorg-account1")
//!     .with_role("SYSADMIN")
//!     .with_query_timeout_secs(60);
//! assert!(config.validate().is_ok());
//! ```
//!
//! The same settings can be read from JSON, either directly or from the `"warehouseSql"`
//! section of a larger settings document:
//!
//! ```json
//! { "warehouseSql": { "account": "myorg-account1", "logQueries": true } }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use warehouse_sql_catalog::OperationContext;
use warehouse_sql_ir::{AccountObjectIdentifier, IdentifierError};

const SETTINGS_SECTION: &str = "warehouseSql";

/// Main SDK configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SdkConfig {
    /// Account identifier, e.g. `myorg-account1`
    pub account: String,

    /// Default role for the session
    pub role: Option<String>,

    /// Default warehouse for the session
    pub warehouse: Option<String>,

    /// Default database for the session
    pub default_database: Option<String>,

    /// Timeout applied to each statement and catalog probe (seconds)
    pub query_timeout_secs: u64,

    /// Log every executed statement at `info` instead of `debug`
    pub log_queries: bool,

    /// `tracing` filter directives used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            role: None,
            warehouse: None,
            default_database: None,
            query_timeout_secs: 30,
            log_queries: false,
            log_filter: "info".to_string(),
        }
    }
}

impl SdkConfig {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_warehouse(mut self, warehouse: impl Into<String>) -> Self {
        self.warehouse = Some(warehouse.into());
        self
    }

    pub fn with_default_database(mut self, database: impl Into<String>) -> Self {
        self.default_database = Some(database.into());
        self
    }

    pub fn with_query_timeout_secs(mut self, secs: u64) -> Self {
        self.query_timeout_secs = secs;
        self
    }

    pub fn with_log_queries(mut self, enabled: bool) -> Self {
        self.log_queries = enabled;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Validate the configuration
    ///
    /// Checks that:
    /// - The account is set
    /// - The timeout is positive
    /// - Default warehouse and database parse as identifiers
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.account.trim().is_empty() {
            return Err(ConfigError::MissingAccount);
        }

        if self.query_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        self.default_database_id()?;
        self.warehouse_id()?;

        Ok(())
    }

    /// Parsed default database, if configured
    pub fn default_database_id(&self) -> Result<Option<AccountObjectIdentifier>, ConfigError> {
        parse_optional("defaultDatabase", self.default_database.as_deref())
    }

    /// Parsed default warehouse, if configured
    pub fn warehouse_id(&self) -> Result<Option<AccountObjectIdentifier>, ConfigError> {
        parse_optional("warehouse", self.warehouse.as_deref())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// A fresh operation context bounded by the configured timeout
    pub fn operation_context(&self) -> OperationContext {
        OperationContext::new().with_timeout(self.query_timeout())
    }

    /// Parse a configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Parse the `"warehouseSql"` section of a settings payload
    ///
    /// Returns `None` when the section is missing or malformed.
    pub fn from_settings(settings: &Value) -> Option<Self> {
        let section = settings.get(SETTINGS_SECTION)?;
        serde_json::from_value(section.clone()).ok()
    }
}

fn parse_optional(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<AccountObjectIdentifier>, ConfigError> {
    value
        .map(|text| {
            text.parse::<AccountObjectIdentifier>()
                .map_err(|source| ConfigError::InvalidIdentifier { field, source })
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing account identifier
    #[error("Account identifier is required")]
    MissingAccount,

    /// Zero timeout
    #[error("Query timeout must be greater than zero")]
    InvalidTimeout,

    /// A default object name is not a valid identifier
    #[error("Invalid identifier in '{field}': {source}")]
    InvalidIdentifier {
        field: &'static str,
        #[source]
        source: IdentifierError,
    },

    /// Malformed configuration document
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}
