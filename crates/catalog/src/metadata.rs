// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata returned by catalog lookups
//!
//! Only the containers the safe wrappers probe are described here: databases and schemas.

use serde::{Deserialize, Serialize};
use warehouse_sql_ir::{AccountObjectIdentifier, DatabaseObjectIdentifier};

/// A database as reported by `SHOW DATABASES`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseMetadata {
    pub name: AccountObjectIdentifier,
    pub owner: Option<String>,
    pub comment: Option<String>,
    pub is_transient: bool,
}

impl DatabaseMetadata {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
            owner: None,
            comment: None,
            is_transient: false,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn transient(mut self) -> Self {
        self.is_transient = true;
        self
    }
}

/// A schema as reported by `SHOW SCHEMAS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMetadata {
    pub name: DatabaseObjectIdentifier,
    pub owner: Option<String>,
    pub comment: Option<String>,
    pub is_managed_access: bool,
}

impl SchemaMetadata {
    pub fn new(name: DatabaseObjectIdentifier) -> Self {
        Self {
            name,
            owner: None,
            comment: None,
            is_managed_access: false,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn managed_access(mut self) -> Self {
        self.is_managed_access = true;
        self
    }

    /// The database that owns this schema
    pub fn database(&self) -> AccountObjectIdentifier {
        self.name.database_id()
    }
}
