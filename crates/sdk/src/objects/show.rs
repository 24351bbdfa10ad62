// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! `SHOW` statements
//!
//! One options type covers every object kind; the kind only changes the noun.
//!
//! ```rust
//! use warehouse_sql_ir::DatabaseObjectIdentifier;
//! use warehouse_sql_sdk::objects::show::{In, ShowObjectType, ShowOptions};
//!
//! let opts = ShowOptions::new(ShowObjectType::Tables)
//!     .like("foo%")
//!     .in_scope(In::schema(DatabaseObjectIdentifier::new("DB1", "PUBLIC")));
//! assert_eq!(
//!     warehouse_sql_compiler::compile(&opts).unwrap(),
//!     "SHOW TABLES LIKE 'foo%' IN SCHEMA DB1.PUBLIC"
//! );
//! ```

use std::sync::LazyLock;

use warehouse_sql_ir::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, FieldDirective, Quoting, Rule, Schema,
    Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowObjectType {
    Databases,
    Schemas,
    Tables,
    Warehouses,
    UserFunctions,
}

impl ShowObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowObjectType::Databases => "DATABASES",
            ShowObjectType::Schemas => "SCHEMAS",
            ShowObjectType::Tables => "TABLES",
            ShowObjectType::Warehouses => "WAREHOUSES",
            ShowObjectType::UserFunctions => "USER FUNCTIONS",
        }
    }
}

/// `IN { ACCOUNT | DATABASE <db> | SCHEMA <db>.<schema> }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct In {
    pub account: Option<bool>,
    pub database: Option<AccountObjectIdentifier>,
    pub schema: Option<DatabaseObjectIdentifier>,
}

impl In {
    pub fn account() -> Self {
        Self {
            account: Some(true),
            ..Default::default()
        }
    }

    pub fn database(id: AccountObjectIdentifier) -> Self {
        Self {
            database: Some(id),
            ..Default::default()
        }
    }

    pub fn schema(id: DatabaseObjectIdentifier) -> Self {
        Self {
            schema: Some(id),
            ..Default::default()
        }
    }
}

static IN: LazyLock<Schema<In>> = LazyLock::new(|| {
    Schema::<In>::builder("In")
        .keyword("account", "ACCOUNT", |o| Value::flag(o.account))
        .field(
            "database",
            FieldDirective::named_identifier("DATABASE").without_equals(),
            |o| Value::optional_identifier(&o.database),
        )
        .field(
            "schema",
            FieldDirective::named_identifier("SCHEMA").without_equals(),
            |o| Value::optional_identifier(&o.schema),
        )
        .rule(Rule::exactly_one_of(&["account", "database", "schema"]))
        .rule(Rule::optional_identifier("database"))
        .rule(Rule::optional_identifier("schema"))
        .build()
});

statement!(In, IN);

/// Options for `SHOW <objects>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowOptions {
    pub terse: Option<bool>,
    pub object_type: ShowObjectType,
    pub like: Option<String>,
    pub in_scope: Option<In>,
    pub starts_with: Option<String>,
    pub limit: Option<u32>,
}

impl ShowOptions {
    pub fn new(object_type: ShowObjectType) -> Self {
        Self {
            terse: None,
            object_type,
            like: None,
            in_scope: None,
            starts_with: None,
            limit: None,
        }
    }

    pub fn terse(mut self) -> Self {
        self.terse = Some(true);
        self
    }

    /// Filter by a case-insensitive pattern using `%` and `_` wildcards
    pub fn like(mut self, pattern: impl Into<String>) -> Self {
        self.like = Some(pattern.into());
        self
    }

    pub fn in_scope(mut self, scope: In) -> Self {
        self.in_scope = Some(scope);
        self
    }

    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    pub fn limit(mut self, rows: u32) -> Self {
        self.limit = Some(rows);
        self
    }
}

static SHOW: LazyLock<Schema<ShowOptions>> = LazyLock::new(|| {
    Schema::<ShowOptions>::builder("ShowOptions")
        .fixed("SHOW")
        .keyword("terse", "TERSE", |o| Value::flag(o.terse))
        .keyword("object_type", "", |o| Value::text(o.object_type.as_str()))
        .field(
            "like",
            FieldDirective::parameter("LIKE")
                .quoted(Quoting::Single)
                .without_equals(),
            |o| Value::optional_text(&o.like),
        )
        .keyword("in_scope", "IN", |o| Value::nested(&o.in_scope))
        .field(
            "starts_with",
            FieldDirective::parameter("STARTS WITH")
                .quoted(Quoting::Single)
                .without_equals(),
            |o| Value::optional_text(&o.starts_with),
        )
        .field(
            "limit",
            FieldDirective::parameter("LIMIT").without_equals(),
            |o| Value::optional_number(o.limit),
        )
        .rule(Rule::nested("in_scope", Vec::new()))
        .build()
});

statement!(ShowOptions, SHOW);
