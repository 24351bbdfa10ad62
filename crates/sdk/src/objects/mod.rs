// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Statement Options
//!
//! Typed options for the statements the client can run. Each type declares its SQL
//! layout and validation rules once, in a [`Schema`], and is compiled by the statement
//! compiler.
//!
//! | Module | Statements |
//! |--------|------------|
//! | [`databases`] | `CREATE DATABASE`, `ALTER DATABASE`, `DROP DATABASE` |
//! | [`schemas`] | `CREATE SCHEMA`, `DROP SCHEMA` |
//! | [`tables`] | `CREATE TABLE`, `DROP TABLE` |
//! | [`warehouses`] | `CREATE WAREHOUSE`, `DROP WAREHOUSE` |
//! | [`functions`] | `CREATE FUNCTION`, `DROP FUNCTION` |
//! | [`show`] | `SHOW <objects>` |

use std::sync::LazyLock;

use warehouse_sql_ir::{
    FieldDirective, Identifier, Quoting, Rule, Schema, SchemaObjectIdentifier, Statement, Value,
};

macro_rules! statement {
    ($options:ty, $schema:ident) => {
        impl warehouse_sql_ir::Statement for $options {
            fn schema() -> &'static warehouse_sql_ir::Schema<Self> {
                &$schema
            }
        }
    };
}

macro_rules! drop_statement {
    ($options:ty) => {
        impl crate::objects::DropStatement for $options {
            fn target(&self) -> warehouse_sql_ir::Identifier {
                warehouse_sql_ir::Identifier::from(self.name.clone())
            }
        }
    };
}

pub mod databases;
pub mod functions;
pub mod schemas;
pub mod show;
pub mod tables;
pub mod warehouses;

/// A `DROP` statement that names the object it removes
///
/// The safe drop wrapper probes the ancestors of [`DropStatement::target`], so the
/// identifier always matches the statement text.
pub trait DropStatement: Statement {
    fn target(&self) -> Identifier;
}

/// `tag_name = 'value'` inside a `TAG (...)` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAssociation {
    pub name: SchemaObjectIdentifier,
    pub value: String,
}

impl TagAssociation {
    pub fn new(name: SchemaObjectIdentifier, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

static TAG_ASSOCIATION: LazyLock<Schema<TagAssociation>> = LazyLock::new(|| {
    Schema::<TagAssociation>::builder("TagAssociation")
        .identifier("name", |o| Value::identifier(&o.name))
        .fixed("=")
        .field(
            "value",
            FieldDirective::parameter("").quoted(Quoting::Single),
            |o| Value::text(&o.value),
        )
        .rule(Rule::valid_identifier("name"))
        .build()
});

statement!(TagAssociation, TAG_ASSOCIATION);

/// Declaration of a `TAG (...)` field
pub(crate) const fn tag_directive() -> FieldDirective {
    FieldDirective::parameter("TAG").without_equals()
}
