// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Schema statements

use std::sync::LazyLock;

use warehouse_sql_ir::{DatabaseObjectIdentifier, FieldDirective, Quoting, Rule, Schema, Value};

use super::{TagAssociation, tag_directive};

/// Options for `CREATE SCHEMA`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSchemaOptions {
    pub or_replace: Option<bool>,
    pub transient: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: DatabaseObjectIdentifier,
    pub clone: Option<DatabaseObjectIdentifier>,
    pub with_managed_access: Option<bool>,
    pub data_retention_time_in_days: Option<u32>,
    pub comment: Option<String>,
    pub tag: Vec<TagAssociation>,
}

impl CreateSchemaOptions {
    pub fn new(name: DatabaseObjectIdentifier) -> Self {
        Self {
            or_replace: None,
            transient: None,
            if_not_exists: None,
            name,
            clone: None,
            with_managed_access: None,
            data_retention_time_in_days: None,
            comment: None,
            tag: Vec::new(),
        }
    }

    pub fn or_replace(mut self) -> Self {
        self.or_replace = Some(true);
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = Some(true);
        self
    }

    pub fn managed_access(mut self) -> Self {
        self.with_managed_access = Some(true);
        self
    }

    pub fn with_tag(mut self, tag: TagAssociation) -> Self {
        self.tag.push(tag);
        self
    }
}

static CREATE_SCHEMA: LazyLock<Schema<CreateSchemaOptions>> = LazyLock::new(|| {
    Schema::<CreateSchemaOptions>::builder("CreateSchemaOptions")
        .fixed("CREATE")
        .keyword("or_replace", "OR REPLACE", |o| Value::flag(o.or_replace))
        .keyword("transient", "TRANSIENT", |o| Value::flag(o.transient))
        .fixed("SCHEMA")
        .keyword("if_not_exists", "IF NOT EXISTS", |o| {
            Value::flag(o.if_not_exists)
        })
        .identifier("name", |o| Value::identifier(&o.name))
        .field(
            "clone",
            FieldDirective::named_identifier("CLONE").without_equals(),
            |o| Value::optional_identifier(&o.clone),
        )
        .keyword("with_managed_access", "WITH MANAGED ACCESS", |o| {
            Value::flag(o.with_managed_access)
        })
        .field(
            "data_retention_time_in_days",
            FieldDirective::parameter("DATA_RETENTION_TIME_IN_DAYS"),
            |o| Value::optional_number(o.data_retention_time_in_days),
        )
        .field(
            "comment",
            FieldDirective::parameter("COMMENT").quoted(Quoting::Single),
            |o| Value::optional_text(&o.comment),
        )
        .field("tag", tag_directive(), |o| Value::list(&o.tag))
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::optional_identifier("clone"))
        .rule(Rule::conflicting(&["or_replace", "if_not_exists"]))
        .rule(Rule::nested("tag", Vec::new()))
        .build()
});

statement!(CreateSchemaOptions, CREATE_SCHEMA);

/// Options for `DROP SCHEMA`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSchemaOptions {
    pub if_exists: Option<bool>,
    pub name: DatabaseObjectIdentifier,
    pub cascade: Option<bool>,
    pub restrict: Option<bool>,
}

impl DropSchemaOptions {
    pub fn new(name: DatabaseObjectIdentifier) -> Self {
        Self {
            if_exists: None,
            name,
            cascade: None,
            restrict: None,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = Some(true);
        self
    }

    pub fn cascade(mut self) -> Self {
        self.cascade = Some(true);
        self
    }

    pub fn restrict(mut self) -> Self {
        self.restrict = Some(true);
        self
    }
}

static DROP_SCHEMA: LazyLock<Schema<DropSchemaOptions>> = LazyLock::new(|| {
    Schema::<DropSchemaOptions>::builder("DropSchemaOptions")
        .fixed("DROP SCHEMA")
        .keyword("if_exists", "IF EXISTS", |o| Value::flag(o.if_exists))
        .identifier("name", |o| Value::identifier(&o.name))
        .keyword("cascade", "CASCADE", |o| Value::flag(o.cascade))
        .keyword("restrict", "RESTRICT", |o| Value::flag(o.restrict))
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::conflicting(&["cascade", "restrict"]))
        .build()
});

statement!(DropSchemaOptions, DROP_SCHEMA);
drop_statement!(DropSchemaOptions);
