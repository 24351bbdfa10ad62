// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Database statements

use std::sync::LazyLock;

use warehouse_sql_ir::{AccountObjectIdentifier, FieldDirective, Quoting, Rule, Schema, Value};

use super::{TagAssociation, tag_directive};

/// `CLONE <source>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseClone {
    pub source: AccountObjectIdentifier,
}

static DATABASE_CLONE: LazyLock<Schema<DatabaseClone>> = LazyLock::new(|| {
    Schema::<DatabaseClone>::builder("DatabaseClone")
        .identifier("source", |o| Value::identifier(&o.source))
        .rule(Rule::valid_identifier("source"))
        .build()
});

statement!(DatabaseClone, DATABASE_CLONE);

/// Options for `CREATE DATABASE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabaseOptions {
    pub or_replace: Option<bool>,
    pub transient: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub clone: Option<DatabaseClone>,
    pub data_retention_time_in_days: Option<u32>,
    pub max_data_extension_time_in_days: Option<u32>,
    pub default_ddl_collation: Option<String>,
    pub comment: Option<String>,
    pub tag: Vec<TagAssociation>,
}

impl CreateDatabaseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            or_replace: None,
            transient: None,
            if_not_exists: None,
            name,
            clone: None,
            data_retention_time_in_days: None,
            max_data_extension_time_in_days: None,
            default_ddl_collation: None,
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

    pub fn transient(mut self) -> Self {
        self.transient = Some(true);
        self
    }

    pub fn cloned_from(mut self, source: AccountObjectIdentifier) -> Self {
        self.clone = Some(DatabaseClone { source });
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

static CREATE_DATABASE: LazyLock<Schema<CreateDatabaseOptions>> = LazyLock::new(|| {
    Schema::<CreateDatabaseOptions>::builder("CreateDatabaseOptions")
        .fixed("CREATE")
        .keyword("or_replace", "OR REPLACE", |o| Value::flag(o.or_replace))
        .keyword("transient", "TRANSIENT", |o| Value::flag(o.transient))
        .fixed("DATABASE")
        .keyword("if_not_exists", "IF NOT EXISTS", |o| {
            Value::flag(o.if_not_exists)
        })
        .identifier("name", |o| Value::identifier(&o.name))
        .keyword("clone", "CLONE", |o| Value::nested(&o.clone))
        .field(
            "data_retention_time_in_days",
            FieldDirective::parameter("DATA_RETENTION_TIME_IN_DAYS"),
            |o| Value::optional_number(o.data_retention_time_in_days),
        )
        .field(
            "max_data_extension_time_in_days",
            FieldDirective::parameter("MAX_DATA_EXTENSION_TIME_IN_DAYS"),
            |o| Value::optional_number(o.max_data_extension_time_in_days),
        )
        .field(
            "default_ddl_collation",
            FieldDirective::parameter("DEFAULT_DDL_COLLATION").quoted(Quoting::Single),
            |o| Value::optional_text(&o.default_ddl_collation),
        )
        .field(
            "comment",
            FieldDirective::parameter("COMMENT").quoted(Quoting::Single),
            |o| Value::optional_text(&o.comment),
        )
        .field("tag", tag_directive(), |o| Value::list(&o.tag))
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::conflicting(&["or_replace", "if_not_exists"]))
        .rule(Rule::nested("clone", Vec::new()))
        .rule(Rule::nested("tag", Vec::new()))
        .build()
});

statement!(CreateDatabaseOptions, CREATE_DATABASE);

/// `SET` clause of `ALTER DATABASE`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSet {
    pub data_retention_time_in_days: Option<u32>,
    pub max_data_extension_time_in_days: Option<u32>,
    pub default_ddl_collation: Option<String>,
    pub comment: Option<String>,
}

static DATABASE_SET: LazyLock<Schema<DatabaseSet>> = LazyLock::new(|| {
    Schema::<DatabaseSet>::builder("DatabaseSet")
        .field(
            "data_retention_time_in_days",
            FieldDirective::parameter("DATA_RETENTION_TIME_IN_DAYS"),
            |o| Value::optional_number(o.data_retention_time_in_days),
        )
        .field(
            "max_data_extension_time_in_days",
            FieldDirective::parameter("MAX_DATA_EXTENSION_TIME_IN_DAYS"),
            |o| Value::optional_number(o.max_data_extension_time_in_days),
        )
        .field(
            "default_ddl_collation",
            FieldDirective::parameter("DEFAULT_DDL_COLLATION").quoted(Quoting::Single),
            |o| Value::optional_text(&o.default_ddl_collation),
        )
        .field(
            "comment",
            FieldDirective::parameter("COMMENT").quoted(Quoting::Single),
            |o| Value::optional_text(&o.comment),
        )
        .build()
});

statement!(DatabaseSet, DATABASE_SET);

/// Property that `ALTER DATABASE ... UNSET` can reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseProperty {
    DataRetentionTimeInDays,
    MaxDataExtensionTimeInDays,
    DefaultDdlCollation,
    Comment,
}

impl DatabaseProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseProperty::DataRetentionTimeInDays => "DATA_RETENTION_TIME_IN_DAYS",
            DatabaseProperty::MaxDataExtensionTimeInDays => "MAX_DATA_EXTENSION_TIME_IN_DAYS",
            DatabaseProperty::DefaultDdlCollation => "DEFAULT_DDL_COLLATION",
            DatabaseProperty::Comment => "COMMENT",
        }
    }
}

/// Options for `ALTER DATABASE`; exactly one action may be set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterDatabaseOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub new_name: Option<AccountObjectIdentifier>,
    pub swap_with: Option<AccountObjectIdentifier>,
    pub set: Option<DatabaseSet>,
    pub unset: Vec<DatabaseProperty>,
}

impl AlterDatabaseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            if_exists: None,
            name,
            new_name: None,
            swap_with: None,
            set: None,
            unset: Vec::new(),
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = Some(true);
        self
    }

    pub fn rename_to(mut self, new_name: AccountObjectIdentifier) -> Self {
        self.new_name = Some(new_name);
        self
    }

    pub fn swap_with(mut self, other: AccountObjectIdentifier) -> Self {
        self.swap_with = Some(other);
        self
    }

    pub fn set(mut self, set: DatabaseSet) -> Self {
        self.set = Some(set);
        self
    }

    pub fn unset(mut self, properties: &[DatabaseProperty]) -> Self {
        self.unset = properties.to_vec();
        self
    }
}

static ALTER_DATABASE: LazyLock<Schema<AlterDatabaseOptions>> = LazyLock::new(|| {
    Schema::<AlterDatabaseOptions>::builder("AlterDatabaseOptions")
        .fixed("ALTER DATABASE")
        .keyword("if_exists", "IF EXISTS", |o| Value::flag(o.if_exists))
        .identifier("name", |o| Value::identifier(&o.name))
        .field(
            "new_name",
            FieldDirective::named_identifier("RENAME TO").without_equals(),
            |o| Value::optional_identifier(&o.new_name),
        )
        .field(
            "swap_with",
            FieldDirective::named_identifier("SWAP WITH").without_equals(),
            |o| Value::optional_identifier(&o.swap_with),
        )
        .keyword("set", "SET", |o| Value::nested(&o.set))
        .keyword("unset", "UNSET", |o| {
            Value::List(o.unset.iter().map(|p| Value::text(p.as_str())).collect())
        })
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::optional_identifier("new_name"))
        .rule(Rule::optional_identifier("swap_with"))
        .rule(Rule::exactly_one_of(&["new_name", "swap_with", "set", "unset"]))
        .rule(Rule::nested(
            "set",
            vec![Rule::at_least_one_of(&[
                "data_retention_time_in_days",
                "max_data_extension_time_in_days",
                "default_ddl_collation",
                "comment",
            ])],
        ))
        .build()
});

statement!(AlterDatabaseOptions, ALTER_DATABASE);

/// Options for `DROP DATABASE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDatabaseOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub cascade: Option<bool>,
    pub restrict: Option<bool>,
}

impl DropDatabaseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
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

static DROP_DATABASE: LazyLock<Schema<DropDatabaseOptions>> = LazyLock::new(|| {
    Schema::<DropDatabaseOptions>::builder("DropDatabaseOptions")
        .fixed("DROP DATABASE")
        .keyword("if_exists", "IF EXISTS", |o| Value::flag(o.if_exists))
        .identifier("name", |o| Value::identifier(&o.name))
        .keyword("cascade", "CASCADE", |o| Value::flag(o.cascade))
        .keyword("restrict", "RESTRICT", |o| Value::flag(o.restrict))
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::conflicting(&["cascade", "restrict"]))
        .build()
});

statement!(DropDatabaseOptions, DROP_DATABASE);
drop_statement!(DropDatabaseOptions);
