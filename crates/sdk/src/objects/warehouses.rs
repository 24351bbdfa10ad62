// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Warehouse statements

use std::sync::LazyLock;

use warehouse_sql_ir::{AccountObjectIdentifier, FieldDirective, Quoting, Rule, Schema, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarehouseType {
    Standard,
    SnowparkOptimized,
}

impl WarehouseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarehouseType::Standard => "STANDARD",
            WarehouseType::SnowparkOptimized => "SNOWPARK-OPTIMIZED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarehouseSize {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
    XXXLarge,
    X4Large,
    X5Large,
    X6Large,
}

impl WarehouseSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarehouseSize::XSmall => "XSMALL",
            WarehouseSize::Small => "SMALL",
            WarehouseSize::Medium => "MEDIUM",
            WarehouseSize::Large => "LARGE",
            WarehouseSize::XLarge => "XLARGE",
            WarehouseSize::XXLarge => "XXLARGE",
            WarehouseSize::XXXLarge => "XXXLARGE",
            WarehouseSize::X4Large => "X4LARGE",
            WarehouseSize::X5Large => "X5LARGE",
            WarehouseSize::X6Large => "X6LARGE",
        }
    }
}

/// Options for `CREATE WAREHOUSE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWarehouseOptions {
    pub or_replace: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub warehouse_type: Option<WarehouseType>,
    pub warehouse_size: Option<WarehouseSize>,
    pub max_cluster_count: Option<u32>,
    pub min_cluster_count: Option<u32>,
    pub auto_suspend: Option<u32>,
    pub auto_resume: Option<bool>,
    pub initially_suspended: Option<bool>,
    pub resource_monitor: Option<AccountObjectIdentifier>,
    pub comment: Option<String>,
}

impl CreateWarehouseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            or_replace: None,
            if_not_exists: None,
            name,
            warehouse_type: None,
            warehouse_size: None,
            max_cluster_count: None,
            min_cluster_count: None,
            auto_suspend: None,
            auto_resume: None,
            initially_suspended: None,
            resource_monitor: None,
            comment: None,
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

    pub fn with_type(mut self, warehouse_type: WarehouseType) -> Self {
        self.warehouse_type = Some(warehouse_type);
        self
    }

    pub fn with_size(mut self, size: WarehouseSize) -> Self {
        self.warehouse_size = Some(size);
        self
    }

    pub fn with_cluster_count(mut self, min: u32, max: u32) -> Self {
        self.min_cluster_count = Some(min);
        self.max_cluster_count = Some(max);
        self
    }

    /// Suspend after `seconds` of inactivity and resume on demand
    pub fn with_auto_suspend(mut self, seconds: u32) -> Self {
        self.auto_suspend = Some(seconds);
        self.auto_resume = Some(true);
        self
    }

    pub fn initially_suspended(mut self, suspended: bool) -> Self {
        self.initially_suspended = Some(suspended);
        self
    }

    pub fn with_resource_monitor(mut self, monitor: AccountObjectIdentifier) -> Self {
        self.resource_monitor = Some(monitor);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

static CREATE_WAREHOUSE: LazyLock<Schema<CreateWarehouseOptions>> = LazyLock::new(|| {
    Schema::<CreateWarehouseOptions>::builder("CreateWarehouseOptions")
        .fixed("CREATE")
        .keyword("or_replace", "OR REPLACE", |o| Value::flag(o.or_replace))
        .fixed("WAREHOUSE")
        .keyword("if_not_exists", "IF NOT EXISTS", |o| {
            Value::flag(o.if_not_exists)
        })
        .identifier("name", |o| Value::identifier(&o.name))
        .field(
            "warehouse_type",
            FieldDirective::parameter("WAREHOUSE_TYPE").quoted(Quoting::Single),
            |o| {
                o.warehouse_type
                    .map_or(Value::Absent, |t| Value::text(t.as_str()))
            },
        )
        .field(
            "warehouse_size",
            FieldDirective::parameter("WAREHOUSE_SIZE"),
            |o| {
                o.warehouse_size
                    .map_or(Value::Absent, |s| Value::text(s.as_str()))
            },
        )
        .field(
            "max_cluster_count",
            FieldDirective::parameter("MAX_CLUSTER_COUNT"),
            |o| Value::optional_number(o.max_cluster_count),
        )
        .field(
            "min_cluster_count",
            FieldDirective::parameter("MIN_CLUSTER_COUNT"),
            |o| Value::optional_number(o.min_cluster_count),
        )
        .field(
            "auto_suspend",
            FieldDirective::parameter("AUTO_SUSPEND"),
            |o| Value::optional_number(o.auto_suspend),
        )
        .field("auto_resume", FieldDirective::parameter("AUTO_RESUME"), |o| {
            Value::flag(o.auto_resume)
        })
        .field(
            "initially_suspended",
            FieldDirective::parameter("INITIALLY_SUSPENDED"),
            |o| Value::flag(o.initially_suspended),
        )
        .field(
            "resource_monitor",
            FieldDirective::named_identifier("RESOURCE_MONITOR"),
            |o| Value::optional_identifier(&o.resource_monitor),
        )
        .field(
            "comment",
            FieldDirective::parameter("COMMENT").quoted(Quoting::Single),
            |o| Value::optional_text(&o.comment),
        )
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::optional_identifier("resource_monitor"))
        .rule(Rule::conflicting(&["or_replace", "if_not_exists"]))
        .build()
});

statement!(CreateWarehouseOptions, CREATE_WAREHOUSE);

/// Options for `DROP WAREHOUSE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropWarehouseOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
}

impl DropWarehouseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            if_exists: None,
            name,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = Some(true);
        self
    }
}

static DROP_WAREHOUSE: LazyLock<Schema<DropWarehouseOptions>> = LazyLock::new(|| {
    Schema::<DropWarehouseOptions>::builder("DropWarehouseOptions")
        .fixed("DROP WAREHOUSE")
        .keyword("if_exists", "IF EXISTS", |o| Value::flag(o.if_exists))
        .identifier("name", |o| Value::identifier(&o.name))
        .rule(Rule::valid_identifier("name"))
        .build()
});

statement!(DropWarehouseOptions, DROP_WAREHOUSE);
drop_statement!(DropWarehouseOptions);
