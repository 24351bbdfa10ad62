// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Table statements

use std::sync::LazyLock;

use warehouse_sql_ir::{FieldDirective, Quoting, Rule, Schema, SchemaObjectIdentifier, Value};

use super::{TagAssociation, tag_directive};

/// One column of a `CREATE TABLE` column list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: String,
    pub collate: Option<String>,
    pub default: Option<String>,
    pub not_null: Option<bool>,
    pub masking_policy: Option<SchemaObjectIdentifier>,
    pub comment: Option<String>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            collate: None,
            default: None,
            not_null: None,
            masking_policy: None,
            comment: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = Some(true);
        self
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default = Some(expression.into());
        self
    }

    pub fn with_collate(mut self, collation: impl Into<String>) -> Self {
        self.collate = Some(collation.into());
        self
    }

    pub fn with_masking_policy(mut self, policy: SchemaObjectIdentifier) -> Self {
        self.masking_policy = Some(policy);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

static COLUMN_DEFINITION: LazyLock<Schema<ColumnDefinition>> = LazyLock::new(|| {
    Schema::<ColumnDefinition>::builder("ColumnDefinition")
        .field(
            "name",
            FieldDirective::parameter("").quoted(Quoting::Double),
            |o| Value::text(&o.name),
        )
        .field("data_type", FieldDirective::parameter(""), |o| {
            Value::text(&o.data_type)
        })
        .field(
            "collate",
            FieldDirective::parameter("COLLATE")
                .quoted(Quoting::Single)
                .without_equals(),
            |o| Value::optional_text(&o.collate),
        )
        .field(
            "default",
            FieldDirective::parameter("DEFAULT").without_equals(),
            |o| Value::optional_text(&o.default),
        )
        .keyword("not_null", "NOT NULL", |o| Value::flag(o.not_null))
        .field(
            "masking_policy",
            FieldDirective::named_identifier("WITH MASKING POLICY").without_equals(),
            |o| Value::optional_identifier(&o.masking_policy),
        )
        .field(
            "comment",
            FieldDirective::parameter("COMMENT")
                .quoted(Quoting::Single)
                .without_equals(),
            |o| Value::optional_text(&o.comment),
        )
        .rule(Rule::optional_identifier("masking_policy"))
        .build()
});

statement!(ColumnDefinition, COLUMN_DEFINITION);

/// Options for `CREATE TABLE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableOptions {
    pub or_replace: Option<bool>,
    pub transient: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: SchemaObjectIdentifier,
    pub columns: Vec<ColumnDefinition>,
    pub cluster_by: Vec<String>,
    pub data_retention_time_in_days: Option<u32>,
    pub change_tracking: Option<bool>,
    pub copy_grants: Option<bool>,
    pub comment: Option<String>,
    pub tag: Vec<TagAssociation>,
}

impl CreateTableOptions {
    pub fn new(name: SchemaObjectIdentifier, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            or_replace: None,
            transient: None,
            if_not_exists: None,
            name,
            columns,
            cluster_by: Vec::new(),
            data_retention_time_in_days: None,
            change_tracking: None,
            copy_grants: None,
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

    pub fn cluster_by<I, S>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cluster_by = expressions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_change_tracking(mut self, enabled: bool) -> Self {
        self.change_tracking = Some(enabled);
        self
    }

    pub fn copy_grants(mut self) -> Self {
        self.copy_grants = Some(true);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

static CREATE_TABLE: LazyLock<Schema<CreateTableOptions>> = LazyLock::new(|| {
    Schema::<CreateTableOptions>::builder("CreateTableOptions")
        .fixed("CREATE")
        .keyword("or_replace", "OR REPLACE", |o| Value::flag(o.or_replace))
        .keyword("transient", "TRANSIENT", |o| Value::flag(o.transient))
        .fixed("TABLE")
        .keyword("if_not_exists", "IF NOT EXISTS", |o| {
            Value::flag(o.if_not_exists)
        })
        .identifier("name", |o| Value::identifier(&o.name))
        .field("columns", FieldDirective::parameter(""), |o| {
            Value::list(&o.columns)
        })
        .field(
            "cluster_by",
            FieldDirective::parameter("CLUSTER BY").without_equals(),
            |o| Value::texts(&o.cluster_by),
        )
        .field(
            "data_retention_time_in_days",
            FieldDirective::parameter("DATA_RETENTION_TIME_IN_DAYS"),
            |o| Value::optional_number(o.data_retention_time_in_days),
        )
        .field(
            "change_tracking",
            FieldDirective::parameter("CHANGE_TRACKING"),
            |o| Value::flag(o.change_tracking),
        )
        .keyword("copy_grants", "COPY GRANTS", |o| Value::flag(o.copy_grants))
        .field(
            "comment",
            FieldDirective::parameter("COMMENT").quoted(Quoting::Single),
            |o| Value::optional_text(&o.comment),
        )
        .field("tag", tag_directive(), |o| Value::list(&o.tag))
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::conflicting(&["or_replace", "if_not_exists"]))
        .rule(Rule::required("columns"))
        .rule(Rule::nested("columns", Vec::new()))
        .rule(Rule::nested("tag", Vec::new()))
        .build()
});

statement!(CreateTableOptions, CREATE_TABLE);

/// Options for `DROP TABLE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTableOptions {
    pub if_exists: Option<bool>,
    pub name: SchemaObjectIdentifier,
    pub cascade: Option<bool>,
    pub restrict: Option<bool>,
}

impl DropTableOptions {
    pub fn new(name: SchemaObjectIdentifier) -> Self {
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

static DROP_TABLE: LazyLock<Schema<DropTableOptions>> = LazyLock::new(|| {
    Schema::<DropTableOptions>::builder("DropTableOptions")
        .fixed("DROP TABLE")
        .keyword("if_exists", "IF EXISTS", |o| Value::flag(o.if_exists))
        .identifier("name", |o| Value::identifier(&o.name))
        .keyword("cascade", "CASCADE", |o| Value::flag(o.cascade))
        .keyword("restrict", "RESTRICT", |o| Value::flag(o.restrict))
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::conflicting(&["cascade", "restrict"]))
        .build()
});

statement!(DropTableOptions, DROP_TABLE);
drop_statement!(DropTableOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_sql_compiler::compile;
    use warehouse_sql_validation::{ViolationKind, validate};

    fn orders() -> SchemaObjectIdentifier {
        SchemaObjectIdentifier::new("DB1", "PUBLIC", "ORDERS")
    }

    #[test]
    fn test_create_table_with_columns() {
        let opts = CreateTableOptions::new(
            orders(),
            vec![
                ColumnDefinition::new("id", "NUMBER(38,0)").not_null(),
                ColumnDefinition::new("status", "VARCHAR")
                    .with_default("'new'")
                    .with_comment("order state"),
            ],
        )
        .or_replace()
        .cluster_by(["id"])
        .with_change_tracking(true);

        assert!(validate(&opts).is_ok());
        assert_eq!(
            compile(&opts).unwrap(),
            "CREATE OR REPLACE TABLE DB1.PUBLIC.ORDERS \
             (\"id\" NUMBER(38,0) NOT NULL, \"status\" VARCHAR DEFAULT 'new' COMMENT 'order state') \
             CLUSTER BY (id) CHANGE_TRACKING = TRUE"
        );
    }

    #[test]
    fn test_column_masking_policy() {
        let column = ColumnDefinition::new("email", "VARCHAR")
            .with_masking_policy(SchemaObjectIdentifier::new("DB1", "POLICIES", "MASK_EMAIL"));
        assert_eq!(
            compile(&column).unwrap(),
            "\"email\" VARCHAR WITH MASKING POLICY DB1.POLICIES.MASK_EMAIL"
        );
    }

    #[test]
    fn test_create_table_requires_columns() {
        let err = validate(&CreateTableOptions::new(orders(), Vec::new())).unwrap_err();
        let set = err.violations().unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(ViolationKind::Required, "columns"));
    }

    #[test]
    fn test_create_table_checks_each_column() {
        let opts = CreateTableOptions::new(
            orders(),
            vec![
                ColumnDefinition::new("id", "NUMBER"),
                ColumnDefinition::new("email", "VARCHAR")
                    .with_masking_policy(SchemaObjectIdentifier::empty()),
            ],
        );
        let err = validate(&opts).unwrap_err();
        let set = err.violations().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.violations()[0].path, "CreateTableOptions.columns[1]");
    }

    #[test]
    fn test_drop_table() {
        let opts = DropTableOptions::new(orders()).if_exists();
        assert_eq!(compile(&opts).unwrap(), "DROP TABLE IF EXISTS DB1.PUBLIC.ORDERS");
    }
}
