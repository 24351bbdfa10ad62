// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the statement compiler

use std::sync::LazyLock;

use warehouse_sql_compiler::{CompileError, Compiler, compile, compile_root};
use warehouse_sql_ir::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, FieldDirective, Quoting, Schema,
    SchemaObjectIdentifier, Statement, Value,
};

// ---------------------------------------------------------------------------
// CREATE DATABASE
// ---------------------------------------------------------------------------

struct CloneSource {
    source: AccountObjectIdentifier,
}

static CLONE_SOURCE: LazyLock<Schema<CloneSource>> = LazyLock::new(|| {
    Schema::<CloneSource>::builder("CloneSource")
        .identifier("source", |o| Value::identifier(&o.source))
        .build()
});

impl Statement for CloneSource {
    fn schema() -> &'static Schema<Self> {
        &CLONE_SOURCE
    }
}

struct TagAssociation {
    name: SchemaObjectIdentifier,
    value: String,
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
        .build()
});

impl Statement for TagAssociation {
    fn schema() -> &'static Schema<Self> {
        &TAG_ASSOCIATION
    }
}

struct CreateDatabase {
    or_replace: Option<bool>,
    transient: Option<bool>,
    if_not_exists: Option<bool>,
    name: AccountObjectIdentifier,
    clone: Option<CloneSource>,
    data_retention_time_in_days: Option<i32>,
    comment: Option<String>,
    tags: Vec<TagAssociation>,
}

impl CreateDatabase {
    fn new(name: &str) -> Self {
        Self {
            or_replace: None,
            transient: None,
            if_not_exists: None,
            name: AccountObjectIdentifier::new(name),
            clone: None,
            data_retention_time_in_days: None,
            comment: None,
            tags: Vec::new(),
        }
    }
}

static CREATE_DATABASE: LazyLock<Schema<CreateDatabase>> = LazyLock::new(|| {
    Schema::<CreateDatabase>::builder("CreateDatabaseOptions")
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
            "comment",
            FieldDirective::parameter("COMMENT").quoted(Quoting::Single),
            |o| Value::optional_text(&o.comment),
        )
        .field(
            "tags",
            FieldDirective::parameter("TAG").without_equals(),
            |o| Value::list(&o.tags),
        )
        .build()
});

impl Statement for CreateDatabase {
    fn schema() -> &'static Schema<Self> {
        &CREATE_DATABASE
    }
}

#[test]
fn test_minimal_create() {
    let opts = CreateDatabase::new("DB1");
    assert_eq!(compile(&opts).unwrap(), "CREATE DATABASE DB1");
}

#[test]
fn test_keywords_parameters_and_nested() {
    let mut opts = CreateDatabase::new("db1");
    opts.or_replace = Some(true);
    opts.transient = Some(false);
    opts.clone = Some(CloneSource {
        source: AccountObjectIdentifier::new("DB0"),
    });
    opts.data_retention_time_in_days = Some(1);
    opts.comment = Some("it's mine".to_string());

    assert_eq!(
        compile(&opts).unwrap(),
        r#"CREATE OR REPLACE DATABASE "db1" CLONE DB0 DATA_RETENTION_TIME_IN_DAYS = 1 COMMENT = 'it''s mine'"#
    );
}

#[test]
fn test_parameter_list_of_nested_values() {
    let mut opts = CreateDatabase::new("DB1");
    opts.tags = vec![
        TagAssociation {
            name: SchemaObjectIdentifier::new("DB1", "PUBLIC", "COST_CENTER"),
            value: "finance".to_string(),
        },
        TagAssociation {
            name: SchemaObjectIdentifier::new("DB1", "PUBLIC", "owner"),
            value: "data".to_string(),
        },
    ];

    assert_eq!(
        compile(&opts).unwrap(),
        r#"CREATE DATABASE DB1 TAG (DB1.PUBLIC.COST_CENTER = 'finance', DB1.PUBLIC."owner" = 'data')"#
    );
}

#[test]
fn test_if_not_exists() {
    let mut opts = CreateDatabase::new("DB1");
    opts.if_not_exists = Some(true);
    let sql = compile(&opts).unwrap();
    assert_eq!(sql, "CREATE DATABASE IF NOT EXISTS DB1");
    assert!(!sql.starts_with(' ') && !sql.ends_with(' '));
    assert!(!sql.contains("  "));
}

#[test]
fn test_compilation_is_deterministic() {
    let mut opts = CreateDatabase::new("DB1");
    opts.or_replace = Some(true);
    opts.comment = Some("c".to_string());
    let first = compile(&opts).unwrap();
    let second = compile(&opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_nil_root_is_usage_error() {
    assert_eq!(compile_root(None), Err(CompileError::NilOptions));
    let opts = CreateDatabase::new("DB1");
    assert_eq!(compile_root(Some(&opts)).unwrap(), "CREATE DATABASE DB1");
}

// ---------------------------------------------------------------------------
// SHOW
// ---------------------------------------------------------------------------

#[derive(Default)]
struct In {
    database: Option<AccountObjectIdentifier>,
    schema: Option<DatabaseObjectIdentifier>,
}

static IN: LazyLock<Schema<In>> = LazyLock::new(|| {
    Schema::<In>::builder("In")
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
        .build()
});

impl Statement for In {
    fn schema() -> &'static Schema<Self> {
        &IN
    }
}

#[derive(Default)]
struct ShowTables {
    terse: Option<bool>,
    like: Option<String>,
    in_scope: In,
    limit: Option<u32>,
}

static SHOW_TABLES: LazyLock<Schema<ShowTables>> = LazyLock::new(|| {
    Schema::<ShowTables>::builder("ShowTableOptions")
        .fixed("SHOW")
        .keyword("terse", "TERSE", |o| Value::flag(o.terse))
        .fixed("TABLES")
        .field(
            "like",
            FieldDirective::parameter("LIKE")
                .quoted(Quoting::Single)
                .without_equals(),
            |o| Value::optional_text(&o.like),
        )
        .keyword("in_scope", "IN", |o| Value::embedded(&o.in_scope))
        .field(
            "limit",
            FieldDirective::parameter("LIMIT").without_equals(),
            |o| Value::optional_number(o.limit),
        )
        .build()
});

impl Statement for ShowTables {
    fn schema() -> &'static Schema<Self> {
        &SHOW_TABLES
    }
}

#[test]
fn test_like_pattern_is_not_escaped() {
    let opts = ShowTables {
        like: Some("foo%".to_string()),
        ..Default::default()
    };
    let sql = compile(&opts).unwrap();
    assert!(sql.contains("LIKE 'foo%'"));
    assert_eq!(sql, "SHOW TABLES LIKE 'foo%'");
}

#[test]
fn test_embedded_value_only_emitted_when_set() {
    let opts = ShowTables {
        terse: Some(true),
        ..Default::default()
    };
    assert_eq!(compile(&opts).unwrap(), "SHOW TERSE TABLES");

    let opts = ShowTables {
        in_scope: In {
            schema: Some(DatabaseObjectIdentifier::new("DB1", "PUBLIC")),
            ..Default::default()
        },
        limit: Some(10),
        ..Default::default()
    };
    assert_eq!(
        compile(&opts).unwrap(),
        "SHOW TABLES IN SCHEMA DB1.PUBLIC LIMIT 10"
    );
}

#[derive(Default)]
struct WithClause {
    force: Option<bool>,
}

static WITH_CLAUSE: LazyLock<Schema<WithClause>> = LazyLock::new(|| {
    Schema::<WithClause>::builder("WithClause")
        .fixed("WITH")
        .keyword("force", "FORCE", |o| Value::flag(o.force))
        .build()
});

impl Statement for WithClause {
    fn schema() -> &'static Schema<Self> {
        &WITH_CLAUSE
    }
}

#[derive(Default)]
struct AlterWith {
    with: WithClause,
}

static ALTER_WITH: LazyLock<Schema<AlterWith>> = LazyLock::new(|| {
    Schema::<AlterWith>::builder("AlterWith")
        .fixed("ALTER X")
        .keyword("with", "", |o| Value::embedded(&o.with))
        .build()
});

impl Statement for AlterWith {
    fn schema() -> &'static Schema<Self> {
        &ALTER_WITH
    }
}

#[test]
fn test_embedded_static_tokens_always_emitted() {
    assert_eq!(compile(&AlterWith::default()).unwrap(), "ALTER X WITH");

    let opts = AlterWith {
        with: WithClause { force: Some(true) },
    };
    assert_eq!(compile(&opts).unwrap(), "ALTER X WITH FORCE");
}

// ---------------------------------------------------------------------------
// CREATE FUNCTION
// ---------------------------------------------------------------------------

struct FunctionArgument {
    name: String,
    data_type: String,
}

static FUNCTION_ARGUMENT: LazyLock<Schema<FunctionArgument>> = LazyLock::new(|| {
    Schema::<FunctionArgument>::builder("FunctionArgument")
        .keyword("name", "", |o| Value::text(&o.name))
        .keyword("data_type", "", |o| Value::text(&o.data_type))
        .build()
});

impl Statement for FunctionArgument {
    fn schema() -> &'static Schema<Self> {
        &FUNCTION_ARGUMENT
    }
}

struct CreateFunction {
    secure: Option<bool>,
    name: SchemaObjectIdentifier,
    arguments: Vec<FunctionArgument>,
    returns: String,
    strict: Option<bool>,
    body: String,
}

static CREATE_FUNCTION: LazyLock<Schema<CreateFunction>> = LazyLock::new(|| {
    Schema::<CreateFunction>::builder("CreateFunctionOptions")
        .fixed("CREATE")
        .keyword("secure", "SECURE", |o| Value::flag(o.secure))
        .fixed("FUNCTION")
        .identifier("name", |o| Value::identifier(&o.name))
        .field(
            "arguments",
            FieldDirective::list().parenthesized(),
            |o| Value::list(&o.arguments),
        )
        .field(
            "returns",
            FieldDirective::parameter("RETURNS").without_equals(),
            |o| Value::text(&o.returns),
        )
        .keyword("strict", "STRICT", |o| Value::flag(o.strict))
        .field(
            "body",
            FieldDirective::parameter("AS")
                .quoted(Quoting::DoubleDollar)
                .without_equals(),
            |o| Value::text(&o.body),
        )
        .build()
});

impl Statement for CreateFunction {
    fn schema() -> &'static Schema<Self> {
        &CREATE_FUNCTION
    }
}

#[test]
fn test_list_and_double_dollar_body() {
    let opts = CreateFunction {
        secure: Some(true),
        name: SchemaObjectIdentifier::new("DB1", "PUBLIC", "ADD_ONE"),
        arguments: vec![FunctionArgument {
            name: "X".to_string(),
            data_type: "NUMBER".to_string(),
        }],
        returns: "NUMBER".to_string(),
        strict: Some(false),
        body: "x + 1".to_string(),
    };
    assert_eq!(
        compile(&opts).unwrap(),
        "CREATE SECURE FUNCTION DB1.PUBLIC.ADD_ONE (X NUMBER) RETURNS NUMBER AS $$x + 1$$"
    );
}

#[test]
fn test_empty_list_contributes_nothing() {
    let opts = CreateFunction {
        secure: None,
        name: SchemaObjectIdentifier::new("DB1", "PUBLIC", "NOW_UTC"),
        arguments: Vec::new(),
        returns: "TIMESTAMP".to_string(),
        strict: None,
        body: "current_timestamp()".to_string(),
    };
    assert_eq!(
        compile(&opts).unwrap(),
        "CREATE FUNCTION DB1.PUBLIC.NOW_UTC RETURNS TIMESTAMP AS $$current_timestamp()$$"
    );
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

struct Misdeclared {
    name: String,
}

static MISDECLARED: LazyLock<Schema<Misdeclared>> = LazyLock::new(|| {
    Schema::<Misdeclared>::builder("Misdeclared")
        .fixed("DROP")
        .identifier("name", |o| Value::text(&o.name))
        .build()
});

impl Statement for Misdeclared {
    fn schema() -> &'static Schema<Self> {
        &MISDECLARED
    }
}

#[test]
fn test_directive_mismatch() {
    let opts = Misdeclared {
        name: "DB1".to_string(),
    };
    let err = compile(&opts).unwrap_err();
    assert!(matches!(err, CompileError::DirectiveMismatch { .. }));
    assert_eq!(err.field(), Some("name"));
    assert!(err.to_string().contains("Misdeclared.name"));
}

struct Chain {
    label: String,
    next: Option<Box<Chain>>,
}

static CHAIN: LazyLock<Schema<Chain>> = LazyLock::new(|| {
    Schema::<Chain>::builder("Chain")
        .keyword("label", "", |o| Value::text(&o.label))
        .keyword("next", "", |o| match &o.next {
            Some(next) => Value::Nested(&**next),
            None => Value::Absent,
        })
        .build()
});

impl Statement for Chain {
    fn schema() -> &'static Schema<Self> {
        &CHAIN
    }
}

fn chain(len: usize) -> Chain {
    let mut node = Chain {
        label: "L0".to_string(),
        next: None,
    };
    for i in 1..len {
        node = Chain {
            label: format!("L{}", i),
            next: Some(Box::new(node)),
        };
    }
    node
}

#[test]
fn test_recursion_limit() {
    assert_eq!(
        Compiler::with_max_depth(3).compile(&chain(3)).unwrap(),
        "L2 L1 L0"
    );

    let err = Compiler::with_max_depth(3).compile(&chain(4)).unwrap_err();
    assert!(matches!(
        err,
        CompileError::RecursionLimitExceeded { depth: 4, limit: 3, .. }
    ));
}
