// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Statement text produced for each object type through `Client::prepare`

use std::sync::Arc;

use warehouse_sql_catalog::StaticCatalog;
use warehouse_sql_ir::{AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier};
use warehouse_sql_sdk::objects::TagAssociation;
use warehouse_sql_sdk::objects::databases::{AlterDatabaseOptions, CreateDatabaseOptions};
use warehouse_sql_sdk::objects::schemas::DropSchemaOptions;
use warehouse_sql_sdk::objects::show::{In, ShowObjectType, ShowOptions};
use warehouse_sql_sdk::objects::tables::{ColumnDefinition, CreateTableOptions};
use warehouse_sql_sdk::objects::warehouses::{CreateWarehouseOptions, WarehouseSize};
use warehouse_sql_sdk::{Client, SdkConfig, SdkError};
use warehouse_sql_test_utils::{RecordingExecutor, assert_violations};
use warehouse_sql_validation::ViolationKind;

fn client() -> Client {
    Client::new(
        SdkConfig::new("acct"),
        Arc::new(RecordingExecutor::new()),
        Arc::new(StaticCatalog::new()),
    )
    .unwrap()
}

#[test]
fn test_create_database_with_tags() {
    let mut opts = CreateDatabaseOptions::new(AccountObjectIdentifier::new("DB1"))
        .cloned_from(AccountObjectIdentifier::new("DB0"));
    opts.data_retention_time_in_days = Some(1);
    opts.tag = vec![
        TagAssociation::new(
            SchemaObjectIdentifier::new("DB1", "PUBLIC", "COST_CENTER"),
            "finance",
        ),
        TagAssociation::new(SchemaObjectIdentifier::new("DB1", "PUBLIC", "owner"), "data"),
    ];

    let client = client();
    let sql = client.prepare(&opts).unwrap();
    assert_eq!(
        sql,
        "CREATE DATABASE DB1 CLONE DB0 DATA_RETENTION_TIME_IN_DAYS = 1 \
         TAG (DB1.PUBLIC.COST_CENTER = 'finance', DB1.PUBLIC.\"owner\" = 'data')"
    );
    // Compiling twice yields identical text.
    assert_eq!(client.prepare(&opts).unwrap(), sql);
}

#[test]
fn test_reserved_and_mixed_case_names_are_quoted() {
    let opts = DropSchemaOptions::new(DatabaseObjectIdentifier::new("Analytics", "TABLE")).cascade();
    assert_eq!(
        client().prepare(&opts).unwrap(),
        "DROP SCHEMA \"Analytics\".\"TABLE\" CASCADE"
    );
}

#[test]
fn test_show_tables_in_schema() {
    let opts = ShowOptions::new(ShowObjectType::Tables)
        .like("foo%")
        .in_scope(In::schema(DatabaseObjectIdentifier::new("DB1", "PUBLIC")))
        .limit(10);
    assert_eq!(
        client().prepare(&opts).unwrap(),
        "SHOW TABLES LIKE 'foo%' IN SCHEMA DB1.PUBLIC LIMIT 10"
    );
}

#[test]
fn test_create_table_collects_every_violation() {
    let opts = CreateTableOptions::new(SchemaObjectIdentifier::empty(), Vec::new())
        .or_replace()
        .if_not_exists();

    let err = client().prepare(&opts).unwrap_err();
    let SdkError::Validation(err) = err else {
        panic!("Expected validation error");
    };
    assert_violations(
        &err,
        &[
            (ViolationKind::InvalidIdentifier, "name"),
            (ViolationKind::ConflictingFields, "or_replace"),
            (ViolationKind::Required, "columns"),
        ],
    );
}

#[test]
fn test_create_table_column_options() {
    let opts = CreateTableOptions::new(
        SchemaObjectIdentifier::new("DB1", "PUBLIC", "USERS"),
        vec![ColumnDefinition::new("name", "VARCHAR").with_collate("en-ci")],
    )
    .copy_grants()
    .with_comment("people");
    assert_eq!(
        client().prepare(&opts).unwrap(),
        "CREATE TABLE DB1.PUBLIC.USERS (\"name\" VARCHAR COLLATE 'en-ci') COPY GRANTS COMMENT = 'people'"
    );
}

#[test]
fn test_alter_database_with_two_actions() {
    let opts = AlterDatabaseOptions::new(AccountObjectIdentifier::new("DB1"))
        .rename_to(AccountObjectIdentifier::new("DB2"))
        .swap_with(AccountObjectIdentifier::new("DB3"));
    let SdkError::Validation(err) = client().prepare(&opts).unwrap_err() else {
        panic!("Expected validation error");
    };
    assert_violations(&err, &[(ViolationKind::ExactlyOneOf, "swap_with")]);
}

#[test]
fn test_create_warehouse() {
    let opts = CreateWarehouseOptions::new(AccountObjectIdentifier::new("WH"))
        .or_replace()
        .with_size(WarehouseSize::Large);
    assert_eq!(
        client().prepare(&opts).unwrap(),
        "CREATE OR REPLACE WAREHOUSE WH WAREHOUSE_SIZE = LARGE"
    );
}
