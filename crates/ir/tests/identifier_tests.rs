// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for identifier parsing and rendering

use warehouse_sql_ir::{
    AncestorProbe, DatabaseObjectIdentifier, Identifier, IdentifierKind, ObjectIdentifier,
    SchemaObjectIdentifier, SchemaObjectIdentifierWithArguments,
};

#[test]
fn test_quoted_parts_may_contain_dots_and_spaces() {
    let id: SchemaObjectIdentifier = r#""raw.db"."my schema".EVENTS"#.parse().unwrap();
    assert_eq!(id.database_name(), "raw.db");
    assert_eq!(id.schema_name(), "my schema");
    assert_eq!(id.name(), "EVENTS");
    assert_eq!(id.fully_qualified_name(), r#""raw.db"."my schema".EVENTS"#);
}

#[test]
fn test_parsed_identifier_drives_probes() {
    let id = Identifier::parse("db1.schema1.add_one(varchar, number(38, 0))").unwrap();
    assert_eq!(id.kind(), IdentifierKind::SchemaWithArguments);
    assert_eq!(
        id.to_string(),
        "DB1.SCHEMA1.ADD_ONE(VARCHAR, NUMBER(38, 0))"
    );
    assert_eq!(
        id.ancestor_probes(),
        vec![
            AncestorProbe::Schema(DatabaseObjectIdentifier::new("DB1", "SCHEMA1")),
            AncestorProbe::Database(warehouse_sql_ir::AccountObjectIdentifier::new("DB1")),
        ]
    );
}

#[test]
fn test_signature_is_part_of_identity() {
    let varchar = SchemaObjectIdentifierWithArguments::new("DB1", "S", "FN", ["VARCHAR"]);
    let number = SchemaObjectIdentifierWithArguments::new("DB1", "S", "FN", ["NUMBER"]);
    assert_ne!(varchar, number);
    assert_eq!(varchar.without_arguments(), number.without_arguments());
}

#[test]
fn test_round_trip_through_text() {
    for text in [
        "WH1",
        r#""Mixed".SCHEMA1"#,
        r#"DB1."TABLE"."a""b""#,
        "DB1.S.FN()",
    ] {
        let id = Identifier::parse(text).unwrap();
        assert_eq!(Identifier::parse(&id.fully_qualified_name()).unwrap(), id);
    }
}
