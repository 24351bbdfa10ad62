// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample objects

use warehouse_sql_catalog::{CatalogError, StaticCatalog};
use warehouse_sql_ir::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, Identifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

/// Sample identifiers and backend errors
pub struct Fixtures;

impl Fixtures {
    // ===== Identifiers =====

    pub fn database() -> AccountObjectIdentifier {
        AccountObjectIdentifier::new("DB1")
    }

    pub fn schema() -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new("DB1", "SCHEMA1")
    }

    pub fn table() -> SchemaObjectIdentifier {
        SchemaObjectIdentifier::new("DB1", "SCHEMA1", "TABLE1")
    }

    pub fn function() -> SchemaObjectIdentifierWithArguments {
        SchemaObjectIdentifierWithArguments::new("DB1", "SCHEMA1", "ADD_ONE", ["NUMBER"])
    }

    pub fn table_id() -> Identifier {
        Self::table().into()
    }

    // ===== Catalogs =====

    /// `DB1` containing `DB1.SCHEMA1`
    pub fn hierarchy() -> StaticCatalog {
        StaticCatalog::new().with_schema(Self::schema())
    }

    // ===== Backend errors =====

    /// The ambiguous failure reported for a missing object or ancestor
    pub fn not_exist_or_not_authorized(object: &str) -> CatalogError {
        CatalogError::from_backend(
            "002003",
            format!(
                "SQL compilation error:\nObject '{}' does not exist or not authorized.",
                object
            ),
        )
    }

    /// The ambiguous failure some lookups report instead
    pub fn operation_cannot_be_performed() -> CatalogError {
        CatalogError::from_backend(
            "002043",
            "SQL compilation error:\nObject does not exist, or operation cannot be performed.",
        )
    }

    pub fn syntax_error() -> CatalogError {
        CatalogError::from_backend(
            "001003",
            "SQL compilation error:\nsyntax error line 1 at position 0 unexpected 'DORP'.",
        )
    }
}
