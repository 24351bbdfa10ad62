// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Warehouse SQL - Intermediate Representation
//!
//! This crate provides the input language shared by the statement compiler and
//! the validation engine:
//! - Hierarchical object identifiers (account, database, schema, schema with arguments)
//! - Field directives describing how a field contributes to compiled SQL
//! - Statement schemas binding option structures to their directives and rules
//! - Validation rule declarations
//!
//! ## Pipeline
//!
//! ```text
//! Typed options → Schema (directives + rules) → Validation → Compilation → Executor
//! ```

pub mod directive;
pub mod identifier;
pub mod options;
pub mod rule;

// Re-export commonly used types
pub use directive::{EqualsStyle, FieldDirective, Quoting, Separator, Wrap};
pub use identifier::{
    AccountObjectIdentifier, AncestorProbe, DatabaseObjectIdentifier, Identifier,
    IdentifierError, IdentifierKind, IdentifierResult, ObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};
pub use options::{Entry, Field, Getter, Node, Schema, SchemaBuilder, Statement, Value};
pub use rule::Rule;
