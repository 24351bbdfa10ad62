// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Warehouse SQL - Validation Engine
//!
//! This crate checks the declarative [`Rule`](warehouse_sql_ir::Rule)s of an options
//! value before it is compiled.
//!
//! ## Overview
//!
//! Validation never stops at the first failure. Every rule declared by the schema is
//! evaluated and all violations are returned together, so a caller (or a test) can
//! inspect the complete set at once:
//!
//! ```text
//! CreateTableOptions: invalid object identifier in field [name]
//! CreateTableOptions.columns[1]: field [data_type] should be set
//! ```
//!
//! ## Presence
//!
//! A field is present when its value is set: optional values are `Some`, lists are
//! non-empty and embedded structures have at least one field set. `Some(false)` counts
//! as present.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warehouse_sql_validation::{validate, ViolationKind};
//!
//! if let Err(err) = validate(&options) {
//!     assert!(err.contains(ViolationKind::ConflictingFields, "or_replace"));
//! }
//! ```

pub mod engine;
pub mod error;
pub mod violation;

pub use engine::{collect_violations, validate, validate_root};
pub use error::{ValidationError, ValidationResult};
pub use violation::{Violation, ViolationKind, ViolationSet};
