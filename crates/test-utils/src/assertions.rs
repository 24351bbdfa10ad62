// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Custom assertions for validation and catalog errors

use warehouse_sql_catalog::{CatalogError, ErrorClass};
use warehouse_sql_validation::{ValidationError, ViolationKind};

/// Assertion helpers for statement tests
pub struct StatementAssertions;

impl StatementAssertions {
    /// Assert that `err` holds exactly the given violations, each named by kind and one
    /// of its fields
    pub fn assert_violations(err: &ValidationError, expected: &[(ViolationKind, &str)]) {
        let set = match err.violations() {
            Some(set) => set,
            None => panic!("Expected violations, found {:?}", err),
        };
        assert_eq!(
            set.len(),
            expected.len(),
            "Expected {} violations, found:\n{}",
            expected.len(),
            set
        );
        for (kind, field) in expected {
            assert!(
                set.contains(*kind, field),
                "Missing {:?} violation for field '{}' in:\n{}",
                kind,
                field,
                set
            );
        }
    }

    /// Assert the class of each cause, in order
    pub fn assert_causes(err: &CatalogError, expected: &[ErrorClass]) {
        let classes: Vec<_> = err.causes().iter().map(|cause| cause.class()).collect();
        let expected: Vec<_> = expected.iter().copied().map(Some).collect();
        assert_eq!(classes, expected, "Cause classes mismatch for {:?}", err);
    }
}

/// Shorthand for [`StatementAssertions::assert_violations`]
pub fn assert_violations(err: &ValidationError, expected: &[(ViolationKind, &str)]) {
    StatementAssertions::assert_violations(err, expected)
}
