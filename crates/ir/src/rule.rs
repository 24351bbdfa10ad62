// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Validation Rules
//!
//! Declarative presence/absence constraints over the fields of an options structure.
//! Rules are declared once per [`Schema`](crate::Schema) and evaluated by the validation
//! engine against every instance.
//!
//! | Rule | Violated when |
//! |------|---------------|
//! | `Required(f)` | `f` is absent |
//! | `ValidIdentifier(f)` | `f` is present but invalid, or absent and not optional |
//! | `ExactlyOneOf(fs)` | number of present fields ≠ 1 |
//! | `AtLeastOneOf(fs)` | no field is present |
//! | `ConflictingFields(fs)` | more than one field is present |
//! | `Nested(f, rules)` | any sub-rule is violated (only checked when `f` is present) |

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Rule {
    Required(&'static str),
    ValidIdentifier {
        field: &'static str,
        optional: bool,
    },
    ExactlyOneOf(Vec<&'static str>),
    AtLeastOneOf(Vec<&'static str>),
    ConflictingFields(Vec<&'static str>),
    Nested {
        field: &'static str,
        rules: Vec<Rule>,
    },
}

impl Rule {
    pub fn required(field: &'static str) -> Self {
        Rule::Required(field)
    }

    /// Identifier that must be set and valid
    pub fn valid_identifier(field: &'static str) -> Self {
        Rule::ValidIdentifier {
            field,
            optional: false,
        }
    }

    /// Identifier that must be valid when set
    pub fn optional_identifier(field: &'static str) -> Self {
        Rule::ValidIdentifier {
            field,
            optional: true,
        }
    }

    pub fn exactly_one_of(fields: &[&'static str]) -> Self {
        Rule::ExactlyOneOf(fields.to_vec())
    }

    pub fn at_least_one_of(fields: &[&'static str]) -> Self {
        Rule::AtLeastOneOf(fields.to_vec())
    }

    pub fn conflicting(fields: &[&'static str]) -> Self {
        Rule::ConflictingFields(fields.to_vec())
    }

    pub fn nested(field: &'static str, rules: Vec<Rule>) -> Self {
        Rule::Nested { field, rules }
    }

    /// Fields this rule reads directly (sub-rules excluded)
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Rule::Required(field) => vec![*field],
            Rule::ValidIdentifier { field, .. } => vec![*field],
            Rule::ExactlyOneOf(fields)
            | Rule::AtLeastOneOf(fields)
            | Rule::ConflictingFields(fields) => fields.clone(),
            Rule::Nested { field, .. } => vec![*field],
        }
    }
}
