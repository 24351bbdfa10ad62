// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Constraint violations and the ordered set that aggregates them

use std::fmt;

use serde::Serialize;

/// Kind of constraint that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    Required,
    InvalidIdentifier,
    ExactlyOneOf,
    AtLeastOneOf,
    ConflictingFields,
}

/// One failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,

    /// Dotted path of the structure the rule was declared on
    pub path: String,

    /// Every field named by the rule
    pub fields: Vec<String>,
}

impl Violation {
    pub fn new(kind: ViolationKind, path: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            kind,
            path: path.into(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
        }
    }

    pub fn names(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.join(" ");
        match self.kind {
            ViolationKind::Required => {
                write!(f, "{}: field [{}] should be set", self.path, fields)
            }
            ViolationKind::InvalidIdentifier => {
                write!(f, "{}: invalid object identifier in field [{}]", self.path, fields)
            }
            ViolationKind::ExactlyOneOf => {
                write!(f, "{}: exactly one of fields [{}] must be set", self.path, fields)
            }
            ViolationKind::AtLeastOneOf => {
                write!(f, "{}: at least one of fields [{}] must be set", self.path, fields)
            }
            ViolationKind::ConflictingFields => write!(
                f,
                "{}: fields [{}] are incompatible and cannot be set at the same time",
                self.path, fields
            ),
        }
    }
}

/// Every violation found in one options value, in rule declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationSet {
    violations: Vec<Violation>,
}

impl ViolationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether a violation of `kind` names `field`
    pub fn contains(&self, kind: ViolationKind, field: &str) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.kind == kind && violation.names(field))
    }
}

impl fmt::Display for ViolationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl IntoIterator for ViolationSet {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}
