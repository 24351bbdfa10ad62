// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Rule evaluation over options nodes
//!
//! Every rule is evaluated; a failing rule never stops the walk. `Nested` rules descend
//! into the target structure (or each element of a target list) and run the listed
//! sub-rules followed by the rules the target's own schema declares.

use warehouse_sql_ir::{Entry, Node, Rule, Value};

use crate::error::{ValidationError, ValidationResult};
use crate::violation::{Violation, ViolationKind, ViolationSet};

/// Validate an options value, failing with every violation found
pub fn validate(options: &dyn Node) -> ValidationResult<()> {
    let violations = collect_violations(options)?;
    if violations.is_empty() {
        return Ok(());
    }

    tracing::debug!(
        object = options.object_name(),
        violations = violations.len(),
        "options failed validation"
    );
    Err(ValidationError::Violations(violations))
}

/// Validate an optional root; `None` is a usage error
pub fn validate_root(options: Option<&dyn Node>) -> ValidationResult<()> {
    match options {
        Some(options) => validate(options),
        None => Err(ValidationError::NilOptions),
    }
}

/// Evaluate every declared rule and return the violations, possibly none
pub fn collect_violations(options: &dyn Node) -> ValidationResult<ViolationSet> {
    let mut violations = ViolationSet::new();
    check_rules(options, options.object_name(), options.rules(), &mut violations)?;
    Ok(violations)
}

fn check_rules(
    node: &dyn Node,
    path: &str,
    rules: &[Rule],
    out: &mut ViolationSet,
) -> ValidationResult<()> {
    let entries = node.entries();
    for rule in rules {
        check_rule(node, &entries, path, rule, out)?;
    }
    Ok(())
}

fn lookup<'e, 'a>(
    node: &dyn Node,
    entries: &'e [Entry<'a>],
    field: &str,
) -> ValidationResult<&'e Value<'a>> {
    entries
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| &entry.value)
        .ok_or_else(|| ValidationError::UnknownField {
            object: node.object_name().to_string(),
            field: field.to_string(),
        })
}

fn count_present(node: &dyn Node, entries: &[Entry<'_>], fields: &[&str]) -> ValidationResult<usize> {
    let mut present = 0;
    for field in fields {
        if lookup(node, entries, field)?.is_present() {
            present += 1;
        }
    }
    Ok(present)
}

fn mismatch(node: &dyn Node, field: &str, rule: &str, value: &Value<'_>) -> ValidationError {
    ValidationError::RuleMismatch {
        object: node.object_name().to_string(),
        field: field.to_string(),
        rule: rule.to_string(),
        value: value.kind().to_string(),
    }
}

fn check_rule(
    node: &dyn Node,
    entries: &[Entry<'_>],
    path: &str,
    rule: &Rule,
    out: &mut ViolationSet,
) -> ValidationResult<()> {
    match rule {
        Rule::Required(field) => {
            if !lookup(node, entries, field)?.is_present() {
                out.push(Violation::new(ViolationKind::Required, path, &[*field]));
            }
        }
        Rule::ValidIdentifier { field, optional } => {
            let value = lookup(node, entries, field)?;
            if !identifier_is_acceptable(node, field, value, *optional)? {
                out.push(Violation::new(ViolationKind::InvalidIdentifier, path, &[*field]));
            }
        }
        Rule::ExactlyOneOf(fields) => {
            if count_present(node, entries, fields)? != 1 {
                out.push(Violation::new(ViolationKind::ExactlyOneOf, path, fields));
            }
        }
        Rule::AtLeastOneOf(fields) => {
            if count_present(node, entries, fields)? == 0 {
                out.push(Violation::new(ViolationKind::AtLeastOneOf, path, fields));
            }
        }
        Rule::ConflictingFields(fields) => {
            if count_present(node, entries, fields)? > 1 {
                out.push(Violation::new(ViolationKind::ConflictingFields, path, fields));
            }
        }
        Rule::Nested { field, rules } => {
            let value = lookup(node, entries, field)?;
            if !value.is_present() {
                return Ok(());
            }
            match value {
                Value::Nested(child) | Value::Embedded(child) => {
                    check_child(*child, &format!("{}.{}", path, field), rules, out)?;
                }
                Value::List(items) => {
                    for (i, item) in items.iter().enumerate() {
                        match item {
                            Value::Nested(child) | Value::Embedded(child) => {
                                let child_path = format!("{}.{}[{}]", path, field, i);
                                check_child(*child, &child_path, rules, out)?;
                            }
                            other => return Err(mismatch(node, field, "Nested", other)),
                        }
                    }
                }
                other => return Err(mismatch(node, field, "Nested", other)),
            }
        }
    }
    Ok(())
}

fn check_child(
    child: &dyn Node,
    path: &str,
    rules: &[Rule],
    out: &mut ViolationSet,
) -> ValidationResult<()> {
    check_rules(child, path, rules, out)?;
    check_rules(child, path, child.rules(), out)
}

/// Absent identifiers pass only when optional; lists must hold only valid identifiers
fn identifier_is_acceptable(
    node: &dyn Node,
    field: &str,
    value: &Value<'_>,
    optional: bool,
) -> ValidationResult<bool> {
    match value {
        Value::Absent => Ok(optional),
        Value::Identifier(id) => Ok(id.is_valid()),
        Value::List(items) if items.is_empty() => Ok(optional),
        Value::List(items) => {
            let mut valid = true;
            for item in items {
                match item {
                    Value::Identifier(id) => valid &= id.is_valid(),
                    other => return Err(mismatch(node, field, "ValidIdentifier", other)),
                }
            }
            Ok(valid)
        }
        other => Err(mismatch(node, field, "ValidIdentifier", other)),
    }
}
