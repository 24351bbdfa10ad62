// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Object Identifiers
//!
//! Warehouse objects live in a three level hierarchy: account → database → schema.
//! An identifier names an object at one of those levels:
//!
//! | Arity | Type | Example |
//! |-------|------|---------|
//! | 1 | [`AccountObjectIdentifier`] | `WAREHOUSE1` |
//! | 2 | [`DatabaseObjectIdentifier`] | `DB1.SCHEMA1` |
//! | 3 | [`SchemaObjectIdentifier`] | `DB1.SCHEMA1.TABLE1` |
//! | 3 + signature | [`SchemaObjectIdentifierWithArguments`] | `DB1.SCHEMA1.FN1(VARCHAR, NUMBER)` |
//!
//! ## Quoting
//!
//! The backend upper-cases unquoted identifiers. A part is therefore written bare only when
//! it is already a plain upper-case identifier that is not a reserved word; every other part
//! is double-quoted with embedded quotes doubled. Parsing applies the inverse rule: quoted
//! parts are kept verbatim, unquoted parts are upper-cased.
//!
//! ```text
//! SchemaObjectIdentifier::new("DB1", "my schema", "users")
//!     .fully_qualified_name() == r#"DB1."my schema"."users""#
//! ```
//!
//! ## Empty identifiers
//!
//! Every arity has an `empty()` sentinel used to represent "not set". Its leaf name is
//! empty, so [`ObjectIdentifier::is_valid`] always reports `false` for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};
use thiserror::Error;

/// Result type alias for identifier parsing
pub type IdentifierResult<T> = Result<T, IdentifierError>;

/// Errors produced while parsing identifiers
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum IdentifierError {
    /// The text is not a well-formed identifier of the requested arity
    #[error("Invalid identifier syntax '{input}': {reason}")]
    InvalidSyntax { input: String, reason: String },
}

impl IdentifierError {
    fn syntax(input: &str, reason: impl Into<String>) -> Self {
        IdentifierError::InvalidSyntax {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Words that must always be quoted even when upper-case
const RESERVED_WORDS: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "BETWEEN", "BY", "CHECK", "COLUMN", "CONNECT", "CREATE",
    "CURRENT", "DELETE", "DISTINCT", "DROP", "ELSE", "EXISTS", "FOR", "FROM", "GRANT", "GROUP",
    "HAVING", "IN", "INSERT", "INTERSECT", "INTO", "IS", "LIKE", "NOT", "NULL", "OF", "ON", "OR",
    "ORDER", "REVOKE", "ROW", "ROWS", "SELECT", "SET", "START", "TABLE", "THEN", "TO", "TRIGGER",
    "UNION", "UNIQUE", "UPDATE", "VALUES", "WHERE", "WITH",
];

/// Check whether a part can be written without quotes
fn is_plain_part(part: &str) -> bool {
    let mut chars = part.chars();
    let starts_plain = matches!(chars.next(), Some(c) if c.is_ascii_uppercase() || c == '_');
    starts_plain
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '$')
        && !RESERVED_WORDS.contains(&part)
}

/// Render a single identifier part, quoting it when required
pub fn quote_part(part: &str) -> String {
    if is_plain_part(part) {
        part.to_string()
    } else {
        format!("\"{}\"", part.replace('"', "\"\""))
    }
}

fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| quote_part(part))
        .collect::<Vec<_>>()
        .join(".")
}

/// Normalize an argument data type (`varchar ` → `VARCHAR`)
fn normalize_argument(argument: &str) -> String {
    argument
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

/// Common capabilities of every identifier arity
pub trait ObjectIdentifier: fmt::Debug + Send + Sync {
    /// Leaf part, unquoted
    fn name(&self) -> &str;

    /// Canonical quoted form joining every hierarchy part with `.`
    fn fully_qualified_name(&self) -> String;

    /// Hierarchy level of this identifier
    fn kind(&self) -> IdentifierKind;

    /// True iff the leaf part is non-empty
    fn is_valid(&self) -> bool {
        !self.name().is_empty()
    }
}

/// Hierarchy level of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    Account,
    Database,
    Schema,
    SchemaWithArguments,
}

impl IdentifierKind {
    /// Number of name parts (the argument list is not counted)
    pub fn arity(&self) -> usize {
        match self {
            IdentifierKind::Account => 1,
            IdentifierKind::Database => 2,
            IdentifierKind::Schema | IdentifierKind::SchemaWithArguments => 3,
        }
    }
}

/// Identifier of an account-level object (database, warehouse, role, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountObjectIdentifier {
    name: String,
}

impl AccountObjectIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The "not set" sentinel
    pub fn empty() -> Self {
        Self::new("")
    }
}

impl ObjectIdentifier for AccountObjectIdentifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[&self.name])
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Account
    }
}

/// Identifier of a database-level object (schema, database role, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseObjectIdentifier {
    database: String,
    name: String,
}

impl DatabaseObjectIdentifier {
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
        }
    }

    /// The "not set" sentinel
    pub fn empty() -> Self {
        Self::new("", "")
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Identifier of the owning database
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database.clone())
    }
}

impl ObjectIdentifier for DatabaseObjectIdentifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[&self.database, &self.name])
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Database
    }
}

/// Identifier of a schema-level object (table, view, stage, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaObjectIdentifier {
    database: String,
    schema: String,
    name: String,
}

impl SchemaObjectIdentifier {
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// The "not set" sentinel
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Identifier of the owning database
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database.clone())
    }

    /// Identifier of the owning schema
    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database.clone(), self.schema.clone())
    }

    /// Attach a call signature, e.g. for functions and procedures
    pub fn with_arguments<I, S>(self, arguments: I) -> SchemaObjectIdentifierWithArguments
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SchemaObjectIdentifierWithArguments::new(self.database, self.schema, self.name, arguments)
    }
}

impl ObjectIdentifier for SchemaObjectIdentifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[&self.database, &self.schema, &self.name])
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Schema
    }
}

/// Identifier of an overloadable schema-level object (function, procedure)
///
/// The argument data types are part of the identity: `FN(VARCHAR)` and `FN(NUMBER)` are
/// different objects. Blank argument types are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SignatureParts")]
pub struct SchemaObjectIdentifierWithArguments {
    database: String,
    schema: String,
    name: String,
    arguments: Vec<String>,
}

// Deserialized form, normalized through `new`
#[derive(Deserialize)]
struct SignatureParts {
    database: String,
    schema: String,
    name: String,
    arguments: Vec<String>,
}

impl From<SignatureParts> for SchemaObjectIdentifierWithArguments {
    fn from(parts: SignatureParts) -> Self {
        Self::new(parts.database, parts.schema, parts.name, parts.arguments)
    }
}

impl SchemaObjectIdentifierWithArguments {
    pub fn new<I, S>(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
        arguments: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            database: database.into(),
            schema: schema.into(),
            name: name.into(),
            arguments: arguments
                .into_iter()
                .map(|a| normalize_argument(a.as_ref()))
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// The "not set" sentinel
    pub fn empty() -> Self {
        Self::new("", "", "", Vec::<String>::new())
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Argument data types in declaration order
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database.clone())
    }

    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database.clone(), self.schema.clone())
    }

    /// The same object name without its call signature
    pub fn without_arguments(&self) -> SchemaObjectIdentifier {
        SchemaObjectIdentifier::new(self.database.clone(), self.schema.clone(), self.name.clone())
    }
}

impl ObjectIdentifier for SchemaObjectIdentifierWithArguments {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        format!(
            "{}({})",
            join_parts(&[&self.database, &self.schema, &self.name]),
            self.arguments.join(", ")
        )
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::SchemaWithArguments
    }
}

/// Identifier of any arity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    Account(AccountObjectIdentifier),
    Database(DatabaseObjectIdentifier),
    Schema(SchemaObjectIdentifier),
    SchemaWithArguments(SchemaObjectIdentifierWithArguments),
}

impl Identifier {
    /// Parse an identifier, inferring the arity from its shape
    pub fn parse(input: &str) -> IdentifierResult<Self> {
        let scanned = scan(input)?;
        let Scanned { parts, arguments } = scanned;
        let mut parts = parts.into_iter();
        match (parts.len(), arguments) {
            (1, None) => Ok(Identifier::Account(AccountObjectIdentifier::new(next_part(
                &mut parts,
            )))),
            (2, None) => Ok(Identifier::Database(DatabaseObjectIdentifier::new(
                next_part(&mut parts),
                next_part(&mut parts),
            ))),
            (3, None) => Ok(Identifier::Schema(SchemaObjectIdentifier::new(
                next_part(&mut parts),
                next_part(&mut parts),
                next_part(&mut parts),
            ))),
            (3, Some(arguments)) => Ok(Identifier::SchemaWithArguments(
                SchemaObjectIdentifierWithArguments::new(
                    next_part(&mut parts),
                    next_part(&mut parts),
                    next_part(&mut parts),
                    arguments,
                ),
            )),
            (count, Some(_)) => Err(IdentifierError::syntax(
                input,
                format!("argument list requires 3 name parts, found {}", count),
            )),
            (count, None) => Err(IdentifierError::syntax(
                input,
                format!("expected 1 to 3 name parts, found {}", count),
            )),
        }
    }

    fn inner(&self) -> &dyn ObjectIdentifier {
        match self {
            Identifier::Account(id) => id,
            Identifier::Database(id) => id,
            Identifier::Schema(id) => id,
            Identifier::SchemaWithArguments(id) => id,
        }
    }

    /// Ancestors to probe, nearest first, when an operation on this object fails ambiguously
    pub fn ancestor_probes(&self) -> Vec<AncestorProbe> {
        match self {
            Identifier::Account(_) => Vec::new(),
            Identifier::Database(id) => vec![AncestorProbe::Database(id.database_id())],
            Identifier::Schema(id) => vec![
                AncestorProbe::Schema(id.schema_id()),
                AncestorProbe::Database(id.database_id()),
            ],
            Identifier::SchemaWithArguments(id) => vec![
                AncestorProbe::Schema(id.schema_id()),
                AncestorProbe::Database(id.database_id()),
            ],
        }
    }
}

impl ObjectIdentifier for Identifier {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn fully_qualified_name(&self) -> String {
        self.inner().fully_qualified_name()
    }

    fn kind(&self) -> IdentifierKind {
        self.inner().kind()
    }
}

impl From<AccountObjectIdentifier> for Identifier {
    fn from(id: AccountObjectIdentifier) -> Self {
        Identifier::Account(id)
    }
}

impl From<DatabaseObjectIdentifier> for Identifier {
    fn from(id: DatabaseObjectIdentifier) -> Self {
        Identifier::Database(id)
    }
}

impl From<SchemaObjectIdentifier> for Identifier {
    fn from(id: SchemaObjectIdentifier) -> Self {
        Identifier::Schema(id)
    }
}

impl From<SchemaObjectIdentifierWithArguments> for Identifier {
    fn from(id: SchemaObjectIdentifierWithArguments) -> Self {
        Identifier::SchemaWithArguments(id)
    }
}

/// An existence lookup against a containing object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AncestorProbe {
    /// Look up the owning schema
    Schema(DatabaseObjectIdentifier),
    /// Look up the owning database
    Database(AccountObjectIdentifier),
}

impl AncestorProbe {
    pub fn fully_qualified_name(&self) -> String {
        match self {
            AncestorProbe::Schema(id) => id.fully_qualified_name(),
            AncestorProbe::Database(id) => id.fully_qualified_name(),
        }
    }
}

impl fmt::Display for AncestorProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AncestorProbe::Schema(id) => write!(f, "schema {}", id.fully_qualified_name()),
            AncestorProbe::Database(id) => write!(f, "database {}", id.fully_qualified_name()),
        }
    }
}

impl fmt::Display for AccountObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl fmt::Display for DatabaseObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl fmt::Display for SchemaObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl fmt::Display for SchemaObjectIdentifierWithArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl FromStr for AccountObjectIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = scan(s)?.into_parts(s, 1)?;
        Ok(Self::new(next_part(&mut parts)))
    }
}

impl FromStr for DatabaseObjectIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = scan(s)?.into_parts(s, 2)?;
        Ok(Self::new(next_part(&mut parts), next_part(&mut parts)))
    }
}

impl FromStr for SchemaObjectIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = scan(s)?.into_parts(s, 3)?;
        Ok(Self::new(
            next_part(&mut parts),
            next_part(&mut parts),
            next_part(&mut parts),
        ))
    }
}

impl FromStr for SchemaObjectIdentifierWithArguments {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Scanned { parts, arguments } = scan(s)?;
        let Some(arguments) = arguments else {
            return Err(IdentifierError::syntax(s, "missing argument list"));
        };
        if parts.len() != 3 {
            return Err(IdentifierError::syntax(
                s,
                format!("expected 3 name parts, found {}", parts.len()),
            ));
        }
        let mut parts = parts.into_iter();
        Ok(Self::new(
            next_part(&mut parts),
            next_part(&mut parts),
            next_part(&mut parts),
            arguments,
        ))
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse(s)
    }
}

// Part counts are checked before any part is taken.
fn next_part(parts: &mut impl Iterator<Item = String>) -> String {
    parts.next().unwrap_or_default()
}

/// Raw scan result: name parts and an optional argument list
struct Scanned {
    parts: Vec<String>,
    arguments: Option<Vec<String>>,
}

impl Scanned {
    fn into_parts(self, input: &str, expected: usize) -> IdentifierResult<std::vec::IntoIter<String>> {
        if self.arguments.is_some() {
            return Err(IdentifierError::syntax(input, "unexpected argument list"));
        }
        if self.parts.len() != expected {
            return Err(IdentifierError::syntax(
                input,
                format!("expected {} name parts, found {}", expected, self.parts.len()),
            ));
        }
        Ok(self.parts.into_iter())
    }
}

fn scan(input: &str) -> IdentifierResult<Scanned> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IdentifierError::syntax(input, "identifier is empty"));
    }

    let mut chars = trimmed.chars().peekable();
    let mut parts = Vec::new();
    loop {
        let part = if chars.peek() == Some(&'"') {
            chars.next();
            read_quoted(input, &mut chars)?
        } else {
            read_unquoted(input, &mut chars)?
        };
        parts.push(part);

        match chars.next() {
            None => {
                return Ok(Scanned {
                    parts,
                    arguments: None,
                });
            }
            Some('.') => continue,
            Some('(') => {
                let arguments = read_arguments(input, &mut chars)?;
                if let Some(c) = chars.next() {
                    return Err(IdentifierError::syntax(
                        input,
                        format!("unexpected character '{}' after argument list", c),
                    ));
                }
                return Ok(Scanned {
                    parts,
                    arguments: Some(arguments),
                });
            }
            Some(c) => {
                return Err(IdentifierError::syntax(
                    input,
                    format!("unexpected character '{}'", c),
                ));
            }
        }
    }
}

fn read_quoted(input: &str, chars: &mut Peekable<Chars<'_>>) -> IdentifierResult<String> {
    let mut part = String::new();
    loop {
        match chars.next() {
            Some('"') if chars.peek() == Some(&'"') => {
                chars.next();
                part.push('"');
            }
            Some('"') => return Ok(part),
            Some(c) => part.push(c),
            None => return Err(IdentifierError::syntax(input, "unterminated quoted part")),
        }
    }
}

fn read_unquoted(input: &str, chars: &mut Peekable<Chars<'_>>) -> IdentifierResult<String> {
    let mut part = String::new();
    while let Some(&c) = chars.peek() {
        if matches!(c, '.' | '(' | '"') {
            break;
        }
        part.push(c);
        chars.next();
    }

    let part = part.trim();
    if part.is_empty() {
        return Err(IdentifierError::syntax(input, "empty name part"));
    }
    if part.contains(char::is_whitespace) {
        return Err(IdentifierError::syntax(
            input,
            format!("unquoted part '{}' contains whitespace", part),
        ));
    }
    Ok(part.to_ascii_uppercase())
}

fn read_arguments(input: &str, chars: &mut Peekable<Chars<'_>>) -> IdentifierResult<Vec<String>> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    loop {
        match chars.next() {
            Some('(') => {
                depth += 1;
                current.push('(');
            }
            Some(')') if depth == 0 => {
                if current.trim().is_empty() {
                    if !arguments.is_empty() {
                        return Err(IdentifierError::syntax(input, "empty argument type"));
                    }
                } else {
                    arguments.push(normalize_argument(&current));
                }
                return Ok(arguments);
            }
            Some(')') => {
                depth -= 1;
                current.push(')');
            }
            Some(',') if depth == 0 => {
                if current.trim().is_empty() {
                    return Err(IdentifierError::syntax(input, "empty argument type"));
                }
                arguments.push(normalize_argument(&current));
                current.clear();
            }
            Some(c) => current.push(c),
            None => return Err(IdentifierError::syntax(input, "unbalanced argument list")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_parts_are_not_quoted() {
        let id = SchemaObjectIdentifier::new("DB1", "SCHEMA1", "TABLE1");
        assert_eq!(id.fully_qualified_name(), "DB1.SCHEMA1.TABLE1");
    }

    #[test]
    fn test_mixed_case_and_special_parts_are_quoted() {
        let id = SchemaObjectIdentifier::new("DB1", "my schema", "Users");
        assert_eq!(id.fully_qualified_name(), r#"DB1."my schema"."Users""#);
    }

    #[test]
    fn test_reserved_word_is_quoted() {
        let id = AccountObjectIdentifier::new("TABLE");
        assert_eq!(id.fully_qualified_name(), r#""TABLE""#);
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        let id = AccountObjectIdentifier::new(r#"a"b"#);
        assert_eq!(id.fully_qualified_name(), r#""a""b""#);
        let parsed: AccountObjectIdentifier = id.fully_qualified_name().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_arguments_in_fully_qualified_name() {
        let id = SchemaObjectIdentifierWithArguments::new(
            "DB1",
            "S1",
            "FN1",
            ["varchar", "number(38, 0)"],
        );
        assert_eq!(id.fully_qualified_name(), "DB1.S1.FN1(VARCHAR, NUMBER(38, 0))");
        assert_eq!(id.arguments(), ["VARCHAR", "NUMBER(38, 0)"]);
    }

    #[test]
    fn test_parse_uppercases_unquoted_parts() {
        let id: DatabaseObjectIdentifier = "db1.schema1".parse().unwrap();
        assert_eq!(id, DatabaseObjectIdentifier::new("DB1", "SCHEMA1"));
    }

    #[test]
    fn test_parse_keeps_quoted_parts() {
        let id: SchemaObjectIdentifier = r#""db.1"."s""x".tbl"#.parse().unwrap();
        assert_eq!(id.database_name(), "db.1");
        assert_eq!(id.schema_name(), r#"s"x"#);
        assert_eq!(id.name(), "TBL");
    }

    #[test]
    fn test_parse_wrong_arity_fails() {
        let err = "DB1.SCHEMA1".parse::<SchemaObjectIdentifier>().unwrap_err();
        assert!(matches!(err, IdentifierError::InvalidSyntax { .. }));
        assert!(err.to_string().contains("expected 3 name parts"));
    }

    #[test]
    fn test_parse_malformed_inputs_fail() {
        for input in ["", "  ", "a..b", "\"unterminated", "a.b.c(VARCHAR", "a b", "a.b.c()x"] {
            assert!(Identifier::parse(input).is_err(), "expected '{}' to fail", input);
        }
    }

    #[test]
    fn test_parse_infers_arity() {
        assert_eq!(Identifier::parse("A").unwrap().kind(), IdentifierKind::Account);
        assert_eq!(Identifier::parse("A.B").unwrap().kind(), IdentifierKind::Database);
        assert_eq!(Identifier::parse("A.B.C").unwrap().kind(), IdentifierKind::Schema);
        assert_eq!(
            Identifier::parse("A.B.C(VARCHAR)").unwrap().kind(),
            IdentifierKind::SchemaWithArguments
        );
        assert!(Identifier::parse("A.B(VARCHAR)").is_err());
        assert!(Identifier::parse("A.B.C.D").is_err());
    }

    #[test]
    fn test_parse_empty_argument_list() {
        let id: SchemaObjectIdentifierWithArguments = "DB.S.PROC()".parse().unwrap();
        assert!(id.arguments().is_empty());
        assert_eq!(id.fully_qualified_name(), "DB.S.PROC()");
        assert!("DB.S.PROC(VARCHAR,)".parse::<SchemaObjectIdentifierWithArguments>().is_err());
    }

    #[test]
    fn test_round_trip_every_arity() {
        let ids: Vec<Identifier> = vec![
            AccountObjectIdentifier::new("WH_1").into(),
            AccountObjectIdentifier::new("lower").into(),
            DatabaseObjectIdentifier::new("DB", "with space").into(),
            SchemaObjectIdentifier::new("Db", "SCHEMA", "t$1").into(),
            SchemaObjectIdentifierWithArguments::new("DB", "s", "FN", ["VARCHAR", "NUMBER(10, 2)"])
                .into(),
            SchemaObjectIdentifierWithArguments::new("DB", "S", "FN", Vec::<String>::new()).into(),
            SchemaObjectIdentifierWithArguments::new("DB", "S", "F", [" "]).into(),
            SchemaObjectIdentifierWithArguments::new("DB", "S", "F", ["A", " "]).into(),
        ];
        for id in ids {
            let parsed = Identifier::parse(&id.fully_qualified_name()).unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_empty_sentinels_are_invalid() {
        assert!(!AccountObjectIdentifier::empty().is_valid());
        assert!(!DatabaseObjectIdentifier::empty().is_valid());
        assert!(!SchemaObjectIdentifier::empty().is_valid());
        assert!(!SchemaObjectIdentifierWithArguments::empty().is_valid());
        assert!(AccountObjectIdentifier::new("X").is_valid());
        assert!(!SchemaObjectIdentifier::new("DB", "S", "").is_valid());
    }

    #[test]
    fn test_ancestor_probes_order() {
        let id: Identifier = SchemaObjectIdentifier::new("DB1", "SCHEMA1", "TABLE1").into();
        assert_eq!(
            id.ancestor_probes(),
            vec![
                AncestorProbe::Schema(DatabaseObjectIdentifier::new("DB1", "SCHEMA1")),
                AncestorProbe::Database(AccountObjectIdentifier::new("DB1")),
            ]
        );

        let id: Identifier = DatabaseObjectIdentifier::new("DB1", "SCHEMA1").into();
        assert_eq!(
            id.ancestor_probes(),
            vec![AncestorProbe::Database(AccountObjectIdentifier::new("DB1"))]
        );

        let id: Identifier = AccountObjectIdentifier::new("DB1").into();
        assert!(id.ancestor_probes().is_empty());
    }

    #[test]
    fn test_display_matches_fully_qualified_name() {
        let id = DatabaseObjectIdentifier::new("DB", "lower");
        assert_eq!(id.to_string(), id.fully_qualified_name());
        let probe = AncestorProbe::Database(AccountObjectIdentifier::new("DB"));
        assert_eq!(probe.to_string(), "database DB");
    }

    #[test]
    fn test_identifier_serialization() {
        let id: Identifier = SchemaObjectIdentifier::new("DB", "S", "T").into();
        let json = serde_json::to_string(&id).unwrap();
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_blank_arguments_are_dropped() {
        let id = SchemaObjectIdentifierWithArguments::new("DB", "S", "F", ["a", "", " "]);
        assert_eq!(id.arguments(), &["A".to_string()]);
        assert_eq!(id.fully_qualified_name(), "DB.S.F(A)");
    }

    #[test]
    fn test_deserialized_signature_is_normalized() {
        let json = r#"{"database":"DB","schema":"S","name":"F","arguments":[" varchar ",""]}"#;
        let back: SchemaObjectIdentifierWithArguments = serde_json::from_str(json).unwrap();
        assert_eq!(back, SchemaObjectIdentifierWithArguments::new("DB", "S", "F", ["VARCHAR"]));
        assert_eq!(back.arguments(), &["VARCHAR".to_string()]);
    }
}
