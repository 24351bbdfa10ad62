// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Statement Schemas and Field Values
//!
//! An options structure becomes compilable by implementing [`Statement`], which exposes a
//! [`Schema`] built once per type. The schema lists every field in declaration order with
//! its [`FieldDirective`] and a getter producing a borrowed [`Value`], plus the
//! validation [`Rule`]s that apply to every instance.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::LazyLock;
//! use warehouse_sql_ir::{FieldDirective, Rule, Schema, Statement, Value};
//! use warehouse_sql_ir::AccountObjectIdentifier;
//!
//! struct DropDatabase {
//!     if_exists: Option<bool>,
//!     name: AccountObjectIdentifier,
//! }
//!
//! static DROP_DATABASE: LazyLock<Schema<DropDatabase>> = LazyLock::new(|| {
//!     Schema::<DropDatabase>::builder("DropDatabaseOptions")
//!         .fixed("DROP DATABASE")
//!         .keyword("if_exists", "IF EXISTS", |o| Value::flag(o.if_exists))
//!         .identifier("name", |o| Value::identifier(&o.name))
//!         .rule(Rule::valid_identifier("name"))
//!         .build()
//! });
//!
//! impl Statement for DropDatabase {
//!     fn schema() -> &'static Schema<Self> {
//!         &DROP_DATABASE
//!     }
//! }
//! ```
//!
//! ## Presence
//!
//! | Value | Present when |
//! |-------|--------------|
//! | `Absent` | never |
//! | `List` | non-empty |
//! | `Nested` | always (it wraps a `Some`) |
//! | `Embedded` | any of its own fields is present |
//! | everything else | always (including `Bool(false)`) |

use std::borrow::Cow;
use std::fmt;

use crate::directive::FieldDirective;
use crate::identifier::ObjectIdentifier;
use crate::rule::Rule;

/// Getter extracting a field's value from an options structure
pub type Getter<T> = for<'a> fn(&'a T) -> Value<'a>;

/// The value of one options field, borrowed from the structure
#[derive(Clone)]
pub enum Value<'a> {
    /// Optional field that is not set
    Absent,
    /// Toggle; `Some(false)` is present but suppresses keywords
    Bool(bool),
    /// Text, quoted per the field's directive
    Text(Cow<'a, str>),
    /// Integer, always rendered bare
    Number(i64),
    /// Object identifier, rendered by its fully qualified name
    Identifier(&'a dyn ObjectIdentifier),
    /// Optional sub-structure that is set
    Nested(&'a dyn Node),
    /// Sub-structure held by value
    Embedded(&'a dyn Node),
    /// Ordered elements
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    pub fn flag(value: Option<bool>) -> Self {
        value.map_or(Value::Absent, Value::Bool)
    }

    pub fn text(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }

    pub fn optional_text(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(Value::Absent, Value::text)
    }

    pub fn number(value: impl Into<i64>) -> Self {
        Value::Number(value.into())
    }

    pub fn optional_number<N>(value: Option<N>) -> Self
    where
        N: Into<i64>,
    {
        value.map_or(Value::Absent, |n| Value::Number(n.into()))
    }

    pub fn identifier(id: &'a dyn ObjectIdentifier) -> Self {
        Value::Identifier(id)
    }

    pub fn optional_identifier<I: ObjectIdentifier>(id: &'a Option<I>) -> Self {
        match id {
            Some(id) => Value::Identifier(id),
            None => Value::Absent,
        }
    }

    pub fn nested<T: Statement>(value: &'a Option<T>) -> Self {
        match value {
            Some(node) => Value::Nested(node),
            None => Value::Absent,
        }
    }

    pub fn embedded<T: Statement>(value: &'a T) -> Self {
        Value::Embedded(value)
    }

    /// A list of sub-structures, compiled element by element
    pub fn list<T: Statement>(items: &'a [T]) -> Self {
        Value::List(items.iter().map(|item| Value::Nested(item)).collect())
    }

    pub fn texts(items: &'a [String]) -> Self {
        Value::List(items.iter().map(|item| Value::text(item)).collect())
    }

    pub fn identifiers<I: ObjectIdentifier>(items: &'a [I]) -> Self {
        Value::List(
            items
                .iter()
                .map(|item| Value::Identifier(item as &dyn ObjectIdentifier))
                .collect(),
        )
    }

    /// Presence as seen by the validation engine
    pub fn is_present(&self) -> bool {
        match self {
            Value::Absent => false,
            Value::List(items) => !items.is_empty(),
            Value::Embedded(node) => node.has_fields_set(),
            _ => true,
        }
    }

    /// Short name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Number(_) => "number",
            Value::Identifier(_) => "identifier",
            Value::Nested(_) => "nested",
            Value::Embedded(_) => "embedded",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "Absent"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Text(t) => write!(f, "Text({:?})", t),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::Identifier(id) => write!(f, "Identifier({})", id.fully_qualified_name()),
            Value::Nested(node) => write!(f, "Nested({})", node.object_name()),
            Value::Embedded(node) => write!(f, "Embedded({})", node.object_name()),
            Value::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

/// One field of a node, resolved against an instance
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub field: &'static str,
    pub directive: FieldDirective,
    pub value: Value<'a>,
}

/// Type-erased view over any statement structure
///
/// Implemented for every [`Statement`]; the compiler and the validation engine only ever
/// work through this trait so nested structures of different types can be traversed.
pub trait Node {
    /// Name of the options structure, used in violation messages
    fn object_name(&self) -> &'static str;

    /// Fields in declaration order
    fn entries(&self) -> Vec<Entry<'_>>;

    /// Validation rules declared for this structure
    fn rules(&self) -> &'static [Rule];

    /// Whether any non-static field is present
    fn has_fields_set(&self) -> bool {
        self.entries().iter().any(|entry| entry.value.is_present())
    }
}

/// An options structure with a schema descriptor
pub trait Statement: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

impl<T: Statement> Node for T {
    fn object_name(&self) -> &'static str {
        T::schema().object()
    }

    fn entries(&self) -> Vec<Entry<'_>> {
        T::schema()
            .fields()
            .iter()
            .map(|field| Entry {
                field: field.name,
                directive: field.directive,
                value: (field.get)(self),
            })
            .collect()
    }

    fn rules(&self) -> &'static [Rule] {
        &T::schema().rules
    }
}

/// One declared field
pub struct Field<T> {
    name: &'static str,
    directive: FieldDirective,
    get: Getter<T>,
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn directive(&self) -> &FieldDirective {
        &self.directive
    }

    pub fn value<'a>(&self, options: &'a T) -> Value<'a> {
        (self.get)(options)
    }
}

/// Field layout and rules of an options structure
pub struct Schema<T> {
    object: &'static str,
    fields: Vec<Field<T>>,
    rules: Vec<Rule>,
}

impl<T> Schema<T> {
    pub fn builder(object: &'static str) -> SchemaBuilder<T> {
        SchemaBuilder {
            object,
            fields: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn object(&self) -> &'static str {
        self.object
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn field(&self, name: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn absent<T>(_: &T) -> Value<'_> {
    Value::Absent
}

/// Builder declaring fields in output order
pub struct SchemaBuilder<T> {
    object: &'static str,
    fields: Vec<Field<T>>,
    rules: Vec<Rule>,
}

impl<T> SchemaBuilder<T> {
    /// Fixed text such as `CREATE` or `TABLE`
    pub fn fixed(mut self, text: &'static str) -> Self {
        self.fields.push(Field {
            name: text,
            directive: FieldDirective::Static(text),
            get: absent::<T>,
        });
        self
    }

    pub fn keyword(self, name: &'static str, text: &'static str, get: Getter<T>) -> Self {
        self.field(name, FieldDirective::Keyword(text), get)
    }

    /// Bare identifier (no leading name)
    pub fn identifier(self, name: &'static str, get: Getter<T>) -> Self {
        self.field(name, FieldDirective::identifier(), get)
    }

    pub fn field(mut self, name: &'static str, directive: FieldDirective, get: Getter<T>) -> Self {
        self.fields.push(Field {
            name,
            directive,
            get,
        });
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Schema<T> {
        Schema {
            object: self.object,
            fields: self.fields,
            rules: self.rules,
        }
    }
}
