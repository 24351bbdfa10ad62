// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Field Directives
//!
//! A directive describes how one field of an options structure contributes to the
//! compiled SQL text. Directives are attached once per field when a statement
//! [`Schema`](crate::Schema) is built and are never re-derived at call time.
//!
//! | Directive | Emitted when | Output |
//! |-----------|--------------|--------|
//! | `Static(text)` | always | `text` |
//! | `Keyword(text)` | value is `true` or any non-boolean value | `text [value]` |
//! | `Parameter` | value present | `NAME = value` / `NAME value` |
//! | `Identifier` | value present | `NAME = "DB"."OBJ"` / `"DB"."OBJ"` |
//! | `List` | list non-empty | `a, b` / `(a b)` |

use serde::Serialize;

/// How a parameter's text value is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quoting {
    /// `'value'`
    Single,
    /// `"value"`
    Double,
    /// `$$value$$`
    DoubleDollar,
    /// `value`
    None,
}

/// Whether `=` separates a parameter name from its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EqualsStyle {
    /// `NAME = value`
    WithEquals,
    /// `NAME value` (e.g. `LIKE 'pattern'`, `FROM '@stage'`)
    NoEquals,
}

/// Separator placed between list elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Separator {
    Comma,
    Space,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Comma => ", ",
            Separator::Space => " ",
        }
    }
}

/// Optional wrapping around a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Wrap {
    None,
    Parentheses,
}

/// How a field maps to tokens in compiled SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldDirective {
    /// Fixed text, always emitted
    Static(&'static str),

    /// Toggle keyword; a `false` value suppresses it
    Keyword(&'static str),

    /// Named value
    Parameter {
        name: &'static str,
        quoting: Quoting,
        equals: EqualsStyle,
    },

    /// Named object identifier, rendered by its fully qualified name
    Identifier {
        name: &'static str,
        equals: EqualsStyle,
    },

    /// Sequence of elements compiled in input order
    List { separator: Separator, wrap: Wrap },
}

impl FieldDirective {
    /// `NAME = value` with an unquoted value
    pub const fn parameter(name: &'static str) -> Self {
        FieldDirective::Parameter {
            name,
            quoting: Quoting::None,
            equals: EqualsStyle::WithEquals,
        }
    }

    /// An identifier without a leading name
    pub const fn identifier() -> Self {
        FieldDirective::Identifier {
            name: "",
            equals: EqualsStyle::NoEquals,
        }
    }

    /// `NAME = identifier`
    pub const fn named_identifier(name: &'static str) -> Self {
        FieldDirective::Identifier {
            name,
            equals: EqualsStyle::WithEquals,
        }
    }

    /// Comma separated list without parentheses
    pub const fn list() -> Self {
        FieldDirective::List {
            separator: Separator::Comma,
            wrap: Wrap::None,
        }
    }

    /// Replace the quoting of a parameter; other directives are returned unchanged
    pub const fn quoted(self, quoting: Quoting) -> Self {
        match self {
            FieldDirective::Parameter { name, equals, .. } => FieldDirective::Parameter {
                name,
                quoting,
                equals,
            },
            other => other,
        }
    }

    /// Drop the `=` of a parameter or named identifier
    pub const fn without_equals(self) -> Self {
        match self {
            FieldDirective::Parameter { name, quoting, .. } => FieldDirective::Parameter {
                name,
                quoting,
                equals: EqualsStyle::NoEquals,
            },
            FieldDirective::Identifier { name, .. } => FieldDirective::Identifier {
                name,
                equals: EqualsStyle::NoEquals,
            },
            other => other,
        }
    }

    /// Wrap a list in parentheses
    pub const fn parenthesized(self) -> Self {
        match self {
            FieldDirective::List { separator, .. } => FieldDirective::List {
                separator,
                wrap: Wrap::Parentheses,
            },
            other => other,
        }
    }

    /// Separate list elements with spaces instead of commas
    pub const fn space_separated(self) -> Self {
        match self {
            FieldDirective::List { wrap, .. } => FieldDirective::List {
                separator: Separator::Space,
                wrap,
            },
            other => other,
        }
    }

    /// Short name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            FieldDirective::Static(_) => "static",
            FieldDirective::Keyword(_) => "keyword",
            FieldDirective::Parameter { .. } => "parameter",
            FieldDirective::Identifier { .. } => "identifier",
            FieldDirective::List { .. } => "list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_modifiers() {
        let directive = FieldDirective::parameter("LIKE")
            .quoted(Quoting::Single)
            .without_equals();
        assert_eq!(
            directive,
            FieldDirective::Parameter {
                name: "LIKE",
                quoting: Quoting::Single,
                equals: EqualsStyle::NoEquals,
            }
        );
    }

    #[test]
    fn test_list_modifiers() {
        let directive = FieldDirective::list().parenthesized().space_separated();
        assert_eq!(
            directive,
            FieldDirective::List {
                separator: Separator::Space,
                wrap: Wrap::Parentheses,
            }
        );
    }

    #[test]
    fn test_modifiers_ignore_unrelated_directives() {
        assert_eq!(
            FieldDirective::Static("CREATE").quoted(Quoting::Double),
            FieldDirective::Static("CREATE")
        );
        assert_eq!(
            FieldDirective::Keyword("TERSE").parenthesized(),
            FieldDirective::Keyword("TERSE")
        );
    }
}
