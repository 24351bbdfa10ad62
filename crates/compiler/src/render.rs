// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Depth-first rendering of options nodes into SQL tokens

use warehouse_sql_ir::{EqualsStyle, Entry, FieldDirective, Node, Quoting, Separator, Value, Wrap};

use crate::context::CompileContext;
use crate::error::CompileResult;

/// Quote a text value
pub fn quote(text: &str, quoting: Quoting) -> String {
    match quoting {
        Quoting::Single => format!("'{}'", text.replace('\'', "''")),
        Quoting::Double => format!("\"{}\"", text.replace('"', "\"\"")),
        Quoting::DoubleDollar => format!("$${}$$", text),
        Quoting::None => text.to_string(),
    }
}

fn named(name: &str, equals: EqualsStyle, value: String) -> String {
    if name.is_empty() {
        return value;
    }
    match equals {
        EqualsStyle::WithEquals => format!("{} = {}", name, value),
        EqualsStyle::NoEquals => format!("{} {}", name, value),
    }
}

fn join_tokens<I>(tokens: I) -> String
where
    I: IntoIterator<Item = String>,
{
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compile one node, fields in declaration order
pub(crate) fn compile_node(ctx: &mut CompileContext, node: &dyn Node) -> CompileResult<String> {
    ctx.enter(node.object_name())?;
    let mut tokens = Vec::new();
    for entry in node.entries() {
        if let Some(token) = compile_entry(ctx, &entry)? {
            tokens.push(token);
        }
    }
    ctx.exit();
    Ok(join_tokens(tokens))
}

fn compile_entry(ctx: &mut CompileContext, entry: &Entry<'_>) -> CompileResult<Option<String>> {
    let directive = &entry.directive;
    match (directive, &entry.value) {
        (FieldDirective::Static(text), _) => Ok(Some(text.to_string())),

        (_, Value::Absent) => Ok(None),

        (FieldDirective::Keyword(_), Value::Bool(false)) => Ok(None),
        (FieldDirective::Keyword(text), Value::Bool(true)) => Ok(Some(text.to_string())),
        (FieldDirective::Keyword(text), Value::Embedded(node)) => {
            let inner = compile_node(ctx, *node)?;
            Ok((!inner.is_empty()).then(|| join_tokens([text.to_string(), inner])))
        }
        (FieldDirective::Keyword(_), Value::List(items)) if items.is_empty() => Ok(None),
        (FieldDirective::Keyword(text), value) => {
            let rendered = render_value(ctx, entry.field, value, Quoting::None, false)?;
            Ok(Some(join_tokens([text.to_string(), rendered])))
        }

        (FieldDirective::Parameter { name, equals, .. }, Value::Embedded(node)) => {
            let inner = compile_node(ctx, *node)?;
            Ok((!inner.is_empty()).then(|| named(name, *equals, format!("({})", inner))))
        }
        (FieldDirective::Parameter { .. }, Value::List(items)) if items.is_empty() => Ok(None),
        (FieldDirective::Parameter { name, quoting, equals }, value) => {
            let rendered = render_value(ctx, entry.field, value, *quoting, true)?;
            Ok(Some(named(name, *equals, rendered)))
        }

        (FieldDirective::Identifier { name, equals }, Value::Identifier(id)) => {
            Ok(Some(named(name, *equals, id.fully_qualified_name())))
        }
        (FieldDirective::Identifier { .. }, value) => {
            Err(ctx.mismatch(entry.field, directive.kind(), value.kind()))
        }

        (FieldDirective::List { separator, wrap }, Value::List(items)) => {
            if items.is_empty() {
                return Ok(None);
            }
            let elements = items
                .iter()
                .map(|item| render_value(ctx, entry.field, item, Quoting::None, false))
                .collect::<CompileResult<Vec<_>>>()?;
            Ok(Some(wrap_list(elements, *separator, *wrap)))
        }
        (FieldDirective::List { .. }, value) => {
            Err(ctx.mismatch(entry.field, directive.kind(), value.kind()))
        }
    }
}

fn wrap_list(elements: Vec<String>, separator: Separator, wrap: Wrap) -> String {
    let joined = elements
        .into_iter()
        .filter(|element| !element.is_empty())
        .collect::<Vec<_>>()
        .join(separator.as_str());
    match wrap {
        Wrap::None => joined,
        Wrap::Parentheses => format!("({})", joined),
    }
}

/// Render a single value; compound values are parenthesized when `parenthesize` is set
fn render_value(
    ctx: &mut CompileContext,
    field: &str,
    value: &Value<'_>,
    quoting: Quoting,
    parenthesize: bool,
) -> CompileResult<String> {
    let rendered = match value {
        Value::Absent => String::new(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Text(text) => quote(text, quoting),
        Value::Number(n) => n.to_string(),
        Value::Identifier(id) => id.fully_qualified_name(),
        Value::Nested(node) | Value::Embedded(node) => {
            let compiled = compile_node(ctx, *node)?;
            if parenthesize {
                format!("({})", compiled)
            } else {
                compiled
            }
        }
        Value::List(items) => {
            let elements = items
                .iter()
                .map(|item| render_value(ctx, field, item, quoting, false))
                .collect::<CompileResult<Vec<_>>>()?;
            let wrap = if parenthesize {
                Wrap::Parentheses
            } else {
                Wrap::None
            };
            wrap_list(elements, Separator::Comma, wrap)
        }
    };
    Ok(rendered)
}
