// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! User-defined function statements
//!
//! Functions are overloadable, so `DROP FUNCTION` names the target with its argument
//! types. [`CreateFunctionOptions::signature`] derives that identifier from a create
//! statement.

use std::sync::LazyLock;

use warehouse_sql_ir::{
    FieldDirective, Quoting, Rule, Schema, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments, Value,
};

/// `name TYPE [DEFAULT expr]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgument {
    pub name: String,
    pub data_type: String,
    pub default: Option<String>,
}

impl FunctionArgument {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default = Some(expression.into());
        self
    }
}

static FUNCTION_ARGUMENT: LazyLock<Schema<FunctionArgument>> = LazyLock::new(|| {
    Schema::<FunctionArgument>::builder("FunctionArgument")
        .field("name", FieldDirective::parameter(""), |o| Value::text(&o.name))
        .field("data_type", FieldDirective::parameter(""), |o| {
            Value::text(&o.data_type)
        })
        .field(
            "default",
            FieldDirective::parameter("DEFAULT").without_equals(),
            |o| Value::optional_text(&o.default),
        )
        .build()
});

statement!(FunctionArgument, FUNCTION_ARGUMENT);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionLanguage {
    Sql,
    Python,
    JavaScript,
    Java,
    Scala,
}

impl FunctionLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionLanguage::Sql => "SQL",
            FunctionLanguage::Python => "PYTHON",
            FunctionLanguage::JavaScript => "JAVASCRIPT",
            FunctionLanguage::Java => "JAVA",
            FunctionLanguage::Scala => "SCALA",
        }
    }
}

/// Options for `CREATE FUNCTION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFunctionOptions {
    pub or_replace: Option<bool>,
    pub secure: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: SchemaObjectIdentifier,
    pub arguments: Vec<FunctionArgument>,
    pub returns: String,
    pub language: Option<FunctionLanguage>,
    pub called_on_null_input: Option<bool>,
    pub strict: Option<bool>,
    pub volatile: Option<bool>,
    pub immutable: Option<bool>,
    pub runtime_version: Option<String>,
    pub handler: Option<String>,
    pub comment: Option<String>,
    pub body: Option<String>,
}

impl CreateFunctionOptions {
    pub fn new(name: SchemaObjectIdentifier, returns: impl Into<String>) -> Self {
        Self {
            or_replace: None,
            secure: None,
            if_not_exists: None,
            name,
            arguments: Vec::new(),
            returns: returns.into(),
            language: None,
            called_on_null_input: None,
            strict: None,
            volatile: None,
            immutable: None,
            runtime_version: None,
            handler: None,
            comment: None,
            body: None,
        }
    }

    pub fn or_replace(mut self) -> Self {
        self.or_replace = Some(true);
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = Some(true);
        self
    }

    pub fn with_argument(mut self, argument: FunctionArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_language(mut self, language: FunctionLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = Some(true);
        self
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = Some(true);
        self
    }

    pub fn with_runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = Some(version.into());
        self
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Identifier of the created function, including its argument types
    pub fn signature(&self) -> SchemaObjectIdentifierWithArguments {
        self.name
            .clone()
            .with_arguments(self.arguments.iter().map(|arg| arg.data_type.as_str()))
    }
}

static CREATE_FUNCTION: LazyLock<Schema<CreateFunctionOptions>> = LazyLock::new(|| {
    Schema::<CreateFunctionOptions>::builder("CreateFunctionOptions")
        .fixed("CREATE")
        .keyword("or_replace", "OR REPLACE", |o| Value::flag(o.or_replace))
        .keyword("secure", "SECURE", |o| Value::flag(o.secure))
        .fixed("FUNCTION")
        .keyword("if_not_exists", "IF NOT EXISTS", |o| {
            Value::flag(o.if_not_exists)
        })
        .identifier("name", |o| Value::identifier(&o.name))
        // zero arguments still render as "()"
        .field("arguments", FieldDirective::parameter(""), |o| {
            if o.arguments.is_empty() {
                Value::text("()")
            } else {
                Value::list(&o.arguments)
            }
        })
        .keyword("returns", "RETURNS", |o| Value::text(&o.returns))
        .keyword("language", "LANGUAGE", |o| {
            o.language.map_or(Value::Absent, |l| Value::text(l.as_str()))
        })
        .keyword("called_on_null_input", "CALLED ON NULL INPUT", |o| {
            Value::flag(o.called_on_null_input)
        })
        .keyword("strict", "STRICT", |o| Value::flag(o.strict))
        .keyword("volatile", "VOLATILE", |o| Value::flag(o.volatile))
        .keyword("immutable", "IMMUTABLE", |o| Value::flag(o.immutable))
        .field(
            "runtime_version",
            FieldDirective::parameter("RUNTIME_VERSION").quoted(Quoting::Single),
            |o| Value::optional_text(&o.runtime_version),
        )
        .field(
            "handler",
            FieldDirective::parameter("HANDLER").quoted(Quoting::Single),
            |o| Value::optional_text(&o.handler),
        )
        .field(
            "comment",
            FieldDirective::parameter("COMMENT").quoted(Quoting::Single),
            |o| Value::optional_text(&o.comment),
        )
        .field(
            "body",
            FieldDirective::parameter("AS")
                .quoted(Quoting::DoubleDollar)
                .without_equals(),
            |o| Value::optional_text(&o.body),
        )
        .rule(Rule::valid_identifier("name"))
        .rule(Rule::conflicting(&["or_replace", "if_not_exists"]))
        .rule(Rule::conflicting(&["called_on_null_input", "strict"]))
        .rule(Rule::conflicting(&["volatile", "immutable"]))
        .rule(Rule::at_least_one_of(&["body", "handler"]))
        .build()
});

statement!(CreateFunctionOptions, CREATE_FUNCTION);

/// Options for `DROP FUNCTION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropFunctionOptions {
    pub if_exists: Option<bool>,
    pub name: SchemaObjectIdentifierWithArguments,
}

impl DropFunctionOptions {
    pub fn new(name: SchemaObjectIdentifierWithArguments) -> Self {
        Self {
            if_exists: None,
            name,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = Some(true);
        self
    }
}

static DROP_FUNCTION: LazyLock<Schema<DropFunctionOptions>> = LazyLock::new(|| {
    Schema::<DropFunctionOptions>::builder("DropFunctionOptions")
        .fixed("DROP FUNCTION")
        .keyword("if_exists", "IF EXISTS", |o| Value::flag(o.if_exists))
        .identifier("name", |o| Value::identifier(&o.name))
        .rule(Rule::valid_identifier("name"))
        .build()
});

statement!(DropFunctionOptions, DROP_FUNCTION);
drop_statement!(DropFunctionOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_sql_compiler::compile;
    use warehouse_sql_validation::{ViolationKind, validate};

    fn add_one() -> CreateFunctionOptions {
        CreateFunctionOptions::new(SchemaObjectIdentifier::new("DB1", "PUBLIC", "ADD_ONE"), "NUMBER")
            .with_argument(FunctionArgument::new("X", "NUMBER"))
            .with_language(FunctionLanguage::Sql)
            .immutable()
            .with_body("X + 1")
    }

    #[test]
    fn test_create_sql_function() {
        let opts = add_one().or_replace();
        assert!(validate(&opts).is_ok());
        assert_eq!(
            compile(&opts).unwrap(),
            "CREATE OR REPLACE FUNCTION DB1.PUBLIC.ADD_ONE (X NUMBER) RETURNS NUMBER \
             LANGUAGE SQL IMMUTABLE AS $$X + 1$$"
        );
    }

    #[test]
    fn test_create_function_without_arguments() {
        let opts = CreateFunctionOptions::new(
            SchemaObjectIdentifier::new("DB1", "PUBLIC", "PING"),
            "VARCHAR",
        )
        .with_language(FunctionLanguage::Python)
        .with_runtime_version("3.11")
        .with_handler("ping");
        assert!(validate(&opts).is_ok());
        assert_eq!(
            compile(&opts).unwrap(),
            "CREATE FUNCTION DB1.PUBLIC.PING () RETURNS VARCHAR LANGUAGE PYTHON \
             RUNTIME_VERSION = '3.11' HANDLER = 'ping'"
        );
    }

    #[test]
    fn test_create_function_needs_body_or_handler() {
        let mut opts = add_one().strict();
        opts.body = None;
        opts.called_on_null_input = Some(true);
        let err = validate(&opts).unwrap_err();
        let set = err.violations().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(ViolationKind::AtLeastOneOf, "body"));
        assert!(set.contains(ViolationKind::ConflictingFields, "strict"));
    }

    #[test]
    fn test_signature_and_drop() {
        let signature = add_one()
            .with_argument(FunctionArgument::new("Y", "varchar").with_default("'a'"))
            .signature();
        let opts = DropFunctionOptions::new(signature).if_exists();
        assert_eq!(
            compile(&opts).unwrap(),
            "DROP FUNCTION IF EXISTS DB1.PUBLIC.ADD_ONE(NUMBER, VARCHAR)"
        );
    }
}
