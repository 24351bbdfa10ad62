// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Warehouse SQL - Statement Compiler
//!
//! This crate serializes one options value into one SQL statement.
//!
//! ## Overview
//!
//! The compiler walks an options [`Node`] depth-first in field declaration order and
//! emits tokens according to each field's [`FieldDirective`](warehouse_sql_ir::FieldDirective):
//!
//! ```text
//! Static("CREATE") Keyword("OR REPLACE") Static("DATABASE") Identifier(name) Parameter("COMMENT", single)
//!     → CREATE OR REPLACE DATABASE DB1 COMMENT = 'x'
//! ```
//!
//! Tokens are joined with single spaces; absent optional fields contribute nothing. The
//! output is a pure function of the input, so compiling the same value twice yields
//! byte-identical text.
//!
//! ## Error Handling Strategy
//!
//! Compilation only fails for usage errors:
//!
//! - **NilOptions**: no root value was supplied
//! - **DirectiveMismatch**: a field's value cannot be rendered by its directive
//! - **RecursionLimitExceeded**: nesting deeper than the configured limit
//!
//! Constraint violations are the validation engine's job and must be checked first.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warehouse_sql_compiler::compile;
//!
//! let sql = compile(&options)?;
//! executor.execute(&sql).await?;
//! ```

pub mod context;
pub mod error;
pub mod render;

pub use context::{CompileContext, DEFAULT_MAX_DEPTH};
pub use error::{CompileError, CompileResult};
pub use render::quote;

use warehouse_sql_ir::Node;

/// Statement compiler with a configurable nesting limit
#[derive(Debug, Clone, Copy)]
pub struct Compiler {
    max_depth: usize,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Compile an options value into a single SQL statement
    pub fn compile(&self, options: &dyn Node) -> CompileResult<String> {
        let mut ctx = CompileContext::with_max_depth(self.max_depth);
        let sql = render::compile_node(&mut ctx, options)?;
        tracing::trace!(object = options.object_name(), sql = %sql, "compiled statement");
        Ok(sql)
    }

    /// Compile an optional root; `None` fails before any token is emitted
    pub fn compile_root(&self, options: Option<&dyn Node>) -> CompileResult<String> {
        match options {
            Some(options) => self.compile(options),
            None => Err(CompileError::NilOptions),
        }
    }
}

/// Compile with the default nesting limit
pub fn compile(options: &dyn Node) -> CompileResult<String> {
    Compiler::new().compile(options)
}

/// Compile an optional root with the default nesting limit
pub fn compile_root(options: Option<&dyn Node>) -> CompileResult<String> {
    Compiler::new().compile_root(options)
}
