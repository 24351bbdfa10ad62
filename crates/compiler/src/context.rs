// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Compilation context for tracking state during a depth-first walk

use crate::error::CompileError;

/// Default maximum nesting depth of options structures
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Context for tracking state while compiling nested options
///
/// The context maintains:
/// - The stack of structures currently being compiled (for error messages)
/// - Recursion depth tracking against a configurable limit
#[derive(Debug, Clone)]
pub struct CompileContext {
    /// Names of the structures entered so far, outermost first
    path: Vec<&'static str>,

    /// Maximum nesting depth allowed
    max_depth: usize,
}

impl Default for CompileContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CompileContext {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            path: Vec::new(),
            max_depth,
        }
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Name of the innermost structure being compiled
    pub fn current_object(&self) -> &'static str {
        self.path.last().copied().unwrap_or("<root>")
    }

    /// Enter a nested structure, failing once the limit is exceeded
    pub fn enter(&mut self, object: &'static str) -> Result<(), CompileError> {
        if self.path.len() >= self.max_depth {
            return Err(CompileError::RecursionLimitExceeded {
                context: self.path.join(" > "),
                depth: self.path.len() + 1,
                limit: self.max_depth,
            });
        }
        self.path.push(object);
        Ok(())
    }

    /// Leave the innermost structure
    pub fn exit(&mut self) {
        self.path.pop();
    }

    /// Build a directive mismatch error for a field of the current structure
    pub fn mismatch(&self, field: &str, directive: &str, value: &str) -> CompileError {
        CompileError::DirectiveMismatch {
            object: self.current_object().to_string(),
            field: field.to_string(),
            directive: directive.to_string(),
            value: value.to_string(),
        }
    }
}
