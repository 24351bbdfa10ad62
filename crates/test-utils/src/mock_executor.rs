// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Recording executor for testing
//!
//! Captures every statement handed to it and answers with scripted results, `Ok(())`
//! once the script runs out.

use std::collections::VecDeque;
use std::sync::Mutex;

use warehouse_sql_catalog::{CatalogError, CatalogResult};
use warehouse_sql_sdk::Executor;

#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statements: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<CatalogResult<()>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a failure for the next unanswered statement
    pub fn fail_next(self, error: CatalogError) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(Err(error));
        self
    }

    /// Queue a success for the next unanswered statement
    pub fn succeed_next(self) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(Ok(()));
        self
    }

    /// Statements executed so far, in order
    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.statements().is_empty()
    }
}

#[async_trait::async_trait]
impl Executor for RecordingExecutor {
    async fn execute(&self, sql: &str) -> CatalogResult<()> {
        self.statements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(sql.to_string());
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
