// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for warehouse-sql
//!
//! This crate provides common testing components including:
//! - A scripted catalog with a probe log
//! - A recording executor
//! - Assertions for violation sets and joined errors
//! - Test fixtures and sample identifiers

pub mod assertions;
pub mod fixtures;
pub mod mock_catalog;
pub mod mock_executor;

// Re-exports for convenience
pub use assertions::{StatementAssertions, assert_violations};
pub use fixtures::Fixtures;
pub use mock_catalog::{ScriptedCatalog, ScriptedCatalogBuilder};
pub use mock_executor::RecordingExecutor;
