// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Hierarchy-Aware Safe Wrappers
//!
//! The backend answers "the object is missing" and "an ancestor of the object is missing
//! or inaccessible" with the same error text. These wrappers run the primary call and,
//! when it fails with one of those ambiguous errors, probe the ancestors of the target
//! identifier to tell the cases apart.
//!
//! | Arity | Probes, in order |
//! |-------|------------------|
//! | account | none |
//! | database | database |
//! | schema, schema with arguments | schema, then database |
//!
//! [`safe_drop`] treats a missing nearest ancestor as success: the object went away with
//! its container. [`safe_show_by_id`] never turns a failure into success and only adds
//! the probe results to the returned error.

use std::future::Future;

use warehouse_sql_ir::{AncestorProbe, Identifier};

use crate::context::OperationContext;
use crate::error::{CatalogError, CatalogResult, ErrorClass};
use crate::r#trait::Catalog;

/// Run one ancestor probe through the context
pub async fn probe_ancestor(
    ctx: &OperationContext,
    catalog: &dyn Catalog,
    probe: &AncestorProbe,
) -> CatalogResult<()> {
    match probe {
        AncestorProbe::Schema(id) => ctx.run(catalog.show_schema(id)).await.map(|_| ()),
        AncestorProbe::Database(id) => ctx.run(catalog.show_database(id)).await.map(|_| ()),
    }
}

/// Run a drop, treating "not found" of the nearest ancestor as success
///
/// Only `ObjectNotExistOrNotAuthorized` failures are reinterpreted. Every ancestor is
/// probed, even after the nearest one was reported missing.
pub async fn safe_drop<F>(
    ctx: &OperationContext,
    id: &Identifier,
    catalog: &dyn Catalog,
    primary: F,
) -> CatalogResult<()>
where
    F: Future<Output = CatalogResult<()>>,
{
    let original = match ctx.run(primary).await {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    if !original.is(ErrorClass::ObjectNotExistOrNotAuthorized) {
        return Err(original);
    }

    let probes = id.ancestor_probes();
    if probes.is_empty() {
        tracing::debug!(object = %id, "drop failed on account object, nothing to probe");
        return Err(original);
    }

    let mut failures = Vec::new();
    let mut nearest_missing = false;
    for (i, probe) in probes.iter().enumerate() {
        match probe_ancestor(ctx, catalog, probe).await {
            Ok(()) => tracing::debug!(object = %id, ancestor = %probe, "ancestor exists"),
            Err(err) if err.is_interruption() => return Err(err),
            Err(err) => {
                tracing::debug!(object = %id, ancestor = %probe, error = %err, "ancestor probe failed");
                if i == 0 && err.is(ErrorClass::ObjectNotFound) {
                    nearest_missing = true;
                }
                failures.push(err);
            }
        }
    }

    if nearest_missing {
        tracing::info!(
            object = %id,
            ancestor = %probes[0],
            "ancestor no longer exists, treating drop as done"
        );
        return Ok(());
    }

    Err(CatalogError::join(original, failures))
}

/// Run a lookup by identifier, enriching ambiguous failures with ancestor context
///
/// Reinterprets both `ObjectNotExistOrNotAuthorized` and
/// `DoesNotExistOrOperationCannotBePerformed`. Probing stops at the first ancestor
/// reported missing.
pub async fn safe_show_by_id<T, F>(
    ctx: &OperationContext,
    id: &Identifier,
    catalog: &dyn Catalog,
    primary: F,
) -> CatalogResult<T>
where
    F: Future<Output = CatalogResult<T>>,
{
    let original = match ctx.run(primary).await {
        Ok(found) => return Ok(found),
        Err(err) => err,
    };

    let ambiguous = original.is(ErrorClass::ObjectNotExistOrNotAuthorized)
        || original.is(ErrorClass::DoesNotExistOrOperationCannotBePerformed);
    if !ambiguous {
        return Err(original);
    }

    let mut failures = Vec::new();
    for probe in id.ancestor_probes() {
        match probe_ancestor(ctx, catalog, &probe).await {
            Ok(()) => tracing::debug!(object = %id, ancestor = %probe, "ancestor exists"),
            Err(err) if err.is_interruption() => return Err(err),
            Err(err) => {
                let missing = err.is(ErrorClass::ObjectNotFound);
                tracing::debug!(object = %id, ancestor = %probe, error = %err, "ancestor probe failed");
                failures.push(err);
                if missing {
                    break;
                }
            }
        }
    }

    Err(CatalogError::join(original, failures))
}
