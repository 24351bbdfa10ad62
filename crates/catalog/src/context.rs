// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Cancellation and deadline handling for catalog and executor calls

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{CatalogError, CatalogResult};

/// Context shared by every call of one logical operation
///
/// Clones share the same cancellation token, so cancelling any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    cancellation: CancellationToken,
    timeout: Option<Duration>,
}

impl OperationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `timeout` to each call run through this context
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Drive `call` to completion unless the context is cancelled or the timeout elapses
    pub async fn run<F, T>(&self, call: F) -> CatalogResult<T>
    where
        F: Future<Output = CatalogResult<T>>,
    {
        if self.cancellation.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        let guarded = async {
            tokio::select! {
                biased;
                _ = self.cancellation.cancelled() => Err(CatalogError::Cancelled),
                result = call => result,
            }
        };

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, guarded)
                .await
                .map_err(|_| CatalogError::timeout(limit))?,
            None => guarded.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_passes_result_through() {
        let ctx = OperationContext::new();
        assert_eq!(ctx.run(async { Ok(7) }).await, Ok(7));
        assert_eq!(
            ctx.run(async { Err::<(), _>(CatalogError::not_found("DB1")) })
                .await,
            Err(CatalogError::not_found("DB1"))
        );
    }

    #[tokio::test]
    async fn test_cancelled_context_short_circuits() {
        let ctx = OperationContext::new();
        ctx.clone().cancel();
        assert!(ctx.is_cancelled());
        assert_eq!(ctx.run(async { Ok(1) }).await, Err(CatalogError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_elapses() {
        let ctx = OperationContext::new().with_timeout(Duration::from_millis(50));
        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;
        assert_eq!(result, Err(CatalogError::Timeout { millis: 50 }));
    }
}
