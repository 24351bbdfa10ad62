// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Logging bootstrap
//!
//! Installs a `tracing` subscriber writing formatted events. `RUST_LOG` takes precedence
//! over the configured filter.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::SdkConfig;

/// Build the filter: `RUST_LOG` if set, otherwise the configured directives
pub fn env_filter(config: &SdkConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Returns `false` if a global subscriber was already installed; the existing one is kept.
pub fn init(config: &SdkConfig) -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(config))
        .finish();

    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
    if installed {
        tracing::debug!(account = %config.account, "logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = SdkConfig::new("acct").with_log_filter("warn");
        let _ = init(&config);
        assert!(!init(&config));
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let config = SdkConfig::new("acct").with_log_filter("[[not a filter");
        let filter = env_filter(&config);
        assert!(!filter.to_string().is_empty());
    }
}
