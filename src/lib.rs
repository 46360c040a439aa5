#![doc(test(attr(deny(warnings))))]

//! Safra Core keeps farm records (properties, crop seasons, field operations,
//! costs, harvests, machinery and improvements) and turns them into per-season
//! financial results ready for report generation.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    if utils::init_tracing(None) {
        tracing::info!("Safra Core tracing initialized.");
    }
}

/// Initializes tracing using the filter stored in the user configuration, if any.
///
/// Only the first initialization in a process installs a subscriber; call this
/// instead of [`init`] when a configuration is available.
pub fn init_with_config(config: &config::Config) {
    if utils::init_tracing(config.log_filter.as_deref()) {
        tracing::info!(filter = ?config.log_filter, "Safra Core tracing initialized.");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init_with_config(&crate::config::Config::default());
        assert!(!crate::utils::init_tracing(Some("safra_core=debug")));
    }
}
