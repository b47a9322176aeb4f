//! Metrics collection for observability
//!
//! # Metrics
//!
//! - `funding_contributions_accepted_total` - Contributions that cleared the threshold
//! - `funding_contributions_rejected_total` - Contributions rejected below the threshold
//! - `funding_withdrawals_total` - Completed full-balance withdrawals
//! - `funding_balance_units` - Currently held balance, native smallest unit

use prometheus::{IntCounter, IntGauge, Registry};
use std::sync::Arc;

/// Metrics collector
///
/// Registered on a private registry so independent ledgers can each carry
/// their own collector.
#[derive(Clone)]
pub struct Metrics {
    /// Contributions that cleared the threshold
    pub contributions_accepted: IntCounter,

    /// Contributions rejected below the threshold
    pub contributions_rejected: IntCounter,

    /// Completed full-balance withdrawals
    pub withdrawals: IntCounter,

    /// Currently held balance, native smallest unit
    pub balance: IntGauge,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let contributions_accepted = IntCounter::new(
            "funding_contributions_accepted_total",
            "Contributions that cleared the threshold",
        )?;
        registry.register(Box::new(contributions_accepted.clone()))?;

        let contributions_rejected = IntCounter::new(
            "funding_contributions_rejected_total",
            "Contributions rejected below the threshold",
        )?;
        registry.register(Box::new(contributions_rejected.clone()))?;

        let withdrawals = IntCounter::new(
            "funding_withdrawals_total",
            "Completed full-balance withdrawals",
        )?;
        registry.register(Box::new(withdrawals.clone()))?;

        let balance = IntGauge::new(
            "funding_balance_units",
            "Currently held balance, native smallest unit",
        )?;
        registry.register(Box::new(balance.clone()))?;

        Ok(Self {
            contributions_accepted,
            contributions_rejected,
            withdrawals,
            balance,
            registry,
        })
    }

    /// Record an accepted contribution
    pub fn record_accepted(&self) {
        self.contributions_accepted.inc();
    }

    /// Record a rejected contribution
    pub fn record_rejected(&self) {
        self.contributions_rejected.inc();
    }

    /// Record a completed withdrawal
    pub fn record_withdrawal(&self) {
        self.withdrawals.inc();
    }

    /// Update the held-balance gauge
    pub fn record_balance(&self, balance: u128) {
        self.balance.set(i64::try_from(balance).unwrap_or(i64::MAX));
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
