//! Funding ledger orchestration
//!
//! Ties the price feed, conversion, and funder bookkeeping into the
//! contribute/withdraw state machine. Per funding epoch the ledger moves
//! `Empty -> Accumulating -> Empty`: contributions accumulate records, a
//! successful withdrawal sweeps the whole balance and clears every record
//! in one transition.

use crate::{
    convert,
    error::{Error, Result},
    metrics::Metrics,
    types::{FunderId, WithdrawalReceipt},
    Config,
};
use chrono::{DateTime, Utc};
use price_feed::PriceFeed;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Crowdfunding ledger for a single campaign.
///
/// The host runtime serializes all mutating calls; the ledger is an
/// explicitly owned aggregate taken by exclusive reference, with no
/// ambient state and no internal locking. Every operation either commits
/// fully or fails with observable state unchanged.
pub struct FundingLedger {
    /// Identity allowed to withdraw, fixed at construction
    owner: FunderId,

    /// Injected price source, fixed at construction
    feed: Arc<dyn PriceFeed>,

    /// Minimum accepted contribution, USD fixed-point at `usd_decimals`
    minimum_usd: u128,

    asset_decimals: u32,
    usd_decimals: u32,

    /// Cumulative contribution per funder for the current epoch
    amounts: HashMap<FunderId, u128>,

    /// Distinct funders in first-contribution order for the current epoch
    roster: Vec<FunderId>,

    /// Held balance, always the sum of `amounts`
    balance: u128,

    epoch_started_at: DateTime<Utc>,

    metrics: Option<Metrics>,
}

impl FundingLedger {
    /// Create a ledger owned by `owner`, pricing contributions through `feed`.
    pub fn new(owner: FunderId, feed: Arc<dyn PriceFeed>, config: Config) -> Result<Self> {
        let minimum_usd = config.minimum_usd_fixed()?;

        Ok(Self {
            owner,
            feed,
            minimum_usd,
            asset_decimals: config.asset_decimals,
            usd_decimals: config.usd_decimals,
            amounts: HashMap::new(),
            roster: Vec::new(),
            balance: 0,
            epoch_started_at: Utc::now(),
            metrics: None,
        })
    }

    /// Attach a metrics collector
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Accept `amount` from `funder` if it clears the USD minimum.
    ///
    /// The feed is consulted on every call; one answer is never reused
    /// across calls. On rejection or failure nothing is recorded and the
    /// attached value stays with the caller.
    pub fn contribute(&mut self, amount: u128, funder: FunderId) -> Result<()> {
        let price = self.feed.latest_price()?;
        let usd = convert::usd_value(amount, price, self.asset_decimals, self.usd_decimals)?;

        if usd < self.minimum_usd {
            tracing::debug!(
                %funder,
                amount,
                usd,
                minimum = self.minimum_usd,
                "contribution rejected below minimum"
            );
            if let Some(metrics) = &self.metrics {
                metrics.record_rejected();
            }
            return Err(Error::InsufficientValue {
                required: self.minimum_usd,
                got: usd,
            });
        }

        // All checked steps happen before the first mutation, so a failed
        // call cannot leave a partial record behind.
        let cumulative = self
            .amounts
            .get(&funder)
            .copied()
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let balance = self.balance.checked_add(amount).ok_or(Error::Overflow)?;

        if !self.amounts.contains_key(&funder) {
            self.roster.push(funder.clone());
        }
        self.amounts.insert(funder.clone(), cumulative);
        self.balance = balance;

        tracing::info!(%funder, amount, usd, cumulative, "contribution accepted");
        if let Some(metrics) = &self.metrics {
            metrics.record_accepted();
            metrics.record_balance(self.balance);
        }

        Ok(())
    }

    /// Sweep the full held balance to the owner and reset every record.
    ///
    /// Every record is cleared before the swept value is surrendered, so a
    /// re-entrant caller can only ever observe a fully reset ledger.
    /// Sweeping an empty ledger is a valid transfer of zero.
    pub fn withdraw(&mut self, caller: &FunderId) -> Result<WithdrawalReceipt> {
        if *caller != self.owner {
            tracing::warn!(%caller, "withdrawal attempted by non-owner");
            return Err(Error::NotOwner);
        }

        let amount = self.balance;
        let funders_cleared = self.roster.len();

        self.amounts.clear();
        self.roster.clear();
        self.balance = 0;
        self.epoch_started_at = Utc::now();

        tracing::info!(amount, funders_cleared, "ledger balance withdrawn");
        if let Some(metrics) = &self.metrics {
            metrics.record_withdrawal();
            metrics.record_balance(0);
        }

        Ok(WithdrawalReceipt {
            withdrawal_id: Uuid::now_v7(),
            amount,
            funders_cleared,
            occurred_at: Utc::now(),
        })
    }

    /// The configured price feed
    pub fn price_feed(&self) -> &Arc<dyn PriceFeed> {
        &self.feed
    }

    /// Cumulative amount contributed by `funder` this epoch; 0 if none
    pub fn address_to_amount_funded(&self, funder: &FunderId) -> u128 {
        self.amounts.get(funder).copied().unwrap_or(0)
    }

    /// Funder at roster position `index`
    ///
    /// `index` 0 failing is the observable signal of an empty (reset) roster.
    pub fn funders(&self, index: usize) -> Result<&FunderId> {
        self.roster.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.roster.len(),
        })
    }

    /// Number of distinct funders this epoch
    pub fn funder_count(&self) -> usize {
        self.roster.len()
    }

    /// The ledger owner
    pub fn owner(&self) -> &FunderId {
        &self.owner
    }

    /// Currently held balance, native smallest unit
    pub fn balance(&self) -> u128 {
        self.balance
    }

    /// Minimum accepted contribution, USD fixed-point at `usd_decimals`
    pub fn minimum_usd(&self) -> u128 {
        self.minimum_usd
    }

    /// When the current funding epoch started
    pub fn epoch_started_at(&self) -> DateTime<Utc> {
        self.epoch_started_at
    }
}
