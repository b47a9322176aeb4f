//! FundRail funding core
//!
//! Minimal crowdfunding ledger for a single campaign. Contributions are
//! accepted only when a live price conversion values them above a
//! configured USD minimum. The ledger tracks each funder's cumulative
//! total on a duplicate-free roster until the owner sweeps the full
//! balance, which atomically resets every record and starts a new
//! funding epoch.
//!
//! # Architecture
//!
//! - **Single aggregate**: all campaign state lives in [`FundingLedger`],
//!   passed by exclusive reference into each operation
//! - **Injected price source**: the ledger consumes a
//!   [`price_feed::PriceFeed`] capability captured once at construction
//! - **Effects-last withdrawal**: the swept balance is surrendered only
//!   after every record is already cleared
//!
//! # Invariants
//!
//! - Held balance == Σ(per-funder cumulative amounts) at all times
//! - Roster holds each funder at most once per epoch, in
//!   first-contribution order
//! - Rejected calls leave observable state unchanged
//!
//! # Example
//!
//! ```
//! use funding_core::{Config, FunderId, FundingLedger};
//! use price_feed::StaticFeed;
//! use std::sync::Arc;
//!
//! # fn main() -> funding_core::Result<()> {
//! // 8-decimal feed answering 2000 USD per asset unit
//! let feed = Arc::new(StaticFeed::new(8, 2_000_00000000));
//! let mut ledger = FundingLedger::new(FunderId::new("owner"), feed, Config::default())?;
//!
//! ledger.contribute(10u128.pow(18), FunderId::new("alice"))?;
//! let receipt = ledger.withdraw(&FunderId::new("owner"))?;
//! assert_eq!(receipt.amount, 10u128.pow(18));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod config;
pub mod convert;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod types;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use ledger::FundingLedger;
pub use metrics::Metrics;
pub use types::{FunderId, WithdrawalReceipt};
