//! Price feed capability for the FundRail ledger
//!
//! The funding core consumes native-asset/USD exchange rates through the
//! [`PriceFeed`] trait and never owns a price source itself; one
//! implementation is injected at ledger construction and held for the
//! lifetime of the ledger. Each answer is authoritative for a single call
//! only and must not be cached across calls.
//!
//! [`StaticFeed`] is the reference implementation used by harnesses and
//! tests: a fixed-precision feed whose answer can be moved between calls.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

/// Price feed errors
#[derive(Error, Debug)]
pub enum FeedError {
    /// Feed could not produce an answer
    #[error("price feed unavailable: {0}")]
    Unavailable(String),
}

/// A single price observation.
///
/// The price of one whole native asset unit is `mantissa / 10^decimals`
/// USD. Fixed-point, never a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Fixed-point price mantissa
    pub mantissa: u128,

    /// Number of decimals the mantissa carries
    pub decimals: u8,
}

/// Source of native-asset/USD exchange rates.
pub trait PriceFeed: Send + Sync {
    /// Current price of one whole native asset unit in USD.
    fn latest_price(&self) -> Result<PricePoint>;

    /// Fixed decimal precision of this feed's answers.
    fn decimals(&self) -> u8;

    /// Feed interface version.
    fn version(&self) -> u32 {
        0
    }
}

/// In-memory feed with a movable answer.
///
/// Constructed with a decimal precision and an initial answer, repriced
/// with [`StaticFeed::set_answer`]. Update goes through a mutex so the
/// feed can be repriced behind a shared reference.
#[derive(Debug)]
pub struct StaticFeed {
    decimals: u8,
    answer: Mutex<u128>,
}

impl StaticFeed {
    /// Create a feed answering `initial_answer` at `decimals` precision.
    pub fn new(decimals: u8, initial_answer: u128) -> Self {
        Self {
            decimals,
            answer: Mutex::new(initial_answer),
        }
    }

    /// Move the feed to a new answer.
    pub fn set_answer(&self, answer: u128) {
        *self.answer.lock() = answer;
    }
}

impl PriceFeed for StaticFeed {
    fn latest_price(&self) -> Result<PricePoint> {
        Ok(PricePoint {
            mantissa: *self.answer.lock(),
            decimals: self.decimals,
        })
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }
}
