//! Core types for the funding ledger
//!
//! Amounts are non-negative integers in the native asset's smallest unit.
//! All arithmetic on them is checked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Funder identity (address, account number, etc.), opaque to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunderId(String);

impl FunderId {
    /// Create new funder ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of one completed full-balance withdrawal.
///
/// Produced only after the ledger has already been reset; holding a receipt
/// means the swept value is no longer reachable through the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    /// Unique withdrawal ID (UUIDv7 for time-ordering)
    pub withdrawal_id: Uuid,

    /// Amount swept to the owner, native smallest unit
    pub amount: u128,

    /// Number of funder records cleared by the sweep
    pub funders_cleared: usize,

    /// When the sweep happened
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funder_id_round_trip() {
        let funder = FunderId::new("0x90f79bf6eb2c4f870365e785982e1f101e93b906");
        assert_eq!(funder.as_str(), "0x90f79bf6eb2c4f870365e785982e1f101e93b906");
        assert_eq!(funder.to_string(), funder.as_str());
    }

    #[test]
    fn test_receipt_serializes() {
        let receipt = WithdrawalReceipt {
            withdrawal_id: Uuid::now_v7(),
            amount: 25_000_000_000_000_000,
            funders_cleared: 3,
            occurred_at: Utc::now(),
        };

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("25000000000000000"));
        assert!(json.contains("\"funders_cleared\":3"));
    }
}
