//! Error types for the funding ledger

use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Funding ledger errors
#[derive(Error, Debug)]
pub enum Error {
    /// Contribution converts to less than the minimum USD-equivalent
    #[error("insufficient value: {got} USD-equivalent, minimum is {required}")]
    InsufficientValue {
        /// Minimum USD-equivalent, fixed-point
        required: u128,
        /// What the contribution converted to, fixed-point
        got: u128,
    },

    /// Withdrawal attempted by a non-owner identity
    #[error("caller is not the ledger owner")]
    NotOwner,

    /// Roster position does not exist
    #[error("funder index {index} out of range (roster length {len})")]
    IndexOutOfRange {
        /// Requested roster position
        index: usize,
        /// Current roster length
        len: usize,
    },

    /// Price feed failure
    #[error("price feed error: {0}")]
    Feed(#[from] price_feed::FeedError),

    /// Checked arithmetic overflowed
    #[error("arithmetic overflow")]
    Overflow,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
