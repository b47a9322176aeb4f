//! Configuration for the funding ledger

use serde::{Deserialize, Serialize};

/// Funding ledger configuration
///
/// The minimum threshold and decimal handling are deployment knobs, not a
/// behavioral contract; the defaults reproduce the common 50 USD minimum
/// over an 18-decimal native asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum accepted contribution, whole USD
    pub minimum_usd: u64,

    /// Decimal places of the native asset's smallest unit
    pub asset_decimals: u32,

    /// Fixed-point precision USD-equivalents are computed at
    pub usd_decimals: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimum_usd: 50,
            asset_decimals: 18,
            usd_decimals: 18,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(minimum) = std::env::var("FUNDING_MINIMUM_USD") {
            config.minimum_usd = minimum
                .parse()
                .map_err(|e| crate::Error::Config(format!("FUNDING_MINIMUM_USD: {}", e)))?;
        }

        if let Ok(decimals) = std::env::var("FUNDING_ASSET_DECIMALS") {
            config.asset_decimals = decimals
                .parse()
                .map_err(|e| crate::Error::Config(format!("FUNDING_ASSET_DECIMALS: {}", e)))?;
        }

        if let Ok(decimals) = std::env::var("FUNDING_USD_DECIMALS") {
            config.usd_decimals = decimals
                .parse()
                .map_err(|e| crate::Error::Config(format!("FUNDING_USD_DECIMALS: {}", e)))?;
        }

        Ok(config)
    }

    /// Minimum threshold at `usd_decimals` fixed-point precision
    pub fn minimum_usd_fixed(&self) -> crate::Result<u128> {
        let scale = 10u128
            .checked_pow(self.usd_decimals)
            .ok_or(crate::Error::Overflow)?;
        (self.minimum_usd as u128)
            .checked_mul(scale)
            .ok_or(crate::Error::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.minimum_usd, 50);
        assert_eq!(config.asset_decimals, 18);
        assert_eq!(config.usd_decimals, 18);
    }

    #[test]
    fn test_minimum_usd_fixed() {
        let config = Config::default();
        assert_eq!(
            config.minimum_usd_fixed().unwrap(),
            50_000_000_000_000_000_000
        );
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "minimum_usd = 100").unwrap();
        writeln!(file, "asset_decimals = 18").unwrap();
        writeln!(file, "usd_decimals = 18").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.minimum_usd, 100);
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "minimum_usd = \"plenty\"").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
