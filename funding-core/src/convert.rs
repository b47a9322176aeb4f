//! Native-asset to USD conversion
//!
//! Exact fixed-point integer math, truncating toward zero:
//!
//! ```text
//! usd = amount * mantissa / 10^(feed_decimals + asset_decimals - usd_decimals)
//! ```

use crate::error::{Error, Result};
use price_feed::PricePoint;

/// Convert `amount` (native smallest unit) to its USD-equivalent at
/// `usd_decimals` fixed-point precision.
pub fn usd_value(
    amount: u128,
    price: PricePoint,
    asset_decimals: u32,
    usd_decimals: u32,
) -> Result<u128> {
    let product = amount.checked_mul(price.mantissa).ok_or(Error::Overflow)?;

    let exponent = price.decimals as u32 + asset_decimals;
    if exponent >= usd_decimals {
        let scale = 10u128
            .checked_pow(exponent - usd_decimals)
            .ok_or(Error::Overflow)?;
        Ok(product / scale)
    } else {
        let scale = 10u128
            .checked_pow(usd_decimals - exponent)
            .ok_or(Error::Overflow)?;
        product.checked_mul(scale).ok_or(Error::Overflow)
    }
}
