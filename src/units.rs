//! BTC denomination helpers
//!
//! The dashboard displays most comparisons in BTC or in "bits"
//! (one-millionth of a Bitcoin).

use crate::error::ModelError;

/// Bits per Bitcoin (1 bit = 1e-6 BTC)
pub const BITS_PER_BTC: f64 = 1_000_000.0;

/// Satoshis per Bitcoin
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Convert a USD amount to BTC at the given price
///
/// Fails with [`ModelError::InvalidArgument`] when the price is non-finite or
/// non-positive.
pub fn usd_to_btc(usd: f64, btc_price: f64) -> Result<f64, ModelError> {
    if !btc_price.is_finite() || btc_price <= 0.0 {
        return Err(ModelError::invalid(format!(
            "btc_price must be finite and positive, got {btc_price}"
        )));
    }
    Ok(usd / btc_price)
}

/// Convert a USD amount to bits at the given BTC price
pub fn usd_to_bits(usd: f64, btc_price: f64) -> Result<f64, ModelError> {
    Ok(usd_to_btc(usd, btc_price)? * BITS_PER_BTC)
}

pub fn btc_to_bits(btc: f64) -> f64 {
    btc * BITS_PER_BTC
}

pub fn bits_to_btc(bits: f64) -> f64 {
    bits / BITS_PER_BTC
}
