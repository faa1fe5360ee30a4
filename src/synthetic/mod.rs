//! Parameterized synthetic comparison-series generator
//!
//! The dashboard compares Bitcoin against mocked series for real estate,
//! money supply, liquidity, and Bitcoin's own history. All of those follow
//! the same recipe (exponential base growth, cyclical swing, bounded random
//! jitter), so one parameterized generator replaces the per-domain copies.

mod generator;
mod presets;

pub use generator::{Cycle, MonthlySeries, SeriesPoint, SyntheticConfig};
pub use presets::{
    bitcoin_price, global_liquidity, m2_money_supply, reference_btc_price, City,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_preset_families_reachable() {
        // Every preset family is usable through the module surface
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        let m2 = m2_money_supply().generate(start, 12, 0);
        assert!(m2.points()[0].value > 14.0 && m2.points()[0].value < 17.0);

        let gli = global_liquidity().generate(start, 12, 0);
        assert!(gli.points().iter().all(|p| p.value >= 0.2 && p.value <= 0.8));

        let btc = bitcoin_price(true).generate(start, 12, 0);
        assert!(btc.points().iter().all(|p| p.value >= 1_000.0));

        let la = City::LosAngeles.config().generate(start, 12, 0);
        assert_eq!(la.len(), 12);
    }
}
