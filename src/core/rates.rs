use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::DailyRecord;
use crate::core::primitives::{decimal_to_f64, percentage};

/// Decimal places kept for conversion-rate percentages.
pub const RATE_DECIMALS: u32 = 2;

/// Conversion rates for one date, keyed by variation key.
///
/// Only computable rates are present; a missing key is a gap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: String,
    pub rates: IndexMap<String, f64>,
}

impl RatePoint {
    #[must_use]
    pub fn rate(&self, key: &str) -> Option<f64> {
        self.rates.get(key).copied()
    }

    /// Returns `true` when any of `keys` has a defined rate on this date.
    #[must_use]
    pub fn has_any<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter().any(|key| self.rates.contains_key(key))
    }
}

/// Computes `round(conversions / visits * 100, 2)` per conversion key.
///
/// Keys with missing or non-positive visits are omitted rather than reported
/// as zero; zero conversions over positive visits is a valid `0.0`.
#[must_use]
pub fn compute_rate_point(record: &DailyRecord) -> RatePoint {
    let mut rates = IndexMap::with_capacity(record.conversions.len());
    for (key, &conversions) in &record.conversions {
        let Some(&visits) = record.visits.get(key) else {
            trace!(date = %record.date, key = %key, "omitting rate: no visits counter");
            continue;
        };
        let Some(rate) = percentage(conversions, visits, RATE_DECIMALS) else {
            trace!(date = %record.date, key = %key, visits, "omitting rate: not computable");
            continue;
        };
        match decimal_to_f64(rate, "conversion rate") {
            Ok(value) if value.is_finite() => {
                rates.insert(key.clone(), value);
            }
            _ => {
                trace!(date = %record.date, key = %key, "omitting rate: not finite");
            }
        }
    }

    RatePoint {
        date: record.date.clone(),
        rates,
    }
}

/// Computes rate points for every record, preserving input order.
#[must_use]
pub fn compute_rate_points(records: &[DailyRecord]) -> Vec<RatePoint> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        records.par_iter().map(compute_rate_point).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records.iter().map(compute_rate_point).collect()
    }
}
