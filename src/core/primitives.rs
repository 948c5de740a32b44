use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Exact `numerator * 100 / denominator` rounded to `decimals` places.
///
/// Returns `None` for a non-positive denominator or on decimal overflow.
#[must_use]
pub fn percentage(numerator: i64, denominator: i64, decimals: u32) -> Option<Decimal> {
    if denominator <= 0 {
        return None;
    }

    Decimal::from(numerator)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(Decimal::from(denominator))
        .map(|ratio| ratio.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}
