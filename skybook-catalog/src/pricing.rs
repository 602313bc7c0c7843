use serde::{Deserialize, Serialize};

/// Fixed 10% tax-and-fees rate. Policy, not configuration.
pub const TAX_RATE: f64 = 0.10;

/// Total fare for a party: base price, plus tax, per passenger.
pub fn total_price(price: i64, passenger_count: usize) -> f64 {
    price as f64 * (1.0 + TAX_RATE) * passenger_count as f64
}

/// Fare breakdown shown on the booking summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Base fare for one passenger, minor-unit-free.
    pub base_fare: i64,
    /// Tax-and-fees line for one passenger.
    pub tax_and_fees: f64,
    pub passenger_count: usize,
    pub total: f64,
}

impl Quote {
    pub fn for_party(price: i64, passenger_count: usize) -> Self {
        Self {
            base_fare: price,
            tax_and_fees: price as f64 * TAX_RATE,
            passenger_count,
            total: total_price(price, passenger_count),
        }
    }
}
