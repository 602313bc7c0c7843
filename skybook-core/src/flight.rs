use serde::{Deserialize, Serialize};

/// A flight record from the catalog. Immutable once loaded; the camelCase
/// field names are the persisted wire format for the `selectedFlight` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub airline_logo: String,
    /// Zero-padded 24h `HH:MM`.
    pub departure_time: String,
    pub arrival_time: String,
    /// Free-form, e.g. `"2h 5m"`.
    pub duration: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    /// Minor-unit-free IDR amount.
    pub price: i64,
    pub flight_number: String,
}

/// An airport entry in the directory backing the search form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
}
