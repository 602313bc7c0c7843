use crate::flight::Flight;
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated latency of the flight search, standing in for the absent
/// supplier API call.
pub const SEARCH_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Departure,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The active sort selection on the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Price,
            order: SortOrder::Asc,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Re-selecting the active key flips direction; a new key resets to
    /// ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.flipped();
        } else {
            self.key = key;
            self.order = SortOrder::Asc;
        }
    }
}

/// Hour component of a duration string: the leading digits before `'h'`, so
/// `"2h 5m"` compares as 2. Minutes are deliberately ignored; this mirrors
/// the longstanding sort policy and must not be silently upgraded to full
/// duration parsing. Anything unparsable compares as zero.
pub fn duration_hours(duration: &str) -> i64 {
    let head = duration.split('h').next().unwrap_or("").trim_start();
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Add the airline to the filter set if absent, remove it if present.
pub fn toggle_airline(filter: &mut Vec<String>, airline: &str) {
    if let Some(pos) = filter.iter().position(|a| a == airline) {
        filter.remove(pos);
    } else {
        filter.push(airline.to_string());
    }
}

/// Narrow and order the catalog: keep a flight iff its airline is in the
/// filter set (an empty set keeps everything), then sort by the selected key.
/// The sort is stable, so equal keys keep their catalog order.
pub fn filter_and_sort(flights: &[Flight], airline_filter: &[String], sort: SortState) -> Vec<Flight> {
    let mut result: Vec<Flight> = flights
        .iter()
        .filter(|f| airline_filter.is_empty() || airline_filter.iter().any(|a| a == &f.airline))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = match sort.key {
            SortKey::Price => a.price.cmp(&b.price),
            // Valid lexicographically because times are zero-padded 24h HH:MM.
            SortKey::Departure => a.departure_time.cmp(&b.departure_time),
            SortKey::Duration => duration_hours(&a.duration).cmp(&duration_hours(&b.duration)),
        };
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    result
}

/// A search submission from the entry form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure_date: String,
    #[serde(default = "default_passenger_count")]
    pub passengers: u32,
    #[serde(default = "default_cabin_class")]
    pub cabin_class: String,
}

fn default_passenger_count() -> u32 {
    1
}

fn default_cabin_class() -> String {
    "Economy".to_string()
}

impl SearchQuery {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.origin.trim().is_empty() {
            errors.add("origin", "Please select origin airport");
        }
        if self.destination.trim().is_empty() {
            errors.add("destination", "Please select destination airport");
        } else if !self.origin.trim().is_empty() && self.origin == self.destination {
            errors.add("destination", "Destination cannot be the same as origin");
        }
        if self.departure_date.trim().is_empty() {
            errors.add("departureDate", "Please select departure date");
        } else if chrono::NaiveDate::parse_from_str(&self.departure_date, "%Y-%m-%d").is_err() {
            errors.add("departureDate", "Departure date must be a valid date");
        }

        errors.into_result()
    }

    pub fn swap_airports(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }
}
