use rand::Rng;
use serde::{Deserialize, Serialize};
use skybook_core::flight::Flight;
use skybook_shared::Masked;

/// Prefix of every generated booking code.
pub const BOOKING_CODE_PREFIX: &str = "SKYB";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerType {
    #[default]
    Adult,
    Child,
    Infant,
}

/// One traveller on a booking. Only ever persisted embedded in a Booking;
/// the form mutates these field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    /// Optional; no format check is applied.
    #[serde(default)]
    pub email: String,
    pub id_number: String,
    #[serde(rename = "type", default)]
    pub passenger_type: PassengerType,
}

impl Passenger {
    /// The blank entry the form starts with.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The validated form payload handed to the submit operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub contact_email: String,
    pub contact_phone: String,
    pub passengers: Vec<Passenger>,
}

/// A confirmed booking: the selected flight snapshotted by value, the
/// passenger sequence in entry order, and the generated code. Immutable once
/// created; the camelCase field names are the persisted wire format for the
/// `bookingDetails` slot. Contact details are masked in Debug output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub flight: Flight,
    pub passengers: Vec<Passenger>,
    pub contact_email: Masked<String>,
    pub contact_phone: Masked<String>,
    pub booking_code: String,
}

/// `SKYB` plus six random digits, 100000..=999999.
pub fn generate_booking_code() -> String {
    let digits = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("{BOOKING_CODE_PREFIX}{digits}")
}
