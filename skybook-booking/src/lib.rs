pub mod confirmation;
pub mod form;
pub mod models;
pub mod selection;
pub mod service;
pub mod validation;

pub use confirmation::ConfirmationView;
pub use form::{BookingForm, FormStatus};
pub use models::{Booking, BookingRequest, Passenger, PassengerType};
pub use service::{BookingError, BookingService};
