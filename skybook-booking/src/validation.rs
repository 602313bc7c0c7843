use crate::models::BookingRequest;
use skybook_core::validation::{is_valid_email, passenger_field, ValidationErrors};

/// Synchronous submit-time validation. Field identifiers match the form's
/// input ids (`contactEmail`, `passenger0LastName`, ...) so errors land next
/// to the field that caused them.
pub fn validate_request(request: &BookingRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if request.contact_email.is_empty() {
        errors.add("contactEmail", "Email is required");
    } else if !is_valid_email(&request.contact_email) {
        errors.add("contactEmail", "Email is invalid");
    }

    if request.contact_phone.is_empty() {
        errors.add("contactPhone", "Phone number is required");
    }

    // A booking must carry at least one passenger; the form always starts
    // with one, so this only triggers for hand-built requests.
    if request.passengers.is_empty() {
        errors.add("passengers", "At least one passenger is required");
    }

    for (index, passenger) in request.passengers.iter().enumerate() {
        if passenger.first_name.is_empty() {
            errors.add(passenger_field(index, "FirstName"), "First name is required");
        }
        if passenger.last_name.is_empty() {
            errors.add(passenger_field(index, "LastName"), "Last name is required");
        }
        if passenger.id_number.is_empty() {
            errors.add(
                passenger_field(index, "IdNumber"),
                "ID/Passport number is required",
            );
        }
        // Passenger email is optional and deliberately unchecked.
    }

    errors.into_result()
}
