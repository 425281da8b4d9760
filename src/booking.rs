// Booking Form - two-state machine for the hotel detail page
// Idle -> Submitting on a validated submit; Submitting -> Idle once the
// simulated processing delay has elapsed. Processing always succeeds and
// nothing is persisted.

use crate::catalog::HotelRecord;
use crate::validation::{ValidationError, ValidationResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Guest counts offered by the booking form
pub const GUEST_OPTIONS: [u32; 4] = [1, 2, 3, 4];

/// Fixed simulated processing delay; callers do the sleeping
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

const CONTEXT: &str = "Booking";
const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// REQUEST & CONFIRMATION
// ============================================================================

/// The stay details entered into the form, dates as typed (ISO YYYY-MM-DD)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

/// Terminal confirmation produced after the simulated delay
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    /// Stable reference for this confirmation (UUID)
    pub reference: String,

    pub hotel_id: u32,
    pub hotel_name: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub confirmed_at: DateTime<Utc>,

    /// User-visible confirmation text
    pub message: String,
}

impl BookingConfirmation {
    fn new(hotel: &HotelRecord, request: &BookingRequest) -> Self {
        let message = format!(
            "Booking confirmed at {}!\nCheck-in: {}\nCheck-out: {}\nGuests: {}",
            hotel.name, request.check_in, request.check_out, request.guests
        );

        BookingConfirmation {
            reference: uuid::Uuid::new_v4().to_string(),
            hotel_id: hotel.id,
            hotel_name: hotel.name.clone(),
            check_in: request.check_in.clone(),
            check_out: request.check_out.clone(),
            guests: request.guests,
            confirmed_at: Utc::now(),
            message,
        }
    }
}

// ============================================================================
// FORM STATE MACHINE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingState {
    Idle,
    Submitting,
}

#[derive(Debug)]
pub struct BookingForm {
    hotel_id: u32,
    state: BookingState,
    pending: Option<BookingRequest>,
}

impl BookingForm {
    pub fn new(hotel_id: u32) -> Self {
        BookingForm {
            hotel_id,
            state: BookingState::Idle,
            pending: None,
        }
    }

    pub fn hotel_id(&self) -> u32 {
        self.hotel_id
    }

    pub fn state(&self) -> BookingState {
        self.state
    }

    /// Whether the submit control is enabled: idle, and both dates entered
    pub fn can_submit(&self, request: &BookingRequest) -> bool {
        self.state == BookingState::Idle
            && !request.check_in.is_empty()
            && !request.check_out.is_empty()
    }

    /// Required-field validation applied before any submission
    pub fn validate(request: &BookingRequest) -> ValidationResult {
        let mut errors = Vec::new();

        let check_in = parse_date("check_in", &request.check_in, &mut errors);
        let check_out = parse_date("check_out", &request.check_out, &mut errors);

        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out <= check_in {
                errors.push(ValidationError::new(
                    "check_out",
                    "Check-out date must be after the check-in date",
                    CONTEXT,
                ));
            }
        }

        if !GUEST_OPTIONS.contains(&request.guests) {
            errors.push(ValidationError::new(
                "guests",
                format!("Guests must be between 1 and 4, got {}", request.guests),
                CONTEXT,
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Idle -> Submitting, gated by validation
    pub fn submit(&mut self, request: BookingRequest) -> ValidationResult {
        if self.state == BookingState::Submitting {
            return Err(vec![ValidationError::new(
                "form",
                "A booking is already being processed",
                CONTEXT,
            )]);
        }

        Self::validate(&request)?;

        self.pending = Some(request);
        self.state = BookingState::Submitting;
        Ok(())
    }

    /// Submitting -> Idle, yielding the confirmation
    ///
    /// Callers sleep [`PROCESSING_DELAY`] before completing; the machine
    /// itself never blocks. Returns None unless a submission is in flight.
    pub fn complete(&mut self, hotel: &HotelRecord) -> Option<BookingConfirmation> {
        if self.state != BookingState::Submitting {
            return None;
        }

        let request = self.pending.take()?;
        self.state = BookingState::Idle;
        Some(BookingConfirmation::new(hotel, &request))
    }
}

fn parse_date(field: &str, value: &str, errors: &mut Vec<ValidationError>) -> Option<NaiveDate> {
    if value.is_empty() {
        errors.push(ValidationError::new(
            field,
            "Required field is empty",
            CONTEXT,
        ));
        return None;
    }

    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(ValidationError::new(
                field,
                format!("Not a valid date (expected YYYY-MM-DD): {}", value),
                CONTEXT,
            ));
            None
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HotelCatalog;

    fn request(check_in: &str, check_out: &str, guests: u32) -> BookingRequest {
        BookingRequest {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests,
        }
    }

    #[test]
    fn test_empty_check_out_blocks_submission() {
        let mut form = BookingForm::new(1);
        let req = request("2026-09-01", "", 2);

        // Submit control disabled, and an explicit submit is rejected
        assert!(!form.can_submit(&req));
        let errors = form.submit(req).unwrap_err();
        assert_eq!(errors[0].field, "check_out");
        assert_eq!(form.state(), BookingState::Idle);
    }

    #[test]
    fn test_valid_submit_transitions_to_submitting() {
        let mut form = BookingForm::new(1);
        let req = request("2026-09-01", "2026-09-04", 2);

        assert!(form.can_submit(&req));
        assert!(form.submit(req).is_ok());
        assert_eq!(form.state(), BookingState::Submitting);
    }

    #[test]
    fn test_submit_while_submitting_is_blocked() {
        let mut form = BookingForm::new(1);
        form.submit(request("2026-09-01", "2026-09-04", 2)).unwrap();

        let req = request("2026-09-02", "2026-09-05", 1);
        assert!(!form.can_submit(&req));
        assert!(form.submit(req).is_err());
    }

    #[test]
    fn test_complete_yields_confirmation_and_returns_to_idle() {
        let catalog = HotelCatalog::with_defaults();
        let hotel = catalog.get(1).unwrap();

        let mut form = BookingForm::new(hotel.id);
        form.submit(request("2026-09-01", "2026-09-04", 2)).unwrap();

        let confirmation = form.complete(hotel).unwrap();
        assert_eq!(confirmation.hotel_name, "Sarova Stanley");
        assert_eq!(confirmation.guests, 2);
        assert!(confirmation.message.starts_with("Booking confirmed at Sarova Stanley!"));
        assert!(!confirmation.reference.is_empty());
        assert_eq!(form.state(), BookingState::Idle);
    }

    #[test]
    fn test_complete_without_submission_is_none() {
        let catalog = HotelCatalog::with_defaults();
        let mut form = BookingForm::new(1);
        assert!(form.complete(catalog.get(1).unwrap()).is_none());
    }

    #[test]
    fn test_check_out_must_follow_check_in() {
        let errors = BookingForm::validate(&request("2026-09-04", "2026-09-04", 2)).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "check_out"));
    }

    #[test]
    fn test_guest_count_outside_options_rejected() {
        let errors = BookingForm::validate(&request("2026-09-01", "2026-09-04", 5)).unwrap_err();
        assert_eq!(errors[0].field, "guests");

        let errors = BookingForm::validate(&request("2026-09-01", "2026-09-04", 0)).unwrap_err();
        assert_eq!(errors[0].field, "guests");
    }

    #[test]
    fn test_malformed_date_rejected() {
        let errors = BookingForm::validate(&request("01/09/2026", "2026-09-04", 2)).unwrap_err();
        assert_eq!(errors[0].field, "check_in");
    }
}
