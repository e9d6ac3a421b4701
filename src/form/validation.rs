//! Per-step required-field checks. `BookingForm::next` gates on these, and
//! the submission adapter re-runs all of them as the authoritative check.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{BookingError, FieldError};
use crate::form::Step;
use crate::models::airports::airport_by_id;
use crate::models::booking::{BookingDraft, EntertainmentType, ServiceType};
use crate::models::themes::{theme_by_id, AgeBand};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Field errors for one step, empty when the step is complete.
pub fn validate_step(step: Step, draft: &BookingDraft, today: NaiveDate) -> Vec<FieldError> {
    match step {
        Step::Personal => validate_personal(draft, today),
        Step::Service => validate_service(draft),
        Step::Itinerary => validate_itinerary(draft),
        Step::Review => Vec::new(),
    }
}

/// All steps at once; this is what submission runs.
pub fn validate_draft(draft: &BookingDraft, today: NaiveDate) -> Result<(), BookingError> {
    let mut errors = Vec::new();
    for step in [Step::Personal, Step::Service, Step::Itinerary, Step::Review] {
        errors.extend(validate_step(step, draft, today));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(BookingError::Validation(errors))
    }
}

fn validate_personal(draft: &BookingDraft, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.customer_name.trim().is_empty() {
        errors.push(FieldError::new("customer_name", "Full name is required"));
    }
    if draft.customer_email.trim().is_empty() {
        errors.push(FieldError::new("customer_email", "Email address is required"));
    } else if !is_valid_email(&draft.customer_email) {
        errors.push(FieldError::new("customer_email", "Enter a valid email address"));
    }
    if draft.customer_phone.is_empty() {
        errors.push(FieldError::new("customer_phone", "Phone number is required"));
    }
    match draft.booking_date {
        None => errors.push(FieldError::new("booking_date", "Date is required")),
        Some(date) if date < today => {
            errors.push(FieldError::new("booking_date", "Date must be today or later"))
        }
        Some(_) => {}
    }
    if draft.passenger_count < 1 {
        errors.push(FieldError::new("passenger_count", "At least one passenger is required"));
    }

    errors
}

fn validate_service(draft: &BookingDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match draft.service_type {
        ServiceType::Hourly => {
            if draft.duration_hours < 1 {
                errors.push(FieldError::new("duration_hours", "Duration must be at least 1 hour"));
            }
        }
        ServiceType::Airport => {
            let transfer = &draft.airport_transfer;
            if airport_by_id(&transfer.airport).is_none() {
                errors.push(FieldError::new("airport", "Select an airport"));
            }
            if transfer.flight_number.trim().is_empty() {
                errors.push(FieldError::new("flight_number", "Flight number is required"));
            }
            if transfer.flight_time.is_none() {
                errors.push(FieldError::new("flight_time", "Flight time is required"));
            }
        }
        ServiceType::Custom => {}
    }

    errors
}

fn validate_itinerary(draft: &BookingDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.pickup_address.trim().is_empty() {
        errors.push(FieldError::new("pickup_address", "Pickup address is required"));
    }
    if draft.dropoff_address.trim().is_empty() {
        errors.push(FieldError::new("dropoff_address", "Drop-off address is required"));
    }

    let amenities = &draft.amenities;
    if amenities.champagne_bottles < 1 {
        errors.push(FieldError::new(
            "amenities.champagne_bottles",
            "At least one champagne bottle is included",
        ));
    }
    if amenities.birthday_decorations {
        match amenities.birthday_person_age {
            None => errors.push(FieldError::new(
                "amenities.birthday_person_age",
                "Birthday person's age is required",
            )),
            Some(age) => match amenities.birthday_theme.as_deref() {
                None | Some("") => errors.push(FieldError::new(
                    "amenities.birthday_theme",
                    "Select a decoration theme",
                )),
                Some(theme_id) => match theme_by_id(theme_id) {
                    None => errors.push(FieldError::new(
                        "amenities.birthday_theme",
                        "Unknown decoration theme",
                    )),
                    Some(theme) if theme.age_band != AgeBand::from_age(age) => {
                        errors.push(FieldError::new(
                            "amenities.birthday_theme",
                            "The chosen theme does not match the birthday person's age",
                        ))
                    }
                    Some(_) => {}
                },
            },
        }
    }

    let entertainment = &draft.entertainment_service;
    if entertainment.service_type != EntertainmentType::None && !entertainment.verified_age {
        errors.push(FieldError::new(
            "entertainment_service.verified_age",
            "Age verification is required for entertainment services",
        ));
    }

    errors
}
