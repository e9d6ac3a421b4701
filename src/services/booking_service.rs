//! Submission adapter: turns a validated draft into the `createBooking`
//! wire payload and translates the outcome into a typed result. The
//! server's price is authoritative; the local quote is only an estimate.

use std::time::Duration;

use chrono::Local;
use log::{error, info};

use crate::config::HostConfig;
use crate::error::BookingError;
use crate::form::validation;
use crate::models::booking::{ApiEnvelope, BookingConfirmation, BookingDraft, BookingPayload};
use crate::models::vehicle::Vehicle;
use crate::services::vehicle_service::VehicleService;

const REQUEST_TIMEOUT_SECS: u64 = 15;

pub struct BookingService {
    http_client: reqwest::Client,
    config: HostConfig,
}

impl BookingService {
    pub fn new(config: HostConfig) -> Result<Self, BookingError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BookingError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client, config })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Validate the draft across all four steps (the authoritative check,
    /// stricter than the per-step gate), build the payload and POST it.
    pub async fn submit_booking(
        &self,
        draft: &BookingDraft,
        vehicle: &Vehicle,
    ) -> Result<BookingConfirmation, BookingError> {
        let today = Local::now().date_naive();
        validation::validate_draft(draft, today)?;

        let payload = self.build_payload(draft, vehicle)?;

        let response = self
            .http_client
            .post(self.config.functions_url("createBooking"))
            .bearer_auth(&self.config.supabase_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BookingError::Network(format!(
                "booking endpoint responded with HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<BookingConfirmation> = response.json().await?;
        match (envelope.success, envelope.data) {
            (true, Some(confirmation)) => {
                info!(
                    "booking {} confirmed at {} for vehicle {}",
                    confirmation.booking_id, confirmation.total_price, vehicle.id
                );
                Ok(confirmation)
            }
            (true, None) => Err(BookingError::Unexpected(
                "booking confirmed without a confirmation record".to_string(),
            )),
            (false, _) => {
                let message = envelope
                    .error
                    .unwrap_or_else(|| "Failed to create booking".to_string());
                error!("booking rejected for vehicle {}: {}", vehicle.id, message);
                Err(BookingError::BusinessRejection(message))
            }
        }
    }

    /// Map the draft into the wire format. Kept separate so tests can
    /// inspect the payload without a network round trip.
    pub fn build_payload(
        &self,
        draft: &BookingDraft,
        vehicle: &Vehicle,
    ) -> Result<BookingPayload, BookingError> {
        let booking_date = draft
            .booking_date
            .ok_or_else(|| BookingError::validation("booking_date", "Booking date is required"))?;
        let requirement = VehicleService::resolve_requirement(draft.passenger_count);

        Ok(BookingPayload::from_draft(
            draft,
            &vehicle.id,
            &self.config.form_slug,
            &self.config.nonce,
            requirement.required,
            booking_date,
        ))
    }
}
