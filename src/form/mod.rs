//! The 4-step booking wizard: a linear state machine owning one
//! `BookingDraft`. All mutation goes through methods here; after every
//! accepted mutation a recomputation pass refreshes derived state (vehicle
//! requirement, airport pickup auto-fill, theme invalidation) so nothing
//! depends on ambient reactivity.

pub mod validation;

use chrono::{Local, NaiveDate, NaiveTime};
use log::debug;
use uuid::Uuid;

use crate::error::{BookingError, FieldError};
use crate::models::airports::airport_by_id;
use crate::models::booking::{
    BookingConfirmation, BookingDraft, EntertainmentType, ItineraryStop, PhoneNumber, ServiceType,
    TransferType,
};
use crate::models::themes::{themes_for_age, theme_by_id, AgeBand, BirthdayTheme};
use crate::models::vehicle::Vehicle;
use crate::services::booking_service::BookingService;
use crate::services::pricing_service::PricingService;
use crate::services::vehicle_service::{VehicleRequirement, VehicleService};

/// The wizard's steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Personal,
    Service,
    Itinerary,
    Review,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Personal => 1,
            Step::Service => 2,
            Step::Itinerary => 3,
            Step::Review => 4,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Personal => Some(Step::Service),
            Step::Service => Some(Step::Itinerary),
            Step::Itinerary => Some(Step::Review),
            Step::Review => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Personal => None,
            Step::Service => Some(Step::Personal),
            Step::Itinerary => Some(Step::Service),
            Step::Review => Some(Step::Itinerary),
        }
    }
}

/// One modal session's booking form.
pub struct BookingForm {
    vehicle: Vehicle,
    step: Step,
    draft: BookingDraft,
    requirement: VehicleRequirement,
    /// Set once the user edits the pickup field themselves; the airport
    /// auto-fill never overwrites a touched field.
    pickup_touched: bool,
    submitting: bool,
}

impl BookingForm {
    pub fn new(vehicle: Vehicle) -> Self {
        let draft = BookingDraft::default();
        let requirement = VehicleService::resolve_requirement(draft.passenger_count);
        Self {
            vehicle,
            step: Step::Personal,
            draft,
            requirement,
            pickup_touched: false,
            submitting: false,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn vehicle_requirement(&self) -> VehicleRequirement {
        self.requirement
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Live quote for the current draft. An estimate only; the server
    /// confirms the final amount at submission.
    pub fn estimated_total(&self) -> i64 {
        PricingService::total_price(&self.vehicle, &self.draft)
    }

    /// Themes offered for the currently entered birthday age.
    pub fn available_birthday_themes(&self) -> Vec<&'static BirthdayTheme> {
        match self.draft.amenities.birthday_person_age {
            Some(age) => themes_for_age(age),
            None => Vec::new(),
        }
    }

    // ---- step 1: personal details -------------------------------------

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.draft.customer_name = name.into();
        self.recompute();
    }

    pub fn set_customer_email(&mut self, email: impl Into<String>) {
        self.draft.customer_email = email.into();
        self.recompute();
    }

    pub fn set_customer_phone(&mut self, phone: PhoneNumber) {
        self.draft.customer_phone = phone;
        self.recompute();
    }

    pub fn set_booking_date(&mut self, date: NaiveDate) {
        self.draft.booking_date = Some(date);
        self.recompute();
    }

    pub fn set_booking_time(&mut self, time: Option<NaiveTime>) {
        self.draft.booking_time = time;
        self.recompute();
    }

    pub fn set_passenger_count(&mut self, count: u32) -> Result<(), BookingError> {
        if count < 1 {
            return Err(BookingError::validation(
                "passenger_count",
                "At least one passenger is required",
            ));
        }
        self.draft.passenger_count = count;
        self.recompute();
        Ok(())
    }

    // ---- step 2: service details --------------------------------------

    pub fn set_service_type(&mut self, service_type: ServiceType) {
        self.draft.service_type = service_type;
        self.recompute();
    }

    pub fn set_duration_hours(&mut self, hours: u32) -> Result<(), BookingError> {
        if hours < 1 {
            return Err(BookingError::validation(
                "duration_hours",
                "Duration must be at least 1 hour",
            ));
        }
        self.draft.duration_hours = hours;
        self.recompute();
        Ok(())
    }

    pub fn set_airport(&mut self, airport_id: &str) -> Result<(), BookingError> {
        if airport_by_id(airport_id).is_none() {
            return Err(BookingError::validation("airport", "Unknown airport"));
        }
        self.draft.airport_transfer.airport = airport_id.to_string();
        self.recompute();
        Ok(())
    }

    pub fn set_transfer_type(&mut self, transfer_type: TransferType) {
        self.draft.airport_transfer.transfer_type = transfer_type;
        self.recompute();
    }

    pub fn set_flight_number(&mut self, flight_number: &str) {
        // Flight numbers are entered free-form; normalize to upper case.
        self.draft.airport_transfer.flight_number = flight_number.trim().to_uppercase();
        self.recompute();
    }

    pub fn set_flight_time(&mut self, time: NaiveTime) {
        self.draft.airport_transfer.flight_time = Some(time);
        self.recompute();
    }

    pub fn set_airline(&mut self, airline: Option<String>) {
        self.draft.airport_transfer.airline = airline;
        self.recompute();
    }

    pub fn set_terminal(&mut self, terminal: Option<String>) {
        self.draft.airport_transfer.terminal = terminal;
        self.recompute();
    }

    // ---- step 3: itinerary --------------------------------------------

    pub fn set_pickup_address(&mut self, address: impl Into<String>) {
        self.draft.pickup_address = address.into();
        self.pickup_touched = true;
        self.recompute();
    }

    pub fn set_dropoff_address(&mut self, address: impl Into<String>) {
        self.draft.dropoff_address = address.into();
        self.recompute();
    }

    /// Append an empty intermediate stop and return its stable id.
    pub fn add_stop(&mut self) -> Uuid {
        let stop = ItineraryStop::new();
        let id = stop.id;
        self.draft.intermediate_stops.push(stop);
        self.recompute();
        id
    }

    pub fn update_stop(&mut self, id: Uuid, address: impl Into<String>) -> Result<(), BookingError> {
        match self.draft.intermediate_stops.iter_mut().find(|s| s.id == id) {
            Some(stop) => {
                stop.address = address.into();
                self.recompute();
                Ok(())
            }
            None => Err(BookingError::validation("intermediate_stops", "Unknown stop")),
        }
    }

    /// Remove a stop by id; the remaining stops keep their order and ids.
    pub fn remove_stop(&mut self, id: Uuid) -> bool {
        let before = self.draft.intermediate_stops.len();
        self.draft.intermediate_stops.retain(|s| s.id != id);
        let removed = self.draft.intermediate_stops.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    // ---- step 3: amenities --------------------------------------------

    pub fn set_champagne_bottles(&mut self, bottles: u32) -> Result<(), BookingError> {
        if bottles < 1 {
            return Err(BookingError::validation(
                "amenities.champagne_bottles",
                "The first bottle is included; the count cannot go below one",
            ));
        }
        self.draft.amenities.champagne_bottles = bottles;
        self.recompute();
        Ok(())
    }

    pub fn set_premium_water(&mut self, enabled: bool) {
        self.draft.amenities.premium_water = enabled;
        self.recompute();
    }

    pub fn set_flowers(&mut self, enabled: bool) {
        self.draft.amenities.flowers = enabled;
        self.recompute();
    }

    pub fn set_decorations(&mut self, enabled: bool) {
        self.draft.amenities.decorations = enabled;
        self.recompute();
    }

    pub fn set_birthday_decorations(&mut self, enabled: bool) {
        self.draft.amenities.birthday_decorations = enabled;
        self.recompute();
    }

    pub fn set_birthday_person_age(&mut self, age: u32) -> Result<(), BookingError> {
        if !(1..=120).contains(&age) {
            return Err(BookingError::validation(
                "amenities.birthday_person_age",
                "Enter an age between 1 and 120",
            ));
        }
        self.draft.amenities.birthday_person_age = Some(age);
        // recompute drops a previously chosen theme that no longer fits.
        self.recompute();
        Ok(())
    }

    pub fn set_birthday_theme(&mut self, theme_id: &str) -> Result<(), BookingError> {
        let theme = theme_by_id(theme_id)
            .ok_or_else(|| BookingError::validation("amenities.birthday_theme", "Unknown decoration theme"))?;
        if let Some(age) = self.draft.amenities.birthday_person_age {
            if theme.age_band != AgeBand::from_age(age) {
                return Err(BookingError::validation(
                    "amenities.birthday_theme",
                    "The chosen theme does not match the birthday person's age",
                ));
            }
        }
        self.draft.amenities.birthday_theme = Some(theme.id.to_string());
        self.recompute();
        Ok(())
    }

    // ---- step 3: entertainment ----------------------------------------

    /// Revoking the verification also clears any paid selection.
    pub fn set_age_verified(&mut self, verified: bool) {
        self.draft.entertainment_service.verified_age = verified;
        if !verified {
            self.draft.entertainment_service.service_type = EntertainmentType::None;
        }
        self.recompute();
    }

    /// A paid entertainment type is only selectable after age verification;
    /// the reverse order is rejected, not deferred.
    pub fn set_entertainment_type(&mut self, service_type: EntertainmentType) -> Result<(), BookingError> {
        if service_type != EntertainmentType::None && !self.draft.entertainment_service.verified_age {
            return Err(BookingError::validation(
                "entertainment_service.verified_age",
                "Age verification is required for entertainment services",
            ));
        }
        self.draft.entertainment_service.service_type = service_type;
        self.recompute();
        Ok(())
    }

    pub fn set_entertainment_requests(&mut self, requests: Option<String>) {
        self.draft.entertainment_service.special_requests = requests;
        self.recompute();
    }

    pub fn set_special_requests(&mut self, requests: impl Into<String>) {
        self.draft.special_requests = requests.into();
        self.recompute();
    }

    pub fn set_driver_instructions(&mut self, instructions: impl Into<String>) {
        self.draft.driver_instructions = instructions.into();
        self.recompute();
    }

    // ---- navigation ----------------------------------------------------

    /// Field errors blocking the current step, empty when it is complete.
    pub fn current_errors(&self) -> Vec<FieldError> {
        validation::validate_step(self.step, &self.draft, Local::now().date_naive())
    }

    /// Advance one step. Completing the current step is a hard
    /// precondition; the errors come back to the caller for inline display.
    /// No-op at the review step.
    pub fn next(&mut self) -> Result<Step, BookingError> {
        let errors = self.current_errors();
        if !errors.is_empty() {
            return Err(BookingError::Validation(errors));
        }
        if let Some(step) = self.step.next() {
            self.step = step;
        }
        Ok(self.step)
    }

    /// Go back one step; no-op at the first step. Never blocked.
    pub fn prev(&mut self) -> Step {
        if let Some(step) = self.step.prev() {
            self.step = step;
        }
        self.step
    }

    // ---- submission ----------------------------------------------------

    /// Submit the booking. Reachable only from the review step, with a
    /// single in-flight submission per form; a second call while one is
    /// pending is rejected, not queued. On success the form resets to its
    /// initial state; on failure the draft stays intact for retry.
    pub async fn submit(&mut self, service: &BookingService) -> Result<BookingConfirmation, BookingError> {
        if self.step != Step::Review {
            return Err(BookingError::validation(
                "step",
                "Submission is only available from the review step",
            ));
        }
        if self.submitting {
            return Err(BookingError::validation(
                "submission",
                "A submission is already in progress",
            ));
        }

        // The guard clears the flag even if the caller drops this future
        // mid-await, so an abandoned submission never wedges the form.
        let result = {
            let BookingForm {
                vehicle,
                draft,
                submitting,
                ..
            } = &mut *self;
            let _guard = SubmitFlag::raise(submitting);
            service.submit_booking(draft, vehicle).await
        };

        if result.is_ok() {
            self.reset();
        }
        result
    }

    /// Back to a blank step-1 form, as after a confirmed submission.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::default();
        self.step = Step::Personal;
        self.pickup_touched = false;
        self.recompute();
    }

    // ---- derived state -------------------------------------------------

    /// Explicit recomputation pass, run after every accepted mutation.
    fn recompute(&mut self) {
        self.requirement = VehicleService::resolve_requirement(self.draft.passenger_count);

        // Arrival transfers pick up at the airport. Skip once the user has
        // edited the pickup field themselves.
        if self.draft.service_type == ServiceType::Airport
            && self.draft.airport_transfer.transfer_type == TransferType::Arrival
            && !self.pickup_touched
        {
            if let Some(airport) = airport_by_id(&self.draft.airport_transfer.airport) {
                if self.draft.pickup_address != airport.name {
                    debug!("auto-filling pickup address from airport {}", airport.code);
                    self.draft.pickup_address = airport.name.to_string();
                }
            }
        }

        // An age change can strand a previously valid theme in the wrong
        // band; drop it so the price never reflects a stale choice.
        let amenities = &mut self.draft.amenities;
        if let (Some(age), Some(theme_id)) = (amenities.birthday_person_age, amenities.birthday_theme.as_deref()) {
            let still_valid = theme_by_id(theme_id)
                .map(|theme| theme.age_band == AgeBand::from_age(age))
                .unwrap_or(false);
            if !still_valid {
                debug!("dropping out-of-band birthday theme {}", theme_id);
                amenities.birthday_theme = None;
            }
        }
    }
}

/// Holds the in-flight marker for the duration of a submission and
/// lowers it on drop, including when the submit future is cancelled.
struct SubmitFlag<'a> {
    flag: &'a mut bool,
}

impl<'a> SubmitFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        SubmitFlag { flag }
    }
}

impl Drop for SubmitFlag<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::RateCard;

    fn test_vehicle() -> Vehicle {
        Vehicle {
            id: "veh-1".to_string(),
            name: "Stretch Limousine".to_string(),
            max_passengers: 8,
            active: true,
            vehicle_type: None,
            brand: None,
            description: None,
            features: None,
            images: Vec::new(),
            pricing: RateCard {
                hour_1: 100,
                hour_2: 180,
                hour_3: 250,
                airport: 150,
            },
        }
    }

    #[test]
    fn steps_are_numbered_one_to_four() {
        assert_eq!(Step::Personal.number(), 1);
        assert_eq!(Step::Review.number(), 4);
    }

    #[test]
    fn prev_is_a_noop_at_step_one() {
        let mut form = BookingForm::new(test_vehicle());
        assert_eq!(form.prev(), Step::Personal);
    }

    #[test]
    fn next_blocks_on_an_incomplete_step() {
        let mut form = BookingForm::new(test_vehicle());
        let err = form.next().unwrap_err();
        assert!(!err.field_errors().is_empty());
        assert_eq!(form.step(), Step::Personal);
    }

    #[test]
    fn passenger_count_updates_vehicle_requirement() {
        let mut form = BookingForm::new(test_vehicle());
        form.set_passenger_count(9).unwrap();
        assert_eq!(form.vehicle_requirement().required, 2);
        assert!(form.vehicle_requirement().needs_multiple);

        assert!(form.set_passenger_count(0).is_err());
        assert_eq!(form.draft().passenger_count, 9);
    }

    #[test]
    fn entertainment_requires_verification_first() {
        let mut form = BookingForm::new(test_vehicle());
        assert!(form.set_entertainment_type(EntertainmentType::Female).is_err());

        form.set_age_verified(true);
        form.set_entertainment_type(EntertainmentType::Female).unwrap();

        // Revoking verification clears the selection.
        form.set_age_verified(false);
        assert_eq!(
            form.draft().entertainment_service.service_type,
            EntertainmentType::None
        );
    }

    #[test]
    fn arrival_transfer_auto_fills_pickup() {
        let mut form = BookingForm::new(test_vehicle());
        form.set_service_type(ServiceType::Airport);
        form.set_airport("cdg").unwrap();
        assert_eq!(form.draft().pickup_address, "Charles de Gaulle Airport (CDG)");

        // A manual edit wins from then on.
        form.set_pickup_address("Hotel Ritz, Place Vendome");
        form.set_airport("ory").unwrap();
        assert_eq!(form.draft().pickup_address, "Hotel Ritz, Place Vendome");
    }

    #[test]
    fn age_change_invalidates_out_of_band_theme() {
        let mut form = BookingForm::new(test_vehicle());
        form.set_birthday_decorations(true);
        form.set_birthday_person_age(10).unwrap();
        form.set_birthday_theme("children-cartoon-theme").unwrap();

        form.set_birthday_person_age(35).unwrap();
        assert!(form.draft().amenities.birthday_theme.is_none());
    }

    #[test]
    fn stops_keep_identity_across_removal() {
        let mut form = BookingForm::new(test_vehicle());
        let first = form.add_stop();
        let second = form.add_stop();
        let third = form.add_stop();
        form.update_stop(first, "Stop A").unwrap();
        form.update_stop(second, "Stop B").unwrap();
        form.update_stop(third, "Stop C").unwrap();

        assert!(form.remove_stop(second));
        let addresses: Vec<&str> = form
            .draft()
            .intermediate_stops
            .iter()
            .map(|s| s.address.as_str())
            .collect();
        assert_eq!(addresses, vec!["Stop A", "Stop C"]);

        // The surviving ids still address the right stops.
        form.update_stop(third, "Stop C, updated").unwrap();
        assert_eq!(form.draft().intermediate_stops[1].address, "Stop C, updated");
        assert!(form.update_stop(second, "gone").is_err());
    }
}
