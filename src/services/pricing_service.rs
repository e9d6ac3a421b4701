use crate::models::booking::{Amenities, BookingDraft, EntertainmentService, EntertainmentType, ServiceType};
use crate::models::themes::theme_by_id;
use crate::models::vehicle::Vehicle;
use crate::services::vehicle_service::VehicleService;

/// Price of one additional champagne bottle (the first is included).
const CHAMPAGNE_BOTTLE_PRICE: i64 = 50;
const FLOWERS_PRICE: i64 = 75;
const DECORATIONS_PRICE: i64 = 100;
/// Flat per-booking fee. The storefront label reads "per hour"; the charge
/// has always been flat (see DESIGN.md).
const ENTERTAINMENT_FEE: i64 = 200;

/// Live quote computation for the booking widget. Pure: no I/O, no state,
/// whole currency units throughout. The server recomputes the final price at
/// submission time; these figures are the displayed estimate.
pub struct PricingService;

impl PricingService {
    /// Base price for the selected service, before vehicle-count and
    /// extras.
    ///
    /// Hourly rentals have exact tiers for 1-3 hours; longer rentals
    /// extrapolate from the 3-hour tier. Custom services are quoted out of
    /// band, so their base is zero. Durations below 1 hour are rejected by
    /// the form before this is ever consulted.
    pub fn base_price(vehicle: &Vehicle, draft: &BookingDraft) -> i64 {
        match draft.service_type {
            ServiceType::Airport => vehicle.pricing.airport,
            ServiceType::Hourly => match draft.duration_hours {
                1 => vehicle.pricing.hour_1,
                2 => vehicle.pricing.hour_2,
                3 => vehicle.pricing.hour_3,
                hours => (vehicle.pricing.hour_3 as f64 * hours as f64 / 3.0).round() as i64,
            },
            ServiceType::Custom => 0,
        }
    }

    /// Base price scaled to the required vehicle count: first vehicle at
    /// full rate, each additional one at a 10% discount. The discount is
    /// linear, not compounding.
    pub fn vehicle_cost(vehicle: &Vehicle, draft: &BookingDraft) -> i64 {
        let base = Self::base_price(vehicle, draft);
        let required = VehicleService::resolve_requirement(draft.passenger_count).required;
        if required > 1 {
            (base as f64 + base as f64 * 0.9 * (required - 1) as f64).round() as i64
        } else {
            base
        }
    }

    /// Extras cost, shown on its own line in the UI. An enabled birthday
    /// decoration without a chosen theme contributes nothing; step
    /// validation blocks progression instead of silently charging.
    pub fn amenities_cost(amenities: &Amenities) -> i64 {
        let mut cost = 0;
        if amenities.champagne_bottles > 1 {
            cost += (amenities.champagne_bottles as i64 - 1) * CHAMPAGNE_BOTTLE_PRICE;
        }
        if amenities.flowers {
            cost += FLOWERS_PRICE;
        }
        if amenities.decorations {
            cost += DECORATIONS_PRICE;
        }
        if amenities.birthday_decorations {
            if let Some(theme) = amenities.birthday_theme.as_deref().and_then(theme_by_id) {
                cost += theme.price;
            }
        }
        cost
    }

    pub fn entertainment_cost(service: &EntertainmentService) -> i64 {
        if service.service_type != EntertainmentType::None {
            ENTERTAINMENT_FEE
        } else {
            0
        }
    }

    /// Grand total for the live quote display.
    pub fn total_price(vehicle: &Vehicle, draft: &BookingDraft) -> i64 {
        Self::vehicle_cost(vehicle, draft)
            + Self::amenities_cost(&draft.amenities)
            + Self::entertainment_cost(&draft.entertainment_service)
    }
}
