use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which pricing branch and sub-form apply to the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Hourly,
    Airport,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    Arrival,
    Departure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntertainmentType {
    None,
    Male,
    Female,
}

/// Phone number split into dial code and local part; flattened to a single
/// string on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    pub dial_code: String,
    pub number: String,
}

impl PhoneNumber {
    pub fn new(dial_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            dial_code: dial_code.into(),
            number: number.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number.trim().is_empty()
    }

    pub fn formatted(&self) -> String {
        format!("{} {}", self.dial_code, self.number.trim())
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        // The service operates out of Paris.
        Self {
            dial_code: "+33".to_string(),
            number: String::new(),
        }
    }
}

/// Airport-transfer details, only meaningful when the service type is
/// `Airport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportTransfer {
    pub airport: String,
    pub transfer_type: TransferType,
    pub flight_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
}

impl Default for AirportTransfer {
    fn default() -> Self {
        Self {
            airport: String::new(),
            transfer_type: TransferType::Arrival,
            flight_number: String::new(),
            flight_time: None,
            airline: None,
            terminal: None,
        }
    }
}

/// An intermediate stop. The id stays stable when surrounding stops are
/// added or removed, so edits address the right entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryStop {
    pub id: Uuid,
    pub address: String,
}

impl ItineraryStop {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            address: String::new(),
        }
    }
}

impl Default for ItineraryStop {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenities {
    pub champagne_bottles: u32,
    pub premium_water: bool,
    pub flowers: bool,
    pub decorations: bool,
    pub birthday_decorations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday_person_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_requests: Option<String>,
}

impl Default for Amenities {
    fn default() -> Self {
        // The first champagne bottle and premium water come with the car.
        Self {
            champagne_bottles: 1,
            premium_water: true,
            flowers: false,
            decorations: false,
            birthday_decorations: false,
            birthday_person_age: None,
            birthday_theme: None,
            custom_requests: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntertainmentService {
    #[serde(rename = "type")]
    pub service_type: EntertainmentType,
    pub verified_age: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl Default for EntertainmentService {
    fn default() -> Self {
        Self {
            service_type: EntertainmentType::None,
            verified_age: false,
            special_requests: None,
            additional_notes: None,
        }
    }
}

/// The mutable in-progress booking for one modal session. Owned and mutated
/// by `form::BookingForm`; read by the pricing engine and the submission
/// adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: PhoneNumber,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<NaiveTime>,
    pub service_type: ServiceType,
    /// Only consulted when `service_type` is `Hourly`.
    pub duration_hours: u32,
    pub airport_transfer: AirportTransfer,
    pub passenger_count: u32,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub intermediate_stops: Vec<ItineraryStop>,
    pub amenities: Amenities,
    pub entertainment_service: EntertainmentService,
    pub special_requests: String,
    pub driver_instructions: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: PhoneNumber::default(),
            booking_date: None,
            booking_time: None,
            service_type: ServiceType::Hourly,
            duration_hours: 1,
            airport_transfer: AirportTransfer::default(),
            passenger_count: 1,
            pickup_address: String::new(),
            dropoff_address: String::new(),
            intermediate_stops: Vec::new(),
            amenities: Amenities::default(),
            entertainment_service: EntertainmentService::default(),
            special_requests: String::new(),
            driver_instructions: String::new(),
        }
    }
}

fn is_none_or_blank(value: &Option<String>) -> bool {
    match value {
        Some(v) => v.trim().is_empty(),
        None => true,
    }
}

/// Wire format for `createBooking`: every draft field flattened, plus the
/// vehicle reference, form slug, resolved vehicle quantity and the host's
/// CSRF nonce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub vehicle_id: String,
    pub form_slug: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub booking_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<u32>,
    pub service_type: ServiceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport_transfer: Option<AirportTransfer>,
    #[serde(skip_serializing_if = "is_none_or_blank")]
    pub special_requests: Option<String>,
    pub wordpress_nonce: String,
    pub passenger_count: u32,
    pub vehicle_quantity: u32,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub intermediate_stops: Vec<String>,
    pub amenities: Amenities,
    pub entertainment_service: EntertainmentService,
    #[serde(skip_serializing_if = "is_none_or_blank")]
    pub driver_instructions: Option<String>,
}

impl BookingPayload {
    /// Flatten a draft into the wire format. The caller supplies the
    /// resolved vehicle quantity so this stays a plain mapping.
    ///
    /// Precondition: the draft passed full validation, so `booking_date`
    /// is present.
    pub fn from_draft(
        draft: &BookingDraft,
        vehicle_id: &str,
        form_slug: &str,
        nonce: &str,
        vehicle_quantity: u32,
        booking_date: NaiveDate,
    ) -> Self {
        let duration_hours = match draft.service_type {
            ServiceType::Hourly => Some(draft.duration_hours),
            _ => None,
        };
        let airport_transfer = match draft.service_type {
            ServiceType::Airport => Some(draft.airport_transfer.clone()),
            _ => None,
        };
        let intermediate_stops = draft
            .intermediate_stops
            .iter()
            .map(|stop| stop.address.trim().to_string())
            .filter(|address| !address.is_empty())
            .collect();

        Self {
            vehicle_id: vehicle_id.to_string(),
            form_slug: form_slug.to_string(),
            customer_name: draft.customer_name.clone(),
            customer_email: draft.customer_email.clone(),
            customer_phone: draft.customer_phone.formatted(),
            booking_date,
            booking_time: draft.booking_time,
            duration_hours,
            service_type: draft.service_type,
            airport_transfer,
            special_requests: non_blank(&draft.special_requests),
            wordpress_nonce: nonce.to_string(),
            passenger_count: draft.passenger_count,
            vehicle_quantity,
            pickup_address: draft.pickup_address.clone(),
            dropoff_address: draft.dropoff_address.clone(),
            intermediate_stops,
            amenities: draft.amenities.clone(),
            entertainment_service: draft.entertainment_service.clone(),
            driver_instructions: non_blank(&draft.driver_instructions),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Standard response envelope used by every data-API endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VehicleListData {
    pub vehicles: Vec<crate::models::vehicle::Vehicle>,
    #[serde(default)]
    pub forms: Vec<crate::models::vehicle::CatalogForm>,
}

#[derive(Debug, Deserialize)]
pub struct VehicleImageData {
    pub images: Vec<crate::models::vehicle::VehicleImage>,
}

/// Server-confirmed outcome of a booking submission. The server's
/// `total_price` is authoritative; the local quote is an estimate only.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub total_price: i64,
    #[serde(default)]
    pub message: String,
}
