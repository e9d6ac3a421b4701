mod common;

use chrono::NaiveTime;
use pcs_booking_core::models::booking::{
    ApiEnvelope, BookingConfirmation, BookingPayload, EntertainmentType, ServiceType, TransferType,
    VehicleListData,
};
use pcs_booking_core::services::booking_service::BookingService;

fn fully_populated_form() -> pcs_booking_core::form::BookingForm {
    let mut form = common::form_at_review();
    form.prev(); // back to itinerary to add extras

    let stop = form.add_stop();
    form.update_stop(stop, "Opera Garnier, Paris").unwrap();
    form.set_champagne_bottles(2).unwrap();
    form.set_flowers(true);
    form.set_birthday_decorations(true);
    form.set_birthday_person_age(30).unwrap();
    form.set_birthday_theme("adults-romantic-roses").unwrap();
    form.set_age_verified(true);
    form.set_entertainment_type(EntertainmentType::Male).unwrap();
    form.set_entertainment_requests(Some("Jazz playlist".to_string()));
    form.set_special_requests("Please have the car cooled down");
    form.set_driver_instructions("Call on arrival");
    form
}

#[test]
fn booking_payload_round_trips_without_loss() {
    let service = BookingService::new(common::test_config()).unwrap();
    let form = fully_populated_form();

    let payload = service
        .build_payload(form.draft(), form.vehicle())
        .unwrap();
    let json = serde_json::to_string(&payload).unwrap();
    let parsed: BookingPayload = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, payload);
    assert_eq!(parsed.vehicle_id, "veh-limo-1");
    assert_eq!(parsed.form_slug, "limousine");
    assert_eq!(parsed.wordpress_nonce, "test-nonce");
    assert_eq!(parsed.vehicle_quantity, 1);
    assert_eq!(parsed.customer_phone, "+33 612345678");
    assert_eq!(parsed.intermediate_stops, vec!["Opera Garnier, Paris".to_string()]);
    assert_eq!(
        parsed.amenities.birthday_theme.as_deref(),
        Some("adults-romantic-roses")
    );
    assert_eq!(parsed.entertainment_service.service_type, EntertainmentType::Male);
}

#[test]
fn airport_booking_payload_carries_the_transfer_record() {
    let service = BookingService::new(common::test_config()).unwrap();
    let mut form = pcs_booking_core::form::BookingForm::new(common::test_vehicle());
    common::fill_personal(&mut form);
    form.set_service_type(ServiceType::Airport);
    form.set_airport("lbg").unwrap();
    form.set_transfer_type(TransferType::Departure);
    form.set_flight_number("AF0042");
    form.set_flight_time(NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    form.set_airline(Some("Air France".to_string()));
    form.set_terminal(Some("Terminal 1".to_string()));
    form.set_pickup_address("Hotel Ritz, Paris");
    form.set_dropoff_address("Le Bourget Airport (LBG)");

    let payload = service.build_payload(form.draft(), form.vehicle()).unwrap();
    // Hourly-only fields stay off an airport payload.
    assert!(payload.duration_hours.is_none());

    let transfer = payload.airport_transfer.as_ref().unwrap();
    assert_eq!(transfer.airport, "lbg");
    assert_eq!(transfer.transfer_type, TransferType::Departure);
    assert_eq!(transfer.flight_number, "AF0042");

    let json = serde_json::to_string(&payload).unwrap();
    let parsed: BookingPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, payload);
}

#[test]
fn missing_booking_date_blocks_payload_assembly() {
    let service = BookingService::new(common::test_config()).unwrap();
    let form = pcs_booking_core::form::BookingForm::new(common::test_vehicle());
    assert!(service.build_payload(form.draft(), form.vehicle()).is_err());
}

#[test]
fn vehicle_list_envelope_parses() {
    let raw = r#"{
        "success": true,
        "data": {
            "vehicles": [{
                "id": "veh-1",
                "name": "Mercedes V-Class",
                "max_passengers": 7,
                "active": true,
                "vehicle_type": "van",
                "pricing": { "hour_1": 90, "hour_2": 160, "hour_3": 220, "airport": 130 }
            }],
            "forms": [{
                "id": "form-1",
                "slug": "limousine",
                "title": "Limousine Booking",
                "vehicle_id": "veh-1",
                "type": "standard"
            }]
        }
    }"#;

    let envelope: ApiEnvelope<VehicleListData> = serde_json::from_str(raw).unwrap();
    assert!(envelope.success);
    let data = envelope.data.unwrap();
    assert_eq!(data.vehicles[0].pricing.airport, 130);
    assert_eq!(data.forms[0].slug, "limousine");
}

#[test]
fn booking_confirmation_envelope_parses() {
    let raw = r#"{
        "success": true,
        "data": {
            "booking_id": "bk-2043",
            "total_price": 475,
            "message": "Booking request received"
        }
    }"#;

    let envelope: ApiEnvelope<BookingConfirmation> = serde_json::from_str(raw).unwrap();
    let confirmation = envelope.data.unwrap();
    assert_eq!(confirmation.booking_id, "bk-2043");
    assert_eq!(confirmation.total_price, 475);
}

#[test]
fn rejection_envelope_keeps_the_server_message() {
    let raw = r#"{ "success": false, "error": "Vehicle unavailable on that date" }"#;
    let envelope: ApiEnvelope<BookingConfirmation> = serde_json::from_str(raw).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Vehicle unavailable on that date"));
}
