// Not every test binary uses every helper.
#![allow(dead_code)]

use chrono::{Duration, Local, NaiveTime};

use pcs_booking_core::config::HostConfig;
use pcs_booking_core::form::BookingForm;
use pcs_booking_core::models::booking::PhoneNumber;
use pcs_booking_core::models::vehicle::{RateCard, Vehicle};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn test_vehicle() -> Vehicle {
    Vehicle {
        id: "veh-limo-1".to_string(),
        name: "Stretch Limousine".to_string(),
        max_passengers: 8,
        active: true,
        vehicle_type: Some("limousine".to_string()),
        brand: Some("Lincoln".to_string()),
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

pub fn test_config() -> HostConfig {
    HostConfig::from_json(
        r#"{
            "supabaseUrl": "http://127.0.0.1:1",
            "supabaseKey": "test-anon-key",
            "formSlug": "limousine",
            "nonce": "test-nonce"
        }"#,
    )
    .expect("test config is valid")
}

/// Fill step 1 with a valid personal-details set.
pub fn fill_personal(form: &mut BookingForm) {
    form.set_customer_name("Claire Martin");
    form.set_customer_email("claire.martin@example.com");
    form.set_customer_phone(PhoneNumber::new("+33", "612345678"));
    // Tomorrow, so the date check holds regardless of when the test runs.
    form.set_booking_date(Local::now().date_naive() + Duration::days(1));
    form.set_booking_time(NaiveTime::from_hms_opt(19, 30, 0));
}

/// Walk a fresh hourly booking to the review step.
pub fn form_at_review() -> BookingForm {
    let mut form = BookingForm::new(test_vehicle());
    fill_personal(&mut form);
    form.next().expect("personal step complete");

    form.set_duration_hours(3).expect("valid duration");
    form.next().expect("service step complete");

    form.set_pickup_address("1 Avenue Montaigne, Paris");
    form.set_dropoff_address("Place Vendome, Paris");
    form.next().expect("itinerary step complete");

    form
}
