use pcs_booking_core::config::HostConfig;
use pcs_booking_core::error::BookingError;
use serial_test::serial;

fn clear_env() {
    for key in ["PCS_SUPABASE_URL", "PCS_SUPABASE_KEY", "PCS_FORM_SLUG", "PCS_NONCE"] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn from_env_reads_the_host_variables() {
    dotenv::dotenv().ok();
    clear_env();
    std::env::set_var("PCS_SUPABASE_URL", "https://example.supabase.co");
    std::env::set_var("PCS_SUPABASE_KEY", "anon-key");
    std::env::set_var("PCS_FORM_SLUG", "wedding-cars");

    let config = HostConfig::from_env().unwrap();
    assert_eq!(config.supabase_url, "https://example.supabase.co");
    assert_eq!(config.form_slug, "wedding-cars");

    clear_env();
}

#[test]
#[serial]
fn from_env_without_credentials_is_fatal() {
    clear_env();
    let err = HostConfig::from_env().unwrap_err();
    assert!(matches!(err, BookingError::ConfigurationMissing(_)));
}

#[test]
fn error_message_is_worded_for_the_user() {
    let err = HostConfig::from_json("{}").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("check the plugin settings"));
}
