//! Core logic for the PCS booking widget: the live pricing engine, the
//! 4-step form state machine, and the clients for the remote vehicle
//! catalog and booking API. Rendering, styling and host embedding live in
//! the surrounding application; this crate owns everything with rules in
//! it.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;

pub use config::HostConfig;
pub use error::{BookingError, FieldError};
pub use form::{BookingForm, Step};
