use std::fmt;

/// A single invalid or missing field, tied to the wire-format field name so
/// the host UI can highlight the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Everything that can go wrong between opening the widget and a confirmed
/// booking. Display output is worded for end users; the variant payloads
/// carry the technical detail.
#[derive(Debug)]
pub enum BookingError {
    /// Required host configuration is absent. Fatal at initialization.
    ConfigurationMissing(String),
    /// Transport-level failure (non-2xx status, timeout, DNS). Recoverable
    /// with a retry.
    Network(String),
    /// One or more required fields are missing or out of range.
    Validation(Vec<FieldError>),
    /// The server accepted the request but declined the booking.
    BusinessRejection(String),
    /// Anything that should never happen during normal operation.
    Unexpected(String),
}

impl BookingError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        BookingError::Validation(vec![FieldError::new(field, message)])
    }

    /// Fields flagged by a validation failure, empty for other kinds.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            BookingError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::ConfigurationMissing(detail) => write!(
                f,
                "The booking service is not configured correctly: {}. Please check the plugin settings.",
                detail
            ),
            BookingError::Network(detail) => write!(
                f,
                "We could not reach the booking service ({}). Please try again.",
                detail
            ),
            BookingError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                write!(f, "Please review the following fields: {}", fields.join(", "))
            }
            BookingError::BusinessRejection(message) => write!(f, "{}", message),
            BookingError::Unexpected(detail) => write!(
                f,
                "An unexpected error occurred ({}). Please reload and try again.",
                detail
            ),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<reqwest::Error> for BookingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BookingError::Network("the request timed out".to_string())
        } else {
            BookingError::Network(err.to_string())
        }
    }
}
