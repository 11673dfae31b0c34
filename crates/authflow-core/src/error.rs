//! Errors that can occur when talking to the identity gateway

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from performing network requests.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    #[error("Received error message from server: [{}] {}", .status, .message)]
    ResponseContent { status: StatusCode, message: String },
}

impl ApiError {
    /// The message to surface to the user for this error.
    ///
    /// For a non-2xx response this is the server-provided `message` field (or
    /// the HTTP status text when the body carried none); for lower-level
    /// failures it is the error's display form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::ResponseContent { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Missing required field.
#[derive(Debug, Error)]
#[error("The response received was missing a required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// Extracts a required field from an `Option`, returning a
/// [`MissingFieldError`] through `?`-style conversion when absent.
///
/// A 2xx response missing an expected field fails closed through this path
/// instead of proceeding with undefined data.
#[macro_export]
macro_rules! require {
    ($val:expr) => {
        match $val {
            Some(val) => val,
            None => return Err($crate::MissingFieldError(stringify!($val)).into()),
        }
    };
}
