//! Operation-level errors for the flow client.

use authflow_core::{ApiError, MissingFieldError};
use thiserror::Error;

use crate::{
    state::{FlowState, Mode},
    validation::ValidationError,
};

/// Errors returned by [`AuthFlowClient`](crate::AuthFlowClient) operations.
///
/// None of these are fatal: the flow state is unchanged on failure and the
/// user can retry or switch modes.
#[derive(Debug, Error)]
pub enum AuthFlowError {
    /// Input rejected locally; no network call was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote call failed (network failure or non-2xx response).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx response was missing an expected field; treated as a failed
    /// call rather than proceeding with undefined data.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    /// The operation is not permitted in the current flow state; no network
    /// call was issued.
    #[error("{operation} is not permitted in state {state:?}")]
    InvalidState {
        /// The rejected operation.
        operation: &'static str,
        /// The state the flow was in.
        state: FlowState,
    },

    /// The operation requires the other mode; no network call was issued.
    #[error("{operation} requires {required:?} mode")]
    InvalidMode {
        /// The rejected operation.
        operation: &'static str,
        /// The mode the operation requires.
        required: Mode,
    },

    /// A remote call is already outstanding for this client.
    #[error("another request is already in flight")]
    Busy,
}

impl AuthFlowError {
    /// The message surfaced as an error notification when a remote call
    /// fails. Local precondition errors are returned to the caller without a
    /// notification, so this only tailors the remote variants.
    pub fn user_message(&self) -> String {
        match self {
            AuthFlowError::Api(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}
