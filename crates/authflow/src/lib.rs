#![doc = include_str!("../README.md")]

pub(crate) mod api; // keep internal to crate

mod error;
mod flow_client;
pub mod notification;
pub mod session;
pub mod state;
mod validation;

pub use authflow_core::{ApiError, ClientSettings, MissingFieldError};
pub use error::AuthFlowError;
pub use flow_client::AuthFlowClient;
pub use notification::{FlowObserver, Notification, Severity};
pub use session::{RenewalArtifact, SessionDraft, SignupArtifacts};
pub use state::{FlowState, Mode};
pub use validation::ValidationError;
