//! Endpoint paths, wire models, and send functions for the four gateway
//! endpoints. The gateway is an opaque collaborator; nothing here interprets
//! its payloads beyond the documented fields.

mod request;
mod response;

use authflow_core::{ApiError, Client};
pub(crate) use request::{
    AuthenticateRequest, RenewPasswordRequest, SignupRequest, VerifyTwoFactorRequest,
};
pub(crate) use response::{
    AuthenticateResponse, RenewPasswordResponse, SignupResponse, VerifyTwoFactorResponse,
    STATUS_PASSWORD_EXPIRED, STATUS_PASSWORD_VALIDATED,
};

const AUTHENTICATE_PATH: &str = "authenticate-user";
const VERIFY_TWO_FACTOR_PATH: &str = "verify-2fa";
const SIGNUP_PATH: &str = "signup-user";
const RENEW_PASSWORD_PATH: &str = "renew-password";

pub(crate) async fn authenticate(
    client: &Client,
    request: &AuthenticateRequest,
) -> Result<AuthenticateResponse, ApiError> {
    client.post_json(AUTHENTICATE_PATH, request).await
}

pub(crate) async fn verify_two_factor(
    client: &Client,
    request: &VerifyTwoFactorRequest,
) -> Result<VerifyTwoFactorResponse, ApiError> {
    client.post_json(VERIFY_TWO_FACTOR_PATH, request).await
}

pub(crate) async fn signup(
    client: &Client,
    request: &SignupRequest,
) -> Result<SignupResponse, ApiError> {
    client.post_json(SIGNUP_PATH, request).await
}

pub(crate) async fn renew_password(
    client: &Client,
    request: &RenewPasswordRequest,
) -> Result<RenewPasswordResponse, ApiError> {
    client.post_json(RENEW_PASSWORD_PATH, request).await
}
