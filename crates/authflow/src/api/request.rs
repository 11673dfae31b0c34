use serde::Serialize;

/// Body for the authenticate endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Body for the verify endpoint. The drafted credentials accompany the code;
/// this and the authenticate endpoint are the only two the password is ever
/// sent to.
#[derive(Serialize, Debug)]
pub(crate) struct VerifyTwoFactorRequest {
    pub email: String,
    pub password: String,
    pub code_totp: String,
}

/// Body for the signup endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct SignupRequest {
    pub email: String,
}

/// Body for the renewal endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct RenewPasswordRequest {
    pub email: String,
}
