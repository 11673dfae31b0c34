use serde::Deserialize;

/// The authenticate outcome that leads to the one-time-code step.
pub(crate) const STATUS_PASSWORD_VALIDATED: &str = "password-validated";
/// The authenticate outcome that leads to the renewal offer.
pub(crate) const STATUS_PASSWORD_EXPIRED: &str = "password-expired";

/// 2xx body of the authenticate endpoint.
///
/// `status` stays a plain string: any value other than the two known
/// constants (including an absent field) means the account is authenticated
/// outright, so an enum with a closed set would misparse it.
#[derive(Deserialize, Debug)]
pub(crate) struct AuthenticateResponse {
    #[serde(default)]
    pub status: Option<String>,
}

/// 2xx body of the verify endpoint. Success is conveyed by the status code
/// alone; no field is required.
#[derive(Deserialize, Debug)]
pub(crate) struct VerifyTwoFactorResponse {
    #[serde(default)]
    #[allow(dead_code)] // informational only, success is the 2xx itself
    pub message: Option<String>,
}

/// 2xx body of the signup endpoint. All fields are required by the flow but
/// modeled as optional so a short response fails closed with a missing-field
/// error instead of a parse error.
#[derive(Deserialize, Debug)]
pub(crate) struct SignupResponse {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub qr_password_base64: Option<String>,
    #[serde(default)]
    pub qr_2fa_base64: Option<String>,
}

/// 2xx body of the renewal endpoint.
#[derive(Deserialize, Debug)]
pub(crate) struct RenewPasswordResponse {
    #[serde(default)]
    pub password: Option<String>,
}
