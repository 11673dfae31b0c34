//! Transient data held only for the duration of the active flow.

use zeroize::Zeroizing;

/// Credentials held in memory between the credentials submission and the
/// code-verification submission. Never written to durable storage.
///
/// The password is zeroized when cleared and when the draft is dropped.
#[derive(Default)]
pub struct SessionDraft {
    email: Option<String>,
    password: Option<Zeroizing<String>>,
    one_time_code: Option<String>,
}

impl SessionDraft {
    /// The drafted email, if a credentials submission has completed.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The drafted password, if still held.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    /// The one-time code candidate for the in-flight verification, if any.
    pub fn one_time_code(&self) -> Option<&str> {
        self.one_time_code.as_deref()
    }

    pub(crate) fn set_credentials(&mut self, email: String, password: String) {
        self.email = Some(email);
        self.password = Some(Zeroizing::new(password));
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = Some(email);
    }

    pub(crate) fn set_one_time_code(&mut self, code: String) {
        self.one_time_code = Some(code);
    }

    /// Both drafted credentials, cloned for a remote call.
    pub(crate) fn credentials(&self) -> Option<(String, String)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.clone(), password.to_string())),
            _ => None,
        }
    }

    /// Zeroizes and drops the drafted password and code candidate.
    pub(crate) fn clear_secrets(&mut self) {
        self.password = None;
        self.one_time_code = None;
    }

    pub(crate) fn clear(&mut self) {
        self.email = None;
        self.clear_secrets();
    }
}

/// Payloads returned once by the signup endpoint, held only until the user
/// navigates away from the signup-success screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupArtifacts {
    /// The generated initial password.
    pub initial_password: String,
    /// Base64 raster image encoding the password for scanning.
    pub qr_password_image: String,
    /// Base64 raster image encoding the 2FA seed for scanning.
    pub qr_2fa_image: String,
}

/// The renewed password returned once by the renewal endpoint, displayed
/// once, then discarded on navigation back to the credentials step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalArtifact {
    /// The newly generated password.
    pub new_password: String,
}
