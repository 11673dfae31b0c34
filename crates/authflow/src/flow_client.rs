//! The authentication flow state machine.

use authflow_core::{require, Client, ClientSettings};

use crate::{
    api::{
        self, AuthenticateRequest, RenewPasswordRequest, SignupRequest, VerifyTwoFactorRequest,
        STATUS_PASSWORD_EXPIRED, STATUS_PASSWORD_VALIDATED,
    },
    error::AuthFlowError,
    notification::{FlowObserver, Notification},
    session::{RenewalArtifact, SessionDraft, SignupArtifacts},
    state::{FlowState, Mode},
    validation,
};

/// Drives the multi-step login/registration sequence against the identity
/// gateway.
///
/// The client owns the flow position ([`FlowState`]), the mode axis
/// ([`Mode`]), and the transient session data, and mutates them only through
/// its operations. A rendering layer subscribes via [`subscribe`] and reacts
/// to state changes and notifications rather than owning any state itself.
///
/// Every operation is gated by the current state and mode; a precondition
/// violation is returned as a local error and never issues a network call. A
/// failed remote call leaves the state unchanged so the user can resubmit.
/// One client drives one session; operations take `&mut self`, so calls
/// cannot overlap through safe code.
///
/// [`subscribe`]: AuthFlowClient::subscribe
pub struct AuthFlowClient {
    client: Client,
    mode: Mode,
    state: FlowState,
    loading: bool,
    draft: SessionDraft,
    signup_artifacts: Option<SignupArtifacts>,
    renewal_artifact: Option<RenewalArtifact>,
    observers: Vec<Box<dyn FlowObserver>>,
}

impl AuthFlowClient {
    /// Creates a client at the start of the login flow. `None` uses
    /// [`ClientSettings::default`].
    pub fn new(settings: Option<ClientSettings>) -> Self {
        Self {
            client: Client::new(settings),
            mode: Mode::Login,
            state: FlowState::Credentials,
            loading: false,
            draft: SessionDraft::default(),
            signup_artifacts: None,
            renewal_artifact: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for state changes and notifications.
    pub fn subscribe(&mut self, observer: Box<dyn FlowObserver>) {
        self.observers.push(observer);
    }

    /// The current flow state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a remote call is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The transient session draft.
    pub fn session(&self) -> &SessionDraft {
        &self.draft
    }

    /// The signup artifacts, while the signup-success screen is shown.
    pub fn signup_artifacts(&self) -> Option<&SignupArtifacts> {
        self.signup_artifacts.as_ref()
    }

    /// The renewed password, while the renewal screen is shown.
    pub fn renewal_artifact(&self) -> Option<&RenewalArtifact> {
        self.renewal_artifact.as_ref()
    }

    /// Submits the email/password pair to the authenticate endpoint.
    ///
    /// Requires [`FlowState::Credentials`] and [`Mode::Login`]. On a 2xx
    /// response the draft is filled and the reported `status` selects the
    /// next state: `password-validated` moves to [`FlowState::AwaitingCode`],
    /// `password-expired` moves to [`FlowState::PasswordExpired`] with a
    /// warning, and anything else completes the flow as
    /// [`FlowState::Authenticated`].
    pub async fn submit_credentials(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<(), AuthFlowError> {
        const OPERATION: &str = "submit_credentials";

        self.ensure_idle()?;
        self.ensure_state(OPERATION, FlowState::Credentials)?;
        self.ensure_mode(OPERATION, Mode::Login)?;
        validation::validate_email(email)?;
        validation::validate_password(password)?;

        let request = AuthenticateRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let client = self.client.clone();
        self.set_loading(true);
        let result = api::authenticate(&client, &request).await;
        self.set_loading(false);

        let response = match result {
            Ok(response) => response,
            Err(err) => return Err(self.fail(err.into())),
        };

        // The renewal endpoint needs the drafted email from the expired
        // state, so the draft is filled before dispatching on the status.
        self.draft
            .set_credentials(request.email, request.password);

        match response.status.as_deref() {
            Some(STATUS_PASSWORD_VALIDATED) => {
                self.transition(FlowState::AwaitingCode);
            }
            Some(STATUS_PASSWORD_EXPIRED) => {
                self.notify(Notification::warning(
                    "Your password has expired; please renew it.",
                ));
                self.transition(FlowState::PasswordExpired);
            }
            _ => {
                self.notify(Notification::success("Signed in"));
                self.transition(FlowState::Authenticated);
            }
        }

        Ok(())
    }

    /// Submits the 6-digit one-time code to the verify endpoint, along with
    /// the drafted credentials.
    ///
    /// Requires [`FlowState::AwaitingCode`]. The drafted password is
    /// zeroized once the call resolves, whatever the outcome; on success the
    /// flow completes as [`FlowState::Authenticated`], on failure it stays
    /// in [`FlowState::AwaitingCode`] for a retry.
    pub async fn submit_one_time_code(&mut self, code: &str) -> Result<(), AuthFlowError> {
        const OPERATION: &str = "submit_one_time_code";

        self.ensure_idle()?;
        self.ensure_state(OPERATION, FlowState::AwaitingCode)?;
        validation::validate_one_time_code(code)?;

        let (email, password) =
            self.draft
                .credentials()
                .ok_or(AuthFlowError::InvalidState {
                    operation: OPERATION,
                    state: self.state,
                })?;

        self.draft.set_one_time_code(code.to_string());

        let request = VerifyTwoFactorRequest {
            email,
            password,
            code_totp: code.to_string(),
        };

        let client = self.client.clone();
        self.set_loading(true);
        let result = api::verify_two_factor(&client, &request).await;
        self.set_loading(false);

        // The password has now been sent for the last time; it is no longer
        // needed whatever the outcome.
        self.draft.clear_secrets();

        match result {
            Ok(_) => {
                self.notify(Notification::success("Signed in"));
                self.transition(FlowState::Authenticated);
                Ok(())
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Requests a renewed password from the renewal endpoint.
    ///
    /// Requires [`FlowState::PasswordExpired`]. On success the returned
    /// password is held as the [`RenewalArtifact`] and the flow moves to
    /// [`FlowState::PasswordRenewed`].
    pub async fn renew_password(&mut self) -> Result<(), AuthFlowError> {
        const OPERATION: &str = "renew_password";

        self.ensure_idle()?;
        self.ensure_state(OPERATION, FlowState::PasswordExpired)?;

        let email = self
            .draft
            .email()
            .ok_or(AuthFlowError::InvalidState {
                operation: OPERATION,
                state: self.state,
            })?
            .to_string();

        let request = RenewPasswordRequest { email };

        let client = self.client.clone();
        self.set_loading(true);
        let result = call_renew(&client, &request).await;
        self.set_loading(false);

        match result {
            Ok(new_password) => {
                self.renewal_artifact = Some(RenewalArtifact { new_password });
                self.notify(Notification::success("A new password has been generated"));
                self.transition(FlowState::PasswordRenewed);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Submits the email to the signup endpoint.
    ///
    /// Requires [`FlowState::Credentials`] and [`Mode::Register`]. On
    /// success the returned password and QR provisioning images are held as
    /// [`SignupArtifacts`] and the flow moves to [`FlowState::SignupSuccess`].
    pub async fn submit_registration(&mut self, email: &str) -> Result<(), AuthFlowError> {
        const OPERATION: &str = "submit_registration";

        self.ensure_idle()?;
        self.ensure_state(OPERATION, FlowState::Credentials)?;
        self.ensure_mode(OPERATION, Mode::Register)?;
        validation::validate_email(email)?;

        let request = SignupRequest {
            email: email.to_string(),
        };

        let client = self.client.clone();
        self.set_loading(true);
        let result = call_signup(&client, &request).await;
        self.set_loading(false);

        match result {
            Ok((email, artifacts)) => {
                self.draft.set_email(email);
                self.signup_artifacts = Some(artifacts);
                self.notify(Notification::success("Account created"));
                self.transition(FlowState::SignupSuccess);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Toggles between the login and register flows.
    ///
    /// Resets the flow to [`FlowState::Credentials`], clears the drafted
    /// credentials, and discards the renewal artifact. Signup artifacts are
    /// not discarded here, but no path re-displays them after this call.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.draft.clear();
        self.renewal_artifact = None;
        self.transition(FlowState::Credentials);
    }

    /// Leaves the renewed-password or signup-success screen.
    ///
    /// Discards the corresponding artifact and resets the flow to
    /// [`FlowState::Credentials`]. Returning from the signup-success screen
    /// also forces the mode back to [`Mode::Login`].
    pub fn return_to_credentials(&mut self) -> Result<(), AuthFlowError> {
        match self.state {
            FlowState::PasswordRenewed => {
                self.renewal_artifact = None;
            }
            FlowState::SignupSuccess => {
                self.signup_artifacts = None;
                self.mode = Mode::Login;
            }
            state => {
                return Err(AuthFlowError::InvalidState {
                    operation: "return_to_credentials",
                    state,
                })
            }
        }

        self.draft.clear();
        self.transition(FlowState::Credentials);
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), AuthFlowError> {
        if self.loading {
            return Err(AuthFlowError::Busy);
        }
        Ok(())
    }

    fn ensure_state(
        &self,
        operation: &'static str,
        expected: FlowState,
    ) -> Result<(), AuthFlowError> {
        if self.state != expected {
            return Err(AuthFlowError::InvalidState {
                operation,
                state: self.state,
            });
        }
        Ok(())
    }

    fn ensure_mode(&self, operation: &'static str, required: Mode) -> Result<(), AuthFlowError> {
        if self.mode != required {
            return Err(AuthFlowError::InvalidMode {
                operation,
                required,
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: FlowState) {
        log::debug!("flow state {:?} -> {:?}", self.state, next);
        self.state = next;
        for observer in &self.observers {
            observer.state_changed(next);
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        for observer in &self.observers {
            observer.loading_changed(loading);
        }
    }

    fn notify(&self, notification: Notification) {
        for observer in &self.observers {
            observer.notify(&notification);
        }
    }

    /// Surfaces a failed remote call as an error notification and hands the
    /// error back to the caller. The flow state is left untouched.
    fn fail(&self, err: AuthFlowError) -> AuthFlowError {
        log::error!("remote call failed: {err}");
        self.notify(Notification::error(err.user_message()));
        err
    }
}

async fn call_signup(
    client: &Client,
    request: &SignupRequest,
) -> Result<(String, SignupArtifacts), AuthFlowError> {
    let response = api::signup(client, request).await?;

    let artifacts = SignupArtifacts {
        initial_password: require!(response.password),
        qr_password_image: require!(response.qr_password_base64),
        qr_2fa_image: require!(response.qr_2fa_base64),
    };

    Ok((require!(response.email), artifacts))
}

async fn call_renew(
    client: &Client,
    request: &RenewPasswordRequest,
) -> Result<String, AuthFlowError> {
    let response = api::renew_password(client, request).await?;
    Ok(require!(response.password))
}
