//! Flow position and mode selection.

/// The client's current step within the login/registration sequence.
///
/// Exactly one state is active at a time. Transitions are triggered only by
/// completed remote calls or by explicit user navigation; a failed remote
/// call never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Collecting the email/password pair (or, in register mode, the email).
    Credentials,
    /// Credentials accepted; waiting for the 6-digit one-time code.
    AwaitingCode,
    /// The password has expired and renewal is offered.
    PasswordExpired,
    /// A renewed password was returned and is being displayed once.
    PasswordRenewed,
    /// Registration succeeded; the provisioning artifacts are being displayed.
    SignupSuccess,
    /// The flow completed successfully.
    Authenticated,
}

/// Which of the two flows the client is driving.
///
/// An independent axis from [`FlowState`]; switching mode resets the flow to
/// [`FlowState::Credentials`] and clears previously generated secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Authenticating an existing account.
    Login,
    /// Creating a new account.
    Register,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }
}
