//! User-facing outcomes and the observer seam for the rendering layer.

use crate::state::FlowState;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A completed step.
    Success,
    /// A recoverable condition, such as an expired password.
    Warning,
    /// A failed remote call; the flow state is unchanged and the user may
    /// retry.
    Error,
}

/// A transient user-facing message emitted alongside a flow event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Presentation severity.
    pub severity: Severity,
    /// Message text. For failed remote calls this is the server-provided
    /// message verbatim, falling back to the HTTP status text.
    pub message: String,
}

impl Notification {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub(crate) fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Callbacks for the rendering layer.
///
/// The flow client owns all state; a view subscribes here and re-renders on
/// the events it cares about. All methods have empty defaults.
pub trait FlowObserver {
    /// The flow moved to `state`.
    fn state_changed(&self, _state: FlowState) {}

    /// A remote call started (`true`) or resolved (`false`). The view must
    /// disable the triggering control while this is set.
    fn loading_changed(&self, _loading: bool) {}

    /// A transient message should be shown to the user.
    fn notify(&self, _notification: &Notification) {}
}
