use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These specify the target gateway and the
/// user agent sent with every request. They are optional and uneditable once
/// the client is initialized.
///
/// Defaults to
///
/// ```
/// # use authflow_core::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "https://api.authflow.dev/function".to_string(),
///     user_agent: "Authflow Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the targeted identity gateway. All four endpoint paths
    /// are joined to this value; no other base is ever consulted.
    pub base_url: String,
    /// The user_agent sent to the gateway. Defaults to `Authflow Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.authflow.dev/function".into(),
            user_agent: "Authflow Rust-SDK".into(),
        }
    }
}
