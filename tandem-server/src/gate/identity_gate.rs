use crate::error::{Error, Result};
use serde::Deserialize;

/// Query parameters of the WebSocket upgrade request, e.g. `/ws?username=Alice`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Handshake {
    pub username: Option<String>,
}

impl Handshake {
    #[cfg(test)]
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}

/// Admission check run once per connection attempt, before the upgrade.
pub struct IdentityGate;

impl IdentityGate {
    /// Returns the display name the connection will carry for its whole
    /// lifetime, or `InvalidIdentity` if the handshake is anonymous.
    pub fn validate(handshake: &Handshake) -> Result<String> {
        let name = handshake
            .username
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();

        if name.is_empty() {
            return Err(Error::InvalidIdentity);
        }

        Ok(name.to_owned())
    }
}
