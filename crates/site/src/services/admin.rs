//! Admin gate.
//!
//! A single shared secret unlocks the admin area. Whether a browser has
//! unlocked it is tracked in its cookie session (see
//! [`crate::middleware::RequireAdmin`]); the gate only checks the secret.

use secrecy::{ExposeSecret, SecretString};

/// Checks candidate secrets against the configured admin secret.
#[derive(Clone)]
pub struct AdminGate {
    secret: SecretString,
}

impl AdminGate {
    #[must_use]
    pub const fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Whether `candidate` is exactly the admin secret.
    #[must_use]
    pub fn authenticate(&self, candidate: &str) -> bool {
        let ok = candidate == self.secret.expose_secret();
        if !ok {
            tracing::warn!("Admin unlock rejected");
        }
        ok
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_exact_match_only() {
        let gate = AdminGate::new(SecretString::from("1234"));
        assert!(gate.authenticate("1234"));
        assert!(!gate.authenticate("12345"));
        assert!(!gate.authenticate(" 1234"));
        assert!(!gate.authenticate(""));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let gate = AdminGate::new(SecretString::from("1234"));
        let debug = format!("{gate:?}");
        assert!(!debug.contains("1234"));
        assert!(debug.contains("[REDACTED]"));
    }
}
