//! Cookie-session keys.
//!
//! The member session is site-wide state persisted in `oc_session`; the
//! cookie session only carries per-browser UI state.

/// Session keys for per-browser state.
pub mod session_keys {
    /// Set to `true` once the admin secret has been entered.
    pub const ADMIN_UNLOCKED: &str = "admin_unlocked";
}
