//! HTTP middleware: cookie sessions and the admin gate.

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, is_admin_unlocked};
pub use session::create_session_layer;
