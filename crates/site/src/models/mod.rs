//! Domain records.
//!
//! These are the typed shapes of the persisted blobs. Each record validates
//! its required fields on deserialization, so a malformed blob is rejected
//! at load time instead of flowing through the site.

pub mod activity;
pub mod session;
pub mod stats;
pub mod user;

pub use activity::{Activity, NewActivity};
pub use session::session_keys;
pub use stats::Stats;
pub use user::{Member, User};
