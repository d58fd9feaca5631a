//! Business logic services.

pub mod activities;
pub mod admin;
pub mod auth;
pub mod description;

pub use activities::{ActivityError, ActivityService};
pub use admin::AdminGate;
pub use auth::{AuthError, AuthService};
pub use description::DescriptionService;
