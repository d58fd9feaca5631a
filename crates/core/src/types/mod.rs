//! Core types for OC.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod rank;

pub use email::{Email, EmailError};
pub use id::*;
pub use rank::{Rank, RankError};
