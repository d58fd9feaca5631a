//! OC Core - Shared types library.
//!
//! This crate provides common types used across all OC components:
//! - `site` - Public site, member auth, and the admin API
//! - `cli` - Command-line tools for managing the site's data directory
//!
//! # Architecture
//!
//! The core crate contains only types and their validation - no I/O, no
//! storage access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and member ranks

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
