//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! IDs are short opaque strings: nine random lowercase base-36 characters,
//! the same shape the site has always written into its persisted blobs.

/// Number of characters in a freshly generated ID.
pub const ID_LENGTH: usize = 9;

/// Generate a random base-36 string of [`ID_LENGTH`] characters.
#[must_use]
pub fn random_base36() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
        .collect()
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `generate()` for a fresh random ID, `as_str()` for the raw value
/// - `From<String>`/`From<&str>` for IDs read from outside the crate
///
/// # Example
///
/// ```rust
/// # use ocean_clean_core::define_id;
/// define_id!(UserId);
/// define_id!(ActivityId);
///
/// let user_id = UserId::generate();
/// let activity_id = ActivityId::from("k3j9x0a1b");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = activity_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random ID.
            #[must_use]
            pub fn generate() -> Self {
                Self($crate::types::id::random_base36())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(UserId);
define_id!(ActivityId);
