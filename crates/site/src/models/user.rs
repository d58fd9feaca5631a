//! Member and user records.
//!
//! A [`User`] is what the `oc_users` blob holds: the public profile plus the
//! stored password. A [`Member`] is the profile alone; it is what the session
//! holds, what login returns, and what the admin roster lists.

use serde::{Deserialize, Serialize};

use ocean_clean_core::{Email, Rank, UserId};

/// Contribution recorded for a new member.
pub const DEFAULT_CONTRIBUTION: &str = "0kg";

/// Join date shown for legacy records written before join dates existed.
pub const LEGACY_JOINED_AT: &str = "2024.01.01";

/// Format string for join dates (`2026.10.16`).
pub const JOINED_AT_FORMAT: &str = "%Y.%m.%d";

/// A member's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MemberRecord")]
pub struct Member {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub rank: Rank,
    /// Collected weight, free text (e.g. "12kg").
    pub contribution: String,
    /// Join date, `YYYY.MM.DD`.
    pub joined_at: String,
}

/// A registered user as persisted in `oc_users`.
///
/// `password` holds an argon2 PHC string for users registered by this
/// service. Records carried over from the first version of the site hold
/// the plaintext value; those still verify at login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserRecord")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub password: String,
    pub rank: Rank,
    pub contribution: String,
    pub joined_at: String,
}

impl User {
    /// Create a freshly registered user with the default rank and contribution.
    #[must_use]
    pub fn new(name: String, email: Email, password: String, joined_at: String) -> Self {
        Self {
            id: UserId::generate(),
            name,
            email,
            password,
            rank: Rank::default(),
            contribution: DEFAULT_CONTRIBUTION.to_owned(),
            joined_at,
        }
    }

    /// The public profile of this user.
    #[must_use]
    pub fn profile(&self) -> Member {
        Member {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            rank: self.rank,
            contribution: self.contribution.clone(),
            joined_at: self.joined_at.clone(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("rank", &self.rank)
            .field("contribution", &self.contribution)
            .field("joined_at", &self.joined_at)
            .finish()
    }
}

// =============================================================================
// Persisted record shapes
// =============================================================================

fn default_contribution() -> String {
    DEFAULT_CONTRIBUTION.to_owned()
}

fn default_joined_at() -> String {
    LEGACY_JOINED_AT.to_owned()
}

/// Raw shape of a persisted profile. Missing rank, contribution, and join
/// date fall back to their defaults; unknown fields (such as a password in
/// an old session blob) are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberRecord {
    id: UserId,
    name: String,
    email: Email,
    #[serde(default)]
    rank: Rank,
    #[serde(default = "default_contribution")]
    contribution: String,
    #[serde(default = "default_joined_at")]
    joined_at: String,
}

impl TryFrom<MemberRecord> for Member {
    type Error = String;

    fn try_from(record: MemberRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(format!("member {} has an empty name", record.id));
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            email: record.email,
            rank: record.rank,
            contribution: record.contribution,
            joined_at: record.joined_at,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(flatten)]
    profile: MemberRecord,
    #[serde(default)]
    password: String,
}

impl TryFrom<UserRecord> for User {
    type Error = String;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let profile = Member::try_from(record.profile)?;
        Ok(Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            password: record.password,
            rank: profile.rank,
            contribution: profile.contribution,
            joined_at: profile.joined_at,
        })
    }
}
