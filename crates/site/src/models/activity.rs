//! Reward listing ("activity") records.

use serde::{Deserialize, Serialize};

use ocean_clean_core::ActivityId;

/// Image used when a listing is posted without one.
pub const DEFAULT_ACTIVITY_IMAGE: &str = "https://images.unsplash.com/photo-1621451537084-482c73073a0f?q=80&w=1974&auto=format&fit=crop";

/// A reward listing shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ActivityRecord")]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub desc: String,
    /// Reward amount in won, free text.
    pub price: String,
    /// Image URL.
    pub img: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Admin input for a new listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewActivity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub img: String,
}

impl Activity {
    /// Build a listing from admin input, stamped with a fresh id and `created_at`.
    ///
    /// Fields are taken as given; an empty image falls back to
    /// [`DEFAULT_ACTIVITY_IMAGE`]. Required-field checks belong to the caller.
    #[must_use]
    pub fn from_new(input: NewActivity, created_at: i64) -> Self {
        let img = if input.img.trim().is_empty() {
            DEFAULT_ACTIVITY_IMAGE.to_owned()
        } else {
            input.img
        };

        Self {
            id: ActivityId::generate(),
            title: input.title,
            desc: input.desc,
            price: input.price,
            img,
            created_at,
        }
    }
}

/// Raw shape of a persisted listing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityRecord {
    id: ActivityId,
    title: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    img: String,
    created_at: i64,
}

impl TryFrom<ActivityRecord> for Activity {
    type Error = String;

    fn try_from(record: ActivityRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(format!("activity {} has an empty title", record.id));
        }
        Ok(Self {
            id: record.id,
            title: record.title,
            desc: record.desc,
            price: record.price,
            img: record.img,
            created_at: record.created_at,
        })
    }
}
