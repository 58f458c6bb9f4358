//! Record shapes for the four tribute collections.
//!
//! These are the wire types served by the API and persisted to disk.
//! Field casing follows the frontend's JSON contract (`pledgeId`,
//! `imageUrl`, `totalPledges`), so every struct that carries such a
//! field is `rename_all = "camelCase"`.
//!
//! Ids are millisecond timestamps for wishes, pledges, and postcards;
//! nominations use caller-supplied string ids (or a generated
//! `nominated-<millis>` fallback) so the frontend can upsert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder portrait used when a nomination arrives without an image.
pub const NOMINATION_PLACEHOLDER_IMAGE: &str =
    "https://place-hold.it/400x300/e6e6fa/6a5acd?text=Inspiring+Woman&bold=true";

/// A celebratory wish left on the wishing wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    /// Millisecond timestamp assigned at creation.
    pub id: i64,
    /// The wish text.
    pub message: String,
    /// Creation time (ISO-8601 on the wire).
    pub date: DateTime<Utc>,
}

impl Wish {
    /// Build a new wish stamped with the current time.
    pub fn new(message: String) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            message,
            date: now,
        }
    }
}

/// A commitment selected from the pledge wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pledge {
    /// Millisecond timestamp assigned at creation.
    pub id: i64,
    /// Which pledge card was taken (`mentor`, `amplify`, ...).
    pub pledge_id: String,
    /// Display text of the pledge card.
    pub text: String,
    /// Creation time.
    pub date: DateTime<Utc>,
}

impl Pledge {
    /// Build a new pledge stamped with the current time.
    pub fn new(pledge_id: String, text: String) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            pledge_id,
            text,
            date: now,
        }
    }
}

/// A nomination of an inspiring woman.
///
/// Unlike the other collections, nominations are upserted by id:
/// re-submitting an existing id updates the stored record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    /// Caller-supplied id, or generated `nominated-<millis>`.
    pub id: String,
    /// Name of the nominee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// What the nominee is celebrated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
    /// Portrait URL; falls back to [`NOMINATION_PLACEHOLDER_IMAGE`].
    pub image_url: String,
    /// Creation time.
    pub date: DateTime<Utc>,
    /// Last in-place update, if the nomination was re-submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// A digital postcard composed in the card editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Postcard {
    /// Millisecond timestamp assigned at creation.
    pub id: i64,
    /// Card headline.
    pub greeting: String,
    /// Card body text.
    pub message: String,
    /// Optional sender signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Optional background theme key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
}

impl Postcard {
    /// Build a new postcard stamped with the current time.
    pub fn new(
        greeting: String,
        message: String,
        signature: Option<String>,
        bg: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            greeting,
            message,
            signature,
            bg,
            timestamp: now,
        }
    }
}
