//! Request handlers for the four collection endpoints.
//!
//! Each collection gets GET (list all) and POST (create). Required-field
//! validation happens here, before any storage operation; the store
//! itself does no schema checking. Request bodies are taken as
//! `Option<Json<_>>` so a missing or malformed body turns into our own
//! 400 response instead of an extractor rejection.
//!
//! Failure bodies are a generic `{"error": ...}` object; store errors
//! are logged here and surfaced only as a 500 status.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::domain::records::{
    Nomination, Pledge, Postcard, Wish, NOMINATION_PLACEHOLDER_IMAGE,
};
use crate::store::CollectionStore;

/// Shared handler state.
pub type SharedStore = Arc<CollectionStore>;

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Treat absent and blank strings the same way the frontend does.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Wishes ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateWish {
    #[serde(default)]
    pub message: Option<String>,
}

pub async fn list_wishes(State(store): State<SharedStore>) -> Json<Vec<Wish>> {
    Json(store.wishes.read().await)
}

pub async fn create_wish(
    State(store): State<SharedStore>,
    body: Option<Json<CreateWish>>,
) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let Some(message) = present(body.message) else {
        return error_body(StatusCode::BAD_REQUEST, "Message is required");
    };

    let wish = Wish::new(message);
    match store.wishes.append(wish.clone()).await {
        Ok(_) => (StatusCode::CREATED, Json(wish)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to save wish");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save wish")
        }
    }
}

// ── Pledges ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePledge {
    #[serde(default)]
    pub pledge_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Pledge creation response carries the running total for the counter
/// widget on the pledge wall.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PledgeCreated {
    pub pledge: Pledge,
    pub total_pledges: usize,
}

pub async fn list_pledges(State(store): State<SharedStore>) -> Json<Vec<Pledge>> {
    Json(store.pledges.read().await)
}

pub async fn create_pledge(
    State(store): State<SharedStore>,
    body: Option<Json<CreatePledge>>,
) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let (Some(pledge_id), Some(text)) = (present(body.pledge_id), present(body.text)) else {
        return error_body(StatusCode::BAD_REQUEST, "Pledge ID and text are required");
    };

    let pledge = Pledge::new(pledge_id, text);
    match store.pledges.append(pledge.clone()).await {
        Ok(total_pledges) => (
            StatusCode::CREATED,
            Json(PledgeCreated {
                pledge,
                total_pledges,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to save pledge");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save pledge")
        }
    }
}

// ── Nominations ─────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNomination {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub achievement: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

pub async fn list_nominations(State(store): State<SharedStore>) -> Json<Vec<Nomination>> {
    Json(store.nominations.read().await)
}

/// Create or update a nomination.
///
/// Nominations upsert by id: a re-submitted id updates the stored record
/// in place instead of appending a duplicate. No field is required; the
/// image falls back to a placeholder on create and to the previously
/// stored value on update.
pub async fn create_nomination(
    State(store): State<SharedStore>,
    body: Option<Json<CreateNomination>>,
) -> Response {
    let CreateNomination {
        id,
        name,
        achievement,
        image_url,
    } = body.map(|Json(b)| b).unwrap_or_default();

    let id = present(id).unwrap_or_else(|| format!("nominated-{}", Utc::now().timestamp_millis()));
    let image_url = present(image_url);
    let now = Utc::now();

    let result = store
        .nominations
        .mutate(move |records| {
            if let Some(existing) = records.iter_mut().find(|n| n.id == id) {
                existing.name = name;
                existing.achievement = achievement;
                if let Some(url) = image_url {
                    existing.image_url = url;
                }
                existing.updated = Some(now);
                existing.clone()
            } else {
                let nomination = Nomination {
                    id,
                    name,
                    achievement,
                    image_url: image_url
                        .unwrap_or_else(|| NOMINATION_PLACEHOLDER_IMAGE.to_string()),
                    date: now,
                    updated: None,
                };
                records.push(nomination.clone());
                nomination
            }
        })
        .await;

    match result {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to save nomination");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save nomination")
        }
    }
}

// ── Postcards ───────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostcard {
    #[serde(default)]
    pub greeting: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
}

pub async fn list_postcards(State(store): State<SharedStore>) -> Json<Vec<Postcard>> {
    Json(store.postcards.read().await)
}

pub async fn create_postcard(
    State(store): State<SharedStore>,
    body: Option<Json<CreatePostcard>>,
) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let (Some(greeting), Some(message)) = (present(body.greeting), present(body.message)) else {
        return error_body(StatusCode::BAD_REQUEST, "Greeting and message are required");
    };

    let postcard = Postcard::new(greeting, message, body.signature, body.bg);
    match store.postcards.append(postcard.clone()).await {
        Ok(_) => (StatusCode::CREATED, Json(postcard)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to save postcard");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save postcard")
        }
    }
}
