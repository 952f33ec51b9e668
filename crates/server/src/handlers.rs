//! # Route Handlers
//!
//! The Axum handlers for the webhook service: the health check, the
//! registration handshake, and the main webhook processor. The processor is
//! strictly linear per request: validate the payload, translate the word,
//! write the result back, respond.

use crate::{
    errors::AppError,
    state::AppState,
    types::{ChallengeParams, EndpointInfo, HealthResponse, WebhookSuccess},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

/// The handler for the root (`/`) endpoint: a health check with a capability
/// description.
pub async fn health_check() -> Json<HealthResponse> {
    info!("Health check request received");
    Json(HealthResponse {
        status: "healthy",
        service: "lexibridge",
        endpoints: vec![
            EndpointInfo {
                path: "/",
                methods: &["GET"],
                description: "Health check",
            },
            EndpointInfo {
                path: "/webhook",
                methods: &["GET", "POST"],
                description: "Workspace webhook endpoint",
            },
        ],
    })
}

/// Handles the webhook registration handshake: a `challenge` query parameter
/// is echoed back verbatim.
pub async fn webhook_verify(Query(params): Query<ChallengeParams>) -> Json<Value> {
    match params.challenge {
        Some(challenge) => {
            info!("Answering webhook verification challenge");
            Json(json!({ "challenge": challenge }))
        }
        None => Json(json!({ "status": "ok" })),
    }
}

/// The main webhook handler: extracts the word and page id from the payload,
/// fetches a translation, and writes it into the page's properties.
pub async fn handle_webhook(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<WebhookSuccess>, AppError> {
    info!(payload = %payload, "Received webhook payload");

    let (word, page_id) = extract_word_and_page(&payload)?;
    info!(%word, %page_id, "Processing word");

    let translation = app_state.translator.translate_word(&word).await?;

    app_state
        .workspace
        .update_translations(&page_id, &translation)
        .await?;
    info!(%word, %page_id, "Successfully updated translations");

    Ok(Json(WebhookSuccess {
        status: "success",
        word,
        translations: translation,
    }))
}

/// Extracts the word and the page id from an untrusted webhook payload.
///
/// Every step of the chained lookup reports the missing path so a malformed
/// payload yields a descriptive 400.
fn extract_word_and_page(payload: &Value) -> Result<(String, String), AppError> {
    let data = payload
        .get("data")
        .filter(|d| !d.is_null())
        .ok_or_else(|| AppError::BadRequest("Missing `data` field".to_string()))?;

    let page_id = data
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AppError::BadRequest("Could not extract page ID: missing `data.id`".to_string())
        })?;

    let word = data
        .pointer("/properties/Word/title/0/text/content")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AppError::BadRequest(
                "Could not extract word: missing `data.properties.Word.title[0].text.content`"
                    .to_string(),
            )
        })?;

    Ok((word.to_string(), page_id.to_string()))
}
