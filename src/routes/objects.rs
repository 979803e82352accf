//! `/objects` forwarding routes.
//!
//! The browser talks to the storefront origin; these handlers relay each
//! request to the collection service and hand back its status, body and
//! content type untouched. No retries, no caching.
//!
//! Identifiers arrive percent-decoded from the path and are re-encoded as a
//! single segment, so only `/objects` and `/objects/{id}` are ever reached
//! upstream. Dot-segment identifiers are refused with 400.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use catalog::api::{ApiError, collection_url, object_url};
use serde_json::Value;

use crate::state::AppState;
use crate::upstream::UpstreamReply;

/// `GET /objects`: list every product.
pub async fn list_objects(State(state): State<AppState>) -> Response {
    let url = collection_url(state.upstream.base_url());
    forward(&state, reqwest::Method::GET, &url, None).await
}

/// `POST /objects`: create a product.
pub async fn create_object(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let url = collection_url(state.upstream.base_url());
    forward(&state, reqwest::Method::POST, &url, Some(&body)).await
}

/// `GET /objects/:id`: fetch one product.
pub async fn get_object(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match object_url(state.upstream.base_url(), &id) {
        Ok(url) => forward(&state, reqwest::Method::GET, &url, None).await,
        Err(e) => invalid_id(&e),
    }
}

/// `PUT /objects/:id`: replace a product.
pub async fn update_object(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    match object_url(state.upstream.base_url(), &id) {
        Ok(url) => forward(&state, reqwest::Method::PUT, &url, Some(&body)).await,
        Err(e) => invalid_id(&e),
    }
}

/// `DELETE /objects/:id`: remove a product.
pub async fn delete_object(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match object_url(state.upstream.base_url(), &id) {
        Ok(url) => forward(&state, reqwest::Method::DELETE, &url, None).await,
        Err(e) => invalid_id(&e),
    }
}

fn invalid_id(error: &ApiError) -> Response {
    tracing::warn!(%error, "refused identifier");
    (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": error.to_string() }))).into_response()
}

async fn forward(state: &AppState, method: reqwest::Method, url: &str, body: Option<&Value>) -> Response {
    match state.upstream.send(method.clone(), url, body).await {
        Ok(reply) => {
            tracing::debug!(%method, %url, status = reply.status, "forwarded");
            reply_to_response(reply)
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream unreachable");
            (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
        }
    }
}

fn reply_to_response(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if reply.body.is_empty() {
        return status.into_response();
    }
    match reply.content_type {
        Some(content_type) => (status, [(CONTENT_TYPE, content_type)], reply.body).into_response(),
        None => (status, Body::from(reply.body)).into_response(),
    }
}

#[cfg(test)]
#[path = "objects_test.rs"]
mod objects_test;
