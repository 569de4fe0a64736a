//! Poll and append handlers.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tokio::task;

use crate::server::AppState;
use crate::storage::Message;

/// Query parameters for `GET /messages`.
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub since: Option<String>,
}

/// Handle `GET /messages?since=<id>`.
///
/// Returns up to one page of messages with id strictly greater than
/// `since`, ascending. A missing or unparseable `since` reads from the
/// beginning.
pub async fn fetch_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> Response {
    let since = query
        .since
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0);

    let store = state.store.clone();
    let page_size = state.page_size;

    match task::spawn_blocking(move || store.fetch_since(since, page_size)).await {
        Ok(Ok(messages)) => Json(messages).into_response(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, since, "Fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Fetch task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Handle `POST /newmessage`.
///
/// The body is `{from_name, body}`; any client-supplied id is overwritten
/// by the allocator before the append. On success the response is an
/// empty 200. If the append fails after allocation, the id becomes a
/// permanent gap in the sequence.
pub async fn post_message(State(state): State<AppState>, body: Bytes) -> Response {
    let mut message: Message = match serde_json::from_slice(&body) {
        Ok(m) => m,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    message.id = state.allocator.allocate();

    let store = state.store.clone();
    match task::spawn_blocking(move || {
        let result = store.append(&message);
        (message, result)
    })
    .await
    {
        Ok((message, Ok(()))) => {
            tracing::debug!(id = message.id, from_name = %message.from_name, "Message appended");
            StatusCode::OK.into_response()
        }
        Ok((message, Err(e))) => {
            tracing::error!(error = %e, id = message.id, "Append failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Append task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
