//! HTTP request handlers
//!
//! - `shorten_url` stores a long URL under a fresh short id
//! - `resolve_url` redirects a short id to its long URL

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, Result};
use crate::model::{MessageBody, ShortenRequest, ShortenResponse};
use crate::service::Resolution;
use crate::state::AppState;

/// Creates a short URL
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
///
/// The `Host` header becomes the authority of the returned short URL.
///
/// # Response
///
/// - **200 OK** - `{"shortUrl": "https://<host>/<shortId>"}`
/// - **400 Bad Request** - body is not `{"url": <string>}` or no host was sent
/// - **500 Internal Server Error** - the store write failed
pub async fn shorten_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>> {
    let Json(request) =
        payload.map_err(|rejection| AppError::MalformedInput(rejection.body_text()))?;

    // HTTP/2 clients carry the authority in the URI instead of a Host header
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .ok_or_else(|| AppError::MalformedInput("missing Host header".to_string()))?;

    let short_url = state.service.shorten(request.url, host).await?;
    Ok(Json(ShortenResponse { short_url }))
}

/// Redirects a short id to its original URL
///
/// # Path Parameters
///
/// - `short_id` - matched exactly, no case folding
///
/// # Response
///
/// - **301 Moved Permanently** - `Location` set to the stored URL
/// - **404 Not Found** - `{"message": "URL not found"}`
/// - **500 Internal Server Error** - the store lookup failed, or the stored
///   URL is not a valid header value (e.g. it contains a newline)
pub async fn resolve_url(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Response> {
    let resolution = state.service.resolve(&short_id).await?;
    let response = match resolution {
        Resolution::Redirect(long_url) => {
            let location = HeaderValue::try_from(long_url)
                .map_err(|_| AppError::InvalidRedirectTarget { short_id })?;
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        Resolution::NotFound => not_found().await.into_response(),
    };

    Ok(response)
}

/// JSON 404 for a missing mapping, also used as the router fallback
/// (e.g. `GET /` with an empty short id)
pub async fn not_found() -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody::new("URL not found")),
    )
}
