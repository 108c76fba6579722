//! Data models for the URL shortener
//!
//! The persisted mapping record plus the request/response bodies exchanged
//! over HTTP.

use serde::{Deserialize, Serialize};

/// A `shortId -> longUrl` mapping as stored in the Mapping Store
///
/// Serialized as `{"shortId": "...", "longUrl": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlMapping {
    /// Short identifier, primary key of the store (e.g. "3f9a1c")
    pub short_id: String,

    /// The original URL, stored exactly as the caller sent it
    pub long_url: String,
}

impl UrlMapping {
    pub fn new(short_id: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            long_url: long_url.into(),
        }
    }
}

/// Request payload for shortening a URL
///
/// # Example
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
#[derive(Deserialize, Debug)]
pub struct ShortenRequest {
    /// The URL to shorten. Any string is accepted.
    pub url: String,
}

/// Response returned after a successful shorten
///
/// # Example
/// ```json
/// { "shortUrl": "https://short.ly/3f9a1c" }
/// ```
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

/// JSON body used for not-found and error responses
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
