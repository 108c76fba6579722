use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::MessageBody;
use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed request: {0}")]
    MalformedInput(String),
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
    /// The stored long URL cannot be sent as a `Location` header value.
    #[error("stored URL for {short_id} is not a valid redirect target")]
    InvalidRedirectTarget { short_id: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MalformedInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::StoreUnavailable(err) => {
                tracing::error!(error = %err, "mapping store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Mapping store unavailable".to_string(),
                )
            }
            AppError::InvalidRedirectTarget { short_id } => {
                tracing::error!(short_id, "stored URL is not a valid Location header");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(MessageBody::new(message))).into_response()
    }
}
