use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vizdeck_core::codec::CodecError;
use vizdeck_core::error::CoreError;
use vizdeck_core::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"code": <status>, "message": ..}`
/// bodies, the shape dashboard clients expect.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vizdeck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        AppError::Core(CoreError::Codec(err))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Core(CoreError::Store(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Unparsable JSON: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::InvalidOrganization(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Codec(err) => classify_codec_error(err),
                CoreError::Store(err) => classify_store_error(err),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({
            "code": status.as_u16(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Decode failures are the caller's fault; an unencodable in-memory value is ours.
fn classify_codec_error(err: &CodecError) -> (StatusCode, String) {
    match err {
        CodecError::UnrecognizedVariant(_) | CodecError::MalformedPayload(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        CodecError::UnsupportedVariant => {
            tracing::error!(error = %err, "Visualization could not be encoded");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

/// Store errors are surfaced with their own message.
///
/// - `NotFound` maps to 404.
/// - Everything else maps to 500.
fn classify_store_error(err: &StoreError) -> (StatusCode, String) {
    match err {
        StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        StoreError::Backend(source) => {
            tracing::error!(error = %source, "Store error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
