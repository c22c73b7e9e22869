use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid server address `{address}`: {source}")]
    InvalidAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Errors returned to the client by the assistant endpoint
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Unsupported content type `{0}`, expected application/json")]
    UnsupportedContentType(String),

    #[error("Last message has no text `content` field")]
    MissingContent,
}

impl AssistantError {
    pub fn status(&self) -> StatusCode {
        match self {
            AssistantError::InvalidRequest(err) => match err.classify() {
                Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
                Category::Syntax | Category::Eof | Category::Io => StatusCode::BAD_REQUEST,
            },
            AssistantError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            // The request was well formed; the reply could not be produced from it.
            AssistantError::MissingContent => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AssistantError::InvalidRequest(_) | AssistantError::UnsupportedContentType(_) => {
                "invalid_request"
            }
            AssistantError::MissingContent => "missing_content",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AssistantError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        tracing::warn!(%status, kind, "rejecting assistant request: {}", self);

        let body = Json(ErrorResponse {
            ok: false,
            error: kind.to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
