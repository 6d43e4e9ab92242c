//! Error type for the web layer and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sentiview_common::SentiViewError;
use sentiview_config::ConfigError;
use tracing::error;

/// Main web application error type.
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Classification, model loading or chart rendering failed.
    #[error("Analysis error: {0}")]
    Analysis(#[from] SentiViewError),

    /// Binding or serving the listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the web layer.
pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Sentiment analysis failed. Please try again later.",
        )
            .into_response()
    }
}
