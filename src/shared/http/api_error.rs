// Uniform error envelope for every failure that leaves the service.
//
// Request-level failures carry their own status; anything else is a 500.
// The envelope message is always "an illegal argument was provided: <status>[: <detail>]".

use std::any::Any;

use async_graphql::ErrorExtensions;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::accounts::core::errors::AccountError;

pub const ILLEGAL_ARGUMENT_PREFIX: &str = "an illegal argument was provided: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestErrorResponse {
    pub code: Option<String>,
    pub message: String,
}

impl RestErrorResponse {
    fn illegal_argument(message: String) -> Self {
        Self {
            code: None,
            message: format!("{ILLEGAL_ARGUMENT_PREFIX}{message}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Request {
        status: StatusCode,
        message: Option<String>,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    pub fn request(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: Some(message.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Request { status, .. } => *status,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Request { message, .. } => message.clone(),
            Self::Unexpected(error) => Some(error.to_string()),
        }
    }

    pub fn envelope(&self) -> RestErrorResponse {
        let status = self.status().as_u16();
        let message = match self.detail() {
            Some(detail) => format!("{status}: {detail}"),
            None => status.to_string(),
        };
        RestErrorResponse::illegal_argument(message)
    }

    pub fn into_graphql_error(self) -> async_graphql::Error {
        let status = i32::from(self.status().as_u16());
        async_graphql::Error::new(self.envelope().message)
            .extend_with(|_, extensions| extensions.set("status", status))
    }

    fn log(&self, envelope: &RestErrorResponse) {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "{}", envelope.message);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", envelope.message);
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(error: AccountError) -> Self {
        let status = match error {
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::AlreadyExists(_) => StatusCode::CONFLICT,
        };
        Self::request(status, error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::request(rejection.status(), rejection.body_text())
    }
}

/// A path segment that does not name an account resolves to no resource.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::request(StatusCode::NOT_FOUND, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = self.envelope();
        self.log(&envelope);
        (self.status(), Json(envelope)).into_response()
    }
}

pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::request(
        StatusCode::NOT_FOUND,
        format!("No resource found for {}", uri.path()),
    )
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::request(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{method} is not allowed on {}", uri.path()),
    )
}

/// Turns a handler panic into the same envelope as any other unclassified failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Unexpected(anyhow::anyhow!(detail)).into_response()
}
