use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lexibridge::{workspace::WorkspaceError, TranslateError};
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates the different kinds of errors that can occur while
/// processing a webhook, allowing them to be converted into appropriate HTTP
/// responses.
#[derive(Debug)]
pub enum AppError {
    /// The inbound payload did not have the expected shape.
    BadRequest(String),
    /// The upstream translation call failed.
    Translation(TranslateError),
    /// The workspace read or write failed, including the archived-page
    /// precondition.
    Workspace(WorkspaceError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<TranslateError> for AppError {
    fn from(err: TranslateError) -> Self {
        AppError::Translation(err)
    }
}

impl From<WorkspaceError> for AppError {
    fn from(err: WorkspaceError) -> Self {
        AppError::Workspace(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message, details) = match self {
            AppError::BadRequest(details) => {
                error!("Invalid webhook payload: {details}");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid payload structure",
                    details,
                )
            }
            AppError::Translation(err) => {
                error!("Translation error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Translation failed",
                    err.to_string(),
                )
            }
            AppError::Workspace(err) => {
                error!("Workspace update error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update workspace page",
                    err.to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    err.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "details": details,
        }));

        (status_code, body).into_response()
    }
}
