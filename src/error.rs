//! Error types for the YelpCamp server
//!
//! `AppError` is the single tail stage for every failure: handlers return
//! `AppResult<_>` and the `IntoResponse` impl renders the error page with the
//! matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{validation::ValidationFailure, views};

/// Message shown when an error carries nothing fit for display
pub const GENERIC_MESSAGE: &str = "Oh no, Something went Wrong";

/// Message for requests that match no route
pub const PAGE_NOT_FOUND: &str = "Page not Found";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Error for a path no route handles
    pub fn page_not_found() -> Self {
        AppError::NotFound(PAGE_NOT_FOUND.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message rendered on the error page. Server-side failures never leak
    /// their cause to the client.
    pub fn public_message(&self) -> String {
        let message = match self {
            AppError::Validation(failure) => failure.to_string(),
            AppError::NotFound(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(_) => String::new(),
        };
        if message.is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            other => tracing::debug!(status = status.as_u16(), "Request failed: {}", other),
        }

        let page = views::errors::error_page(status, &self.public_message());
        (status, page).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::page_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(AppError::page_not_found().public_message(), "Page not Found");
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut).public_message(),
            GENERIC_MESSAGE
        );
        assert_eq!(AppError::NotFound(String::new()).public_message(), GENERIC_MESSAGE);

        let failure = ValidationFailure::new(vec![
            FieldError::new("title", "\"campground.title\" is required"),
            FieldError::new("price", "\"campground.price\" must be a number"),
        ]);
        let err = AppError::from(failure);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.public_message(),
            "\"campground.title\" is required,\"campground.price\" must be a number"
        );
    }
}
