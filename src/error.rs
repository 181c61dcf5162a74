use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::templates::{error_page, validation_error_page};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(sea_orm::DbErr),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        // Referential failures get their own variant so a dangling
        // artist/venue id reads as a conflict, not a server fault.
        let text = err.to_string().to_lowercase();
        if text.contains("foreign key") {
            Self::Constraint("a referenced record does not exist".to_string())
        } else if text.contains("not null") || text.contains("not-null") {
            Self::Constraint("a required field was missing".to_string())
        } else {
            Self::Database(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, markup) = match self {
            Self::Validation(ref messages) => {
                (StatusCode::BAD_REQUEST, validation_error_page(messages))
            }
            Self::NotFound(ref msg) => (
                StatusCode::NOT_FOUND,
                error_page("Not Found", msg),
            ),
            Self::Constraint(ref msg) => (
                StatusCode::CONFLICT,
                error_page("Conflict", msg),
            ),
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_page("Something went wrong", "An internal error occurred. Please try again."),
                )
            }
            Self::Unexpected(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_page("Something went wrong", "An internal error occurred. Please try again."),
                )
            }
        };

        (status, Html(markup.into_string())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
