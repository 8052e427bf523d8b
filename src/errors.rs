use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use diesel::r2d2;
use serde::Serialize;
use std::fmt;

pub const MISSING_FIELD_MESSAGE: &str = "A field was missing from the request";

/// Application-wide error types
#[derive(Debug, PartialEq)]
pub enum AppError {
    // 400
    MissingField,
    InvalidInput { field: String, message: String },

    // 401
    InvalidCredentials,

    // 404
    ResourceNotFound { resource: String },

    // 500
    DatabaseError,
    ConnectionPoolError,
    InternalError,
}

/// Body of every error response. `error` repeats the HTTP status code.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: u16,
    pub message: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField => write!(f, "{}", MISSING_FIELD_MESSAGE),
            AppError::InvalidInput { field, message } => write!(f, "Invalid {}: {}", field, message),
            AppError::InvalidCredentials => write!(f, "Invalid email or password"),
            AppError::ResourceNotFound { resource } => write!(f, "{} not found", resource),
            AppError::DatabaseError => write!(f, "A database error occurred"),
            AppError::ConnectionPoolError => write!(f, "Service temporarily unavailable"),
            AppError::InternalError => write!(f, "An unexpected error occurred"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField | AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DatabaseError | AppError::ConnectionPoolError | AppError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::DatabaseError | AppError::ConnectionPoolError | AppError::InternalError => {
                tracing::error!(error = ?self, "Server error");
            }
            AppError::InvalidCredentials => {
                tracing::warn!(error = ?self, "Authentication failed");
            }
            _ => {
                tracing::info!(error = ?self, "Client error");
            }
        }

        HttpResponse::build(status).json(ErrorBody {
            error: status.as_u16(),
            message: self.to_string(),
        })
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn invalid_input(field: &str, message: &str) -> Self {
        AppError::InvalidInput {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn resource_not_found(resource: &str) -> Self {
        AppError::ResourceNotFound {
            resource: resource.to_string(),
        }
    }
}

impl From<r2d2::PoolError> for AppError {
    fn from(err: r2d2::PoolError) -> Self {
        log::error!("Database connection pool error: {}", err);
        AppError::ConnectionPoolError
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::Error as DieselError;

        match err {
            DieselError::NotFound => AppError::resource_not_found("Record"),
            _ => {
                log::error!("Database error: {}", err);
                AppError::DatabaseError
            }
        }
    }
}

/// Error handlers for actix extractors, so malformed requests use the same
/// envelope as handler errors.
pub mod extractors {
    use super::AppError;
    use actix_web::{
        error::{JsonPayloadError, PathError, QueryPayloadError},
        HttpRequest,
    };

    pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
        log::debug!("Rejected JSON payload: {}", err);
        match err {
            JsonPayloadError::Deserialize(ref e) if e.to_string().contains("missing field") => {
                AppError::MissingField.into()
            }
            other => AppError::invalid_input("body", &other.to_string()).into(),
        }
    }

    pub fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
        log::debug!("Rejected query string: {}", err);
        AppError::invalid_input("query", "Malformed query string").into()
    }

    pub fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
        log::debug!("Rejected path parameters: {}", err);
        AppError::invalid_input("path", "Malformed path parameter").into()
    }
}
