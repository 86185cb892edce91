//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Rental API                         │
//! │                                                                         │
//! │  Client                       Rust Backend                              │
//! │  ──────                       ────────────                              │
//! │                                                                         │
//! │  GET /rental_info                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler Function                                                │  │
//! │  │  Result<HttpResponse, ApiError>                                  │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Missing param? ── ValidationError ── ApiError (400) ──────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown customer? ── DbError::NotFound ── ApiError (404) ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store failure? ── DbError::* ── ApiError (500) ───────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  {"code": "NOT_FOUND", "error": "Customer not found: 9999"}             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure body is a JSON object carrying an `error` field (the
//! human-readable message) plus a machine-readable `code`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use rental_core::ValidationError;
use rental_db::DbError;

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is what clients receive when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "error": "Customer not found: 9999"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub error: String,
}

/// Error codes for API responses.
///
/// The taxonomy is deliberately small: a read-only reporting API either got
/// a bad request, found nothing for an entity-scoped lookup, or hit the
/// store. There is no partial-failure state to distinguish.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Missing or invalid required parameter / body (400)
    BadRequest,

    /// Entity-scoped lookup matched no rows (404)
    NotFound,

    /// Store connectivity or constraint failure (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        ApiError {
            code,
            error: error.into(),
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to API errors (always 400).
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ApiError::bad_request("Invalid reference")
            }
            DbError::ConnectionFailed(_) => {
                ApiError::internal("Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::internal("Database schema bootstrap failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::internal("Database operation failed")
            }
            DbError::PoolExhausted => ApiError::internal("Database pool exhausted"),
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::internal("Database operation failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.error)
    }
}

/// Maps the error taxonomy to HTTP statuses and renders the JSON body.
impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
