use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use harborline_core::error::CoreError;
use harborline_core::validation::FieldErrors;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `harborline_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Structured field-level validation failures.
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation failures carry per-field detail, so they render their
        // own envelope.
        if let AppError::Validation(errors) = &self {
            let body = json!({
                "error": errors.first_message().unwrap_or("Validation failed"),
                "code": "VALIDATION_ERROR",
                "fields": errors.by_field(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                // The login contract reports bad credentials as a 400 with a
                // generic message, never a 401.
                CoreError::InvalidCredentials(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_CREDENTIALS", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Validation(_) => unreachable!("handled above"),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (23505) on constraints the validation layer already
///   guards map to 400 with the controlled validation message, so callers
///   see one error shape no matter which layer fired first.
/// - Other unique violations map to 409, foreign-key violations (23503) to
///   409, and check violations (23514) to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("");
            match db_err.code().as_deref() {
                // Unique constraint violation.
                Some("23505") => match constraint {
                    "uq_crew_phone_number" => (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        "Phone number must be unique.".to_string(),
                    ),
                    "uq_crew_captain_per_ship" => (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        "This ship already has a Captain assigned.".to_string(),
                    ),
                    "uq_ships_registration_number" => (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        "Registration number must be unique.".to_string(),
                    ),
                    "uq_users_email" => (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        "A user with that email already exists.".to_string(),
                    ),
                    _ => (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    ),
                },
                // Foreign-key violation: bad reference on write, or a delete
                // blocked by dependents (RESTRICT).
                Some("23503") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "Operation violates a foreign-key constraint".to_string(),
                ),
                // Check violation: the store-level backstop for field rules.
                Some("23514") => {
                    let message = if constraint == "ck_cargo_weight_min" {
                        "Weight must be greater than 0.".to_string()
                    } else {
                        format!("Value violates check constraint: {constraint}")
                    };
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
                }
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
