use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use photo_core::{ApiResponse, CalcError};

/// Application-level error type for HTTP handlers.
///
/// Field validation failures are not errors at this level: they are answered
/// with `200 {"error": ...}` by the handlers. Only malformed requests and
/// internal failures become an `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A calculator error that is not a field validation failure.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// The route exists but not for this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed | AppError::Calc(CalcError::MissingAction) => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::Calc(err @ CalcError::UnknownOperation { .. }) => (StatusCode::BAD_REQUEST, err.user_message()),
            AppError::Calc(err) => {
                tracing::error!(error = %err, code = err.error_code(), "Internal calculator error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Calc(CalcError::unknown_operation("nope")).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Calc(CalcError::MissingAction).into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(AppError::MethodNotAllowed.into_response().status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            AppError::Calc(CalcError::Internal {
                message: "boom".to_string()
            })
            .into_response()
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
