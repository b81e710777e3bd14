//! Repository error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::ApiResponse;
use crate::domain::RepositoryError;

/// HTTP-facing wrapper around `RepositoryError`.
///
/// Handlers return `Result<_, ApiError>` and use `?`; the status code is
/// derived from the error kind. Store details stay in the server log, the
/// client only sees the top-level message.
pub struct ApiError(pub RepositoryError);

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RepositoryError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RepositoryError::AlreadyExists { .. } => StatusCode::CONFLICT,
            RepositoryError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            warn!(error = %self.0, status = %status, "request rejected");
        }
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        let resp = ApiError(RepositoryError::invalid_argument("bad offset")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError(RepositoryError::not_found("organization", "x")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError(RepositoryError::closed("organization", "get")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
