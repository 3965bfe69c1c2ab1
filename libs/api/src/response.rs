use std::sync::OnceLock;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde_json::Value;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::LoginRequired(next) => {
                // The original path survives the round trip to the login
                // page.
                let location = format!("/login?next={}", next);
                (StatusCode::SEE_OTHER, [(header::LOCATION, location)])
                    .into_response()
            }
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            ApiError::PermissionDenied(message) => {
                (StatusCode::FORBIDDEN, message).into_response()
            }
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

fn error_codes() -> &'static Value {
    static CODES: OnceLock<Value> = OnceLock::new();
    CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json")).unwrap()
    })
}

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);

            let message = error_codes()[error_code]
                .as_str()
                .unwrap_or("unexpected error")
                .to_string();

            match error_code.as_bytes().first() {
                Some(&b'4') => ApiError::ClientError(message),
                _ => ApiError::ServerError(message),
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        // Arrange
        let cases = [
            (
                ApiError::ClientError("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::NotFound("missing".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::PermissionDenied("no".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::ServerError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            // Act
            let response = error.into_response();

            // Assert
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_login_required_redirects_to_login() {
        // Arrange
        let error = ApiError::LoginRequired("/posts".to_string());

        // Act
        let response = error.into_response();

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/login?next=/posts"
        );
    }

    #[test]
    fn test_error_code_table_parses() {
        // Arrange / Act
        let codes = error_codes();

        // Assert
        let table = codes.as_object().unwrap();
        assert!(!table.is_empty());
        assert!(table.values().all(|v| v.is_string()));
    }
}
