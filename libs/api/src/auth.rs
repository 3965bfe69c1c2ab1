use axum::http::{self, HeaderMap};
use repository::session::SessionRepository;
use tracing::error;

use crate::{response::ApiResponse, ApiError};

/// The raw session token, as handed out by the login service.
pub(crate) fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
}

/// Resolves the request's session to a username, if it has one.
pub(crate) fn session_user(
    headers: &HeaderMap,
    session: &SessionRepository,
) -> ApiResponse<Option<String>> {
    let Some(token) = session_token(headers) else {
        return Ok(None);
    };

    session.username(token).map_err(|e| {
        error!("{:?}", e);
        ApiError::ServerError("failed to read session".to_string())
    })
}

/// An anonymous request is bounced to the login page, keeping the
/// original path as the return target.
pub(crate) fn require_user(
    headers: &HeaderMap,
    session: &SessionRepository,
    next: &str,
) -> ApiResponse<String> {
    match session_user(headers, session)? {
        Some(name) => Ok(name),
        None => Err(ApiError::LoginRequired(next.to_string())),
    }
}
