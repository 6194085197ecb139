use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the request's session.
    ///
    /// The requester is anonymous but the endpoint requires a logged in user.
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user id that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The requester is authenticated but does not own the resource.
    ///
    /// # Fields
    /// - Id of the requesting user
    /// - Description of the denied action for server-side logging
    ///
    /// Results in a 403 Forbidden response with an empty body.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with a login hint
/// - `AccessDenied` → 403 Forbidden with an empty body
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication credentials were not provided.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => StatusCode::FORBIDDEN.into_response(),
        }
    }
}
