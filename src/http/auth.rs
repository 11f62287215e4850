use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::user::User;
use crate::http::AppError;
use crate::AppState;

/// The session user. Rejects with 401 when nobody is signed in.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = state
            .session
            .current()
            .ok_or_else(|| AppError::unauthorized("not authenticated"))?;
        Ok(AuthUser { user })
    }
}
