use axum::Router;

use crate::AppState;

mod auth;
mod error;
mod handlers;
mod routes;

pub use error::AppError;
pub use auth::AuthUser;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .merge(routes::auth())
        .merge(routes::dashboard())
        .merge(routes::notifications())
        .merge(routes::documents())
        .merge(routes::search())
        .merge(routes::graph())
        .merge(routes::uploads())
        .merge(routes::views())
        .with_state(state)
}
