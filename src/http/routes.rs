use axum::{routing::delete, routing::get, routing::post, Router};

use crate::AppState;
use crate::http::handlers;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn auth() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/me", get(handlers::get_current_user))
}

pub fn dashboard() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/navigation", get(handlers::get_navigation))
}

pub fn notifications() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::list_notifications))
        .route("/notifications/counts", get(handlers::notification_counts))
        .route(
            "/notifications/read-all",
            post(handlers::mark_all_notifications_read),
        )
        .route(
            "/notifications/:id/read",
            post(handlers::mark_notification_read),
        )
        .route(
            "/notifications/:id/unread",
            post(handlers::mark_notification_unread),
        )
        .route("/notifications/:id", delete(handlers::delete_notification))
}

pub fn documents() -> Router<AppState> {
    Router::new()
        .route("/documents", get(handlers::list_documents))
        .route("/documents/stats", get(handlers::document_stats))
        .route(
            "/documents/:id",
            get(handlers::get_document).delete(handlers::delete_document),
        )
}

pub fn search() -> Router<AppState> {
    Router::new()
        .route("/search", get(handlers::search))
        .route("/search/:id/feedback", post(handlers::search_feedback))
}

pub fn graph() -> Router<AppState> {
    Router::new()
        .route("/graph", get(handlers::get_graph))
        .route("/graph/stats", get(handlers::graph_stats))
        .route("/graph/nodes/:id", get(handlers::get_graph_node))
}

pub fn uploads() -> Router<AppState> {
    Router::new()
        .route(
            "/uploads",
            get(handlers::list_uploads).post(handlers::create_uploads),
        )
        .route("/uploads/save", post(handlers::save_uploads))
        .route(
            "/uploads/:id",
            get(handlers::get_upload)
                .patch(handlers::update_upload)
                .delete(handlers::remove_upload),
        )
        .route("/uploads/:id/tags", post(handlers::add_upload_tag))
        .route(
            "/uploads/:id/tags/:index",
            delete(handlers::remove_upload_tag),
        )
}

pub fn views() -> Router<AppState> {
    Router::new().route("/views/:id", get(handlers::get_view))
}
