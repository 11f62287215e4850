use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::app::auth::AuthService;
use crate::app::dashboard;
use crate::app::documents::{DocumentService, DocumentStats};
use crate::app::graph::{GraphService, GraphStats, GraphView, KindFilter, NodeDetail};
use crate::app::notifications::{self, NotificationCounts, NotificationService};
use crate::app::search::SearchService;
use crate::app::uploads::{IncomingFile, MetadataUpdate, UpdateOutcome, UploadService};
use crate::app::views::{self, ViewContent};
use crate::domain::dashboard::{Activity, NavItem, StatCard};
use crate::domain::document::{Category, CategoryFilter, Document, Feedback, SearchResult};
use crate::domain::notification::{FilterMode, Notification};
use crate::domain::upload::FileUpload;
use crate::domain::user::{NewUser, User};
use crate::http::{AppError, AuthUser};
use crate::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

fn auth_service(state: &AppState) -> AuthService {
    AuthService::new(
        state.storage.clone(),
        state.session.clone(),
        state.simulated_latency,
    )
}

fn upload_service(state: &AppState) -> UploadService {
    UploadService::new(
        state.store.clone(),
        state.upload_tasks.clone(),
        state.upload_tick,
        state.upload_progress_step,
        state.upload_max_bytes,
    )
}

fn parse_category(value: Option<String>) -> Result<CategoryFilter, AppError> {
    match value {
        None => Ok(CategoryFilter::All),
        Some(value) => CategoryFilter::parse(&value)
            .ok_or_else(|| AppError::bad_request("invalid category")),
    }
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = state.storage.ping().await.is_ok();
    let status = if storage { "ok" } else { "degraded" };

    Json(HealthResponse { status })
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    if payload.email.trim().is_empty() || payload.password.trim().is_empty() {
        return Err(AppError::bad_request("email and password are required"));
    }

    let user = auth_service(&state)
        .login(payload.email.trim(), &payload.password)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, "failed to login");
            AppError::internal("failed to login")
        })?;

    Ok(Json(user))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<User>, AppError> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(AppError::bad_request("name and email are required"));
    }
    if payload.department.trim().is_empty() {
        return Err(AppError::bad_request("department is required"));
    }

    let user = auth_service(&state).signup(payload).await.map_err(|err| {
        tracing::error!(error = ?err, "failed to sign up");
        AppError::internal("failed to sign up")
    })?;

    Ok(Json(user))
}

pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    auth_service(&state).logout().await.map_err(|err| {
        tracing::error!(error = ?err, "failed to clear session record");
        AppError::internal("failed to logout")
    })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_current_user(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub headline: String,
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub activities: Vec<Activity>,
}

pub async fn get_dashboard(auth: AuthUser) -> Json<DashboardResponse> {
    let greeting = dashboard::greeting(&auth.user);
    let content = dashboard::resolve(Some(auth.user.role));

    Json(DashboardResponse {
        headline: greeting.headline,
        subtitle: greeting.subtitle,
        stats: content.stats,
        activities: content.activities,
    })
}

pub async fn get_navigation(auth: AuthUser) -> Json<ListResponse<NavItem>> {
    Json(ListResponse {
        items: dashboard::navigation(Some(auth.user.role)),
    })
}

#[derive(Deserialize)]
pub struct NotificationQuery {
    pub filter: Option<String>,
}

#[derive(Serialize)]
pub struct NotificationItem {
    #[serde(flatten)]
    pub notification: Notification,
    pub age: String,
}

#[derive(Serialize)]
pub struct NotificationListResponse {
    pub items: Vec<NotificationItem>,
    pub unread_count: usize,
    pub badge: String,
    pub counts: NotificationCounts,
}

pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<NotificationListResponse>, AppError> {
    let mode = match query.filter.as_deref() {
        None => FilterMode::All,
        Some(value) => FilterMode::parse(value)
            .ok_or_else(|| AppError::bad_request("filter must be one of all, unread, high, critical"))?,
    };

    let service = NotificationService::new(state.store.clone());
    let role = auth.user.role;
    let counts = service.counts(role);
    let now = OffsetDateTime::now_utc();
    let items = service
        .list(role, mode)
        .into_iter()
        .map(|notification| NotificationItem {
            age: notifications::relative_label(notification.timestamp, now),
            notification,
        })
        .collect();

    Ok(Json(NotificationListResponse {
        items,
        unread_count: counts.unread,
        badge: notifications::badge_label(counts.unread),
        counts,
    }))
}

#[derive(Serialize)]
pub struct NotificationCountsResponse {
    #[serde(flatten)]
    pub counts: NotificationCounts,
    pub badge: String,
}

pub async fn notification_counts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Json<NotificationCountsResponse> {
    let counts = NotificationService::new(state.store.clone()).counts(auth.user.role);
    Json(NotificationCountsResponse {
        badge: notifications::badge_label(counts.unread),
        counts,
    })
}

pub async fn mark_notification_read(
    _auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if NotificationService::new(state.store.clone()).mark_read(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("notification not found"))
    }
}

pub async fn mark_notification_unread(
    _auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if NotificationService::new(state.store.clone()).mark_unread(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("notification not found"))
    }
}

pub async fn delete_notification(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if NotificationService::new(state.store.clone()).delete(&id) {
        tracing::info!(notification_id = %id, user_id = %auth.user.id, "notification deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("notification not found"))
    }
}

#[derive(Serialize)]
pub struct MarkAllResponse {
    pub updated: usize,
}

pub async fn mark_all_notifications_read(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Json<MarkAllResponse> {
    let updated = NotificationService::new(state.store.clone()).mark_all_read();
    Json(MarkAllResponse { updated })
}

#[derive(Deserialize)]
pub struct DocumentQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

pub async fn list_documents(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<ListResponse<Document>>, AppError> {
    let category = parse_category(query.category)?;
    let term = query.q.unwrap_or_default();

    let items = DocumentService::new(state.store.clone()).search(&term, category);
    Ok(Json(ListResponse { items }))
}

pub async fn document_stats(_auth: AuthUser, State(state): State<AppState>) -> Json<DocumentStats> {
    Json(DocumentService::new(state.store.clone()).stats())
}

pub async fn get_document(
    _auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Document>, AppError> {
    DocumentService::new(state.store.clone())
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("document not found"))
}

/// Always 204: deleting a document that is already gone is not an error.
pub async fn delete_document(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> StatusCode {
    if DocumentService::new(state.store.clone()).delete(&id) {
        tracing::info!(document_id = %id, user_id = %auth.user.id, "document deleted");
    }
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub items: Vec<SearchResult>,
}

pub async fn search(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let category = parse_category(query.category)?;
    let query = query.q.unwrap_or_default();

    let service = SearchService::new(state.store.clone(), state.simulated_latency);
    let items = service.search(&query, category).await;

    Ok(Json(SearchResponse { query, items }))
}

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub feedback: Feedback,
}

pub async fn search_feedback(
    _auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<FeedbackRequest>,
) -> Result<Json<SearchResult>, AppError> {
    SearchService::new(state.store.clone(), state.simulated_latency)
        .feedback(&id, payload.feedback)
        .map(Json)
        .ok_or_else(|| AppError::not_found("search result not found"))
}

#[derive(Deserialize)]
pub struct GraphQuery {
    pub q: Option<String>,
    pub kind: Option<String>,
}

pub async fn get_graph(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<GraphQuery>,
) -> Result<Json<GraphView>, AppError> {
    let kind = match query.kind.as_deref() {
        None => KindFilter::All,
        Some(value) => {
            KindFilter::parse(value).ok_or_else(|| AppError::bad_request("invalid node kind"))?
        }
    };
    let term = query.q.unwrap_or_default();

    Ok(Json(GraphService::new(state.store.clone()).view(&term, kind)))
}

pub async fn graph_stats(_auth: AuthUser, State(state): State<AppState>) -> Json<GraphStats> {
    Json(GraphService::new(state.store.clone()).stats())
}

pub async fn get_graph_node(
    _auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<NodeDetail>, AppError> {
    GraphService::new(state.store.clone())
        .node(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("node not found"))
}

#[derive(Deserialize)]
pub struct UploadFile {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Deserialize)]
pub struct UploadRequest {
    pub files: Vec<UploadFile>,
}

pub async fn create_uploads(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<UploadRequest>,
) -> Result<Json<ListResponse<FileUpload>>, AppError> {
    if payload.files.is_empty() {
        return Err(AppError::bad_request("at least one file is required"));
    }
    if payload.files.iter().any(|file| file.file_name.trim().is_empty()) {
        return Err(AppError::bad_request("file_name must not be empty"));
    }

    let files = payload
        .files
        .into_iter()
        .map(|file| IncomingFile {
            file_name: file.file_name,
            size_bytes: file.size_bytes,
        })
        .collect();
    let items = upload_service(&state).register(files);
    tracing::info!(user_id = %auth.user.id, count = items.len(), "uploads registered");

    Ok(Json(ListResponse { items }))
}

pub async fn list_uploads(_auth: AuthUser, State(state): State<AppState>) -> Json<ListResponse<FileUpload>> {
    Json(ListResponse {
        items: upload_service(&state).list(),
    })
}

pub async fn get_upload(
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<FileUpload>, AppError> {
    upload_service(&state)
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("upload not found"))
}

fn edit_response(outcome: UpdateOutcome) -> Result<Json<FileUpload>, AppError> {
    match outcome {
        UpdateOutcome::Updated(upload) => Ok(Json(upload)),
        UpdateOutcome::NotFound => Err(AppError::not_found("upload not found")),
        UpdateOutcome::NotEditable(_) => Err(AppError::conflict(
            "upload metadata is editable only after a successful upload",
        )),
    }
}

#[derive(Deserialize)]
pub struct UpdateUploadRequest {
    pub title: Option<String>,
    pub category: Option<Category>,
}

pub async fn update_upload(
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUploadRequest>,
) -> Result<Json<FileUpload>, AppError> {
    if payload.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let update = MetadataUpdate {
        title: payload.title,
        category: payload.category,
    };
    edit_response(upload_service(&state).update_metadata(id, update))
}

#[derive(Deserialize)]
pub struct TagRequest {
    pub tag: String,
}

pub async fn add_upload_tag(
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<TagRequest>,
) -> Result<Json<FileUpload>, AppError> {
    edit_response(upload_service(&state).add_tag(id, &payload.tag))
}

pub async fn remove_upload_tag(
    _auth: AuthUser,
    Path((id, index)): Path<(Uuid, usize)>,
    State(state): State<AppState>,
) -> Result<Json<FileUpload>, AppError> {
    edit_response(upload_service(&state).remove_tag(id, index))
}

pub async fn remove_upload(
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if upload_service(&state).remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("upload not found"))
    }
}

pub async fn save_uploads(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Json<ListResponse<Document>> {
    Json(ListResponse {
        items: upload_service(&state).save_all(&auth.user.name),
    })
}

pub async fn get_view(
    auth: Option<AuthUser>,
    Path(id): Path<String>,
) -> Json<ViewContent> {
    let user = auth.map(|auth| auth.user);
    Json(views::select(&id, user.as_ref()))
}
