//! HTTP routes.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /version` | server name and version |
//! | `POST /create` | create an entry, return the table body |
//! | `GET /read` | return the table body |
//! | `POST /read` | return one row in edit mode |
//! | `POST /update` | change an entry |
//! | `POST /delete` | deactivate an entry |
//! | `GET /save` | write an archive snapshot |
//!
//! Request bodies may be URL-encoded forms or JSON. Static assets are served
//! from the root directory. Everything else, including a known path with the
//! wrong method, gets the plain-text 404 page.

use std::path::Path;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Router,
};
use log::{error, info, warn};
use lop_core::{Acknowledgement, EditRow, LopError};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    forms::{CreateForm, FormOrJson, IdForm, UpdateForm},
    state::{AppState, SERVER_NAME},
};

/// Builds the application router over `state`, serving static assets from
/// `root_dir`.
pub fn router(state: AppState, root_dir: &Path) -> Router {
    Router::new()
        .route("/version", with_fallback(get(version)))
        .route("/create", with_fallback(post(create)))
        .route("/read", with_fallback(get(read_all).post(read_one)))
        .route("/update", with_fallback(post(update)))
        .route("/delete", with_fallback(post(delete)))
        .route("/save", with_fallback(get(save)))
        .route_service("/", ServeFile::new(root_dir.join("html/index.html")))
        .route_service(
            "/favicon.ico",
            ServeFile::new(root_dir.join("image/cc-icon.ico")),
        )
        .nest_service("/style", ServeDir::new(root_dir.join("style")))
        .nest_service("/script", ServeDir::new(root_dir.join("script")))
        .fallback(not_found)
        .with_state(state)
}

fn with_fallback(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(not_found)
}

/// Maps core errors onto HTTP responses.
pub struct ApiError(LopError);

impl From<LopError> for ApiError {
    fn from(error: LopError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LopError::EntryNotFound { .. } => StatusCode::NOT_FOUND,
            LopError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            LopError::FileSystem { .. }
            | LopError::XdgDirectory(_)
            | LopError::Serialization { .. }
            | LopError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            info!("Request rejected: {}", self.0);
        }
        (status, self.0.to_string()).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

async fn version(State(state): State<AppState>) -> &'static str {
    info!("GET /version: {}", state.next_request());
    SERVER_NAME
}

async fn create(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<CreateForm>,
) -> ApiResult<Html<String>> {
    info!("POST /create: {}", state.next_request());
    let rows = state.list.create(&form.into_params()?).await?;
    Ok(Html(rows.to_string()))
}

async fn read_all(State(state): State<AppState>) -> Html<String> {
    let request = state.next_request();
    let rows = state.list.read_all().await;
    info!("GET /read: {request}, {} active", rows.len());
    Html(rows.to_string())
}

async fn read_one(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<IdForm>,
) -> ApiResult<Html<String>> {
    info!("POST /read: {}, id {:?}", state.next_request(), form.id);
    let entry = state.list.read_one(&form.into_params()?).await?;
    Ok(Html(EditRow(&entry).to_string()))
}

async fn update(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<UpdateForm>,
) -> ApiResult<String> {
    info!("POST /update: {}, id {:?}", state.next_request(), form.id);
    // An unknown entry is reported before an invalid date
    state.list.read_one(&form.entry_id()?).await?;
    let entry = state.list.update(&form.into_params()?).await?;
    Ok(Acknowledgement::Changed { id: entry.id() }.to_string())
}

async fn delete(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<IdForm>,
) -> ApiResult<String> {
    info!("POST /delete: {}, id {:?}", state.next_request(), form.id);
    let params = form.into_params()?;
    state.list.delete(&params).await?;
    Ok(Acknowledgement::Deleted { id: params.id }.to_string())
}

async fn save(State(state): State<AppState>) -> ApiResult<String> {
    info!("GET /save: {}", state.next_request());
    let path = state.list.save_snapshot().await?;
    info!("Snapshot written to {}", path.display());
    Ok(Acknowledgement::Saved.to_string())
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, String) {
    warn!("404 {uri}: {}", state.next_request());
    (
        StatusCode::NOT_FOUND,
        format!("{uri}\n\nThe web server \"{SERVER_NAME}\" cannot handle this request!"),
    )
}
