use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use server_api::{callback_specs, dashboard_layout, dispatch, summary, ApiContext};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{CallbackSpec, Component, DatasetSummary, UpdateRequest, UpdateResponse},
};
use storage::Dataset;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};

mod app_state;
mod config;
mod page;

use app_state::AppState;
use config::{load_settings, log_filter, DEFAULT_LOG_FILTER, SETTINGS_FILE};

const MAX_UPDATE_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, file_error) = load_settings();
    let (filter, filter_error) = log_filter(&settings.log_filter);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(error) = file_error {
        warn!(file = SETTINGS_FILE, %error, "ignoring unparsable settings file");
    }
    if let Some(error) = filter_error {
        warn!(
            log_filter = %settings.log_filter,
            %error,
            "invalid log filter; falling back to {DEFAULT_LOG_FILTER}"
        );
    }

    let dataset = Dataset::load(&settings.dataset_path).map_err(|error| {
        error!(
            dataset_path = %settings.dataset_path,
            error = %format!("{error:#}"),
            "failed to load launch dataset; check the path and the CSV columns"
        );
        error
    })?;
    info!(
        dataset_path = %settings.dataset_path,
        records = dataset.len(),
        sites = dataset.sites().len(),
        min_payload_kg = dataset.min_payload_kg(),
        max_payload_kg = dataset.max_payload_kg(),
        "launch dataset loaded"
    );

    let state = AppState {
        api: ApiContext::new(dataset),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "dashboard listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/layout", get(http_layout))
        .route("/api/callbacks", get(http_callbacks))
        .route("/api/summary", get(http_summary))
        .route(
            "/api/update",
            post(http_update).layer(RequestBodyLimitLayer::new(MAX_UPDATE_BODY_BYTES)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(page::DASHBOARD_HTML)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_layout(State(state): State<Arc<AppState>>) -> Json<Component> {
    Json(dashboard_layout(&state.api))
}

async fn http_callbacks() -> Json<Vec<CallbackSpec>> {
    Json(callback_specs())
}

async fn http_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(summary(&state.api))
}

async fn http_update(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>, (StatusCode, Json<ApiError>)> {
    dispatch(&state.api, &req)
        .map(Json)
        .map_err(|e| (status_for(&e), Json(e)))
}

fn status_for(error: &ApiError) -> StatusCode {
    match error.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
