use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::StreamConfig;
use crate::engine::LeadEngine;
use crate::lead::{Lead, LeadId};
use crate::metrics::Metrics;
use crate::query::{LeadView, QueryError, Tab};
use crate::summary::DashboardSummary;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<LeadEngine>,
    /// Page size used when `/leads` is called without `page_size`.
    pub page_size: usize,
    /// `/metrics` is mounted only when telemetry is installed.
    pub metrics: Option<Metrics>,
}

impl AppState {
    pub fn from_config(cfg: &StreamConfig) -> Self {
        Self {
            engine: Arc::new(LeadEngine::from_config(cfg)),
            page_size: cfg.page_size,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

pub fn router(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    let api = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/leads", get(list_leads))
        .route("/leads/{id}", get(get_lead))
        .route("/summary", get(summary))
        .route("/ingest/tick", post(ingest_tick))
        .route(
            "/selection",
            get(get_selection).put(put_selection).delete(clear_selection),
        )
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    match metrics {
        Some(m) => api.merge(m.router()),
        None => api,
    }
}

/// Handler errors rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

// Extractor failures use the same JSON body as handler errors.
impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct LeadsQuery {
    #[serde(default)]
    tab: Option<String>,
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    page: Option<usize>,
    #[serde(default)]
    page_size: Option<usize>,
}

async fn list_leads(
    State(state): State<AppState>,
    params: Result<Query<LeadsQuery>, QueryRejection>,
) -> Result<Json<LeadView>, ApiError> {
    let Query(params) = params?;
    let tab = match params.tab.as_deref() {
        Some(t) => t.parse::<Tab>()?,
        None => Tab::default(),
    };
    let search = params.q.unwrap_or_default();
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.page_size);

    let view = state.engine.query(tab, &search, page, page_size)?;
    Ok(Json(view))
}

async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lead>, ApiError> {
    let id = LeadId::new(id);
    state
        .engine
        .lead(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("lead '{id}' not in stream")))
}

async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.engine.metrics())
}

#[derive(Serialize)]
struct TickResp {
    id: LeadId,
    len: usize,
}

async fn ingest_tick(State(state): State<AppState>) -> Json<TickResp> {
    let id = state.engine.ingest_tick();
    tracing::info!(target: "api", %id, "manual ingest tick");
    Json(TickResp {
        id,
        len: state.engine.len(),
    })
}

async fn get_selection(State(state): State<AppState>) -> Json<Option<Lead>> {
    Json(state.engine.current_selection())
}

#[derive(Deserialize)]
struct SelectReq {
    id: LeadId,
}

async fn put_selection(
    State(state): State<AppState>,
    body: Result<Json<SelectReq>, JsonRejection>,
) -> Result<Json<Lead>, ApiError> {
    let Json(body) = body?;
    state
        .engine
        .select(&body.id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("lead '{}' not in stream", body.id)))
}

async fn clear_selection(State(state): State<AppState>) -> StatusCode {
    state.engine.clear_selection();
    StatusCode::NO_CONTENT
}
