//! HTTP routes: form pages, charts page, static files and the JSON API.

use crate::app::AppState;
use crate::error::WebResult;
use crate::pages::{charts_page, index_page};
use crate::service::Submission;
use axum::{
    extract::{Form, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Body of a form or JSON submission.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Free text, one sentence per line.
    #[serde(default)]
    pub text: String,
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers
    pub status: &'static str,
    /// Configured engine
    pub engine: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// Create the application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    let router = Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/charts", get(show_charts))
        .route("/health", get(health))
        .route("/api/analyze", post(analyze_json));

    // axum cannot nest at the root; files then back every unmatched path.
    let router = if state.static_url_prefix == "/" {
        router.fallback_service(static_files)
    } else {
        router.nest_service(&state.static_url_prefix, static_files)
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn show_form() -> Html<String> {
    Html(index_page("", &[], None))
}

/// A missing or unreadable form counts as an empty submission.
async fn submit_form(
    State(state): State<AppState>,
    form: Option<Form<AnalyzeRequest>>,
) -> WebResult<Html<String>> {
    let request = form.map(|Form(request)| request).unwrap_or_default();
    let submission = state.service.analyze(&request.text).await?;

    let charts = submission.charts.as_ref().map(|_| &state.chart_links);
    Ok(Html(index_page(&request.text, &submission.results, charts)))
}

async fn show_charts(State(state): State<AppState>) -> Html<String> {
    Html(charts_page(&state.chart_links))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        engine: state.service.engine(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> WebResult<Json<Submission>> {
    let submission = state.service.analyze(&request.text).await?;
    Ok(Json(submission))
}
