// Axum server for the pricing-vs-sentiment dashboard
//
// HTML pages (askama) for browsers, JSON/markdown for tooling, and the four
// analysis images. Every request rebuilds its page, so an uploaded image shows
// up on the next request without a restart.

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use tower::ServiceExt;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use moka::future::Cache;

use std::sync::Arc;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::dashboard::{AssetResolver, DashboardGenerator, Page, ALL_ASSETS};
use crate::error::DashboardError;
use crate::formatters::{HtmlFormatter, MarkdownFormatter};
use crate::navigation::Section;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<DashboardGenerator>,
    pub html: Arc<HtmlFormatter>,
    /// Rendered content fragments keyed by layout, section and asset signature
    pub cache: Cache<String, String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        tracing::info!("Initializing dashboard generator...");
        let generator = Arc::new(DashboardGenerator::new(
            config.layout,
            AssetResolver::new(config.asset_dir.clone()),
        ));

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(256)
            .time_to_live(Duration::from_secs(300)) // 5 min TTL
            .build();

        Self {
            generator,
            html: Arc::new(HtmlFormatter::for_server()),
            cache,
        }
    }

    /// Build the page for a raw `section` query value.
    pub fn page_for(&self, selection: Option<&str>) -> Result<Page, AppError> {
        let section = match selection.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(Section::from_selection(s)?),
            None => None,
        };
        Ok(self.generator.generate(section))
    }

    /// HTML content fragment for a page, cached while the asset signature holds.
    pub async fn render_content(&self, page: &Page) -> String {
        let cache_key = format!(
            "{}:{}:{}",
            page.layout,
            page.selected.slug(),
            page.asset_signature()
        );

        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!("Cache hit for {}", cache_key);
            return cached;
        }

        let rendered = self.html.format_blocks(page);
        self.cache.insert(cache_key, rendered.clone()).await;
        rendered
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Dashboard page (HTML, HTMX-aware)
        .route("/", get(pages::dashboard_page))

        // Dashboard data
        .route("/api/sections", get(list_sections))
        .route("/api/page", get(get_page_json))
        .route("/api/page.md", get(get_page_markdown))

        // Analysis images
        .route("/assets/:file_name", get(get_asset))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_sections(State(state): State<AppState>) -> impl IntoResponse {
    let sections: Vec<serde_json::Value> = Section::ALL
        .iter()
        .map(|s| serde_json::json!({ "label": s.label(), "slug": s.slug() }))
        .collect();

    Json(serde_json::json!({
        "layout": state.generator.layout(),
        "default": Section::default().slug(),
        "sections": sections,
    }))
}

async fn get_page_json(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> Result<Json<Page>, AppError> {
    let page = state.page_for(query.section.as_deref())?;
    Ok(Json(page))
}

async fn get_page_markdown(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> Result<Response, AppError> {
    let page = state.page_for(query.section.as_deref())?;
    let md = MarkdownFormatter::for_server().format(&page);
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], md).into_response())
}

/// Serve one of the known analysis images; any other name is a 404.
async fn get_asset(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    request: Request,
) -> Result<Response, AppError> {
    let asset = ALL_ASSETS
        .iter()
        .find(|a| a.file_name == file_name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown asset: {}", file_name)))?;

    let path = state.generator.assets().resolve(asset.file_name);
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => Ok(response.into_response()),
        Err(never) => match never {},
    }
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Deserialize, Debug, Default)]
pub struct SectionQuery {
    pub section: Option<String>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(String),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::UnknownSection(_) => AppError::NotFound(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
