// Page handlers for HTML rendering with Askama

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use askama::Template;
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};

use crate::api_server::{AppError, AppState, SectionQuery};
use crate::dashboard::{NavItem, Page};
use crate::error::DashboardError;
use crate::formatters::html::DASHBOARD_CSS;
use crate::navigation::Layout;

// ============================================================================
// Dashboard Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub css: &'static str,
    pub nav_heading: &'static str,
    pub nav: Vec<NavItem>,
    pub hx_nav: bool,
    pub content: String,
}

/// Sidebar and content only, swapped into `#app` by HTMX navigation.
#[derive(Template)]
#[template(path = "partials/app.html")]
pub struct AppFragmentTemplate {
    pub nav_heading: &'static str,
    pub nav: Vec<NavItem>,
    pub hx_nav: bool,
    pub content: String,
}

fn nav_heading(page: &Page) -> &'static str {
    match page.layout {
        Layout::Sidebar => "Navigation",
        Layout::SinglePage => "On this page",
    }
}

/// Full document, or the `#app` fragment for HTMX navigation.
///
/// History restores need the whole document, so they never get the fragment.
/// The response varies on `HX-Request` so caches keep the two apart.
pub async fn dashboard_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    HxHistoryRestoreRequest(is_restore): HxHistoryRestoreRequest,
    Query(query): Query<SectionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = state.page_for(query.section.as_deref())?;
    let content = state.render_content(&page).await;
    // Single-page nav entries are in-page anchors, not requests
    let hx_nav = page.layout == Layout::Sidebar;

    let rendered = if is_htmx && !is_restore {
        AppFragmentTemplate {
            nav_heading: nav_heading(&page),
            nav: page.nav,
            hx_nav,
            content,
        }
        .render()
    } else {
        DashboardTemplate {
            title: page.page_title.clone(),
            css: DASHBOARD_CSS,
            nav_heading: nav_heading(&page),
            nav: page.nav,
            hx_nav,
            content,
        }
        .render()
    };

    let body = rendered.map_err(|e| DashboardError::Render(format!("template: {}", e)))?;
    Ok(([(header::VARY, "HX-Request")], Html(body)))
}
