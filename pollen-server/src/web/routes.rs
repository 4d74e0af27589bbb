//! HTTP route handlers.

use std::path::Path as FsPath;

use axum::{
    Form, Router,
    extract::{Path, State},
    handler::HandlerWithoutStateExt,
    http::Uri,
    response::Redirect,
    routing::{get, post},
};
use chrono::Local;
use serde::Deserialize;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::domain::{PostalCode, RegionPath, resolve};
use crate::provider::PollenSource;

use super::error::AppError;
use super::state::AppState;
use super::templates::*;
use super::views::{IndexView, RegionView, ZipView};

/// Create the application router.
///
/// Anything not matched by a page route is looked up in `assets_dir`.
pub fn create_router<S: PollenSource>(state: AppState<S>, assets_dir: &FsPath) -> Router {
    let assets = ServeDir::new(assets_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(index_page::<S>))
        .route("/index.html", get(index_redirect))
        .route("/health", get(health))
        .route("/region/*path", get(region_page::<S>))
        .route("/zip", post(zip_form))
        .route("/zip/:zip", get(zip_page::<S>))
        .fallback_service(assets)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn index_redirect() -> Redirect {
    Redirect::permanent("/")
}

/// Index page with every region of the current forecast.
async fn index_page<S: PollenSource>(
    State(state): State<AppState<S>>,
) -> Result<IndexTemplate, AppError> {
    let snapshot = state.cache.get().await?;
    Ok(IndexTemplate {
        view: IndexView::build(&snapshot),
    })
}

/// Three-day forecast for one region.
///
/// The path is validated before the forecast is touched.
async fn region_page<S: PollenSource>(
    State(state): State<AppState<S>>,
    Path(path): Path<String>,
) -> Result<RegionTemplate, AppError> {
    let region_path = RegionPath::parse(&path)?;

    let snapshot = state.cache.get().await?;

    let region = resolve(&snapshot.forecast, &region_path).ok_or_else(|| AppError::NotFound {
        message: format!("unknown region / partregion {region_path}"),
    })?;

    // Only missing if no fetch has ever had readable timestamps.
    let (Some(last_update), Some(next_update)) = (snapshot.last_update, snapshot.next_update)
    else {
        return Err(AppError::Internal {
            message: "forecast update times unavailable".to_string(),
        });
    };

    Ok(RegionTemplate {
        view: RegionView::build(region, last_update, next_update),
    })
}

/// Form posted from the index page.
#[derive(Debug, Deserialize)]
struct ZipForm {
    zip: String,
}

/// Redirect the postal-code form to its GET page.
async fn zip_form(Form(form): Form<ZipForm>) -> Result<Redirect, AppError> {
    let zip = PostalCode::parse(form.zip.trim())?;
    Ok(Redirect::to(&format!("/zip/{zip}")))
}

/// Seven-day forecast for one postal code. Not cached.
async fn zip_page<S: PollenSource>(
    State(state): State<AppState<S>>,
    Path(zip): Path<String>,
) -> Result<ZipTemplate, AppError> {
    let zip = PostalCode::parse(&zip)?;

    let dataset = state.cache.source().fetch_postal(&zip).await?;
    if dataset.records.is_empty() {
        return Err(AppError::NotFound {
            message: format!("no forecast for postal code {zip}"),
        });
    }

    let view = ZipView::build(&dataset, Local::now().date_naive())?;
    Ok(ZipTemplate { view })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("Could not find the page you requested: {uri}."),
    }
}
