//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only renders and serves the UI. Leptos SSR handles every app
//! route; the compiled bundle is served from `/pkg` and static images from
//! `/assets`. No route accepts registration data.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Full site: Leptos SSR routes plus static files and the health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());
    let assets_dir = config.assets_dir.clone().unwrap_or_else(|| site_root.join("assets"));
    tracing::info!(
        site_root = %site_root.display(),
        assets_dir = %assets_dir.display(),
        "serving leptos app"
    );

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(static_routes(&pkg_dir, &assets_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Health probe and static file services; independent of Leptos options.
pub fn static_routes(pkg_dir: &Path, assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .nest_service("/assets", ServeDir::new(assets_dir))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
