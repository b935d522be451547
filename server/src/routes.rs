//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the portal. Every `/api/*` call goes from the
//! browser straight to the banking backend, so this router carries the
//! Leptos SSR routes, the compiled `/pkg` assets and a health check.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Leptos SSR app plus static assets.
///
/// # Errors
///
/// Returns `ServerError::Leptos` if the Leptos configuration cannot be
/// loaded.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(bankabc_client::app::App);

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || bankabc_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
