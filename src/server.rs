//! Axum server that renders the site and serves its assets.

use axum::{Router, routing::get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower::ServiceBuilder;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::core::config::Config;
use crate::core::error::ServerError;

/// Liveness probe for load balancers and container orchestrators
pub async fn healthz() -> &'static str {
    "ok"
}

/// Routes that live outside the Leptos app
pub fn health_router() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Build the full application router for `leptos_options`
pub fn app_router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    // Serves .br and .gz variants when cargo-leptos produced them
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    Router::new()
        .merge(health_router())
        .merge(leptos_router)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CompressionLayer::new()
                    .br(true)
                    .gzip(true)
                    .quality(CompressionLevel::Best),
            ),
        )
}

/// Read configuration, bind and serve until the process is stopped
pub async fn run(config: Config) -> Result<(), ServerError> {
    // Reads [package.metadata.leptos], overridable via LEPTOS_* env vars
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = config.bind_addr(leptos_options.site_addr);

    let app = app_router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(
        addr_override = config.has_addr_override(),
        "listening on http://{}",
        addr
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
