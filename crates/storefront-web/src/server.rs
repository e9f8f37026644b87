use crate::routes::{category_routes, health_routes, product_routes, tag_routes};
use crate::{AppState, Result, WebError};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use storefront_config::ServerConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Assemble the full application router
pub fn build_router(state: AppState, config: &ServerConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors_origins)?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .merge(category_routes())
        .merge(product_routes())
        .merge(tag_routes())
        .merge(health_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn start_server(state: AppState, config: &ServerConfig) -> Result<()> {
    let app = build_router(state, config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .map_err(WebError::Io)?;
    let addr = listener.local_addr().map_err(WebError::Io)?;

    tracing::info!("Starting storefront server on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WebError::Io)?;

    tracing::info!("Server stopped");
    Ok(())
}

fn allowed_origins(origins: &[String]) -> Result<AllowOrigin> {
    if origins.is_empty() {
        return Ok(AllowOrigin::any());
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| WebError::Config(format!("Invalid CORS origin {origin:?}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
