pub mod handlers;
pub mod types;

use crate::{Result, analysis::Analyzer, config::Config};
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let analyzer = Analyzer::from_config(&config.llm, &config.analysis);
    info!("Analyzer ready with model {}", analyzer.model());

    let app_state = AppState {
        analyzer: Arc::new(analyzer),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Full application router: routes, JSON 404/405 envelopes, tracing and CORS.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::root).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/analyze",
            post(handlers::analyze).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Any origin, with credentials. Origin and request headers are mirrored
/// because wildcards cannot be combined with credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
}
