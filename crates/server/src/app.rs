use axum::{routing::get, Extension, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::db::ResultStore;
use crate::routes;

/// Build the HTTP router over a result store.
pub fn build_router(store: ResultStore, config: Config) -> Router {
    // The game client is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/results",
            get(routes::results::list_results).post(routes::results::create_result),
        )
        .route("/api/leaderboard", get(routes::leaderboard::get_leaderboard))
        .layer(Extension(store))
        .layer(Extension(config))
        .layer(cors)
}

/// Serve `app` on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app).await
}
