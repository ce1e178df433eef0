use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/:slug", get(handlers::get_article))
        .route("/api/search", get(handlers::search))
        .route("/api/engagement/:id", post(handlers::record_engagement))
        .route("/api/admin/articles", post(handlers::create_article))
        .route("/api/admin/articles/:id", delete(handlers::delete_article))
        .route("/api/admin/articles/:id/archive", post(handlers::toggle_archive))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState) -> ni_core::Result<()> {
    let addr = state.config.listen_addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 Serving NewsInsight API on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use ni_core::{Article, Error, Result};
}
