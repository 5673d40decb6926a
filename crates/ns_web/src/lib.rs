use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/news", get(handlers::get_news))
        .route("/api/session/search", post(handlers::search_session))
        .route("/api/session/page", get(handlers::current_page))
        .route("/api/session/next", post(handlers::next_page))
        .route("/api/session/previous", post(handlers::previous_page))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> ns_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use ns_core::{Article, Result, Error};
    pub use crate::{create_app, serve, AppState};
}
