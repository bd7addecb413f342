pub mod recipes;

use std::sync::Arc;

use axum::Router;
use recipebox_service::LocalService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub struct InnerAppState {
    pub service: LocalService,
}

pub type AppState = Arc<InnerAppState>;

/// The recipe routes, open to any origin so a browser front-end can call them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(recipes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
