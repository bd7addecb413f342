mod routes;
pub mod seed;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use recipebox_service::LocalService;
use tokio::net::TcpListener;
use tracing::info;

/// Router serving `service` under `/recipes`.
pub fn app(service: LocalService) -> Router {
    routes::build_router(Arc::new(routes::InnerAppState { service }))
}

pub async fn serve(listener: TcpListener, service: LocalService) -> Result<()> {
    let router = app(service);
    info!("recipebox-server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
