use axum::Router;
use recipebox_core::recipe::NewRecipe;
use recipebox_service::LocalService;
use tokio::net::TcpListener;

/// Build a test router over an empty in-memory store.
pub fn test_router() -> Router {
    crate::app(LocalService::new())
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server() -> TestServer {
    spawn_test_server_with(Vec::new()).await
}

/// Same as `spawn_test_server`, preloaded with `recipes` (ids 1, 2, ...).
pub async fn spawn_test_server_with(recipes: Vec<NewRecipe>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = crate::app(LocalService::with_recipes(recipes));
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
