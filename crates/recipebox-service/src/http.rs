use async_trait::async_trait;
use recipebox_core::recipe::{NewRecipe, Recipe, RecipeId};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::{RecipeService, ServiceError};

/// Async HTTP client implementation of RecipeService.
/// Talks to any server exposing the `/recipes` resource.
pub struct HttpService {
    base_url: String,
    client: Client,
}

impl HttpService {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `/recipes/{id}` with the id as a single escaped path segment, so
    /// `/`, `?` and `#` inside a text id stay part of the id.
    fn recipe_url(&self, id: &RecipeId) -> Result<Url, ServiceError> {
        let mut url = Url::parse(&self.url("/recipes")).map_err(|e| {
            ServiceError::Internal(format!("invalid base url {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ServiceError::Internal(format!("base url cannot take a path: {}", self.base_url))
            })?
            .push(&id.to_string());
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(connection_error)?;
        handle_response(resp).await
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(connection_error)?;
        handle_response(resp).await
    }

    async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ServiceError> {
        let resp = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(connection_error)?;
        handle_response(resp).await
    }

    async fn delete_req(&self, url: Url) -> Result<(), ServiceError> {
        let resp = self
            .client
            .delete(url.clone())
            .send()
            .await
            .map_err(connection_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(parse_error_with_status(status, resp).await);
        }
        // The confirmation body is informational; servers may also send 204.
        let body = resp.text().await.unwrap_or_default();
        debug!("delete {url} confirmed: {body}");
        Ok(())
    }
}

fn connection_error(e: reqwest::Error) -> ServiceError {
    ServiceError::Internal(format!("connection failed: {e}"))
}

async fn handle_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::Internal(format!("json decode: {e}")))
    } else {
        Err(parse_error_with_status(status, resp).await)
    }
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> ServiceError {
    let body = resp.text().await.unwrap_or_default();
    let msg = error_message(status, &body);

    if status == StatusCode::NOT_FOUND {
        ServiceError::NotFound(msg)
    } else if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
        ServiceError::InvalidInput(msg)
    } else {
        ServiceError::Http {
            status: status.as_u16(),
            message: msg,
        }
    }
}

/// Pull a human message out of an error body: `{"error": ..}` or
/// `{"detail": ..}` when JSON, the raw text otherwise, and the status
/// reason phrase when the body is empty.
fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v["error"]
                .as_str()
                .or_else(|| v["detail"].as_str())
                .map(String::from)
        });
    match from_json {
        Some(msg) => msg,
        None if !body.trim().is_empty() => body.to_string(),
        None => status.canonical_reason().unwrap_or("unknown status").to_string(),
    }
}

#[async_trait]
impl RecipeService for HttpService {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ServiceError> {
        self.get_json("/recipes").await
    }

    async fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe, ServiceError> {
        self.post_json("/recipes", input).await
    }

    async fn update_recipe(
        &self,
        id: &RecipeId,
        recipe: &Recipe,
    ) -> Result<Recipe, ServiceError> {
        self.put_json(self.recipe_url(id)?, recipe).await
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), ServiceError> {
        self.delete_req(self.recipe_url(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let svc = HttpService::new("http://127.0.0.1:8000/");
        assert_eq!(svc.base_url(), "http://127.0.0.1:8000");
        assert_eq!(svc.url("/recipes"), "http://127.0.0.1:8000/recipes");
    }

    #[test]
    fn recipe_url_escapes_reserved_characters() {
        let svc = HttpService::new("http://127.0.0.1:8000/");
        let url = |id: RecipeId| svc.recipe_url(&id).unwrap().to_string();
        assert_eq!(url(RecipeId::Int(7)), "http://127.0.0.1:8000/recipes/7");
        assert_eq!(url("a/b".into()), "http://127.0.0.1:8000/recipes/a%2Fb");
        assert_eq!(url("x#y".into()), "http://127.0.0.1:8000/recipes/x%23y");
        assert_eq!(url("q?z=1".into()), "http://127.0.0.1:8000/recipes/q%3Fz=1");
    }

    #[test]
    fn recipe_url_keeps_base_path() {
        let svc = HttpService::new("http://example.test/api");
        let url = svc.recipe_url(&RecipeId::Int(3)).unwrap();
        assert_eq!(url.as_str(), "http://example.test/api/recipes/3");
    }

    #[test]
    fn error_message_prefers_json_fields() {
        let msg = error_message(StatusCode::NOT_FOUND, r#"{"error":"recipe 3 not found"}"#);
        assert_eq!(msg, "recipe 3 not found");
        let msg = error_message(StatusCode::NOT_FOUND, r#"{"detail":"Recipe not found"}"#);
        assert_eq!(msg, "Recipe not found");
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
        assert_eq!(error_message(StatusCode::INTERNAL_SERVER_ERROR, ""), "Internal Server Error");
    }

    #[test]
    fn http_error_display_carries_status() {
        let err = ServiceError::Http {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "503 - Service Unavailable");
        assert_eq!(err.status(), Some(503));
    }
}
