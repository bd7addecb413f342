use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use recipebox_core::recipe::{NewRecipe, Recipe, RecipeId};
use recipebox_service::{RecipeService, ServiceError};
use serde_json::{json, Value};
use tracing::{info, warn};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/{id}", put(update_recipe).delete(delete_recipe))
}

async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let recipes = state.service.list_recipes().await.map_err(to_error)?;
    Ok(Json(json!(recipes)))
}

async fn create_recipe(
    State(state): State<AppState>,
    Json(input): Json<NewRecipe>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let recipe = state.service.create_recipe(&input).await.map_err(to_error)?;
    info!("created recipe {} ({})", recipe.id, recipe.name);
    Ok((StatusCode::CREATED, Json(json!(recipe))))
}

async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Recipe>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let id = RecipeId::from_segment(&id);
    let recipe = state.service.update_recipe(&id, &input).await.map_err(to_error)?;
    info!("updated recipe {id}");
    Ok(Json(json!(recipe)))
}

async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let id = RecipeId::from_segment(&id);
    state.service.delete_recipe(&id).await.map_err(to_error)?;
    info!("deleted recipe {id}");
    Ok(Json(json!({ "message": "Recipe deleted", "id": id })))
}

fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::Http { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("request failed: {e}");
    (status, Json(json!({ "error": e.to_string() })))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode as AxumStatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::test_helpers::test_router;

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn tea_body() -> String {
        serde_json::to_string(&serde_json::json!({
            "name": "Tea",
            "ingredients": ["water", "tea leaves"],
            "steps": ["boil", "steep"],
            "image": "x.jpg",
        }))
        .unwrap()
    }

    fn post_tea() -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/recipes")
            .header("content-type", "application/json")
            .body(Body::from(tea_body()))
            .unwrap()
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let app = test_router();
        let resp = app
            .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), AxumStatusCode::OK);
        let v = body_json(resp).await;
        assert!(v.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_returns_record_with_id() {
        let app = test_router();
        let resp = app.clone().oneshot(post_tea()).await.unwrap();
        assert_eq!(resp.status(), AxumStatusCode::CREATED);
        let v = body_json(resp).await;
        assert_eq!(v["id"], 1);
        assert_eq!(v["name"], "Tea");
        assert_eq!(v["ingredients"][1], "tea leaves");

        let resp = app
            .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let v = body_json(resp).await;
        assert_eq!(v.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_id_is_404() {
        let app = test_router();
        let body = serde_json::to_string(&serde_json::json!({
            "id": 7, "name": "X", "ingredients": [], "steps": [], "image": ""
        }))
        .unwrap();
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/recipes/7")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), AxumStatusCode::NOT_FOUND);
        let v = body_json(resp).await;
        assert!(v["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn delete_confirms_with_json() {
        let app = test_router();
        let _ = app.clone().oneshot(post_tea()).await.unwrap();
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/recipes/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), AxumStatusCode::OK);
        let v = body_json(resp).await;
        assert_eq!(v["message"], "Recipe deleted");
        assert_eq!(v["id"], 1);

        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/recipes/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), AxumStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn zero_padded_id_does_not_alias_record() {
        let app = test_router();
        let _ = app.clone().oneshot(post_tea()).await.unwrap();
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/recipes/01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), AxumStatusCode::NOT_FOUND);

        let resp = app
            .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let v = body_json(resp).await;
        assert_eq!(v.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_name_is_bad_request() {
        let app = test_router();
        let body = serde_json::to_string(&serde_json::json!({
            "name": "", "ingredients": [""], "steps": [""], "image": ""
        }))
        .unwrap();
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/recipes")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), AxumStatusCode::BAD_REQUEST);
    }
}
