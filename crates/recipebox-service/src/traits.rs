use async_trait::async_trait;
use recipebox_core::recipe::{NewRecipe, Recipe, RecipeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{status} - {message}")]
    Http { status: u16, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status carried by the failure, when there was a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::NotFound(_) => Some(404),
            ServiceError::InvalidInput(_) => Some(400),
            ServiceError::Http { status, .. } => Some(*status),
            ServiceError::Internal(_) => None,
        }
    }
}

/// Abstraction over the remote recipe collection.
///
/// The TUI talks to it through `BlockingHttpService`.
/// `HttpService` wraps an async HTTP client.
/// `LocalService` keeps records in memory and backs the stub server.
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ServiceError>;
    async fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe, ServiceError>;
    async fn update_recipe(&self, id: &RecipeId, recipe: &Recipe)
        -> Result<Recipe, ServiceError>;
    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), ServiceError>;
}
