use recipebox_core::recipe::{NewRecipe, Recipe, RecipeId};
use tokio::runtime::Runtime;

use crate::{HttpService, RecipeService, ServiceError};

/// Blocking wrapper around the async `HttpService`.
///
/// Creates an internal tokio runtime and uses `block_on()` for each call.
/// Designed for sync callers like the TUI.
pub struct BlockingHttpService {
    inner: HttpService,
    rt: Runtime,
}

impl BlockingHttpService {
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let rt = Runtime::new()
            .map_err(|e| ServiceError::Internal(format!("failed to create tokio runtime: {e}")))?;
        Ok(Self {
            inner: HttpService::new(base_url),
            rt,
        })
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn list_recipes(&self) -> Result<Vec<Recipe>, ServiceError> {
        self.rt.block_on(self.inner.list_recipes())
    }

    pub fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe, ServiceError> {
        self.rt.block_on(self.inner.create_recipe(input))
    }

    pub fn update_recipe(&self, id: &RecipeId, recipe: &Recipe) -> Result<Recipe, ServiceError> {
        self.rt.block_on(self.inner.update_recipe(id, recipe))
    }

    pub fn delete_recipe(&self, id: &RecipeId) -> Result<(), ServiceError> {
        self.rt.block_on(self.inner.delete_recipe(id))
    }
}
