use std::sync::Mutex;

use async_trait::async_trait;
use recipebox_core::recipe::{NewRecipe, Recipe, RecipeId};

use crate::{RecipeService, ServiceError};

struct Store {
    recipes: Vec<Recipe>,
    next_id: i64,
}

/// In-memory implementation. Ids are integers handed out from 1 upward
/// and never reused. List order is insertion order.
pub struct LocalService {
    store: Mutex<Store>,
}

impl LocalService {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                recipes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed with records, assigning fresh ids in order.
    pub fn with_recipes(recipes: Vec<NewRecipe>) -> Self {
        let service = Self::new();
        if let Ok(mut store) = service.store.lock() {
            for input in recipes {
                let id = store.next_id;
                store.next_id += 1;
                store.recipes.push(input.with_id(RecipeId::Int(id)));
            }
        }
        service
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Store>, ServiceError> {
        self.store
            .lock()
            .map_err(|_| ServiceError::Internal("recipe store lock poisoned".into()))
    }
}

impl Default for LocalService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeService for LocalService {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ServiceError> {
        Ok(self.lock()?.recipes.clone())
    }

    async fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("name must not be empty".into()));
        }
        let mut store = self.lock()?;
        let id = store.next_id;
        store.next_id += 1;
        let recipe = input.clone().with_id(RecipeId::Int(id));
        store.recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(
        &self,
        id: &RecipeId,
        recipe: &Recipe,
    ) -> Result<Recipe, ServiceError> {
        if recipe.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("name must not be empty".into()));
        }
        let mut store = self.lock()?;
        let slot = store
            .recipes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("recipe {id}")))?;
        *slot = Recipe {
            id: id.clone(),
            ..recipe.clone()
        };
        Ok(slot.clone())
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), ServiceError> {
        let mut store = self.lock()?;
        let before = store.recipes.len();
        store.recipes.retain(|r| &r.id != id);
        if store.recipes.len() == before {
            return Err(ServiceError::NotFound(format!("recipe {id}")));
        }
        Ok(())
    }
}
