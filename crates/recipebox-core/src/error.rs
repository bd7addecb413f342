use thiserror::Error;

use crate::recipe::RecipeId;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("recipe not found: {0}")]
    NotFound(RecipeId),
}
