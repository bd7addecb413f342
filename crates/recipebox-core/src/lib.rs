pub mod error;
pub mod filter;
pub mod form;
pub mod recipe;
pub mod sort;
pub mod state;
pub mod view;

pub use error::RecipeError;
pub use form::RecipeForm;
pub use recipe::{NewRecipe, Recipe, RecipeId};
pub use sort::SortKey;
pub use state::{ClientState, EditTarget, Submission};
