//! Structured view model for the recipe list.
//!
//! Widgets draw from these values only, never from raw `Recipe` fields.
//! Every string is passed through [`sanitize`] so a recipe name cannot smuggle
//! terminal control sequences onto the screen.

use crate::recipe::{Recipe, RecipeId};

pub const LIST_HEADER: &str = "Your Recipes:";
pub const DELETE_LABEL: &str = "Delete Recipe";
pub const EDIT_LABEL: &str = "Edit Recipe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: RecipeId,
    pub name: String,
    pub image: String,
    pub ingredients: String,
    pub steps: String,
    pub delete_label: &'static str,
    pub edit_label: &'static str,
}

impl RecipeCard {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: sanitize(&recipe.name),
            image: sanitize(&recipe.image),
            ingredients: sanitize(&recipe.ingredients.join(", ")),
            steps: sanitize(&recipe.steps.join(", ")),
            delete_label: DELETE_LABEL,
            edit_label: EDIT_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub header: &'static str,
    pub cards: Vec<RecipeCard>,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One card per recipe, in the order given.
pub fn render_list<'a, I>(recipes: I) -> ListView
where
    I: IntoIterator<Item = &'a Recipe>,
{
    ListView {
        header: LIST_HEADER,
        cards: recipes.into_iter().map(RecipeCard::from_recipe).collect(),
    }
}

/// Strip control characters. Newlines and tabs collapse to a single space.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
