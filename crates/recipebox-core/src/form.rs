use std::fmt;

use crate::recipe::{NewRecipe, Recipe};

pub const ADD_LABEL: &str = "Add Recipe";
pub const UPDATE_LABEL: &str = "Update Recipe";

/// Split comma-separated form text into trimmed tokens.
///
/// Empty input gives `[""]`, and interior empty tokens are kept, so
/// `"a,,b"` is `["a", "", "b"]`.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(|item| item.trim().to_string()).collect()
}

pub fn join_list(tokens: &[String]) -> String {
    tokens.join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Ingredients,
    Steps,
    Image,
}

impl FormField {
    pub const ALL: &[FormField] = &[
        FormField::Name,
        FormField::Ingredients,
        FormField::Steps,
        FormField::Image,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Ingredients => "Ingredients",
            FormField::Steps => "Steps",
            FormField::Image => "Image URL",
        }
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Ingredients,
            FormField::Ingredients => FormField::Steps,
            FormField::Steps => FormField::Image,
            FormField::Image => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Image,
            FormField::Ingredients => FormField::Name,
            FormField::Steps => FormField::Ingredients,
            FormField::Image => FormField::Steps,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw text of the four form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub name: String,
    pub ingredients: String,
    pub steps: String,
    pub image: String,
}

impl RecipeForm {
    /// Populate the form for editing an existing recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: join_list(&recipe.ingredients),
            steps: join_list(&recipe.steps),
            image: recipe.image.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Ingredients => &self.ingredients,
            FormField::Steps => &self.steps,
            FormField::Image => &self.image,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Ingredients => &mut self.ingredients,
            FormField::Steps => &mut self.steps,
            FormField::Image => &mut self.image,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.ingredients.is_empty()
            && self.steps.is_empty()
            && self.image.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_recipe(&self) -> NewRecipe {
        NewRecipe {
            name: self.name.clone(),
            ingredients: split_list(&self.ingredients),
            steps: split_list(&self.steps),
            image: self.image.clone(),
        }
    }

    /// Copy of `recipe` with the form's values applied. The original is
    /// left untouched so a failed update does not corrupt the local list.
    pub fn apply_to(&self, recipe: &Recipe) -> Recipe {
        self.to_new_recipe().with_id(recipe.id.clone())
    }
}
