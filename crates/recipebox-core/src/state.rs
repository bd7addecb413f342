use crate::error::RecipeError;
use crate::filter;
use crate::form::{RecipeForm, ADD_LABEL, UPDATE_LABEL};
use crate::recipe::{NewRecipe, Recipe, RecipeId};
use crate::sort::{self, SortKey};

/// Whether the form is creating a new recipe or editing an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    #[default]
    Idle,
    Editing(RecipeId),
}

impl EditTarget {
    pub fn id(&self) -> Option<&RecipeId> {
        match self {
            EditTarget::Idle => None,
            EditTarget::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditTarget::Editing(_))
    }
}

/// The request a form submission turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(NewRecipe),
    Update(Recipe),
}

/// Everything the client knows between refreshes: the local mirror of the
/// remote list plus the form, edit target, search query and sort key.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    recipes: Vec<Recipe>,
    pub form: RecipeForm,
    edit: EditTarget,
    query: String,
    sort: Option<SortKey>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Replace the mirror with a freshly fetched list. The active sort key,
    /// if any, is re-applied so a refresh does not undo it.
    pub fn replace_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        if let Some(key) = self.sort {
            sort::sort_recipes(&mut self.recipes, key);
        }
    }

    pub fn clear_recipes(&mut self) {
        self.recipes.clear();
    }

    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Recipes matching the current search query, in list order.
    pub fn visible(&self) -> Vec<&Recipe> {
        filter::filter_recipes(&self.recipes, &self.query)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = Some(key);
        sort::sort_recipes(&mut self.recipes, key);
    }

    pub fn edit_target(&self) -> &EditTarget {
        &self.edit
    }

    pub fn submit_label(&self) -> &'static str {
        if self.edit.is_editing() {
            UPDATE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Enter editing mode for `id` and load its values into the form.
    pub fn begin_edit(&mut self, id: &RecipeId) -> Result<&Recipe, RecipeError> {
        let index = self
            .recipes
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.clone()))?;
        self.edit = EditTarget::Editing(id.clone());
        self.form = RecipeForm::from_recipe(&self.recipes[index]);
        Ok(&self.recipes[index])
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditTarget::Idle;
        self.form.clear();
    }

    /// Build the request for the current form contents.
    pub fn prepare_submit(&self) -> Result<Submission, RecipeError> {
        match &self.edit {
            EditTarget::Idle => Ok(Submission::Create(self.form.to_new_recipe())),
            EditTarget::Editing(id) => {
                let current = self
                    .find(id)
                    .ok_or_else(|| RecipeError::NotFound(id.clone()))?;
                Ok(Submission::Update(self.form.apply_to(current)))
            }
        }
    }

    /// A create or update went through: back to idle with an empty form.
    pub fn submit_succeeded(&mut self) {
        self.cancel_edit();
    }

    /// A recipe was deleted remotely. Drops the edit if it targeted it.
    pub fn forget(&mut self, id: &RecipeId) {
        if self.edit.id() == Some(id) {
            self.cancel_edit();
        }
    }
}
