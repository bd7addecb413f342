use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned recipe identifier.
///
/// The client never mints these. Whatever JSON shape the service uses
/// (number or string) is kept so it serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Int(i64),
    Text(String),
}

impl RecipeId {
    /// Parse a URL path segment. Only the canonical decimal form is an
    /// integer id; `"01"` or `"+1"` stay text.
    pub fn from_segment(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => RecipeId::Int(n),
            _ => RecipeId::Text(s.to_string()),
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Int(n) => write!(f, "{n}"),
            RecipeId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecipeId {
    fn from(n: i64) -> Self {
        RecipeId::Int(n)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        RecipeId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub image: String,
}

/// Body of a create request. Identical to `Recipe` minus the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl NewRecipe {
    pub fn with_id(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            steps: self.steps,
            image: self.image,
        }
    }
}
