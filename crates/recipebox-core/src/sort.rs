use std::cmp::Ordering;
use std::fmt;

use crate::recipe::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    IngredientCount,
}

impl SortKey {
    pub const ALL: &[SortKey] = &[SortKey::Name, SortKey::IngredientCount];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::IngredientCount => "ingredients",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::IngredientCount => "Ingredient count",
        }
    }

    pub fn compare(&self, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortKey::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::IngredientCount => a.ingredients.len().cmp(&b.ingredients.len()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Stable in-place sort; ties keep their existing relative order. Names
/// compare case-insensitively, falling back to the raw text.
pub fn sort_recipes(recipes: &mut [Recipe], key: SortKey) {
    recipes.sort_by(|a, b| key.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeId;

    fn recipe(id: i64, name: &str, n_ingredients: usize) -> Recipe {
        Recipe {
            id: RecipeId::Int(id),
            name: name.into(),
            ingredients: (0..n_ingredients).map(|i| format!("i{i}")).collect(),
            steps: vec![],
            image: String::new(),
        }
    }

    #[test]
    fn by_name_is_non_decreasing() {
        let mut recipes = vec![recipe(1, "Tea", 1), recipe(2, "Apple Pie", 5), recipe(3, "Mash", 2)];
        sort_recipes(&mut recipes, SortKey::Name);
        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apple Pie", "Mash", "Tea"]);
    }

    #[test]
    fn by_ingredient_count_is_non_decreasing() {
        let mut recipes = vec![recipe(1, "a", 3), recipe(2, "b", 0), recipe(3, "c", 2)];
        sort_recipes(&mut recipes, SortKey::IngredientCount);
        let counts: Vec<_> = recipes.iter().map(|r| r.ingredients.len()).collect();
        assert_eq!(counts, vec![0, 2, 3]);
    }

    #[test]
    fn ties_keep_original_order() {
        let mut recipes = vec![recipe(1, "x", 2), recipe(2, "y", 2), recipe(3, "x", 1)];
        sort_recipes(&mut recipes, SortKey::IngredientCount);
        let ids: Vec<_> = recipes.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![RecipeId::Int(3), RecipeId::Int(1), RecipeId::Int(2)]);

        sort_recipes(&mut recipes, SortKey::Name);
        let ids: Vec<_> = recipes.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![RecipeId::Int(3), RecipeId::Int(1), RecipeId::Int(2)]);
    }

    #[test]
    fn name_ignores_case() {
        let mut recipes = vec![
            recipe(1, "banana bread", 1),
            recipe(2, "Apple Pie", 1),
            recipe(3, "cherry tart", 1),
        ];
        sort_recipes(&mut recipes, SortKey::Name);
        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apple Pie", "banana bread", "cherry tart"]);
    }

    #[test]
    fn name_case_ties_break_on_raw_name() {
        let mut recipes = vec![recipe(1, "tea", 1), recipe(2, "Tea", 1), recipe(3, "TEA", 1)];
        sort_recipes(&mut recipes, SortKey::Name);
        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["TEA", "Tea", "tea"]);
    }
}
