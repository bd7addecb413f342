use crate::recipe::Recipe;

/// Case-insensitive substring match on the name or any ingredient.
/// An empty query matches everything.
pub fn matches(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    recipe.name.to_lowercase().contains(&needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle))
}

pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| matches(r, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeId;

    fn recipe(id: i64, name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId::Int(id),
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: vec![],
            image: String::new(),
        }
    }

    #[test]
    fn tea_query_hits_name_and_ingredient() {
        let recipes = vec![
            recipe(1, "Tea", &["water"]),
            recipe(2, "Iced Drink", &["ice", "tea leaves"]),
            recipe(3, "Omelette", &["egg", "butter"]),
        ];
        let hits = filter_recipes(&recipes, "tea");
        let ids: Vec<_> = hits.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![RecipeId::Int(1), RecipeId::Int(2)]);
        assert_eq!(recipes.len(), 3);
    }

    #[test]
    fn match_is_case_insensitive() {
        let r = recipe(1, "GREEN curry", &["Coconut Milk"]);
        assert!(matches(&r, "green"));
        assert!(matches(&r, "coconut"));
        assert!(matches(&r, "MILK"));
        assert!(!matches(&r, "rice"));
    }

    #[test]
    fn empty_query_matches_all() {
        let recipes = vec![recipe(1, "a", &[]), recipe(2, "b", &[])];
        assert_eq!(filter_recipes(&recipes, "").len(), 2);
    }

    #[test]
    fn steps_are_not_searched() {
        let mut r = recipe(1, "Toast", &["bread"]);
        r.steps = vec!["grill".into()];
        assert!(!matches(&r, "grill"));
    }
}
