use recipebox_core::recipe::NewRecipe;

fn recipe(name: &str, ingredients: &[&str], steps: &[&str], image: &str) -> NewRecipe {
    NewRecipe {
        name: name.into(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        image: image.into(),
    }
}

/// A handful of sample recipes for `--seed`.
pub fn sample_recipes() -> Vec<NewRecipe> {
    vec![
        recipe(
            "Tea",
            &["water", "tea leaves"],
            &["boil", "steep"],
            "https://example.com/tea.jpg",
        ),
        recipe(
            "Pancakes",
            &["flour", "milk", "egg", "butter", "sugar"],
            &["whisk", "rest the batter", "fry"],
            "https://example.com/pancakes.jpg",
        ),
        recipe(
            "Guacamole",
            &["avocado", "lime", "onion", "salt"],
            &["mash", "mix", "season"],
            "https://example.com/guacamole.jpg",
        ),
    ]
}
