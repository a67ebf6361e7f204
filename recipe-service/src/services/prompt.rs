//! Prompt construction for recipe generation.

use crate::models::RecipeRequest;

/// Output contract appended to every prompt. Mirrors [`crate::models::Recipe`].
pub const RECIPE_SCHEMA_INSTRUCTIONS: &str = r#"Format the response as a JSON object with the following structure:
{
    "title": "Recipe Title",
    "description": "Brief description of the dish",
    "ingredients": ["Ingredient 1 with quantity", "Ingredient 2 with quantity", ...],
    "instructions": ["Step 1", "Step 2", ...],
    "prepTime": "Time in minutes",
    "cookTime": "Time in minutes",
    "servings": number,
    "difficulty": "Easy/Medium/Hard",
    "nutritionalInfo": {
        "calories": number,
        "protein": "grams",
        "carbs": "grams",
        "fat": "grams",
        "fiber": "grams"
    },
    "tags": ["Tag1", "Tag2", ...]
}

ONLY return the JSON object, with no additional text before or after."#;

/// `It should be vegan, gluten-free`, or `None` without preferences.
pub fn dietary_clause(preferences: &[String]) -> Option<String> {
    if preferences.is_empty() {
        None
    } else {
        Some(format!("It should be {}", preferences.join(", ")))
    }
}

/// `The cuisine should be Thai`, or `None` for an empty cuisine.
pub fn cuisine_clause(cuisine: &str) -> Option<String> {
    if cuisine.is_empty() {
        None
    } else {
        Some(format!("The cuisine should be {}", cuisine))
    }
}

/// Build the full prompt sent to the text provider.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let mut lines = vec![format!(
        "Create a detailed recipe using these ingredients: {}.",
        request.ingredients.join(", ")
    )];
    lines.extend(dietary_clause(&request.preferences));
    lines.extend(cuisine_clause(&request.cuisine));

    format!("{}\n\n{}\n", lines.join("\n"), RECIPE_SCHEMA_INSTRUCTIONS)
}
