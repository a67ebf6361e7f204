use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /generate-recipe`.
///
/// Every field is optional on the wire; a missing or `null` ingredient list
/// deserializes as empty and is rejected later by validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RecipeRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cuisine: String,
}

/// A generated recipe, as returned to clients.
///
/// Deserializing a model reply into this type is the schema check: missing
/// keys or wrong value types fail, unknown keys are dropped. `difficulty` is
/// conventionally "Easy", "Medium" or "Hard" but any string is accepted.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: serde_json::Number,
    pub difficulty: String,
    pub nutritional_info: NutritionalInfo,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NutritionalInfo {
    pub calories: serde_json::Number,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
