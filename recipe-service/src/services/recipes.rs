//! Recipe generation flow: validate, prompt, call the provider, extract,
//! parse and schema-check the reply.

use crate::models::{Recipe, RecipeRequest};
use crate::services::extract::extract_json_payload;
use crate::services::prompt::build_recipe_prompt;
use crate::services::providers::{FinishReason, ProviderError, TextProvider};
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("No ingredients provided")]
    NoIngredients,

    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("Failed to parse recipe data")]
    Parse(#[source] serde_json::Error),

    #[error("Recipe data did not match the expected schema")]
    Schema(#[source] serde_json::Error),
}

impl From<RecipeError> for AppError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::NoIngredients => AppError::BadRequest(anyhow::anyhow!(err.to_string())),
            RecipeError::Provider(_) | RecipeError::Parse(_) => AppError::UpstreamError {
                message: err.to_string(),
                details: None,
            },
            RecipeError::Schema(ref source) => AppError::UpstreamError {
                details: Some(source.to_string()),
                message: err.to_string(),
            },
        }
    }
}

/// Generate one recipe. The provider is not called when `ingredients` is
/// empty.
pub async fn generate_recipe(
    provider: &dyn TextProvider,
    request: &RecipeRequest,
) -> Result<Recipe, RecipeError> {
    if request.ingredients.is_empty() {
        return Err(RecipeError::NoIngredients);
    }

    tracing::info!(
        ingredients = ?request.ingredients,
        preferences = ?request.preferences,
        cuisine = %request.cuisine,
        "Generating recipe"
    );

    let prompt = build_recipe_prompt(request);

    let response = provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Error generating recipe");
        RecipeError::from(e)
    })?;

    tracing::debug!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Provider reply received"
    );
    if response.finish_reason == FinishReason::Length {
        tracing::warn!("Provider reply was truncated at the token limit");
    }

    parse_recipe_reply(&response.text)
}

/// Extract and parse the JSON recipe from a raw model reply.
pub fn parse_recipe_reply(reply: &str) -> Result<Recipe, RecipeError> {
    let extracted = extract_json_payload(reply);

    let value: serde_json::Value = serde_json::from_str(extracted.text).map_err(|e| {
        tracing::error!(
            error = %e,
            payload_source = extracted.source.as_str(),
            raw_response = %reply,
            "JSON decode error"
        );
        RecipeError::Parse(e)
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!(
            error = %e,
            raw_response = %reply,
            "Recipe schema mismatch"
        );
        RecipeError::Schema(e)
    })
}
