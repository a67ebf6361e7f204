use crate::models::{Recipe, RecipeRequest};
use crate::services;
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

/// `POST /generate-recipe`
pub async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<Recipe>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected recipe request body");
        AppError::from(rejection)
    })?;

    let recipe = services::generate_recipe(state.text_provider.as_ref(), &request).await?;
    Ok(Json(recipe))
}
