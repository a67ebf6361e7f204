//! Request and response shapes for the recipe service.

pub mod recipe;

pub use recipe::{NutritionalInfo, Recipe, RecipeRequest};
