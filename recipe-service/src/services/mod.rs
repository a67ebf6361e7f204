pub mod extract;
pub mod prompt;
pub mod providers;
pub mod recipes;

pub use recipes::{generate_recipe, RecipeError};
