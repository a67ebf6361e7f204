//! HTTP handlers for the recipe service.

pub mod health;
pub mod recipes;

pub use health::{health_check, readiness_check};
pub use recipes::generate_recipe;
