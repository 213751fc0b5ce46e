//! Recipe Endpoints

use serde::Serialize;

use super::{segment, ApiClient};
use crate::error::ApiError;
use crate::models::{Paginated, Recipe, RecipeQuery};

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
}

impl ApiClient {
    pub async fn list_recipes(&self, query: &RecipeQuery) -> Result<Paginated<Recipe>, ApiError> {
        self.get("/recipes", query.to_pairs()).await
    }

    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        self.get(&format!("/recipes/{}", segment(id)), Vec::new()).await
    }

    pub async fn search_recipes(&self, query: &str) -> Result<Paginated<Recipe>, ApiError> {
        self.post("/recipes/search", &SearchArgs { query }).await
    }
}
