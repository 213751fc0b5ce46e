//! Recipe Store
//!
//! Non-persisted recipe listing and detail state with field-level
//! reactivity. Failures are recorded in `error`, never returned.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Recipe, RecipeQuery};

const FETCH_FAILED: &str = "레시피를 불러오는데 실패했습니다.";
const NOT_FOUND: &str = "레시피를 찾을 수 없습니다.";
const SEARCH_FAILED: &str = "검색에 실패했습니다.";

#[derive(Clone, Debug, Default, Store)]
pub struct RecipeState {
    /// Current listing page
    pub recipes: Vec<Recipe>,
    /// Detail page recipe
    pub current_recipe: Option<Recipe>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct RecipeStore {
    state: Store<RecipeState>,
    api: ApiClient,
}

impl RecipeStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: Store::new(RecipeState::default()),
            api,
        }
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.state.recipes().get()
    }

    pub fn current_recipe(&self) -> Option<Recipe> {
        self.state.current_recipe().get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading().get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error().get()
    }

    /// Load one listing page into `recipes`
    pub async fn fetch_recipes(&self, query: &RecipeQuery) {
        self.begin();
        match self.api.list_recipes(query).await {
            Ok(page) => {
                *self.state.recipes().write() = page.items;
                *self.state.is_loading().write() = false;
            }
            Err(e) => self.fail(&e, FETCH_FAILED),
        }
    }

    /// Load one recipe into `current_recipe`
    pub async fn fetch_recipe_by_id(&self, id: &str) {
        self.begin();
        match self.api.get_recipe(id).await {
            Ok(recipe) => {
                *self.state.current_recipe().write() = Some(recipe);
                *self.state.is_loading().write() = false;
            }
            Err(e) => self.fail(&e, NOT_FOUND),
        }
    }

    /// Replace `recipes` with the results of a free-text search
    pub async fn search_recipes(&self, query: &str) {
        self.begin();
        match self.api.search_recipes(query).await {
            Ok(page) => {
                *self.state.recipes().write() = page.items;
                *self.state.is_loading().write() = false;
            }
            Err(e) => self.fail(&e, SEARCH_FAILED),
        }
    }

    pub fn clear_error(&self) {
        *self.state.error().write() = None;
    }

    fn begin(&self) {
        *self.state.is_loading().write() = true;
        *self.state.error().write() = None;
    }

    fn fail(&self, e: &ApiError, fallback: &str) {
        log::error!("[RECIPES] {}: {}", fallback, e);
        *self.state.error().write() = Some(e.user_message(fallback));
        *self.state.is_loading().write() = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{always, client};
    use crate::api::{ApiResponse, MockHttpTransport};
    use serde_json::json;

    fn store(transport: MockHttpTransport) -> (Owner, RecipeStore) {
        let owner = Owner::new();
        owner.set();
        let (api, _) = client(transport);
        (owner, RecipeStore::new(api))
    }

    #[tokio::test]
    async fn test_fetch_recipes_fills_listing() {
        let (_owner, store) = store(always(200, json!({
            "items": [{ "id": "1", "title": "김치찌개" }],
            "total": 1, "page": 1, "size": 12, "pages": 1
        })));

        store.fetch_recipes(&RecipeQuery::default()).await;

        let recipes = store.recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "김치찌개");
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_listing() {
        let mut transport = MockHttpTransport::new();
        let mut calls = 0;
        transport.expect_send().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(ApiResponse::json(200, json!({
                    "items": [{ "id": "1", "title": "A" }],
                    "total": 1, "page": 1, "size": 12, "pages": 1
                })))
            } else {
                Err(ApiError::Network("offline".to_string()))
            }
        });
        let (_owner, store) = store(transport);

        store.fetch_recipes(&RecipeQuery::default()).await;
        store.fetch_recipes(&RecipeQuery::default()).await;

        assert_eq!(store.recipes().len(), 1);
        assert_eq!(store.error().as_deref(), Some(FETCH_FAILED));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_missing_recipe_reports_not_found() {
        let (_owner, store) = store(always(404, json!({})));

        store.fetch_recipe_by_id("missing").await;

        assert_eq!(store.current_recipe(), None);
        assert_eq!(store.error().as_deref(), Some(NOT_FOUND));
    }

    #[tokio::test]
    async fn test_server_message_wins_over_fallback() {
        let (_owner, store) = store(always(400, json!({ "detail": "검색어가 너무 짧습니다" })));

        store.search_recipes("a").await;

        assert_eq!(store.error().as_deref(), Some("검색어가 너무 짧습니다"));
    }

    #[tokio::test]
    async fn test_clear_error() {
        let (_owner, store) = store(always(500, json!({})));
        store.search_recipes("김치").await;
        assert_eq!(store.error().as_deref(), Some(SEARCH_FAILED));

        store.clear_error();
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_detail_load() {
        let (_owner, store) = store(always(200, json!({ "id": "7", "title": "비빔밥", "difficulty": "easy" })));

        store.fetch_recipe_by_id("7").await;

        let recipe = store.current_recipe().unwrap();
        assert_eq!(recipe.id, "7");
        assert!(!store.is_loading());
    }
}
