//! Favorites Store
//!
//! Locally bookmarked recipes, persisted under `favorites-storage`. Never
//! synchronized with the backend.

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::FAVORITES_STORAGE_KEY;
use crate::models::Recipe;
use crate::storage::{load_state, save_state, KeyValueStorage};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FavoritesState {
    #[serde(default)]
    favorites: Vec<Recipe>,
}

#[derive(Clone)]
pub struct FavoritesStore {
    favorites: ArcRwSignal<Vec<Recipe>>,
    storage: Arc<dyn KeyValueStorage>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let state = load_state::<FavoritesState>(&*storage, FAVORITES_STORAGE_KEY).unwrap_or_default();
        Self {
            favorites: ArcRwSignal::new(state.favorites),
            storage,
        }
    }

    /// Reactive list for components, in insertion order
    pub fn favorites_signal(&self) -> Signal<Vec<Recipe>> {
        self.favorites.clone().into()
    }

    pub fn favorites(&self) -> Vec<Recipe> {
        self.favorites.get_untracked()
    }

    pub fn len(&self) -> usize {
        self.favorites.with_untracked(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a recipe. Returns `false` when the id is already present
    pub fn add_favorite(&self, recipe: Recipe) -> bool {
        if self.is_favorite(&recipe.id) {
            return false;
        }
        self.favorites.update(|favorites| favorites.push(recipe));
        self.persist();
        true
    }

    pub fn remove_favorite(&self, recipe_id: &str) {
        self.favorites
            .update(|favorites| favorites.retain(|recipe| recipe.id != recipe_id));
        self.persist();
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites
            .with_untracked(|favorites| favorites.iter().any(|recipe| recipe.id == recipe_id))
    }

    /// Flip membership; returns whether the recipe is now a favorite
    pub fn toggle_favorite(&self, recipe: &Recipe) -> bool {
        if self.is_favorite(&recipe.id) {
            self.remove_favorite(&recipe.id);
            false
        } else {
            self.add_favorite(recipe.clone())
        }
    }

    pub fn clear_favorites(&self) {
        self.favorites.set(Vec::new());
        self.persist();
    }

    fn persist(&self) {
        let state = FavoritesState {
            favorites: self.favorites.get_untracked(),
        };
        save_state(&*self.storage, FAVORITES_STORAGE_KEY, &state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn recipe(id: &str, title: &str) -> Recipe {
        serde_json::from_value(json!({ "id": id, "title": title })).unwrap()
    }

    fn ids(store: &FavoritesStore) -> Vec<String> {
        store.favorites().into_iter().map(|recipe| recipe.id).collect()
    }

    #[test]
    fn test_add_then_remove() {
        let store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        assert!(store.is_empty());

        assert!(store.add_favorite(recipe("1", "Test Recipe")));
        assert!(store.is_favorite("1"));
        assert_eq!(store.len(), 1);

        store.remove_favorite("1");
        assert!(!store.is_favorite("1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_adding_twice_keeps_one_entry() {
        let store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        assert!(store.add_favorite(recipe("1", "A")));
        assert!(!store.add_favorite(recipe("1", "A again")));
        assert_eq!(ids(&store), vec!["1"]);
        assert_eq!(store.favorites()[0].title, "A");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        for id in ["3", "1", "2"] {
            store.add_favorite(recipe(id, id));
        }
        store.remove_favorite("1");
        assert_eq!(ids(&store), vec!["3", "2"]);
    }

    #[test]
    fn test_removing_unknown_id_is_harmless() {
        let store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        store.add_favorite(recipe("1", "A"));
        store.remove_favorite("nope");
        assert_eq!(ids(&store), vec!["1"]);
    }

    #[test]
    fn test_toggle() {
        let store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        let item = recipe("1", "A");
        assert!(store.toggle_favorite(&item));
        assert!(!store.toggle_favorite(&item));
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        store.add_favorite(recipe("1", "A"));
        store.add_favorite(recipe("2", "B"));
        store.clear_favorites();
        assert!(store.is_empty());
    }

    #[test]
    fn test_survives_restart() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let store = FavoritesStore::new(storage.clone());
        store.add_favorite(recipe("1", "A"));
        store.add_favorite(recipe("2", "B"));

        let reloaded = FavoritesStore::new(storage.clone());
        assert_eq!(ids(&reloaded), vec!["1", "2"]);

        let raw: serde_json::Value = serde_json::from_str(&storage.get(FAVORITES_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(raw["state"]["favorites"][1]["id"], "2");
    }

    #[test]
    fn test_corrupt_entry_starts_empty() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        storage.set(FAVORITES_STORAGE_KEY, "{not json");
        let store = FavoritesStore::new(storage);
        assert!(store.is_empty());
    }
}
