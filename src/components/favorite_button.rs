//! Favorite Toggle

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Recipe;

#[component]
pub fn FavoriteButton(recipe: Recipe) -> impl IntoView {
    let favorites = use_app_context().favorites;
    let list = favorites.favorites_signal();
    let id = recipe.id.clone();
    let is_favorite = Memo::new(move |_| list.with(|recipes| recipes.iter().any(|r| r.id == id)));

    view! {
        <button
            type="button"
            class="text-2xl leading-none text-red-500 hover:scale-110 transition-transform"
            aria-pressed=move || is_favorite.get().to_string()
            title=move || if is_favorite.get() { "즐겨찾기 해제" } else { "즐겨찾기 추가" }
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                favorites.toggle_favorite(&recipe);
            }
        >
            {move || if is_favorite.get() { "♥" } else { "♡" }}
        </button>
    }
}
