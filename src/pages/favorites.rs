//! Favorites Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ConfirmButton, RecipeCard};
use crate::context::use_app_context;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = use_app_context().favorites;
    let list = favorites.favorites_signal();

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-3xl font-bold">"즐겨찾기"</h1>
                <Show when=move || !list.with(Vec::is_empty)>
                    <ConfirmButton
                        label="모두 삭제"
                        prompt="즐겨찾기를 모두 삭제할까요?"
                        button_class="px-4 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300"
                        on_confirm={
                            let favorites = favorites.clone();
                            Callback::new(move |_| favorites.clear_favorites())
                        }
                    />
                </Show>
            </div>
            <Show
                when=move || !list.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="text-center py-16">
                        <p class="text-gray-600 mb-4">"즐겨찾기한 레시피가 없습니다."</p>
                        <A href="/recipes" attr:class="px-4 py-2 bg-blue-600 text-white rounded-md">"레시피 둘러보기"</A>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                    <For
                        each=move || list.get()
                        key=|recipe| recipe.id.clone()
                        children=|recipe| view! { <RecipeCard recipe=recipe /> }
                    />
                </div>
            </Show>
        </div>
    }
}
