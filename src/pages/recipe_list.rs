//! Recipe Listing Page
//!
//! Filterable, paginated recipe grid. Typing in the search box refetches
//! after a short pause; any new search starts again from page 1.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{shows_controls, Pagination, RecipeCard, Spinner};
use crate::config::{RECIPE_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::context::use_app_context;
use crate::hooks::use_api;
use crate::models::{Paginated, Recipe, RecipeQuery};

const MEAL_TYPES: [&str; 4] = ["아침", "점심", "저녁", "간식"];
const CUISINE_TYPES: [&str; 5] = ["한식", "중식", "일식", "양식", "기타"];

/// Empty select values mean "no filter"
fn build_query(page: u32, meal_type: String, cuisine_type: String, search: String) -> RecipeQuery {
    let non_empty = |value: String| (!value.trim().is_empty()).then_some(value);
    RecipeQuery {
        page,
        size: RECIPE_PAGE_SIZE,
        meal_type: non_empty(meal_type),
        cuisine_type: non_empty(cuisine_type),
        search: non_empty(search),
    }
}

/// Zero until a listing has arrived, which keeps the controls hidden
fn page_count(listing: Option<&Paginated<Recipe>>) -> u32 {
    listing.map_or(0, |listing| listing.pages)
}

#[component]
pub fn RecipeListPage() -> impl IntoView {
    let api = use_app_context().api;
    let listing = use_api(move |query: RecipeQuery| {
        let api = api.clone();
        async move { api.list_recipes(&query).await }
    });
    on_cleanup({
        let listing = listing.clone();
        move || listing.cancel()
    });

    let (page, set_page) = signal(1u32);
    let (meal_type, set_meal_type) = signal(String::new());
    let (cuisine_type, set_cuisine_type) = signal(String::new());
    let (search_input, set_search_input) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let debounce = StoredValue::new(0u64);

    Effect::new({
        let listing = listing.clone();
        move |_| {
            let query = build_query(page.get(), meal_type.get(), cuisine_type.get(), search.get());
            listing.execute_on_mount(query);
        }
    });

    let commit_search = move |term: String| {
        if search.get_untracked() != term {
            set_page.set(1);
            set_search.set(term);
        }
    };

    let on_search_input = move |ev| {
        let term = event_target_value(&ev);
        set_search_input.set(term.clone());
        debounce.update_value(|ticket| *ticket += 1);
        let ticket = debounce.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce.get_value() == ticket {
                commit_search(term);
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        debounce.update_value(|ticket| *ticket += 1);
        commit_search(search_input.get_untracked());
    };

    let data = listing.data();
    let loading = listing.loading();
    let error = listing.error();
    let pages = Signal::derive(move || data.with(|d| page_count(d.as_ref())));

    let content = move || {
        if error.with(Option::is_some) {
            return view! {
                <div class="text-center py-8">
                    <p class="text-red-600">"레시피를 불러오는 중 오류가 발생했습니다."</p>
                </div>
            }
            .into_any();
        }
        match data.get() {
            None if loading.get() => view! { <Spinner /> }.into_any(),
            Some(listing) if !listing.items.is_empty() => view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                    {listing
                        .items
                        .into_iter()
                        .map(|recipe| view! { <RecipeCard recipe=recipe /> })
                        .collect_view()}
                </div>
            }
            .into_any(),
            _ => view! {
                <div class="text-center py-8">
                    <p class="text-gray-600">"레시피가 없습니다."</p>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-8">"레시피 목록"</h1>

            <div class="mb-8 bg-white p-4 rounded-lg shadow">
                <form class="flex flex-col md:flex-row gap-4" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="레시피 검색..."
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-md"
                        prop:value=search_input
                        on:input=on_search_input
                    />
                    <select
                        class="px-4 py-2 border border-gray-300 rounded-md"
                        on:change=move |ev| {
                            set_page.set(1);
                            set_meal_type.set(event_target_value(&ev));
                        }
                    >
                        <option value="">"모든 식사"</option>
                        {MEAL_TYPES.into_iter().map(|meal| view! { <option value=meal>{meal}</option> }).collect_view()}
                    </select>
                    <select
                        class="px-4 py-2 border border-gray-300 rounded-md"
                        on:change=move |ev| {
                            set_page.set(1);
                            set_cuisine_type.set(event_target_value(&ev));
                        }
                    >
                        <option value="">"모든 요리"</option>
                        {CUISINE_TYPES.into_iter().map(|cuisine| view! { <option value=cuisine>{cuisine}</option> }).collect_view()}
                    </select>
                    <button type="submit" class="px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                        "검색"
                    </button>
                </form>
            </div>

            {content}

            <Pagination page=page pages=pages on_change=Callback::new(move |next| set_page.set(next)) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_page_listing_hides_pagination() {
        let listing: Paginated<Recipe> = serde_json::from_value(json!({
            "items": [{ "id": "r1", "title": "김치찌개" }],
            "total": 1,
            "page": 1,
            "size": 12,
            "pages": 1
        }))
        .unwrap();

        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].title, "김치찌개");
        assert!(!shows_controls(page_count(Some(&listing))));
    }

    #[test]
    fn test_no_pagination_before_first_load() {
        assert_eq!(page_count(None), 0);
        assert!(!shows_controls(page_count(None)));
    }

    #[test]
    fn test_empty_filters_are_dropped() {
        let query = build_query(1, String::new(), "  ".to_string(), String::new());
        assert_eq!(query, RecipeQuery::default());
    }

    #[test]
    fn test_filters_carried_into_query() {
        let query = build_query(3, "저녁".to_string(), "한식".to_string(), "김치".to_string());
        assert_eq!(query.page, 3);
        assert_eq!(query.size, RECIPE_PAGE_SIZE);
        assert_eq!(query.meal_type.as_deref(), Some("저녁"));
        assert_eq!(query.cuisine_type.as_deref(), Some("한식"));
        assert_eq!(query.search.as_deref(), Some("김치"));
    }
}
