//! Recipe Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use serde_json::Value;

use crate::components::{FavoriteButton, FeedbackForm, FeedbackList, FeedbackSummaryPanel, Spinner};
use crate::context::use_app_context;
use crate::models::Recipe;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Ingredients,
    Instructions,
    Nutrition,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Ingredients, Tab::Instructions, Tab::Nutrition];

    fn label(self) -> &'static str {
        match self {
            Tab::Ingredients => "재료",
            Tab::Instructions => "조리법",
            Tab::Nutrition => "영양정보",
        }
    }
}

/// Missing nutrition values read as zero
fn amount(value: Option<f64>, unit: &str) -> String {
    format!("{}{}", value.unwrap_or(0.0), unit)
}

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let recipes = use_app_context().recipes;
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    Effect::new({
        let recipes = recipes.clone();
        move |_| {
            let id = id.get();
            let recipes = recipes.clone();
            spawn_local(async move { recipes.fetch_recipe_by_id(&id).await });
        }
    });

    // Ignore a recipe left over from a previous visit
    let recipe = Memo::new({
        let recipes = recipes.clone();
        move |_| recipes.current_recipe().filter(|recipe| recipe.id == id.get())
    });
    let loading = Signal::derive({
        let recipes = recipes.clone();
        move || recipes.is_loading()
    });
    let error = Signal::derive(move || recipes.error());

    move || match recipe.get() {
        Some(recipe) => view! { <RecipeView recipe=recipe /> }.into_any(),
        None if error.with(Option::is_some) => view! {
            <div class="text-center py-8">
                <p class="text-red-600">{move || error.get().unwrap_or_default()}</p>
                <A href="/recipes" attr:class="inline-block mt-4 px-4 py-2 bg-blue-600 text-white rounded-md">
                    "목록으로 돌아가기"
                </A>
            </div>
        }
        .into_any(),
        None if loading.get() => view! { <Spinner /> }.into_any(),
        None => ().into_any(),
    }
}

#[component]
fn RecipeView(recipe: Recipe) -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Ingredients);
    let (feedback_revision, set_feedback_revision) = signal(0u32);

    let facts = [
        ("난이도", recipe.difficulty().label().to_string()),
        ("준비 시간", format!("{}분", recipe.prep_time)),
        ("조리 시간", format!("{}분", recipe.cook_time)),
        ("인분", recipe.servings.map(|n| format!("{}인분", n)).unwrap_or_else(|| "-".to_string())),
        ("식사 유형", recipe.meal_type.clone()),
        ("요리 종류", recipe.cuisine_type.clone()),
    ]
    .into_iter()
    .map(|(label, value)| view! {
        <div class="flex justify-between">
            <span class="text-gray-600">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    })
    .collect_view();

    let tags = (!recipe.tags.is_empty()).then(|| {
        let tags = recipe
            .tags
            .iter()
            .map(|tag| view! { <span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded-full">{format!("#{}", tag)}</span> })
            .collect_view();
        view! { <div class="mt-4 flex flex-wrap gap-2">{tags}</div> }
    });

    let tab_buttons = Tab::ALL
        .into_iter()
        .map(|this| view! {
            <button
                class=move || if tab.get() == this {
                    "px-6 py-3 font-medium border-b-2 border-blue-600 text-blue-600"
                } else {
                    "px-6 py-3 font-medium text-gray-600 hover:text-gray-800"
                }
                on:click=move |_| set_tab.set(this)
            >
                {this.label()}
            </button>
        })
        .collect_view();

    let ingredients = ingredients_view(&recipe);
    let instructions = instructions_view(&recipe.instructions);
    let nutrition = nutrition_view(&recipe);

    let health_tips = recipe.health_tips.clone().filter(|tips| !tips.is_empty()).map(|tips| view! {
        <div class="mt-6 bg-blue-50 rounded-lg p-6">
            <h3 class="text-lg font-semibold mb-3 text-blue-800">"건강 팁"</h3>
            <p class="text-gray-700">{tips}</p>
        </div>
    });

    let recipe_id = recipe.id.clone();

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="mb-8">
                <A href="/recipes" attr:class="inline-block mb-4 text-blue-600 hover:text-blue-800">"← 목록으로"</A>
                <div class="flex items-center gap-3 mb-4">
                    <h1 class="text-3xl font-bold">{recipe.title.clone()}</h1>
                    <FavoriteButton recipe=recipe.clone() />
                </div>
                {recipe.description.clone().map(|description| view! { <p class="text-gray-600 text-lg">{description}</p> })}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-1">
                    <div class="bg-white rounded-lg shadow-md overflow-hidden">
                        <img src=recipe.image().to_string() alt=recipe.title.clone() class="w-full h-64 object-cover" />
                        <div class="p-4">
                            <div class="space-y-3">{facts}</div>
                            {tags}
                        </div>
                    </div>
                </div>

                <div class="lg:col-span-2">
                    <div class="bg-white rounded-lg shadow-md">
                        <div class="border-b flex">{tab_buttons}</div>
                        <div class="p-6">
                            <div class:hidden=move || tab.get() != Tab::Ingredients>{ingredients}</div>
                            <div class:hidden=move || tab.get() != Tab::Instructions>{instructions}</div>
                            <div class:hidden=move || tab.get() != Tab::Nutrition>{nutrition}</div>
                        </div>
                    </div>
                    {health_tips}
                </div>
            </div>

            <section class="mt-12 grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-1">
                    <FeedbackSummaryPanel recipe_id=recipe_id.clone() />
                </div>
                <div class="lg:col-span-2 space-y-6">
                    <FeedbackForm
                        recipe_id=recipe_id.clone()
                        on_submitted=Callback::new(move |_| set_feedback_revision.update(|n| *n += 1))
                    />
                    <FeedbackList recipe_id=recipe_id refresh=feedback_revision />
                </div>
            </section>
        </div>
    }
}

fn ingredients_view(recipe: &Recipe) -> impl IntoView {
    let groups = [
        ("주재료", "bg-blue-600", &recipe.main_ingredients),
        ("부재료", "bg-green-600", &recipe.sub_ingredients),
        ("양념", "bg-yellow-600", &recipe.seasonings),
    ];
    let sections = groups
        .into_iter()
        .filter(|(_, _, items)| !items.is_empty())
        .map(|(title, dot, items)| {
            let rows = items
                .iter()
                .map(|item: &Value| view! {
                    <li class="flex items-center">
                        <span class=format!("w-2 h-2 {} rounded-full mr-3", dot)></span>
                        {Recipe::ingredient_label(item)}
                    </li>
                })
                .collect_view();
            view! {
                <div>
                    <h3 class="text-lg font-semibold mb-3">{title}</h3>
                    <ul class="space-y-2">{rows}</ul>
                </div>
            }
        })
        .collect_view();
    view! { <div class="space-y-6">{sections}</div> }
}

fn instructions_view(steps: &[String]) -> AnyView {
    if steps.is_empty() {
        return view! { <p class="text-gray-500">"조리법 정보가 없습니다."</p> }.into_any();
    }
    let rows = steps
        .iter()
        .enumerate()
        .map(|(i, step)| view! {
            <li class="flex">
                <span class="flex-shrink-0 w-8 h-8 bg-blue-600 text-white rounded-full flex items-center justify-center font-semibold mr-4">
                    {i + 1}
                </span>
                <p class="pt-1">{step.clone()}</p>
            </li>
        })
        .collect_view();
    view! { <ol class="space-y-4">{rows}</ol> }.into_any()
}

fn nutrition_view(recipe: &Recipe) -> impl IntoView {
    let cells = [
        ("칼로리", "text-blue-600", amount(recipe.calories_per_serving, "")),
        ("단백질", "text-green-600", amount(recipe.protein_g, "g")),
        ("탄수화물", "text-yellow-600", amount(recipe.carb_g, "g")),
        ("지방", "text-red-600", amount(recipe.fat_g, "g")),
        ("식이섬유", "text-purple-600", amount(recipe.fiber_g, "g")),
        ("나트륨", "text-gray-600", amount(recipe.sodium_mg, "mg")),
    ]
    .into_iter()
    .map(|(label, color, value)| view! {
        <div class="text-center">
            <div class=format!("text-3xl font-bold {}", color)>{value}</div>
            <div class="text-gray-600">{label}</div>
        </div>
    })
    .collect_view();
    view! { <div class="grid grid-cols-2 md:grid-cols-3 gap-6">{cells}</div> }
}
