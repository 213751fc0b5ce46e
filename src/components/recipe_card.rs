//! Recipe Card Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{FavoriteButton, StarRating};
use crate::models::Recipe;

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let href = format!("/recipes/{}", recipe.id);
    let difficulty = recipe.difficulty();
    let favorite = recipe.clone();
    let rating = recipe.avg_rating.map(|rating| {
        let count = recipe.total_ratings.unwrap_or(0);
        view! {
            <div class="mt-3 flex items-center gap-1">
                <StarRating rating=rating />
                <span class="text-sm text-gray-600">{format!("{:.1} ({})", rating, count)}</span>
            </div>
        }
    });

    view! {
        <div class="bg-white rounded-lg shadow-md hover:shadow-lg transition-shadow overflow-hidden">
            <A href=href>
                <div class="relative h-48 bg-gray-200">
                    <img src=recipe.image().to_string() alt=recipe.title.clone() class="w-full h-full object-cover" />
                    <span class=format!("absolute top-2 right-2 {}", difficulty.badge_class())>
                        {difficulty.label()}
                    </span>
                </div>
                <div class="p-4">
                    <h3 class="text-lg font-semibold mb-2 line-clamp-1">{recipe.title.clone()}</h3>
                    {recipe.description.clone().map(|description| view! {
                        <p class="text-gray-600 text-sm mb-3 line-clamp-2">{description}</p>
                    })}
                    <div class="flex flex-wrap gap-2 mb-3">
                        <span class="px-2 py-1 rounded-full text-xs bg-blue-100 text-blue-800">{recipe.meal_type.clone()}</span>
                        <span class="px-2 py-1 rounded-full text-xs bg-green-100 text-green-800">{recipe.cuisine_type.clone()}</span>
                    </div>
                    <div class="flex justify-between text-sm text-gray-500">
                        <div class="flex items-center gap-4">
                            <span>{format!("⏱ {}분", recipe.total_minutes())}</span>
                            {recipe.servings.map(|servings| view! { <span>{format!("🍽 {}인분", servings)}</span> })}
                        </div>
                        {recipe.calories_label()}
                    </div>
                    {rating}
                </div>
            </A>
            <div class="px-4 pb-4 flex justify-end">
                <FavoriteButton recipe=favorite />
            </div>
        </div>
    }
}
