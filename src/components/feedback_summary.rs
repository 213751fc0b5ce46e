//! Feedback Summary Panel
//!
//! Average rating, per-star distribution and "made it" statistics for one
//! recipe. Renders nothing when the summary cannot be loaded.

use leptos::prelude::*;

use crate::components::StarRating;
use crate::context::use_app_context;
use crate::hooks::use_api;

#[component]
pub fn FeedbackSummaryPanel(recipe_id: String) -> impl IntoView {
    let api = use_app_context().api;
    let summary = use_api(move |recipe_id: String| {
        let api = api.clone();
        async move { api.recipe_feedback_summary(&recipe_id).await }
    });
    summary.execute_on_mount(recipe_id);
    on_cleanup({
        let summary = summary.clone();
        move || summary.cancel()
    });

    let data = summary.data();
    let loading = summary.loading();

    view! {
        <Show when=move || loading.get()>
            <div class="animate-pulse h-24 bg-gray-100 rounded-lg"></div>
        </Show>
        {move || data.get().map(|summary| {
            let distribution = (1..=5u8)
                .rev()
                .map(|stars| {
                    let percentage = summary.percentage_for(stars);
                    view! {
                        <div class="flex items-center gap-2">
                            <span class="w-4 text-sm">{stars}</span>
                            <div class="flex-1 bg-gray-200 rounded-full h-2">
                                <div class="bg-yellow-400 h-2 rounded-full" style=format!("width: {:.0}%", percentage)></div>
                            </div>
                            <span class="w-8 text-right text-sm text-gray-600">{summary.count_for(stars)}</span>
                        </div>
                    }
                })
                .collect_view();
            let made_it = (summary.made_recipe_count > 0).then(|| view! {
                <div class="mt-4 pt-4 border-t space-y-1 text-sm">
                    <div class="flex justify-between">
                        <span class="text-gray-600">"직접 만들어본 사용자"</span>
                        <span class="font-medium">{format!("{}명", summary.made_recipe_count)}</span>
                    </div>
                    {(summary.would_make_again_percentage > 0.0).then(|| view! {
                        <div class="flex justify-between">
                            <span class="text-gray-600">"다시 만들고 싶다고 응답"</span>
                            <span class="font-medium">{format!("{:.0}%", summary.would_make_again_percentage)}</span>
                        </div>
                    })}
                </div>
            });

            view! {
                <div class="bg-white rounded-lg shadow p-6">
                    <h3 class="text-lg font-semibold mb-4">"평가 요약"</h3>
                    <div class="flex items-center gap-2 mb-4">
                        <StarRating rating=summary.average_rating size="w-5 h-5" />
                        <span class="text-sm text-gray-600">
                            {format!("{:.1} ({}개 리뷰)", summary.average_rating, summary.total_feedbacks)}
                        </span>
                    </div>
                    <div class="space-y-2">{distribution}</div>
                    {made_it}
                </div>
            }
        })}
    }
}
