//! Feedback List Component
//!
//! Reviews for a recipe, loaded a page at a time with "load more".

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorNotice, StarRating};
use crate::context::use_app_context;
use crate::hooks::use_api;
use crate::models::{Feedback, FeedbackQuery, FeedbackType};

#[component]
pub fn FeedbackList(
    #[prop(optional)] recipe_id: Option<String>,
    #[prop(default = 10)] limit: u32,
    /// Bump to reload from the first page, e.g. after a new submission
    #[prop(optional, into)]
    refresh: Signal<u32>,
) -> impl IntoView {
    let api = use_app_context().api;
    let hook = use_api(move |query: FeedbackQuery| {
        let api = api.clone();
        async move { api.list_feedback(&query).await }
    });
    on_cleanup({
        let hook = hook.clone();
        move || hook.cancel()
    });

    let feedbacks = RwSignal::new(Vec::<Feedback>::new());
    let page = RwSignal::new(1u32);
    let has_more = RwSignal::new(false);
    let loading = hook.loading();
    let error = Signal::derive({
        let error = hook.error();
        move || error.get().map(|e| e.user_message("피드백을 불러오는데 실패했습니다."))
    });

    let load = move |next: u32| {
        let hook = hook.clone();
        let query = FeedbackQuery {
            page: next,
            size: limit,
            recipe_id: recipe_id.clone(),
        };
        spawn_local(async move {
            if let Ok(result) = hook.execute(query).await {
                has_more.set(result.items.len() as u32 == limit);
                page.set(next);
                if next == 1 {
                    feedbacks.set(result.items);
                } else {
                    feedbacks.update(|list| list.extend(result.items));
                }
            }
        });
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            refresh.track();
            load(1);
        }
    });

    view! {
        <div class="space-y-4">
            <ErrorNotice message=error />
            <Show
                when=move || !feedbacks.with(Vec::is_empty)
                fallback=move || view! {
                    <Show when=move || !loading.get()>
                        <p class="text-center text-gray-500 py-4">"아직 피드백이 없습니다."</p>
                    </Show>
                }
            >
                <h3 class="text-lg font-semibold">"사용자 피드백"</h3>
                <For
                    each=move || feedbacks.get()
                    key=|feedback| feedback.id.clone()
                    children=|feedback| view! { <FeedbackItem feedback=feedback /> }
                />
            </Show>
            <Show when=move || has_more.get()>
                <div class="text-center">
                    <button
                        class="px-4 py-2 bg-gray-200 rounded-md disabled:opacity-50"
                        disabled=move || loading.get()
                        on:click={
                            let load = load.clone();
                            move |_| load(page.get_untracked() + 1)
                        }
                    >
                        {move || if loading.get() { "로딩 중..." } else { "더 보기" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FeedbackItem(feedback: Feedback) -> impl IntoView {
    let badge = feedback.category_badge().map(|(label, class)| view! {
        <span class=format!("px-2 py-1 rounded-full text-xs {}", class)>{label}</span>
    });
    let detailed = (feedback.feedback_type == FeedbackType::Recipe).then(|| {
        let rows = [
            ("난이도", feedback.difficulty_rating),
            ("맛", feedback.taste_rating),
            ("건강도", feedback.health_rating),
        ];
        view! {
            <div class="flex gap-4 text-sm text-gray-600 mt-2">
                {rows
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|value| view! {
                        <span>{format!("{}: {}/5", label, value)}</span>
                    }))
                    .collect_view()}
            </div>
        }
    });
    let experience = feedback.made_recipe.then(|| {
        let warnings = [
            (feedback.cooking_time_accurate, "⚠ 조리시간 부정확"),
            (feedback.instructions_clear, "⚠ 설명 불명확"),
            (feedback.ingredients_available, "⚠ 재료 구하기 어려움"),
        ];
        view! {
            <div class="flex flex-wrap gap-2 mt-2 text-xs">
                <span class="px-2 py-1 bg-green-100 text-green-800 rounded">"✓ 직접 만들어봄"</span>
                {(feedback.would_make_again == Some(true)).then(|| view! {
                    <span class="px-2 py-1 bg-blue-100 text-blue-800 rounded">"✓ 다시 만들 예정"</span>
                })}
                {warnings
                    .into_iter()
                    .filter(|(flag, _)| *flag == Some(false))
                    .map(|(_, text)| view! { <span class="px-2 py-1 bg-yellow-100 text-yellow-800 rounded">{text}</span> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="border-b pb-4">
            <div class="flex justify-between items-center">
                <div class="flex items-center gap-2">
                    <span class="font-medium">{feedback.author()}</span>
                    {badge}
                </div>
                <span class="text-sm text-gray-500">{feedback.created_date()}</span>
            </div>
            {feedback.rating.map(|rating| view! { <StarRating rating=f64::from(rating) /> })}
            {detailed}
            {experience}
            {feedback.comment.clone().map(|comment| view! { <p class="mt-2 text-gray-700">{comment}</p> })}
            {feedback.improvements.clone().map(|text| view! {
                <div class="mt-2 text-sm">
                    <span class="font-medium">"개선 제안: "</span>
                    <p class="text-gray-600">{text}</p>
                </div>
            })}
            {feedback.admin_response.clone().map(|text| view! {
                <div class="mt-2 p-2 bg-gray-50 rounded text-sm">
                    <span class="font-medium">"관리자 답변: "</span>
                    <p class="text-gray-600">{text}</p>
                </div>
            })}
        </div>
    }
}
