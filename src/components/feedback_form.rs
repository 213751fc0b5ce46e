//! Feedback Form Component
//!
//! Recipe, survey or general feedback. The feedback type follows from which
//! ids are supplied; ratings are only asked for recipes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorNotice;
use crate::context::use_app_context;
use crate::hooks::use_api;
use crate::models::{FeedbackReceipt, NewFeedback, FEEDBACK_CATEGORIES, MAX_RATING, MIN_RATING};

const SUBMIT_FAILED: &str = "피드백 제출에 실패했습니다.";
const SUBMITTED: &str = "피드백이 성공적으로 제출되었습니다!";

/// Rating inputs: `(label, getter, setter)`
type RatingField = (&'static str, fn(&NewFeedback) -> u8, fn(&mut NewFeedback, u8));

const RATINGS: [RatingField; 4] = [
    ("전체 평점", |f: &NewFeedback| f.rating, |f: &mut NewFeedback, v: u8| f.rating = v),
    ("난이도", |f: &NewFeedback| f.difficulty_rating, |f: &mut NewFeedback, v: u8| f.difficulty_rating = v),
    ("맛", |f: &NewFeedback| f.taste_rating, |f: &mut NewFeedback, v: u8| f.taste_rating = v),
    ("건강도", |f: &NewFeedback| f.health_rating, |f: &mut NewFeedback, v: u8| f.health_rating = v),
];

/// Checkboxes shown once "made it" is ticked
type FlagField = (&'static str, fn(&NewFeedback) -> bool, fn(&mut NewFeedback, bool));

const EXPERIENCE_FLAGS: [FlagField; 4] = [
    ("다시 만들고 싶습니다", |f: &NewFeedback| f.would_make_again, |f: &mut NewFeedback, v: bool| f.would_make_again = v),
    ("조리 시간이 정확했습니다", |f: &NewFeedback| f.cooking_time_accurate, |f: &mut NewFeedback, v: bool| f.cooking_time_accurate = v),
    ("조리 방법이 명확했습니다", |f: &NewFeedback| f.instructions_clear, |f: &mut NewFeedback, v: bool| f.instructions_clear = v),
    ("재료를 쉽게 구할 수 있었습니다", |f: &NewFeedback| f.ingredients_available, |f: &mut NewFeedback, v: bool| f.ingredients_available = v),
];

#[component]
pub fn FeedbackForm(
    #[prop(optional)] recipe_id: Option<String>,
    #[prop(optional)] survey_id: Option<String>,
    #[prop(optional, into)] on_submitted: Option<Callback<FeedbackReceipt>>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let is_recipe = recipe_id.is_some();

    let mut initial = NewFeedback::new(recipe_id, survey_id);
    if let Some(user) = ctx.auth.user() {
        initial.user_email = user.email.clone();
        initial.user_name = user.name.clone();
    }
    let form = RwSignal::new(initial);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let api = ctx.api.clone();
    let submit = use_api(move |feedback: NewFeedback| {
        let api = api.clone();
        async move { api.submit_feedback(&feedback).await }
    });
    on_cleanup({
        let submit = submit.clone();
        move || submit.cancel()
    });
    let submitting = submit.loading();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);
        let feedback = form.get_untracked();
        if let Err(e) = feedback.validate() {
            set_error.set(Some(e.user_message()));
            return;
        }
        set_error.set(None);

        let submit = submit.clone();
        spawn_local(async move {
            match submit.execute(feedback).await {
                Ok(receipt) => {
                    log::info!("[FEEDBACK] Submitted {}", receipt.id);
                    form.update(NewFeedback::reset_after_submit);
                    set_notice.set(Some(SUBMITTED.to_string()));
                    if let Some(callback) = on_submitted {
                        callback.run(receipt);
                    }
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    log::error!("[FEEDBACK] Submit error: {}", e);
                    set_error.set(Some(e.user_message(SUBMIT_FAILED)));
                }
            }
        });
    };

    let rating_inputs = is_recipe.then(|| {
        let ratings = RATINGS
            .into_iter()
            .map(|(label, get, set)| view! {
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
                    <input
                        type="number"
                        min=MIN_RATING.to_string()
                        max=MAX_RATING.to_string()
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || form.with(get).to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<u8>().unwrap_or(0);
                            form.update(|f| set(f, value));
                        }
                    />
                </div>
            })
            .collect_view();

        view! {
            <div class="grid grid-cols-2 gap-4">{ratings}</div>
            <div class="space-y-2">
                <label class="flex items-center">
                    <input
                        type="checkbox"
                        class="mr-2"
                        prop:checked=move || form.with(|f| f.made_recipe)
                        on:change=move |ev| form.update(|f| f.made_recipe = event_target_checked(&ev))
                    />
                    <span class="text-sm">"이 레시피를 만들어 보았습니다"</span>
                </label>
                <Show when=move || form.with(|f| f.made_recipe)>
                    {EXPERIENCE_FLAGS
                        .into_iter()
                        .map(|(label, get, set)| view! {
                            <label class="flex items-center ml-6">
                                <input
                                    type="checkbox"
                                    class="mr-2"
                                    prop:checked=move || form.with(get)
                                    on:change=move |ev| form.update(|f| set(f, event_target_checked(&ev)))
                                />
                                <span class="text-sm">{label}</span>
                            </label>
                        })
                        .collect_view()}
                </Show>
            </div>
        }
    });

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h3 class="text-lg font-semibold mb-4">"피드백 작성"</h3>
            <form class="space-y-4" on:submit=on_submit>
                {rating_inputs}

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"의견"</label>
                    <textarea
                        rows="4"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="레시피에 대한 의견을 자유롭게 작성해주세요"
                        prop:value=move || form.with(|f| f.comment.clone())
                        on:input=move |ev| form.update(|f| f.comment = event_target_value(&ev))
                    ></textarea>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"개선 사항"</label>
                    <textarea
                        rows="3"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="개선이 필요한 부분이 있다면 알려주세요"
                        prop:value=move || form.with(|f| f.improvements.clone())
                        on:input=move |ev| form.update(|f| f.improvements = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"이름"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                            prop:value=move || form.with(|f| f.user_name.clone())
                            on:input=move |ev| form.update(|f| f.user_name = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"이메일 *"</label>
                        <input
                            type="email"
                            required
                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                            prop:value=move || form.with(|f| f.user_email.clone())
                            on:input=move |ev| form.update(|f| f.user_email = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"피드백 유형"</label>
                    <select
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        {FEEDBACK_CATEGORIES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>

                <ErrorNotice message=error />
                <Show when=move || notice.with(Option::is_some)>
                    <div class="p-3 bg-green-100 text-green-700 rounded-md text-sm">
                        {move || notice.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="flex gap-2">
                    <button
                        type="submit"
                        class="px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "제출 중..." } else { "피드백 제출" }}
                    </button>
                    {on_cancel.map(|cancel| view! {
                        <button
                            type="button"
                            class="px-6 py-2 bg-gray-200 rounded-md"
                            on:click=move |_| cancel.run(())
                        >
                            "취소"
                        </button>
                    })}
                </div>
            </form>
        </div>
    }
}
