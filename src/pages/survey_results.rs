//! Survey Results Page
//!
//! Wellness score ring, advice lists and a summary of the stored answers.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::Spinner;
use crate::context::use_app_context;
use crate::hooks::use_api;
use crate::models::{SurveyResponse, WellnessResult};

/// Circumference of the score ring (`2πr`, r = 65)
const RING_LENGTH: f64 = 408.0;

const NOT_PROVIDED: &str = "미제공";

fn ring_dasharray(result: &WellnessResult) -> String {
    format!("{} {}", result.score_fraction() * RING_LENGTH, RING_LENGTH)
}

fn or_not_provided(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_PROVIDED)
        .to_string()
}

#[component]
pub fn SurveyResultsPage() -> impl IntoView {
    let api = use_app_context().api;
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    let survey = use_api({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            async move { api.survey_results(&id).await }
        }
    });
    let wellness = use_api(move |id: String| {
        let api = api.clone();
        async move { api.wellness(&id).await }
    });
    on_cleanup({
        let survey = survey.clone();
        let wellness = wellness.clone();
        move || {
            survey.cancel();
            wellness.cancel();
        }
    });

    Effect::new({
        let survey = survey.clone();
        let wellness = wellness.clone();
        move |_| {
            let id = id.get();
            survey.execute_on_mount(id.clone());
            wellness.execute_on_mount(id);
        }
    });

    let survey_data = survey.data();
    let wellness_data = wellness.data();
    let loading = Signal::derive({
        let survey_loading = survey.loading();
        let wellness_loading = wellness.loading();
        move || survey_loading.get() || wellness_loading.get()
    });
    let failed = Signal::derive({
        let survey_error = survey.error();
        let wellness_error = wellness.error();
        move || survey_error.with(Option::is_some) || wellness_error.with(Option::is_some)
    });

    move || match (survey_data.get(), wellness_data.get()) {
        (Some(survey), Some(wellness)) if !loading.get() => {
            view! { <ResultsView survey=survey wellness=wellness /> }.into_any()
        }
        _ if failed.get() => view! {
            <div class="text-center py-8">
                <p class="text-red-600">"결과를 불러오는 중 오류가 발생했습니다."</p>
                <A href="/" attr:class="inline-block mt-4 px-4 py-2 bg-blue-600 text-white rounded-md">
                    "홈으로 돌아가기"
                </A>
            </div>
        }
        .into_any(),
        _ => view! { <Spinner /> }.into_any(),
    }
}

#[component]
fn ResultsView(survey: SurveyResponse, wellness: WellnessResult) -> impl IntoView {
    let category = wellness.category();
    let advice = [
        ("bg-blue-50", "text-blue-800", "text-blue-600", "추천사항", "•", &wellness.recommendations),
        ("bg-red-50", "text-red-800", "text-red-600", "주의 사항", "!", &wellness.risk_factors),
        ("bg-yellow-50", "text-yellow-800", "text-yellow-600", "개선 영역", "↑", &wellness.improvement_areas),
    ]
    .into_iter()
    .map(|(background, heading, marker_color, title, marker, items)| {
        let rows = items
            .iter()
            .map(|item| view! {
                <li class="text-sm text-gray-700 flex items-start">
                    <span class=format!("{} mr-2", marker_color)>{marker}</span>
                    {item.clone()}
                </li>
            })
            .collect_view();
        view! {
            <div class=format!("{} rounded-lg p-4", background)>
                <h3 class=format!("font-semibold {} mb-3", heading)>{title}</h3>
                <ul class="space-y-2">{rows}</ul>
            </div>
        }
    })
    .collect_view();

    let answers = &survey.answers;
    let facts = |rows: [(&'static str, String); 3]| {
        rows.into_iter()
            .map(|(label, value)| view! {
                <p><span class="font-medium">{format!("{}:", label)}</span>" "{value}</p>
            })
            .collect_view()
    };
    let basic = facts([
        ("나이", or_not_provided(&answers.age)),
        ("성별", or_not_provided(&answers.gender)),
        ("활동 수준", or_not_provided(&answers.activity_level)),
    ]);
    let goals = facts([
        ("식사 대상", or_not_provided(&answers.meal_target)),
        ("다이어트 목표", or_not_provided(&answers.diet_goal)),
        ("주간 예산", or_not_provided(&answers.weekly_budget)),
    ]);
    let chips = |items: &[String], class: &'static str| {
        items
            .iter()
            .map(|item| view! { <span class=format!("px-2 py-1 {} text-xs rounded-full", class)>{item.clone()}</span> })
            .collect_view()
    };
    let interests = chips(&answers.health_interests, "bg-green-100 text-green-800");
    let restrictions = chips(&answers.dietary_restrictions, "bg-orange-100 text-orange-800");

    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            <h1 class="text-3xl font-bold mb-8 text-center">"설문 결과 분석"</h1>

            <div class="bg-white rounded-lg shadow-lg p-8 mb-8">
                <div class="text-center mb-6">
                    <h2 class="text-2xl font-semibold mb-4">"웰니스 점수"</h2>
                    <div class="relative inline-flex items-center justify-center">
                        <svg class="w-40 h-40">
                            <circle class="text-gray-300" stroke-width="10" stroke="currentColor" fill="transparent" r="65" cx="80" cy="80" />
                            <circle
                                class="text-blue-600"
                                stroke-width="10"
                                stroke-dasharray=ring_dasharray(&wellness)
                                stroke-linecap="round"
                                stroke="currentColor"
                                fill="transparent"
                                r="65"
                                cx="80"
                                cy="80"
                                transform="rotate(-90 80 80)"
                            />
                        </svg>
                        <span class="absolute text-4xl font-bold">{wellness.wellness_score}</span>
                    </div>
                    <p class=format!("text-xl font-medium mt-4 {}", category.text_class())>{category.label()}</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8">{advice}</div>
            </div>

            <div class="bg-white rounded-lg shadow-lg p-8 mb-8">
                <h2 class="text-2xl font-semibold mb-6">"설문 요약"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <h3 class="font-medium text-gray-700 mb-2">"기본 정보"</h3>
                        <div class="space-y-1 text-sm">{basic}</div>
                    </div>
                    <div>
                        <h3 class="font-medium text-gray-700 mb-2">"식사 목표"</h3>
                        <div class="space-y-1 text-sm">{goals}</div>
                    </div>
                    <div>
                        <h3 class="font-medium text-gray-700 mb-2">"건강 관심사"</h3>
                        <div class="flex flex-wrap gap-2 mt-2">{interests}</div>
                    </div>
                    <div>
                        <h3 class="font-medium text-gray-700 mb-2">"식이 제한"</h3>
                        <div class="flex flex-wrap gap-2 mt-2">{restrictions}</div>
                    </div>
                </div>
            </div>

            <div class="flex justify-center gap-4">
                <A href="/recipes" attr:class="px-6 py-3 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                    "추천 레시피 보기"
                </A>
                <A href="/survey" attr:class="px-6 py-3 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300">
                    "설문 다시하기"
                </A>
            </div>
        </div>
    }
}
