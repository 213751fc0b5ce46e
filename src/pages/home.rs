//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;

/// `(icon background, title, body)` of each feature tile
const FEATURES: [(&str, &str, &str); 3] = [
    ("bg-blue-100", "맞춤형 설문", "건강 상태와 선호도를 분석하여 최적의 레시피를 추천합니다."),
    ("bg-green-100", "영양 정보", "각 레시피의 상세한 영양 정보를 제공하여 건강한 식단 관리를 돕습니다."),
    ("bg-purple-100", "웰니스 점수", "개인의 건강 상태를 분석하여 웰니스 점수와 개선 방안을 제시합니다."),
];

const STEPS: [(&str, &str); 3] = [
    ("설문 작성", "건강 정보와 음식 선호도를 입력합니다."),
    ("AI 분석", "AI가 당신에게 최적화된 레시피를 추천합니다."),
    ("요리 시작", "상세한 레시피를 따라 건강한 요리를 만듭니다."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let features = FEATURES
        .into_iter()
        .map(|(icon, title, body)| view! {
            <div class="bg-white p-6 rounded-lg shadow-md text-center">
                <div class=format!("w-16 h-16 {} rounded-full mx-auto mb-4", icon)></div>
                <h3 class="text-xl font-semibold mb-2">{title}</h3>
                <p class="text-gray-600">{body}</p>
            </div>
        })
        .collect_view();

    let steps = STEPS
        .into_iter()
        .enumerate()
        .map(|(i, (title, body))| view! {
            <div class="text-center">
                <div class="w-12 h-12 bg-blue-600 text-white rounded-full flex items-center justify-center mx-auto mb-4 text-xl font-bold">
                    {i + 1}
                </div>
                <h3 class="text-lg font-semibold mb-2">{title}</h3>
                <p class="text-gray-600 text-sm">{body}</p>
            </div>
        })
        .collect_view();

    view! {
        <div>
            <section class="bg-gradient-to-r from-blue-600 to-blue-800 text-white py-20">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-5xl font-bold mb-6">"AI가 추천하는 맞춤형 레시피"</h1>
                    <p class="text-xl mb-8 max-w-2xl mx-auto">
                        "당신의 건강 상태, 선호도, 라이프스타일에 딱 맞는 레시피를 추천해드립니다."
                    </p>
                    <div class="flex gap-4 justify-center">
                        <A href="/survey" attr:class="px-8 py-3 bg-white text-blue-600 rounded-lg font-semibold hover:bg-gray-100">
                            "맞춤 추천 시작하기"
                        </A>
                        <A href="/recipes" attr:class="px-8 py-3 border-2 border-white text-white rounded-lg font-semibold">
                            "레시피 둘러보기"
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-12">"주요 기능"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{features}</div>
                </div>
            </section>

            <section class="py-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-12">"이용 방법"</h2>
                    <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">{steps}</div>
                </div>
            </section>

            <section class="py-16 bg-blue-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl font-bold mb-4">"지금 시작하세요!"</h2>
                    <p class="text-xl mb-8 max-w-2xl mx-auto">"5분의 설문으로 평생 건강한 식습관을 만들어보세요."</p>
                    <A href="/survey" attr:class="inline-block px-8 py-3 bg-white text-blue-600 rounded-lg font-semibold">
                        "무료로 시작하기"
                    </A>
                </div>
            </section>
        </div>
    }
}
