//! Site Footer
//!
//! Static links plus a backend availability indicator from `GET /health`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::hooks::use_api;

#[component]
pub fn Footer() -> impl IntoView {
    let api = use_app_context().api;
    let health = use_api(move |()| {
        let api = api.clone();
        async move { api.health().await }
    });
    health.execute_on_mount(());

    let data = health.data();
    let error = health.error();
    let status = move || match (data.get(), error.get()) {
        (Some(status), _) if status.is_healthy() => ("bg-green-500", "서비스 정상"),
        (None, None) => ("bg-gray-400", "확인 중"),
        _ => ("bg-red-500", "서비스 점검 중"),
    };

    view! {
        <footer class="bg-gray-800 text-white">
            <div class="container mx-auto px-4 py-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"ChefCatherine"</h3>
                        <p class="text-gray-300 text-sm">
                            "AI 기반 맞춤형 레시피 추천 서비스로 건강하고 맛있는 식생활을 도와드립니다."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"빠른 링크"</h4>
                        <ul class="space-y-2 text-sm">
                            <li><A href="/recipes" attr:class="text-gray-300 hover:text-white">"레시피 둘러보기"</A></li>
                            <li><A href="/survey" attr:class="text-gray-300 hover:text-white">"맞춤 추천 받기"</A></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"레시피 카테고리"</h4>
                        <ul class="space-y-2 text-gray-300 text-sm">
                            <li>"한식"</li>
                            <li>"중식"</li>
                            <li>"일식"</li>
                            <li>"양식"</li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"문의"</h4>
                        <p class="text-gray-300 text-sm">"이메일: contact@chefcatherine.com"</p>
                        <p class="text-gray-300 text-sm">"전화: 02-1234-5678"</p>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-gray-700 flex justify-between items-center text-sm text-gray-400">
                    <p>"© 2025 ChefCatherine. All rights reserved."</p>
                    <p class="flex items-center gap-2">
                        <span class=move || format!("inline-block w-2 h-2 rounded-full {}", status().0)></span>
                        {move || status().1}
                    </p>
                </div>
            </div>
        </footer>
    }
}
