//! Navigation Bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.auth.session_signal();
    let favorites = ctx.favorites.favorites_signal();
    let auth = ctx.auth.clone();
    let navigate = StoredValue::new_local(use_navigate());

    let on_logout = move |_| {
        auth.logout();
        navigate.with_value(|navigate| navigate("/", Default::default()));
    };

    view! {
        <header class="bg-white shadow">
            <nav class="container mx-auto px-4 py-4 flex items-center justify-between">
                <A href="/" attr:class="text-2xl font-bold text-blue-600">"ChefCatherine"</A>
                <div class="flex items-center gap-6">
                    <A href="/recipes" attr:class="text-gray-700 hover:text-blue-600">"레시피"</A>
                    <A href="/survey" attr:class="text-gray-700 hover:text-blue-600">"맞춤 추천"</A>
                    <A href="/favorites" attr:class="text-gray-700 hover:text-blue-600">
                        {move || format!("즐겨찾기 ({})", favorites.with(Vec::len))}
                    </A>
                    <Show
                        when=move || session.with(|s| s.is_authenticated())
                        fallback=|| view! {
                            <A href="/login" attr:class="text-gray-700 hover:text-blue-600">"로그인"</A>
                            <A href="/register" attr:class="px-4 py-2 bg-blue-600 text-white rounded-md">"회원가입"</A>
                        }
                    >
                        <A href="/profile" attr:class="text-gray-700 hover:text-blue-600">
                            {move || session.with(|s| s.user().map(|u| u.display_name().to_string()).unwrap_or_default())}
                        </A>
                        <button class="text-gray-500 hover:text-gray-800" on:click=on_logout.clone()>
                            "로그아웃"
                        </button>
                    </Show>
                </div>
            </nav>
        </header>
    }
}
