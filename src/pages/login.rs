//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::ErrorNotice;
use crate::context::use_app_context;

const LOGIN_FAILED: &str = "로그인에 실패했습니다.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_app_context().auth;
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_pending.set(true);
        set_error.set(None);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(()) => navigate("/", Default::default()),
                Err(e) => set_error.set(Some(e.user_message(LOGIN_FAILED))),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-4 py-12">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-gray-900">"로그인"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        type="email"
                        required
                        placeholder="이메일 주소"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        required
                        placeholder="비밀번호"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <ErrorNotice message=error />
                    <button
                        type="submit"
                        class="w-full py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled=pending
                    >
                        {move || if pending.get() { "로그인 중..." } else { "로그인" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    "계정이 없으신가요? "
                    <A href="/register" attr:class="text-blue-600 hover:text-blue-800">"회원가입"</A>
                </p>
            </div>
        </div>
    }
}
