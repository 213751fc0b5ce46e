//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::ErrorNotice;
use crate::context::use_app_context;
use crate::models::RegisterRequest;

const REGISTER_FAILED: &str = "회원가입에 실패했습니다.";
const PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";

/// `(value, label)` pairs for the gender select
pub(crate) const GENDERS: [(&str, &str); 3] = [("male", "남성"), ("female", "여성"), ("other", "기타")];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_app_context().auth;
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterRequest::default());
    let (confirm, set_confirm) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = form.get_untracked();
        if request.password != confirm.get_untracked() {
            set_error.set(Some(PASSWORD_MISMATCH.to_string()));
            return;
        }
        set_pending.set(true);
        set_error.set(None);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.register(&request).await {
                Ok(()) => navigate("/survey", Default::default()),
                Err(e) => set_error.set(Some(e.user_message(REGISTER_FAILED))),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-4 py-12">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-gray-900">"회원가입"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        type="text"
                        required
                        placeholder="이름"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        required
                        placeholder="이메일 주소"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        required
                        placeholder="비밀번호"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        required
                        placeholder="비밀번호 확인"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                    <div class="grid grid-cols-2 gap-4">
                        <input
                            type="number"
                            min="1"
                            max="120"
                            placeholder="나이"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                            on:input=move |ev| form.update(|f| f.age = event_target_value(&ev).parse().ok())
                        />
                        <select
                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.gender = (!value.is_empty()).then_some(value));
                            }
                        >
                            <option value="">"성별 선택"</option>
                            {GENDERS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <ErrorNotice message=error />
                    <button
                        type="submit"
                        class="w-full py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled=pending
                    >
                        {move || if pending.get() { "가입 중..." } else { "회원가입" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    "이미 계정이 있으신가요? "
                    <A href="/login" attr:class="text-blue-600 hover:text-blue-800">"로그인"</A>
                </p>
            </div>
        </div>
    }
}
