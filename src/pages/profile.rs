//! Profile Page
//!
//! Account details, profile editing and the user's recent surveys.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::{ErrorNotice, Spinner};
use crate::context::use_app_context;
use crate::models::{display_date, ProfileUpdate, SurveyResponse, UserProfile};
use crate::pages::register::GENDERS;

const SAVE_FAILED: &str = "프로필 저장에 실패했습니다.";

fn gender_label(value: &str) -> &'static str {
    GENDERS
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
        .unwrap_or("기타")
}

/// Edit form contents; empty fields are left out of the update
#[derive(Clone, Default)]
struct ProfileForm {
    name: String,
    age: String,
    gender: String,
}

impl ProfileForm {
    fn from_user(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            age: user.age.map(|age| age.to_string()).unwrap_or_default(),
            gender: user.gender.clone().unwrap_or_default(),
        }
    }

    fn to_update(&self) -> ProfileUpdate {
        let name = self.name.trim();
        ProfileUpdate {
            name: (!name.is_empty()).then(|| name.to_string()),
            age: self.age.trim().parse().ok(),
            gender: (!self.gender.is_empty()).then(|| self.gender.clone()),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.auth.session_signal();

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=|| view! {
                <div class="text-center py-16">
                    <p class="text-gray-600 mb-4">"로그인이 필요합니다."</p>
                    <A href="/login" attr:class="px-4 py-2 bg-blue-600 text-white rounded-md">"로그인"</A>
                </div>
            }
        >
            <div class="max-w-2xl mx-auto px-4 py-8 space-y-8">
                <ProfileCard />
                <SurveyHistory />
            </div>
        </Show>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let auth = use_app_context().auth;
    let session = auth.session_signal();
    let navigate = StoredValue::new_local(use_navigate());

    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let form = RwSignal::new(ProfileForm::default());

    let start_editing = {
        let auth = auth.clone();
        move |_| {
            if let Some(user) = auth.user() {
                form.set(ProfileForm::from_user(&user));
            }
            set_error.set(None);
            set_editing.set(true);
        }
    };

    let on_save = {
        let auth = auth.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let update = form.get_untracked().to_update();
            let auth = auth.clone();
            set_saving.set(true);
            spawn_local(async move {
                match auth.save_profile(&update).await {
                    Ok(()) => set_editing.set(false),
                    Err(e) => set_error.set(Some(e.user_message(SAVE_FAILED))),
                }
                set_saving.set(false);
            });
        }
    };

    let on_logout = move |_| {
        auth.logout();
        navigate.with_value(|navigate| navigate("/", Default::default()));
    };

    let details = move || {
        session.with(|s| {
            s.user().map(|user| {
                let age = user.age.map(|age| view! {
                    <div>
                        <p class="text-sm font-medium text-gray-500">"나이"</p>
                        <p class="mt-1 text-sm text-gray-900">{age}</p>
                    </div>
                });
                let gender = user.gender.as_deref().map(|gender| view! {
                    <div>
                        <p class="text-sm font-medium text-gray-500">"성별"</p>
                        <p class="mt-1 text-sm text-gray-900">{gender_label(gender)}</p>
                    </div>
                });
                let joined = user.created_at.as_deref().map(|raw| view! {
                    <div>
                        <p class="text-sm font-medium text-gray-500">"가입일"</p>
                        <p class="mt-1 text-sm text-gray-900">{display_date(raw)}</p>
                    </div>
                });
                view! {
                    <div>
                        <p class="text-sm font-medium text-gray-500">"이메일"</p>
                        <p class="mt-1 text-sm text-gray-900">{user.email.clone()}</p>
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-500">"이름"</p>
                        <p class="mt-1 text-sm text-gray-900">{user.name.clone()}</p>
                    </div>
                    {age}
                    {gender}
                    {joined}
                }
            })
        })
    };

    view! {
        <div class="bg-white shadow rounded-lg">
            <div class="px-6 py-4 border-b border-gray-200">
                <h2 class="text-2xl font-bold text-gray-900">"내 프로필"</h2>
            </div>
            <div class="p-6">
                <Show when=move || editing.get()>
                    <form class="space-y-4" on:submit=on_save.clone()>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"이름"</label>
                            <input
                                type="text"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"나이"</label>
                            <input
                                type="number"
                                min="1"
                                max="120"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md"
                                prop:value=move || form.with(|f| f.age.clone())
                                on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"성별"</label>
                            <select
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md"
                                prop:value=move || form.with(|f| f.gender.clone())
                                on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                            >
                                <option value="">"선택하세요"</option>
                                {GENDERS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <ErrorNotice message=error />
                        <div class="flex gap-2">
                            <button
                                type="submit"
                                class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                                disabled=saving
                            >
                                "저장"
                            </button>
                            <button
                                type="button"
                                class="px-4 py-2 bg-gray-300 text-gray-700 rounded-md hover:bg-gray-400"
                                on:click=move |_| set_editing.set(false)
                            >
                                "취소"
                            </button>
                        </div>
                    </form>
                </Show>
                <Show when=move || !editing.get()>
                    <div class="space-y-4">
                        {details}
                        <div class="flex gap-2 pt-4">
                            <button
                                class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                                on:click=start_editing.clone()
                            >
                                "프로필 수정"
                            </button>
                            <button
                                class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700"
                                on:click=on_logout.clone()
                            >
                                "로그아웃"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Recent surveys from the survey store
#[component]
fn SurveyHistory() -> impl IntoView {
    let survey = use_app_context().survey;
    let (loaded, set_loaded) = signal(false);
    {
        let survey = survey.clone();
        spawn_local(async move {
            survey.fetch_survey_history().await;
            set_loaded.set(true);
        });
    }

    let error = Signal::derive({
        let survey = survey.clone();
        move || survey.error()
    });
    let history = move || survey.survey_history();

    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-semibold mb-4">"최근 설문"</h3>
            <ErrorNotice message=error />
            <Show when=move || loaded.get() fallback=|| view! { <Spinner /> }>
                {
                    let history = history.clone();
                    move || {
                        let entries = history();
                        if entries.is_empty() {
                            view! { <p class="text-gray-500 text-sm">"아직 작성한 설문이 없습니다."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="divide-y">
                                    {entries.into_iter().map(history_row).collect_view()}
                                </ul>
                            }
                            .into_any()
                        }
                    }
                }
            </Show>
        </div>
    }
}

fn history_row(entry: SurveyResponse) -> impl IntoView {
    let date = entry.created_at.as_deref().map(display_date).unwrap_or_default();
    let score = entry
        .wellness_score
        .map(|score| format!("{:.0}점", score))
        .unwrap_or_else(|| "-".to_string());
    view! {
        <li class="py-3 flex justify-between items-center">
            <span class="text-sm text-gray-600">{date}</span>
            <span class="font-medium">{score}</span>
            <A href=format!("/survey/results/{}", entry.id) attr:class="text-blue-600 text-sm hover:text-blue-800">
                "결과 보기"
            </A>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_form_to_update() {
        let form = ProfileForm {
            name: " 김철수 ".to_string(),
            age: "34".to_string(),
            gender: String::new(),
        };
        let update = form.to_update();
        assert_eq!(update.name.as_deref(), Some("김철수"));
        assert_eq!(update.age, Some(34));
        assert_eq!(update.gender, None);
    }

    #[test]
    fn test_blank_name_keeps_stored_name() {
        let form = ProfileForm {
            name: "   ".to_string(),
            age: "41".to_string(),
            ..Default::default()
        };
        let update = form.to_update();
        assert_eq!(update.name, None);

        let mut user = UserProfile {
            id: "u1".to_string(),
            email: "lee@example.com".to_string(),
            name: "이영희".to_string(),
            age: None,
            gender: None,
            created_at: None,
            extra: Default::default(),
        };
        user.merge(&update);
        assert_eq!(user.name, "이영희");
        assert_eq!(user.age, Some(41));
    }

    #[test]
    fn test_unparseable_age_is_omitted() {
        let form = ProfileForm {
            age: "abc".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_update().age, None);
    }

    #[test]
    fn test_gender_label() {
        assert_eq!(gender_label("female"), "여성");
        assert_eq!(gender_label("unknown"), "기타");
    }
}
