//! Survey Wizard Page
//!
//! Renders the current wizard step; the last "next" submits and hands the
//! new survey id to the results page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::ErrorNotice;
use crate::context::use_app_context;
use crate::models::ScalarField;
use crate::wizard::{submit_survey, Advance, Question, SurveyStep, SurveyWizard};

#[component]
pub fn SurveyFormPage() -> impl IntoView {
    let survey = use_app_context().survey;
    let navigate = use_navigate();

    let wizard = ArcRwSignal::new(SurveyWizard::new());
    let step = Memo::new({
        let wizard = wizard.clone();
        move |_| wizard.with(SurveyWizard::step)
    });
    let submitting = Signal::derive({
        let survey = survey.clone();
        move || survey.is_submitting()
    });
    let (error, set_error) = signal::<Option<String>>(None);

    let on_previous = {
        let wizard = wizard.clone();
        move |_| {
            set_error.set(None);
            wizard.update(SurveyWizard::previous);
        }
    };

    let on_next = {
        let wizard = wizard.clone();
        move |_| {
            set_error.set(None);
            if wizard.try_update(SurveyWizard::next) != Some(Advance::Submit) {
                return;
            }
            let wizard = wizard.clone();
            let survey = survey.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match submit_survey(&wizard, &survey).await {
                    Ok(id) => navigate(&format!("/survey/results/{}", id), Default::default()),
                    Err(e) => {
                        log::warn!("[SURVEY] Not submitted: {}", e);
                        set_error.set(Some(e.user_message()));
                    }
                }
            });
        }
    };

    let progress = SurveyStep::ALL
        .into_iter()
        .map(|this| view! {
            <div class=move || { if this.index() <= step.get().index() { "flex-1 text-center text-blue-600" } else { "flex-1 text-center text-gray-400" } }>
                <div class=move || {
                    if this.index() <= step.get().index() {
                        "w-10 h-10 mx-auto rounded-full flex items-center justify-center bg-blue-600 text-white"
                    } else {
                        "w-10 h-10 mx-auto rounded-full flex items-center justify-center bg-gray-200"
                    }
                }>
                    {move || if this.index() < step.get().index() { "✓".to_string() } else { (this.index() + 1).to_string() }}
                </div>
                <p class="text-xs mt-1">{this.title()}</p>
            </div>
        })
        .collect_view();

    let percent = {
        let wizard = wizard.clone();
        move || format!("width: {}%", wizard.with(SurveyWizard::progress_percent))
    };

    let questions = {
        let wizard = wizard.clone();
        move || {
            step.get()
                .questions()
                .iter()
                .map(|question| question_view(*question, wizard.clone()))
                .collect_view()
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-2xl">
            <h1 class="text-3xl font-bold mb-8 text-center">"맞춤 레시피 추천 설문"</h1>

            <div class="mb-8">
                <div class="flex justify-between mb-2">{progress}</div>
                <div class="w-full bg-gray-200 rounded-full h-2">
                    <div class="bg-blue-600 h-2 rounded-full transition-all" style=percent></div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-md p-6 mb-6">
                <h2 class="text-xl font-semibold mb-2">{move || step.get().title()}</h2>
                <p class="text-gray-600 mb-6">{move || step.get().description()}</p>
                <div class="space-y-4">{questions}</div>
            </div>

            <div class="mb-4">
                <ErrorNotice message=error />
            </div>

            <div class="flex justify-between">
                <button
                    class="px-6 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || step.get().is_first()
                    on:click=on_previous
                >
                    "이전"
                </button>
                <button
                    class="px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=submitting
                    on:click=on_next
                >
                    {move || if submitting.get() {
                        "처리중..."
                    } else if step.get().is_last() {
                        "제출"
                    } else {
                        "다음"
                    }}
                </button>
            </div>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

fn question_view(question: Question, wizard: ArcRwSignal<SurveyWizard>) -> AnyView {
    let label = question.display_label();
    match question {
        Question::Select { field, options, .. } => {
            let value = {
                let wizard = wizard.clone();
                move || wizard.with(|w| w.draft().field(field)).unwrap_or_default()
            };
            view! {
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=value
                        on:change=move |ev| wizard.update(|w| w.set_field(field, &event_target_value(&ev)))
                    >
                        <option value="">"선택하세요"</option>
                        {options
                            .iter()
                            .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                            .collect_view()}
                    </select>
                </div>
            }
            .into_any()
        }
        Question::Radio { field, options, .. } => {
            let choices = options
                .iter()
                .map(|(value, text)| {
                    let checked = {
                        let wizard = wizard.clone();
                        move || wizard.with(|w| w.draft().field(field).as_deref() == Some(*value))
                    };
                    let wizard = wizard.clone();
                    view! {
                        <label class="flex items-center">
                            <input
                                type="radio"
                                class="mr-2"
                                name=field.key()
                                value=*value
                                prop:checked=checked
                                on:change=move |_| wizard.update(|w| w.set_field(field, value))
                            />
                            <span class="text-sm">{*text}</span>
                        </label>
                    }
                })
                .collect_view();
            view! {
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
                    <div class="flex flex-wrap gap-4">{choices}</div>
                </div>
            }
            .into_any()
        }
        Question::Number { field, placeholder, .. } => text_input(label, field, "number", placeholder, wizard),
        Question::Text { field, input_type, placeholder, .. } => text_input(label, field, input_type, placeholder, wizard),
        Question::Checklist { field, options, .. } => {
            let boxes = options
                .iter()
                .map(|option| {
                    let checked = {
                        let wizard = wizard.clone();
                        move || wizard.with(|w| w.draft().contains(field, option))
                    };
                    let wizard = wizard.clone();
                    view! {
                        <label class="flex items-center">
                            <input
                                type="checkbox"
                                class="mr-2"
                                prop:checked=checked
                                on:change=move |_| wizard.update(|w| w.toggle_list_field(field, option))
                            />
                            <span class="text-sm">{*option}</span>
                        </label>
                    }
                })
                .collect_view();
            view! {
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
                    <div class="grid grid-cols-2 gap-2">{boxes}</div>
                </div>
            }
            .into_any()
        }
    }
}

fn text_input(
    label: String,
    field: ScalarField,
    input_type: &'static str,
    placeholder: &'static str,
    wizard: ArcRwSignal<SurveyWizard>,
) -> AnyView {
    let value = {
        let wizard = wizard.clone();
        move || wizard.with(|w| w.draft().field(field)).unwrap_or_default()
    };
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| wizard.update(|w| w.set_field(field, &event_target_value(&ev)))
            />
        </div>
    }
    .into_any()
}
