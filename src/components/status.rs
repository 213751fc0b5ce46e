//! Loading and Error Indicators

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-16">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
        </div>
    }
}

/// Inline error line shown above a form or in place of content
#[component]
pub fn ErrorNotice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="p-3 bg-red-100 text-red-700 rounded-md text-sm" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
