//! Confirm Button Component
//!
//! Inline two-step confirmation for destructive actions.

use leptos::prelude::*;

/// Shows `label` first; once clicked, asks `prompt` with confirm/cancel.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `on_confirm` - Runs after the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="inline-flex items-center gap-2">
                <span class="text-sm text-gray-700">{prompt.clone()}</span>
                <button
                    class="px-3 py-1 bg-red-600 text-white rounded-md"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "확인"
                </button>
                <button
                    class="px-3 py-1 bg-gray-200 rounded-md"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "취소"
                </button>
            </span>
        </Show>
    }
}
