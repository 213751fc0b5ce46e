//! Pagination Controls
//!
//! Hidden entirely for single-page results.

use leptos::prelude::*;

/// Number of page buttons shown at once
const WINDOW: u32 = 5;

/// Controls appear only when there is somewhere else to go
pub fn shows_controls(pages: u32) -> bool {
    pages > 1
}

/// Page numbers to render, a window of up to five around `current`
pub fn page_window(current: u32, pages: u32) -> Vec<u32> {
    if !shows_controls(pages) {
        return Vec::new();
    }
    let width = WINDOW.min(pages);
    let start = current
        .saturating_sub(WINDOW / 2)
        .clamp(1, pages - width + 1);
    (start..start + width).collect()
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] pages: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || shows_controls(pages.get())>
            <nav class="mt-8 flex justify-center gap-2" aria-label="pagination">
                <button
                    class="px-4 py-2 bg-gray-200 rounded-md disabled:opacity-50"
                    disabled=move || { page.get() <= 1 }
                    on:click=move |_| on_change.run(page.get().saturating_sub(1).max(1))
                >
                    "이전"
                </button>
                {move || {
                    let current = page.get();
                    page_window(current, pages.get())
                        .into_iter()
                        .map(|number| {
                            let class = if number == current {
                                "px-4 py-2 rounded-md bg-blue-600 text-white"
                            } else {
                                "px-4 py-2 rounded-md bg-gray-200 hover:bg-gray-300"
                            };
                            view! {
                                <button class=class on:click=move |_| on_change.run(number)>
                                    {number}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="px-4 py-2 bg-gray-200 rounded-md disabled:opacity-50"
                    disabled=move || { page.get() >= pages.get() }
                    on:click=move |_| on_change.run((page.get() + 1).min(pages.get()))
                >
                    "다음"
                </button>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_has_no_controls() {
        assert!(!shows_controls(0));
        assert!(!shows_controls(1));
        assert!(shows_controls(2));
        assert!(page_window(1, 1).is_empty());
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_is_clamped_to_bounds() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }
}
