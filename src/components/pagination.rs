//! Previous / next pager for paginated listings.

use leptos::prelude::*;

/// Pager controls bound to a zero-based page signal. Hidden entirely when
/// there is at most one page, matching the listing pages' behavior.
#[component]
pub fn Pagination(page: RwSignal<u32>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    view! {
        <Show when=move || (total_pages.get() > 1)>
            <div class="pagination">
                <button
                    class="btn pagination__btn"
                    disabled=move || page.get() == 0
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                >
                    "Previous"
                </button>
                <span class="pagination__info">
                    {move || format!("Page {} of {}", page.get() + 1, total_pages.get())}
                </span>
                <button
                    class="btn pagination__btn"
                    disabled=move || page.get() + 1 >= total_pages.get()
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
