use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - reusable pager footer under list tables.
///
/// Pages are 1-indexed to match the controller state they render.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (always at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of filtered items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Halaman sebelumnya"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("Halaman {} dari {} ({} data)", page, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Halaman berikutnya"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
