use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar(
    #[prop(into)] current: Signal<Page>,
    on_navigate: Callback<Page>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("droplet")}
                <span class="sidebar__brand-name">"PDAM Desa"</span>
            </div>
            <nav class="sidebar__nav">
                {Page::ALL
                    .iter()
                    .map(|page| {
                        let page = *page;
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || current.get() == page
                                on:click=move |_| on_navigate.run(page)
                            >
                                {icon(page.icon_name())}
                                <span class="sidebar__item-label">{page.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
