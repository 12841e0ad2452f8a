use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::icons::icon;
use crate::system::auth::{end_session, use_auth};

#[component]
pub fn Navbar(#[prop(into)] current: Signal<Page>) -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    view! {
        <header class="navbar">
            <span class="navbar__title">{move || current.get().label()}</span>
            <button
                class="navbar__logout"
                on:click=move |_| end_session(set_auth_state)
                title="Keluar"
            >
                {icon("logout")}
                " Keluar"
            </button>
        </header>
    }
}
