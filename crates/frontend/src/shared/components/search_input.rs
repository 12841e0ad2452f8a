use crate::shared::icons::icon;
use leptos::prelude::*;

/// SearchInput component - text box with a leading search glyph. Fires on
/// every keystroke; the list controllers treat whitespace-only input as
/// "no query".
#[component]
pub fn SearchInput(
    /// Placeholder text
    placeholder: &'static str,

    /// Current query value
    #[prop(into)]
    value: Signal<String>,

    /// Callback with the new raw query
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
