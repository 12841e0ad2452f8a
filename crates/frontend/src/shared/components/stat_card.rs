use crate::shared::icons::icon;
use leptos::prelude::*;

/// StatCard component - one summary tile on the dashboard grid.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Accent class suffix for the icon badge
    accent: &'static str,
    /// Formatted value (None = still loading)
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    view! {
        <div class="stat-card">
            <div class=format!("stat-card__icon stat-card__icon--{accent}")>
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
