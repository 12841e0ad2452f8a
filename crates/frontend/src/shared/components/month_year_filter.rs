use crate::shared::format::MONTH_NAMES;
use chrono::{Datelike, Utc};
use leptos::prelude::*;

/// MonthYearFilter component - paired month/year selects used by the
/// billing period screens. Fires `on_change` on every edit so the owning
/// page can refetch immediately.
#[component]
pub fn MonthYearFilter(
    /// Selected month (1-12)
    #[prop(into)]
    bulan: Signal<u32>,

    /// Selected year
    #[prop(into)]
    tahun: Signal<i32>,

    /// Callback with the new (bulan, tahun) pair
    on_change: Callback<(u32, i32)>,
) -> impl IntoView {
    let current_year = Utc::now().date_naive().year();
    // Oldest billing data in production is from 2023.
    let years: Vec<i32> = (2023..=current_year).rev().collect();

    view! {
        <div class="month-year-filter">
            <select
                class="month-year-filter__select"
                prop:value=move || bulan.get().to_string()
                on:change=move |ev| {
                    if let Ok(month) = event_target_value(&ev).parse::<u32>() {
                        on_change.run((month, tahun.get()));
                    }
                }
            >
                {MONTH_NAMES
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let value = (i + 1) as u32;
                        view! {
                            <option
                                value=value.to_string()
                                selected=move || bulan.get() == value
                            >
                                {*name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select
                class="month-year-filter__select"
                prop:value=move || tahun.get().to_string()
                on:change=move |ev| {
                    if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                        on_change.run((bulan.get(), year));
                    }
                }
            >
                {years
                    .iter()
                    .map(|&year| {
                        view! {
                            <option
                                value=year.to_string()
                                selected=move || tahun.get() == year
                            >
                                {year.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
