use chrono::{Datelike, Utc};
use contracts::system::dashboard::{DashboardStats, MonthlyUsage};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiError;
use crate::shared::components::{MonthYearFilter, StatCard};
use crate::shared::format::{format_m3, format_rupiah, month_name};
use crate::system::auth::{end_session, use_auth};

use super::api;

/// Home dashboard: stat cards for the selected period plus a usage bar
/// list for the whole year.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let now = Utc::now().date_naive();
    let (bulan, set_bulan) = signal(now.month());
    let (tahun, set_tahun) = signal(now.year());

    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (monthly, set_monthly) = signal(Vec::<MonthlyUsage>::new());
    let (error, set_error) = signal(None::<String>);

    // Responses from superseded period selections are dropped.
    let fetch_seq = StoredValue::new(0u64);

    let (auth_state, set_auth_state) = use_auth();

    Effect::new(move |_| {
        let month = bulan.get();
        let year = tahun.get();
        let Some(token) = auth_state.get().token() else {
            return;
        };

        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);
        set_error.set(None);

        spawn_local(async move {
            let stats_result = api::get_stats(&token, month, year).await;
            let monthly_result = api::get_monthly_usage(&token, year).await;

            if fetch_seq.get_value() != seq {
                return;
            }

            match stats_result {
                Ok(data) => set_stats.set(Some(data)),
                Err(ApiError::Auth) => {
                    end_session(set_auth_state);
                    return;
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match monthly_result {
                Ok(data) => set_monthly.set(data),
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let usage_value = Signal::derive(move || {
        stats.get().map(|s| format_m3(s.total_penggunaan))
    });
    let income_value = Signal::derive(move || {
        stats.get().map(|s| format_rupiah(s.total_pembayaran))
    });
    let billed_value = Signal::derive(move || {
        stats.get().map(|s| format_rupiah(s.total_tagihan))
    });
    let outstanding_value = Signal::derive(move || {
        stats.get().map(|s| format_rupiah(s.outstanding))
    });

    let bars = move || {
        let rows = monthly.get();
        let max = rows
            .iter()
            .map(|r| r.total_penggunaan)
            .fold(0.0_f64, f64::max);
        rows.into_iter()
            .map(|row| {
                let percent = if max > 0.0 {
                    (row.total_penggunaan / max * 100.0).round()
                } else {
                    0.0
                };
                view! {
                    <div class="usage-bar-row">
                        <span class="usage-bar-row__label">{month_name(row.bulan)}</span>
                        <div class="usage-bar-row__track">
                            <div
                                class="usage-bar-row__fill"
                                style=format!("width: {percent}%")
                            ></div>
                        </div>
                        <span class="usage-bar-row__value">
                            {format_m3(row.total_penggunaan)}
                        </span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page-dashboard">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <MonthYearFilter
                    bulan=bulan
                    tahun=tahun
                    on_change=Callback::new(move |(month, year)| {
                        set_bulan.set(month);
                        set_tahun.set(year);
                    })
                />
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="stat-card-grid">
                <StatCard
                    label="Total Penggunaan"
                    icon_name="droplet"
                    accent="blue"
                    value=usage_value
                />
                <StatCard
                    label="Pembayaran Masuk"
                    icon_name="credit-card"
                    accent="green"
                    value=income_value
                />
                <StatCard
                    label="Total Tagihan"
                    icon_name="file-text"
                    accent="orange"
                    value=billed_value
                />
                <StatCard
                    label="Belum Dibayar"
                    icon_name="receipt"
                    accent="red"
                    value=outstanding_value
                />
            </div>

            <div class="usage-chart">
                <h2>{move || format!("Penggunaan Air {}", tahun.get())}</h2>
                {bars}
            </div>
        </div>
    }
}
