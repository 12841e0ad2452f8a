use chrono::{Datelike, Utc};
use contracts::domain::penggunaan::Penggunaan;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::pembayaran::PembayaranForm;
use crate::domain::penggunaan::api as penggunaan_api;
use crate::shared::api::ApiError;
use crate::shared::components::{MonthYearFilter, PaginationControls, SearchInput};
use crate::shared::download::{bytes_to_blob, download_blob, open_blob, MIME_PDF, MIME_XLSX};
use crate::shared::format::{format_m3, format_rupiah, format_tanggal};
use crate::shared::icons::icon;
use crate::shared::list_view::ListView;
use crate::system::auth::{end_session, use_auth};

use super::{api, StatusTab};

const PAGE_SIZE: usize = 5;

/// Billing overview for one period: status tabs, local search, per-bill
/// detail/nota/payment actions and whole-period report exports.
#[component]
pub fn TagihanPage() -> impl IntoView {
    let view_state: RwSignal<ListView<Penggunaan, StatusTab>> =
        RwSignal::new(ListView::new(PAGE_SIZE, StatusTab::Semua));

    let now = Utc::now().date_naive();
    let (bulan, set_bulan) = signal(now.month());
    let (tahun, set_tahun) = signal(now.year());
    let (error, set_error) = signal(None::<String>);
    let (exporting, set_exporting) = signal(false);
    let (paying, set_paying) = signal(None::<Penggunaan>);
    let (show_detail, set_show_detail) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let load = move || {
        let month = bulan.get_untracked();
        let year = tahun.get_untracked();
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };

        let mut seq = 0;
        view_state.update(|v| seq = v.begin_fetch());
        set_error.set(None);

        spawn_local(async move {
            match penggunaan_api::fetch_history(&token, month, year).await {
                Ok(records) => {
                    view_state.update(|v| {
                        v.complete_fetch(seq, records);
                    });
                }
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => {
                    let mut latest = false;
                    view_state.update(|v| latest = v.fail_fetch(seq));
                    if latest {
                        set_error.set(Some(e.to_string()));
                    }
                }
            }
        });
    };

    // A new period supersedes any fetch still in flight.
    Effect::new(move |_| {
        bulan.track();
        tahun.track();
        load();
    });

    let open_nota = move |penggunaan_id: i64| {
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };
        spawn_local(async move {
            let result = async {
                let bytes = api::fetch_nota(&token, penggunaan_id).await?;
                let blob = bytes_to_blob(&bytes, MIME_PDF).map_err(ApiError::Unexpected)?;
                open_blob(&blob).map_err(ApiError::Unexpected)
            }
            .await;
            match result {
                Ok(()) => {}
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let export_report = move |excel: bool| {
        let month = bulan.get_untracked();
        let year = tahun.get_untracked();
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };
        set_exporting.set(true);
        spawn_local(async move {
            let result = async {
                let (bytes, mime, ext) = if excel {
                    (api::export_excel(&token, month, year).await?, MIME_XLSX, "xlsx")
                } else {
                    (api::export_pdf(&token, month, year).await?, MIME_PDF, "pdf")
                };
                let blob = bytes_to_blob(&bytes, mime).map_err(ApiError::Unexpected)?;
                download_blob(&blob, &format!("laporan_{month}_{year}.{ext}"))
                    .map_err(ApiError::Unexpected)
            }
            .await;
            match result {
                Ok(()) => {}
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_exporting.set(false);
        });
    };

    let page_rows = move || view_state.get().page_view().0;
    let window = move || view_state.get().page_view().1;
    let active_tab = move || *view_state.get().filter();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tagihan"</h1>
                    <Badge>{move || view_state.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export_report(false)
                        disabled=Signal::derive(move || exporting.get())
                    >
                        {icon("download")}
                        " PDF"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export_report(true)
                        disabled=Signal::derive(move || exporting.get())
                    >
                        {icon("download")}
                        " Excel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <MonthYearFilter
                        bulan=bulan
                        tahun=tahun
                        on_change=Callback::new(move |(month, year)| {
                            set_bulan.set(month);
                            set_tahun.set(year);
                        })
                    />
                    <SearchInput
                        placeholder="Cari nama, alamat, atau nomor..."
                        value=Signal::derive(move || view_state.get().query().to_string())
                        on_input=Callback::new(move |q| view_state.update(|v| v.set_query(q)))
                    />
                </div>

                <div class="status-tabs">
                    {StatusTab::ALL
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="status-tabs__tab"
                                    class:status-tabs__tab--active=move || active_tab() == tab
                                    on:click=move |_| view_state.update(|v| v.set_filter(tab))
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="table-wrapper">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"No."</th>
                                <th class="table__header-cell">"Nama"</th>
                                <th class="table__header-cell">"Alamat"</th>
                                <th class="table__header-cell">"Tanggal"</th>
                                <th class="table__header-cell">"Penggunaan"</th>
                                <th class="table__header-cell">"Total Tagihan"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=page_rows
                                key=|p| p.id
                                children=move |record| {
                                    let id = record.id;
                                    let outstanding = record.status.is_outstanding();
                                    let record_for_pay = record.clone();
                                    let status_class = if outstanding {
                                        "badge badge--warning"
                                    } else {
                                        "badge badge--success"
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{id}</td>
                                            <td class="table__cell">
                                                <span style="font-weight: 500;">
                                                    {record.nama.clone().unwrap_or_else(|| "-".to_string())}
                                                </span>
                                            </td>
                                            <td class="table__cell">
                                                {record.alamat.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell">{format_tanggal(record.tanggal)}</td>
                                            <td class="table__cell">
                                                {format_m3(record.jumlah_penggunaan)}
                                            </td>
                                            <td class="table__cell">
                                                {format_rupiah(record.total_tagihan)}
                                            </td>
                                            <td class="table__cell">
                                                <span class=status_class>{record.status.label()}</span>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| {
                                                        view_state.update(|v| v.select(id));
                                                        set_show_detail.set(true);
                                                    }
                                                    attr:title="Detail"
                                                >
                                                    {icon("search")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_nota(id)
                                                    attr:title="Nota"
                                                >
                                                    {icon("receipt")}
                                                </Button>
                                                <Show when=move || outstanding>
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        on_click={
                                                            let record_for_pay = record_for_pay.clone();
                                                            move |_| set_paying.set(Some(record_for_pay.clone()))
                                                        }
                                                    >
                                                        {icon("credit-card")}
                                                        " Bayar"
                                                    </Button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                            <Show when=move || {
                                !view_state.get().is_loading() && page_rows().is_empty()
                            }>
                                <tr class="table__row">
                                    <td class="table__cell table__cell--empty" colspan="8">
                                        "Tidak ada tagihan pada periode ini"
                                    </td>
                                </tr>
                            </Show>
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || window().page)
                    total_pages=Signal::derive(move || window().total_pages)
                    total_count=Signal::derive(move || view_state.get().filtered().len())
                    on_page_change=Callback::new(move |page| {
                        view_state.update(|v| v.set_page(page));
                    })
                />

                {move || {
                    if show_detail.get() {
                        // Resolved against the raw list: a refetch that dropped
                        // the record closes the modal instead of showing stale data.
                        view_state
                            .get()
                            .selected()
                            .cloned()
                            .map(|record| {
                                view! {
                                    <TagihanDetail
                                        record=record
                                        on_close=move || {
                                            set_show_detail.set(false);
                                            view_state.update(|v| v.clear_selection());
                                        }
                                    />
                                }
                                    .into_any()
                            })
                            .unwrap_or_else(|| view! { <></> }.into_any())
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || {
                    paying
                        .get()
                        .map(|record| {
                            // One-time copy of the billed amount; edits after this
                            // point belong to the form, not the bill.
                            let initial = super::payment_seed(&record);
                            let title = format!(
                                "Bayar Tagihan #{} — {}",
                                record.id,
                                record.nama.clone().unwrap_or_else(|| "-".to_string())
                            );
                            view! {
                                <div class="modal-overlay" on:click=move |_| set_paying.set(None)>
                                    <div class="modal" on:click=move |ev| ev.stop_propagation()>
                                        <div class="modal-header">
                                            <h2 class="modal-title">{title}</h2>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| set_paying.set(None)
                                            >
                                                {icon("x")}
                                            </Button>
                                        </div>
                                        <div class="modal-body">
                                            <PembayaranForm
                                                initial=initial
                                                lock_penggunaan_id=true
                                                on_saved=Callback::new(move |_| {
                                                    set_paying.set(None);
                                                    load();
                                                })
                                                on_cancel=Callback::new(move |_| set_paying.set(None))
                                            />
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn TagihanDetail<F>(record: Penggunaan, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{format!("Detail Tagihan #{}", record.id)}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <dl class="detail-list">
                        <dt>"Nama"</dt>
                        <dd>{record.nama.clone().unwrap_or_else(|| "-".to_string())}</dd>
                        <dt>"Alamat"</dt>
                        <dd>{record.alamat.clone().unwrap_or_else(|| "-".to_string())}</dd>
                        <dt>"Tanggal Pencatatan"</dt>
                        <dd>{format_tanggal(record.tanggal)}</dd>
                        <dt>"Jumlah Penggunaan"</dt>
                        <dd>{format_m3(record.jumlah_penggunaan)}</dd>
                        <dt>"Total Tagihan"</dt>
                        <dd>{format_rupiah(record.total_tagihan)}</dd>
                        <dt>"Status"</dt>
                        <dd>{record.status.label()}</dd>
                    </dl>

                    {record
                        .foto_url
                        .clone()
                        .map(|url| {
                            view! {
                                <div class="detail-foto">
                                    <Label>"Foto Meteran"</Label>
                                    <img src=url alt="Foto meteran" />
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
