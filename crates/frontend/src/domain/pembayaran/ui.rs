use chrono::{Datelike, Utc};
use contracts::domain::pembayaran::{MetodePembayaran, Pembayaran, PembayaranDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::ApiError;
use crate::shared::components::{MonthYearFilter, PaginationControls, SearchInput};
use crate::shared::format::{format_rupiah, format_tanggal};
use crate::shared::icons::icon;
use crate::shared::list_view::ListView;
use crate::system::auth::{end_session, use_auth};

use super::api;

const PAGE_SIZE: usize = 5;

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Form,
    History,
}

/// Payment screen: a standalone entry form plus a per-period history list.
#[component]
pub fn PembayaranPage() -> impl IntoView {
    let (mode, set_mode) = signal(ViewMode::Form);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pembayaran"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_mode.set(ViewMode::Form)
                        disabled=Signal::derive(move || mode.get() == ViewMode::Form)
                    >
                        {icon("plus")}
                        " Input Pembayaran"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_mode.set(ViewMode::History)
                        disabled=Signal::derive(move || mode.get() == ViewMode::History)
                    >
                        {icon("file-text")}
                        " Riwayat"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match mode.get() {
                    ViewMode::Form => {
                        view! {
                            <PembayaranForm
                                initial=PembayaranDto::default()
                                lock_penggunaan_id=false
                                on_saved=Callback::new(move |_| {})
                            />
                        }
                            .into_any()
                    }
                    ViewMode::History => view! { <PembayaranHistory /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Payment entry fields. Reused by the billing screen's "Bayar" modal,
/// which locks the bill reference and pre-fills the amount.
#[component]
pub fn PembayaranForm(
    initial: PembayaranDto,
    lock_penggunaan_id: bool,
    on_saved: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let penggunaan_id = RwSignal::new(initial.penggunaan_id.clone());
    let tanggal = RwSignal::new(if initial.tanggal_pembayaran.is_empty() {
        Utc::now().format("%Y-%m-%d").to_string()
    } else {
        initial.tanggal_pembayaran.clone()
    });
    let jumlah = RwSignal::new(initial.jumlah_pembayaran.clone());
    let metode = RwSignal::new(if initial.metode_pembayaran.is_empty() {
        MetodePembayaran::Tunai.as_str().to_string()
    } else {
        initial.metode_pembayaran.clone()
    });
    let keterangan = RwSignal::new(initial.keterangan.clone());

    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let id_val = penggunaan_id.get().trim().to_string();
        if id_val.parse::<i64>().map(|v| v <= 0).unwrap_or(true) {
            set_error.set(Some("Nomor tagihan tidak valid".to_string()));
            return;
        }
        let jumlah_val = jumlah.get().trim().to_string();
        if jumlah_val.parse::<f64>().map(|v| v <= 0.0).unwrap_or(true) {
            set_error.set(Some("Jumlah pembayaran harus berupa angka positif".to_string()));
            return;
        }
        if tanggal.get().trim().is_empty() {
            set_error.set(Some("Tanggal pembayaran wajib diisi".to_string()));
            return;
        }
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };

        let dto = PembayaranDto {
            penggunaan_id: id_val,
            tanggal_pembayaran: tanggal.get().trim().to_string(),
            jumlah_pembayaran: jumlah_val,
            metode_pembayaran: metode.get(),
            keterangan: keterangan.get().trim().to_string(),
        };

        set_saving.set(true);
        set_error.set(None);
        set_success.set(None);

        spawn_local(async move {
            match api::create_pembayaran(&token, &dto).await {
                Ok(created) => {
                    set_success.set(Some(format!(
                        "Pembayaran {} tercatat",
                        format_rupiah(created.jumlah_pembayaran)
                    )));
                    if !lock_penggunaan_id {
                        penggunaan_id.set(String::new());
                        jumlah.set(String::new());
                        keterangan.set(String::new());
                    }
                    set_saving.set(false);
                    on_saved.run(());
                }
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <form class="payment-form" on:submit=on_submit>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}

            <div class="form__group">
                <Label>"Nomor Tagihan (ID Penggunaan)"</Label>
                <Input
                    value=penggunaan_id
                    input_type=InputType::Number
                    disabled=Signal::derive(move || saving.get() || lock_penggunaan_id)
                />
            </div>

            <div class="form__group">
                <Label>"Tanggal Pembayaran"</Label>
                <input
                    type="date"
                    class="form__date"
                    prop:value=move || tanggal.get()
                    on:input=move |ev| tanggal.set(event_target_value(&ev))
                    disabled=move || saving.get()
                />
            </div>

            <div class="form__group">
                <Label>"Jumlah Pembayaran (Rp)"</Label>
                <Input
                    value=jumlah
                    input_type=InputType::Number
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>"Metode Pembayaran"</Label>
                <select
                    class="form__select"
                    prop:value=move || metode.get()
                    on:change=move |ev| metode.set(event_target_value(&ev))
                    disabled=move || saving.get()
                >
                    {MetodePembayaran::ALL
                        .iter()
                        .map(|m| {
                            let m = *m;
                            view! {
                                <option
                                    value=m.as_str()
                                    selected=move || metode.get() == m.as_str()
                                >
                                    {m.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form__group">
                <Label>"Keterangan"</Label>
                <Input
                    value=keterangan
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="payment-form__actions">
                {on_cancel
                    .map(|cancel| {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| cancel.run(())
                                disabled=Signal::derive(move || saving.get())
                            >
                                "Batal"
                            </Button>
                        }
                    })}
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Menyimpan..." } else { "Simpan Pembayaran" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn PembayaranHistory() -> impl IntoView {
    let view_state: RwSignal<ListView<Pembayaran>> = RwSignal::new(ListView::new(PAGE_SIZE, ()));

    let now = Utc::now().date_naive();
    let (bulan, set_bulan) = signal(now.month());
    let (tahun, set_tahun) = signal(now.year());
    let (error, set_error) = signal(None::<String>);

    let (auth_state, set_auth_state) = use_auth();

    // Refetch whenever the period changes.
    Effect::new(move |_| {
        let month = bulan.get();
        let year = tahun.get();
        let Some(token) = auth_state.get().token() else {
            return;
        };

        let mut seq = 0;
        view_state.update(|v| seq = v.begin_fetch());
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_history(&token, month, year).await {
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
    });

    let page_rows = move || view_state.get().page_view().0;
    let window = move || view_state.get().page_view().1;

    view! {
        <div class="payment-history">
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
                    placeholder="Cari nomor tagihan, metode, keterangan..."
                    value=Signal::derive(move || view_state.get().query().to_string())
                    on_input=Callback::new(move |q| view_state.update(|v| v.set_query(q)))
                />
            </div>

            <div class="table-wrapper">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"No."</th>
                            <th class="table__header-cell">"No. Tagihan"</th>
                            <th class="table__header-cell">"Tanggal"</th>
                            <th class="table__header-cell">"Jumlah"</th>
                            <th class="table__header-cell">"Metode"</th>
                            <th class="table__header-cell">"Keterangan"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=page_rows
                            key=|p| p.id
                            children=move |record| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{record.id}</td>
                                        <td class="table__cell">{record.penggunaan_id}</td>
                                        <td class="table__cell">
                                            {format_tanggal(record.tanggal_pembayaran)}
                                        </td>
                                        <td class="table__cell">
                                            {format_rupiah(record.jumlah_pembayaran)}
                                        </td>
                                        <td class="table__cell">
                                            {record.metode_pembayaran.as_str()}
                                        </td>
                                        <td class="table__cell">
                                            {record.keterangan.clone().unwrap_or_else(|| "-".to_string())}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                        <Show when=move || {
                            !view_state.get().is_loading() && page_rows().is_empty()
                        }>
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan="6">
                                    "Tidak ada pembayaran pada periode ini"
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
        </div>
    }
}
