use contracts::domain::pelanggan::JenisPelayanan;
use contracts::domain::tarif::{Tarif, TarifDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::{ApiError, Token};
use crate::shared::components::{PaginationControls, SearchInput};
use crate::shared::format::{format_rupiah, format_tanggal};
use crate::shared::icons::icon;
use crate::shared::list_view::ListView;
use crate::system::auth::{end_session, use_auth};

use super::{api, JenisFilter};

const PAGE_SIZE: usize = 5;

/// Tariff administration: one row per service class and effective range.
#[component]
pub fn TarifPage() -> impl IntoView {
    let view_state: RwSignal<ListView<Tarif, JenisFilter>> = RwSignal::new(
        ListView::new(PAGE_SIZE, JenisFilter::default())
            .with_sorter(|a, b| b.efektif_dari.cmp(&a.efektif_dari)),
    );
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<Tarif>);
    let (show_create, set_show_create) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let load = move || {
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };

        let mut seq = 0;
        view_state.update(|v| seq = v.begin_fetch());
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_tarif(&token).await {
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

    Effect::new(move |_| {
        auth_state.track();
        load();
    });

    let delete_tarif = move |record: Tarif| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Hapus tarif {} yang berlaku sejak {}?",
                    record.jenis_pelayanan.as_str(),
                    format_tanggal(record.efektif_dari)
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_tarif(&token, record.id).await {
                Ok(()) => load(),
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let page_rows = move || view_state.get().page_view().0;
    let window = move || view_state.get().page_view().1;
    let active_filter = move || *view_state.get().filter();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tarif Penggunaan"</h1>
                    <Badge>{move || view_state.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " Tambah Tarif"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || view_state.get().is_loading())
                    >
                        {icon("refresh")}
                        " Muat Ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <SearchInput
                        placeholder="Cari jenis pelayanan atau keterangan..."
                        value=Signal::derive(move || view_state.get().query().to_string())
                        on_input=Callback::new(move |q| view_state.update(|v| v.set_query(q)))
                    />
                    <select
                        class="form__select"
                        prop:value=move || {
                            active_filter()
                                .0
                                .map(|j| j.as_str().to_string())
                                .unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let filter = JenisFilter(JenisPelayanan::parse(&event_target_value(&ev)));
                            view_state.update(|v| v.set_filter(filter));
                        }
                    >
                        <option value="">"Semua Jenis"</option>
                        {JenisPelayanan::ALL
                            .iter()
                            .map(|j| {
                                let j = *j;
                                view! {
                                    <option
                                        value=j.as_str()
                                        selected=move || active_filter().0 == Some(j)
                                    >
                                        {j.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="table-wrapper">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Jenis Pelayanan"</th>
                                <th class="table__header-cell">"Tarif Dasar / m³"</th>
                                <th class="table__header-cell">"Denda"</th>
                                <th class="table__header-cell">"Berlaku Dari"</th>
                                <th class="table__header-cell">"Berlaku Sampai"</th>
                                <th class="table__header-cell">"Keterangan"</th>
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=page_rows
                                key=|t| t.id
                                children=move |record| {
                                    let record_for_edit = record.clone();
                                    let record_for_delete = record.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <span style="font-weight: 500;">
                                                    {record.jenis_pelayanan.as_str()}
                                                </span>
                                            </td>
                                            <td class="table__cell">{format_rupiah(record.tarif_dasar)}</td>
                                            <td class="table__cell">{format_rupiah(record.denda)}</td>
                                            <td class="table__cell">{format_tanggal(record.efektif_dari)}</td>
                                            <td class="table__cell">
                                                {record
                                                    .efektif_sampai
                                                    .map(format_tanggal)
                                                    .unwrap_or_else(|| "Sekarang".to_string())}
                                            </td>
                                            <td class="table__cell">
                                                {record.keterangan.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| set_editing.set(Some(record_for_edit.clone()))
                                                    attr:title="Ubah"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_tarif(record_for_delete.clone())
                                                    attr:title="Hapus"
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                            <Show when=move || {
                                !view_state.get().is_loading() && page_rows().is_empty()
                            }>
                                <tr class="table__row">
                                    <td class="table__cell table__cell--empty" colspan="7">
                                        "Tidak ada data tarif"
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
                    if show_create.get() {
                        view! {
                            <TarifForm
                                record=None
                                on_close=move || set_show_create.set(false)
                                on_saved=move || {
                                    set_show_create.set(false);
                                    load();
                                }
                            />
                        }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || {
                    editing
                        .get()
                        .map(|record| {
                            view! {
                                <TarifForm
                                    record=Some(record)
                                    on_close=move || set_editing.set(None)
                                    on_saved=move || {
                                        set_editing.set(None);
                                        load();
                                    }
                                />
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn TarifForm<F1, F2>(record: Option<Tarif>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let editing_id = record.as_ref().map(|t| t.id);
    let title = match &record {
        Some(t) => format!("Ubah Tarif: {}", t.jenis_pelayanan.as_str()),
        None => "Tambah Tarif".to_string(),
    };

    let initial = record
        .as_ref()
        .map(TarifDto::from_record)
        .unwrap_or_default();
    let jenis = RwSignal::new(if initial.jenis_pelayanan.is_empty() {
        JenisPelayanan::default().as_str().to_string()
    } else {
        initial.jenis_pelayanan.clone()
    });
    let tarif_dasar = RwSignal::new(initial.tarif_dasar.clone());
    let denda = RwSignal::new(initial.denda.clone());
    let efektif_dari = RwSignal::new(initial.efektif_dari.clone());
    let efektif_sampai = RwSignal::new(initial.efektif_sampai.clone());
    let keterangan = RwSignal::new(initial.keterangan.clone());

    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let on_save = move |_| {
        if tarif_dasar.get().trim().parse::<f64>().map(|v| v < 0.0).unwrap_or(true) {
            set_error.set(Some("Tarif dasar harus berupa angka".to_string()));
            return;
        }
        if denda.get().trim().parse::<f64>().map(|v| v < 0.0).unwrap_or(true) {
            set_error.set(Some("Denda harus berupa angka".to_string()));
            return;
        }
        if efektif_dari.get().trim().is_empty() {
            set_error.set(Some("Tanggal mulai berlaku wajib diisi".to_string()));
            return;
        }
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };

        let dto = TarifDto {
            jenis_pelayanan: jenis.get(),
            tarif_dasar: tarif_dasar.get().trim().to_string(),
            denda: denda.get().trim().to_string(),
            efektif_dari: efektif_dari.get().trim().to_string(),
            efektif_sampai: efektif_sampai.get().trim().to_string(),
            keterangan: keterangan.get().trim().to_string(),
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match save_tarif(&token, editing_id, &dto).await {
                Ok(()) => on_saved(),
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Jenis Pelayanan"</Label>
                        <select
                            class="form__select"
                            prop:value=move || jenis.get()
                            on:change=move |ev| jenis.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        >
                            {JenisPelayanan::ALL
                                .iter()
                                .map(|j| {
                                    let j = *j;
                                    view! {
                                        <option
                                            value=j.as_str()
                                            selected=move || jenis.get() == j.as_str()
                                        >
                                            {j.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Tarif Dasar per m³ (Rp)"</Label>
                        <Input
                            value=tarif_dasar
                            input_type=InputType::Number
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Denda Keterlambatan (Rp)"</Label>
                        <Input
                            value=denda
                            input_type=InputType::Number
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Berlaku Dari"</Label>
                        <input
                            type="date"
                            class="form__date"
                            prop:value=move || efektif_dari.get()
                            on:input=move |ev| efektif_dari.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Berlaku Sampai (kosongkan jika masih berlaku)"</Label>
                        <input
                            type="date"
                            class="form__date"
                            prop:value=move || efektif_sampai.get()
                            on:input=move |ev| efektif_sampai.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Keterangan"</Label>
                        <Input
                            value=keterangan
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Batal"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Menyimpan..." } else { "Simpan" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

async fn save_tarif(token: &Token, editing_id: Option<i64>, dto: &TarifDto) -> Result<(), ApiError> {
    match editing_id {
        Some(id) => api::update_tarif(token, id, dto).await.map(|_| ()),
        None => api::create_tarif(token, dto).await.map(|_| ()),
    }
}
