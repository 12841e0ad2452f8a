use contracts::domain::pelanggan::{JenisPelayanan, Pelanggan, PelangganDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::pelanggan::api;
use crate::shared::api::{ApiError, Token};
use crate::shared::components::{PaginationControls, SearchInput};
use crate::shared::icons::icon;
use crate::shared::list_view::ListView;
use crate::system::auth::{end_session, use_auth};

const PAGE_SIZE: usize = 5;

/// Customer directory: server-side search, A-Z listing, inline CRUD.
#[component]
pub fn PelangganPage() -> impl IntoView {
    let view_state: RwSignal<ListView<Pelanggan>> = RwSignal::new(
        ListView::new(PAGE_SIZE, ())
            .with_sorter(|a, b| a.nama.to_lowercase().cmp(&b.nama.to_lowercase())),
    );
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<Pelanggan>);
    let (show_create, set_show_create) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let load = move || {
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };
        let query = search.get_untracked().trim().to_string();

        let mut seq = 0;
        view_state.update(|v| seq = v.begin_fetch());
        set_error.set(None);

        spawn_local(async move {
            let result = if query.is_empty() {
                api::fetch_pelanggan(&token).await
            } else {
                api::search_pelanggan(&token, &query).await
            };
            match result {
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

    // Refetch on every query edit; superseded responses are discarded by
    // the controller's sequence check.
    Effect::new(move |_| {
        search.track();
        load();
    });

    let delete_pelanggan = move |record: Pelanggan| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Hapus pelanggan \"{}\"?", record.nama))
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
            match api::delete_pelanggan(&token, record.id).await {
                Ok(()) => load(),
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let page_rows = move || view_state.get().page_view().0;
    let window = move || view_state.get().page_view().1;

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pelanggan"</h1>
                    <Badge>{move || view_state.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " Tambah Pelanggan"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || view_state.get().is_loading())
                    >
                        {icon("refresh")}
                        {move || {
                            if view_state.get().is_loading() { " Memuat..." } else { " Muat Ulang" }
                        }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <SearchInput
                        placeholder="Cari nama atau alamat..."
                        value=Signal::derive(move || search.get())
                        on_input=Callback::new(move |q| search.set(q))
                    />
                </div>

                <div class="table-wrapper">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Nama"</th>
                                <th class="table__header-cell">"Alamat"</th>
                                <th class="table__header-cell">"Jenis Pelayanan"</th>
                                <th class="table__header-cell">"Keterangan"</th>
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=page_rows
                                key=|p| p.id
                                children=move |record| {
                                    let record_for_edit = record.clone();
                                    let record_for_delete = record.clone();
                                    let jenis_badge = match record.jenis_pelayanan {
                                        JenisPelayanan::Reguler => "badge badge--neutral",
                                        JenisPelayanan::Subsidi => "badge badge--success",
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <span style="font-weight: 500;">{record.nama.clone()}</span>
                                            </td>
                                            <td class="table__cell">{record.alamat.clone()}</td>
                                            <td class="table__cell">
                                                <span class=jenis_badge>
                                                    {record.jenis_pelayanan.as_str()}
                                                </span>
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
                                                    on_click=move |_| delete_pelanggan(record_for_delete.clone())
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
                                    <td class="table__cell table__cell--empty" colspan="5">
                                        "Tidak ada data pelanggan"
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
                            <PelangganForm
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
                                <PelangganForm
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
fn PelangganForm<F1, F2>(record: Option<Pelanggan>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let editing_id = record.as_ref().map(|p| p.id);
    let title = match &record {
        Some(p) => format!("Ubah Pelanggan: {}", p.nama),
        None => "Tambah Pelanggan".to_string(),
    };

    let initial = record
        .as_ref()
        .map(PelangganDto::from_record)
        .unwrap_or_default();
    let nama = RwSignal::new(initial.nama);
    let alamat = RwSignal::new(initial.alamat);
    let jenis = RwSignal::new(initial.jenis_pelayanan);
    let keterangan = RwSignal::new(initial.keterangan.unwrap_or_default());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let on_save = move |_| {
        let nama_val = nama.get().trim().to_string();
        let alamat_val = alamat.get().trim().to_string();
        if nama_val.is_empty() || alamat_val.is_empty() {
            set_error.set(Some("Nama dan alamat wajib diisi".to_string()));
            return;
        }
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };

        let dto = PelangganDto {
            nama: nama_val,
            alamat: alamat_val,
            jenis_pelayanan: jenis.get(),
            keterangan: {
                let k = keterangan.get().trim().to_string();
                if k.is_empty() { None } else { Some(k) }
            },
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = save_pelanggan(&token, editing_id, &dto).await;
            match result {
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
                        <Label>"Nama"</Label>
                        <Input
                            value=nama
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Alamat"</Label>
                        <Input
                            value=alamat
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Jenis Pelayanan"</Label>
                        <select
                            class="form__select"
                            prop:value=move || jenis.get().as_str().to_string()
                            on:change=move |ev| {
                                if let Some(parsed) = JenisPelayanan::parse(&event_target_value(&ev)) {
                                    jenis.set(parsed);
                                }
                            }
                        >
                            {JenisPelayanan::ALL
                                .iter()
                                .map(|j| {
                                    let j = *j;
                                    view! {
                                        <option
                                            value=j.as_str()
                                            selected=move || jenis.get() == j
                                        >
                                            {j.as_str()}
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

async fn save_pelanggan(
    token: &Token,
    editing_id: Option<i64>,
    dto: &PelangganDto,
) -> Result<(), ApiError> {
    match editing_id {
        Some(id) => api::update_pelanggan(token, id, dto).await.map(|_| ()),
        None => api::create_pelanggan(token, dto).await.map(|_| ()),
    }
}
