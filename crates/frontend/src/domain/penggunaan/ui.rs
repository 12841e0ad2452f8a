use chrono::Utc;
use contracts::domain::pelanggan::Pelanggan;
use contracts::domain::penggunaan::PenggunaanInput;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::Url;

use crate::domain::pelanggan::api as pelanggan_api;
use crate::shared::api::ApiError;
use crate::shared::format::format_rupiah;
use crate::shared::icons::icon;
use crate::system::auth::{end_session, use_auth};

use super::api;

/// Meter-reading entry form. The server computes the bill; the confirmation
/// message echoes the amount and clears itself after a few seconds.
#[component]
pub fn PenggunaanPage() -> impl IntoView {
    let (customers, set_customers) = signal(Vec::<Pelanggan>::new());
    let (selected_customer, set_selected_customer) = signal(None::<i64>);
    let jumlah = RwSignal::new(String::new());
    let tanggal = RwSignal::new(Utc::now().format("%Y-%m-%d").to_string());
    let (foto_preview, set_foto_preview) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    // Distinguishes the active success toast from ones already replaced.
    let toast_seq = StoredValue::new(0u64);

    let file_input: NodeRef<html::Input> = NodeRef::new();

    let (auth_state, set_auth_state) = use_auth();

    Effect::new(move |_| {
        let Some(token) = auth_state.get().token() else {
            return;
        };
        spawn_local(async move {
            match pelanggan_api::fetch_pelanggan(&token).await {
                Ok(mut records) => {
                    records.sort_by(|a, b| a.nama.to_lowercase().cmp(&b.nama.to_lowercase()));
                    set_customers.set(records);
                }
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let selected_record = move || {
        let id = selected_customer.get()?;
        customers.get().into_iter().find(|p| p.id == id)
    };

    let current_file = move || -> Option<web_sys::File> {
        file_input.get()?.files()?.get(0)
    };

    let on_foto_change = move |_| {
        // Drop the previous preview URL before minting a new one.
        if let Some(old) = foto_preview.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        match current_file() {
            Some(file) => match Url::create_object_url_with_blob(&file) {
                Ok(url) => set_foto_preview.set(Some(url)),
                Err(_) => set_foto_preview.set(None),
            },
            None => set_foto_preview.set(None),
        }
    };

    let reset_form = move || {
        set_selected_customer.set(None);
        jumlah.set(String::new());
        tanggal.set(Utc::now().format("%Y-%m-%d").to_string());
        if let Some(old) = foto_preview.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        set_foto_preview.set(None);
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let jumlah_val = jumlah.get().trim().to_string();
        if selected_customer.get().is_none() {
            set_error.set(Some("Pilih pelanggan terlebih dahulu".to_string()));
            return;
        }
        if jumlah_val.parse::<f64>().map(|v| v <= 0.0).unwrap_or(true) {
            set_error.set(Some("Jumlah penggunaan harus berupa angka positif".to_string()));
            return;
        }
        if tanggal.get().trim().is_empty() {
            set_error.set(Some("Tanggal wajib diisi".to_string()));
            return;
        }
        let Some(token) = auth_state.get_untracked().token() else {
            return;
        };

        let input = PenggunaanInput {
            pelanggan_id: selected_customer.get(),
            jumlah_penggunaan: jumlah_val,
            tanggal: tanggal.get().trim().to_string(),
        };
        let foto = current_file();

        set_saving.set(true);
        set_error.set(None);
        set_success.set(None);

        spawn_local(async move {
            match api::submit_penggunaan(&token, &input, foto).await {
                Ok(created) => {
                    reset_form();
                    set_success.set(Some(format!(
                        "Penggunaan tercatat. Total tagihan: {}",
                        format_rupiah(created.total_tagihan)
                    )));
                    set_saving.set(false);

                    let seq = toast_seq.get_value() + 1;
                    toast_seq.set_value(seq);
                    spawn_local(async move {
                        TimeoutFuture::new(5_000).await;
                        if toast_seq.get_value() == seq {
                            set_success.set(None);
                        }
                    });
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
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Input Penggunaan Air"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || {
                    success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })
                }}

                <form class="usage-form" on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Pelanggan"</Label>
                        <select
                            class="form__select"
                            prop:value=move || {
                                selected_customer
                                    .get()
                                    .map(|id| id.to_string())
                                    .unwrap_or_default()
                            }
                            on:change=move |ev| {
                                set_selected_customer.set(event_target_value(&ev).parse().ok());
                            }
                            disabled=move || saving.get()
                        >
                            <option value="">"-- Pilih Pelanggan --"</option>
                            {move || {
                                customers
                                    .get()
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <option value=p.id.to_string()>
                                                {format!("{} — {}", p.nama, p.alamat)}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    {move || {
                        selected_record()
                            .map(|p| {
                                view! {
                                    <div class="info-box">
                                        <span class="info-box__icon">{icon("users")}</span>
                                        <div class="info-box__body">
                                            <div>
                                                <strong>{p.nama.clone()}</strong>
                                                " — "
                                                {p.jenis_pelayanan.as_str()}
                                            </div>
                                            <div>{p.alamat.clone()}</div>
                                        </div>
                                    </div>
                                }
                            })
                    }}

                    <div class="form__group">
                        <Label>"Jumlah Penggunaan (m³)"</Label>
                        <Input
                            value=jumlah
                            input_type=InputType::Number
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Tanggal Pencatatan"</Label>
                        <input
                            type="date"
                            class="form__date"
                            prop:value=move || tanggal.get()
                            on:input=move |ev| tanggal.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>

                    <div class="form__group">
                        <Label>{icon("camera")} " Foto Meteran (opsional)"</Label>
                        <input
                            type="file"
                            accept="image/*"
                            node_ref=file_input
                            on:change=on_foto_change
                            disabled=move || saving.get()
                        />
                        {move || {
                            foto_preview
                                .get()
                                .map(|url| {
                                    view! {
                                        <img class="usage-form__preview" src=url alt="Pratinjau foto meteran" />
                                    }
                                })
                        }}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Menyimpan..." } else { "Simpan Penggunaan" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
