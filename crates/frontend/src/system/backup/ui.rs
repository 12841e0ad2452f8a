use chrono::Utc;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiError;
use crate::shared::download::{bytes_to_blob, download_blob, MIME_XLSX};
use crate::shared::icons::icon;
use crate::system::auth::{end_session, use_auth};

use super::api;

/// Backup & restore screen. Both actions keep the user on this page and
/// report through inline messages.
#[component]
pub fn BackupPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (backup_message, set_backup_message) = signal(Option::<Result<String, String>>::None);
    let (restore_message, set_restore_message) = signal(Option::<Result<String, String>>::None);
    let (backup_busy, set_backup_busy) = signal(false);
    let (restore_busy, set_restore_busy) = signal(false);

    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_backup = move |_| {
        let Some(token) = auth_state.get().token() else {
            return;
        };
        set_backup_busy.set(true);
        set_backup_message.set(None);

        spawn_local(async move {
            let result = async {
                let bytes = api::download_backup(&token).await?;
                let blob = bytes_to_blob(&bytes, MIME_XLSX).map_err(ApiError::Unexpected)?;
                let filename = format!("backup_{}.xlsx", Utc::now().format("%Y-%m-%d"));
                download_blob(&blob, &filename).map_err(ApiError::Unexpected)?;
                Ok::<_, ApiError>(filename)
            }
            .await;

            match result {
                Ok(filename) => {
                    set_backup_message.set(Some(Ok(format!("Backup tersimpan: {filename}"))));
                }
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_backup_message.set(Some(Err(e.to_string()))),
            }
            set_backup_busy.set(false);
        });
    };

    let on_restore = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(token) = auth_state.get().token() else {
            return;
        };
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            set_restore_message.set(Some(Err("Pilih file backup terlebih dahulu".to_string())));
            return;
        };

        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(
                    "Restore akan menimpa seluruh data saat ini. Lanjutkan?",
                )
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_restore_busy.set(true);
        set_restore_message.set(None);

        spawn_local(async move {
            let result = async {
                let form = web_sys::FormData::new()
                    .map_err(|e| ApiError::Unexpected(format!("{e:?}")))?;
                form.append_with_blob("file", &file)
                    .map_err(|e| ApiError::Unexpected(format!("{e:?}")))?;
                api::restore_backup(&token, form).await
            }
            .await;

            match result {
                Ok(response) => {
                    let msg = response
                        .message
                        .unwrap_or_else(|| "Data berhasil dipulihkan".to_string());
                    set_restore_message.set(Some(Ok(msg)));
                    if let Some(input) = file_input.get() {
                        input.set_value("");
                    }
                }
                Err(ApiError::Auth) => end_session(set_auth_state),
                Err(e) => set_restore_message.set(Some(Err(e.to_string()))),
            }
            set_restore_busy.set(false);
        });
    };

    let message_view = move |message: ReadSignal<Option<Result<String, String>>>| {
        move || {
            message.get().map(|result| match result {
                Ok(msg) => view! { <div class="success-message">{msg}</div> }.into_any(),
                Err(msg) => view! { <div class="error-message">{msg}</div> }.into_any(),
            })
        }
    };

    view! {
        <div class="page-backup">
            <div class="page-header">
                <h1>"Backup & Restore"</h1>
            </div>

            <div class="backup-cards">
                <div class="backup-card">
                    <h2>{icon("download")} " Backup Data"</h2>
                    <p>"Unduh seluruh data sebagai file Excel."</p>
                    {message_view(backup_message)}
                    <button
                        class="btn-primary"
                        on:click=on_backup
                        disabled=move || backup_busy.get()
                    >
                        {move || if backup_busy.get() { "Menyiapkan..." } else { "Unduh Backup" }}
                    </button>
                </div>

                <div class="backup-card">
                    <h2>{icon("upload")} " Restore Data"</h2>
                    <p>"Pulihkan data dari file backup. Seluruh data saat ini akan diganti."</p>
                    {message_view(restore_message)}
                    <form on:submit=on_restore>
                        <input
                            type="file"
                            accept=".xlsx"
                            node_ref=file_input
                            disabled=move || restore_busy.get()
                        />
                        <button
                            type="submit"
                            class="btn-danger"
                            disabled=move || restore_busy.get()
                        >
                            {move || if restore_busy.get() { "Memulihkan..." } else { "Restore" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
