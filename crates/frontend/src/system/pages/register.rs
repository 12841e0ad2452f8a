use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage(
    /// Returns to the login form (also used after successful registration)
    on_show_login: Callback<()>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get().trim().to_string();
        let password_val = password.get();
        let confirm_val = confirm.get();

        if username_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Username dan password wajib diisi".to_string()));
            return;
        }
        if password_val != confirm_val {
            set_error_message.set(Some("Konfirmasi password tidak cocok".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);
        set_success_message.set(None);

        spawn_local(async move {
            match crate::system::auth::api::register(username_val, password_val).await {
                Ok(response) => {
                    let msg = response
                        .message
                        .unwrap_or_else(|| "Registrasi berhasil, silakan masuk".to_string());
                    set_success_message.set(Some(msg));
                    set_username.set(String::new());
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"PDAM Desa"</h1>
                <h2>"Daftar Akun Admin"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success_message.get().is_some()>
                    <div class="success-message">
                        {move || success_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="reg-username">"Username"</label>
                        <input
                            type="text"
                            id="reg-username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="reg-password">"Password"</label>
                        <input
                            type="password"
                            id="reg-password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="reg-confirm">"Konfirmasi Password"</label>
                        <input
                            type="password"
                            id="reg-confirm"
                            value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Mendaftar..." } else { "Daftar" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Sudah punya akun? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_show_login.run(());
                        }>
                            "Masuk"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
