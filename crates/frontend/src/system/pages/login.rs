use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{start_session, use_auth};

#[component]
pub fn LoginPage(
    /// Switches the auth screen to the registration form
    on_show_register: Callback<()>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get().trim().to_string();
        let password_val = password.get();
        if username_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Username dan password wajib diisi".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match crate::system::auth::api::login(username_val, password_val).await {
                Ok(response) => {
                    // Switching auth state swaps the whole tree to MainLayout
                    start_session(set_auth_state, response.token);
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
                <h2>"Masuk ke Dashboard"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="admin"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Masuk..." } else { "Masuk" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Belum punya akun? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_show_register.run(());
                        }>
                            "Daftar"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
