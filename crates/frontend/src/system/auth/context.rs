use leptos::prelude::*;

use crate::shared::api::Token;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Credential handed to the api modules; None while logged out.
    pub fn token(&self) -> Option<Token> {
        self.token.clone().map(Token)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from sessionStorage on mount; the token is only
    // validated lazily, the first 401 drops it again.
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: store a fresh login
pub fn start_session(set_auth_state: WriteSignal<AuthState>, token: String) {
    storage::save_token(&token);
    set_auth_state.set(AuthState { token: Some(token) });
}

/// Helper: drop the session (logout button or an expired token)
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
