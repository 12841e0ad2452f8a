use web_sys::window;

const TOKEN_KEY: &str = "token";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save the JWT to sessionStorage (session lives until the tab closes)
pub fn save_token(token: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get the JWT from sessionStorage
pub fn get_token() -> Option<String> {
    get_session_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Clear the stored session
pub fn clear_token() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
