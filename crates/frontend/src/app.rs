use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::system::auth::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
