use leptos::prelude::*;

use crate::dashboards::home::HomeDashboard;
use crate::domain::pelanggan::PelangganPage;
use crate::domain::pembayaran::PembayaranPage;
use crate::domain::penggunaan::PenggunaanPage;
use crate::domain::tagihan::TagihanPage;
use crate::domain::tarif::TarifPage;
use crate::layout::navbar::Navbar;
use crate::layout::sidebar::Sidebar;
use crate::system::auth::use_auth;
use crate::system::backup::BackupPage;
use crate::system::pages::{LoginPage, RegisterPage};

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Pelanggan,
    Penggunaan,
    Pembayaran,
    Tagihan,
    Tarif,
    Backup,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Pelanggan,
        Page::Penggunaan,
        Page::Pembayaran,
        Page::Tagihan,
        Page::Tarif,
        Page::Backup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Pelanggan => "Pelanggan",
            Page::Penggunaan => "Input Penggunaan",
            Page::Pembayaran => "Pembayaran",
            Page::Tagihan => "Tagihan",
            Page::Tarif => "Tarif",
            Page::Backup => "Backup & Restore",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "bar-chart",
            Page::Pelanggan => "users",
            Page::Penggunaan => "droplet",
            Page::Pembayaran => "credit-card",
            Page::Tagihan => "file-text",
            Page::Tarif => "settings",
            Page::Backup => "database",
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let (page, set_page) = signal(Page::Dashboard);

    view! {
        <div class="app-shell">
            <Sidebar
                current=page
                on_navigate=Callback::new(move |target| set_page.set(target))
            />
            <div class="app-shell__main">
                <Navbar current=page />
                <main class="app-shell__content">
                    {move || match page.get() {
                        Page::Dashboard => view! { <HomeDashboard /> }.into_any(),
                        Page::Pelanggan => view! { <PelangganPage /> }.into_any(),
                        Page::Penggunaan => view! { <PenggunaanPage /> }.into_any(),
                        Page::Pembayaran => view! { <PembayaranPage /> }.into_any(),
                        Page::Tagihan => view! { <TagihanPage /> }.into_any(),
                        Page::Tarif => view! { <TarifPage /> }.into_any(),
                        Page::Backup => view! { <BackupPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (show_register, set_show_register) = signal(false);

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=move || {
                view! {
                    <Show
                        when=move || show_register.get()
                        fallback=move || {
                            view! {
                                <LoginPage on_show_register=Callback::new(move |_| {
                                    set_show_register.set(true);
                                }) />
                            }
                        }
                    >
                        <RegisterPage on_show_login=Callback::new(move |_| {
                            set_show_register.set(false);
                        }) />
                    </Show>
                }
            }
        >
            <MainLayout />
        </Show>
    }
}
