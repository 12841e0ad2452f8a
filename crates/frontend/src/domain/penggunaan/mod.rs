pub mod api;
pub mod ui;

use contracts::domain::penggunaan::Penggunaan;

use crate::shared::list_view::ListRecord;

impl ListRecord for Penggunaan {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_query(&self, query: &str) -> bool {
        self.nama
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(query)
            || self
                .alamat
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query)
            || self.id.to_string().contains(query)
    }
}

pub use ui::PenggunaanPage;
