pub mod api;
pub mod ui;

use contracts::domain::pelanggan::Pelanggan;

use crate::shared::list_view::ListRecord;

impl ListRecord for Pelanggan {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_query(&self, query: &str) -> bool {
        self.nama.to_lowercase().contains(query)
            || self.alamat.to_lowercase().contains(query)
            || self
                .keterangan
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query)
    }
}

pub use ui::PelangganPage;
