pub mod api;
pub mod ui;

use contracts::domain::pembayaran::Pembayaran;

use crate::shared::list_view::ListRecord;

impl ListRecord for Pembayaran {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_query(&self, query: &str) -> bool {
        self.id.to_string().contains(query)
            || self.penggunaan_id.to_string().contains(query)
            || self
                .metode_pembayaran
                .as_str()
                .to_lowercase()
                .contains(query)
            || self
                .keterangan
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query)
    }
}

pub use ui::{PembayaranForm, PembayaranPage};
