pub mod api;
pub mod ui;

use contracts::domain::pelanggan::JenisPelayanan;
use contracts::domain::tarif::Tarif;

use crate::shared::list_view::{ListRecord, ViewFilter};

impl ListRecord for Tarif {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_query(&self, query: &str) -> bool {
        self.jenis_pelayanan.as_str().to_lowercase().contains(query)
            || self
                .keterangan
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query)
    }
}

/// Service-type dropdown filter; `None` shows every class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JenisFilter(pub Option<JenisPelayanan>);

impl ViewFilter<Tarif> for JenisFilter {
    fn matches(&self, item: &Tarif) -> bool {
        match self.0 {
            None => true,
            Some(jenis) => item.jenis_pelayanan == jenis,
        }
    }
}

pub use ui::TarifPage;
