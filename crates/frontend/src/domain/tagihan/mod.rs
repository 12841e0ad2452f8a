pub mod api;
pub mod ui;

use contracts::domain::pembayaran::PembayaranDto;
use contracts::domain::penggunaan::Penggunaan;

use crate::shared::list_view::ViewFilter;

/// Status tabs above the billing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTab {
    Semua,
    BelumDibayar,
    Lunas,
}

impl StatusTab {
    pub const ALL: [StatusTab; 3] = [StatusTab::Semua, StatusTab::BelumDibayar, StatusTab::Lunas];

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::Semua => "Semua",
            StatusTab::BelumDibayar => "Belum Dibayar",
            StatusTab::Lunas => "Lunas",
        }
    }
}

impl ViewFilter<Penggunaan> for StatusTab {
    fn matches(&self, item: &Penggunaan) -> bool {
        match self {
            StatusTab::Semua => true,
            StatusTab::BelumDibayar => item.status.is_outstanding(),
            StatusTab::Lunas => !item.status.is_outstanding(),
        }
    }
}

/// Seeds the payment form from an outstanding bill. A plain value copy:
/// later changes to the bill row never reach the form.
pub fn payment_seed(record: &Penggunaan) -> PembayaranDto {
    PembayaranDto {
        penggunaan_id: record.id.to_string(),
        tanggal_pembayaran: String::new(),
        jumlah_pembayaran: format!("{}", record.total_tagihan),
        metode_pembayaran: String::new(),
        keterangan: String::new(),
    }
}

pub use ui::TagihanPage;

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::penggunaan::StatusTagihan;

    fn usage(id: i64, status: StatusTagihan) -> Penggunaan {
        Penggunaan {
            id,
            pelanggan_id: 1,
            jumlah_penggunaan: 10.0,
            tanggal: chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            foto_url: None,
            total_tagihan: 30000.0,
            status,
            nama: None,
            alamat: None,
        }
    }

    #[test]
    fn tabs_partition_by_status() {
        let records = vec![
            usage(1, StatusTagihan::Pending),
            usage(2, StatusTagihan::Paid),
            usage(3, StatusTagihan::Pending),
        ];
        let outstanding: Vec<i64> = records
            .iter()
            .filter(|r| StatusTab::BelumDibayar.matches(r))
            .map(|r| r.id)
            .collect();
        let paid: Vec<i64> = records
            .iter()
            .filter(|r| StatusTab::Lunas.matches(r))
            .map(|r| r.id)
            .collect();
        assert_eq!(outstanding, vec![1, 3]);
        assert_eq!(paid, vec![2]);
        assert!(records.iter().all(|r| StatusTab::Semua.matches(r)));
    }

    #[test]
    fn payment_seed_is_a_one_time_copy() {
        let mut record = usage(7, StatusTagihan::Pending);
        let seed = payment_seed(&record);
        assert_eq!(seed.penggunaan_id, "7");
        assert_eq!(seed.jumlah_pembayaran, "30000");

        record.total_tagihan = 99999.0;
        assert_eq!(seed.jumlah_pembayaran, "30000");
    }
}
