use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accepted payment channels. `Lainnya` doubles as the catch-all for any
/// value the server returns that the UI does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetodePembayaran {
    Tunai,
    #[serde(rename = "Transfer Bank")]
    TransferBank,
    #[serde(rename = "QRIS")]
    Qris,
    #[serde(rename = "E-Wallet")]
    EWallet,
    #[serde(other)]
    Lainnya,
}

impl MetodePembayaran {
    pub const ALL: [MetodePembayaran; 5] = [
        MetodePembayaran::Tunai,
        MetodePembayaran::TransferBank,
        MetodePembayaran::Qris,
        MetodePembayaran::EWallet,
        MetodePembayaran::Lainnya,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetodePembayaran::Tunai => "Tunai",
            MetodePembayaran::TransferBank => "Transfer Bank",
            MetodePembayaran::Qris => "QRIS",
            MetodePembayaran::EWallet => "E-Wallet",
            MetodePembayaran::Lainnya => "Lainnya",
        }
    }
}

impl std::fmt::Display for MetodePembayaran {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment recorded against a usage bill. Create-only from this layer; the
/// server is responsible for marking the referenced usage record paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pembayaran {
    pub id: i64,
    pub penggunaan_id: i64,
    pub tanggal_pembayaran: NaiveDate,
    pub jumlah_pembayaran: f64,
    pub metode_pembayaran: MetodePembayaran,
    #[serde(default)]
    pub keterangan: Option<String>,
}

/// Form payload for `POST /api/pembayaran`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PembayaranDto {
    pub penggunaan_id: String,
    pub tanggal_pembayaran: String,
    pub jumlah_pembayaran: String,
    pub metode_pembayaran: String,
    pub keterangan: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_method_falls_back_to_lainnya() {
        let raw = r#"{
            "id": 1,
            "penggunaan_id": 9,
            "tanggal_pembayaran": "2025-06-10",
            "jumlah_pembayaran": 150000.0,
            "metode_pembayaran": "Cek"
        }"#;
        let p: Pembayaran = serde_json::from_str(raw).unwrap();
        assert_eq!(p.metode_pembayaran, MetodePembayaran::Lainnya);
    }

    #[test]
    fn method_labels_match_wire_values() {
        let raw = r#""Transfer Bank""#;
        let m: MetodePembayaran = serde_json::from_str(raw).unwrap();
        assert_eq!(m, MetodePembayaran::TransferBank);
        assert_eq!(serde_json::to_string(&m).unwrap(), raw);
    }
}
