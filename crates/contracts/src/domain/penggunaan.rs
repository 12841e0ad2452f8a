use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Billing status of a usage record. Older rows predate the status column,
/// so an absent field means the bill is still outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTagihan {
    Pending,
    Paid,
}

impl Default for StatusTagihan {
    fn default() -> Self {
        StatusTagihan::Pending
    }
}

impl StatusTagihan {
    pub fn is_outstanding(&self) -> bool {
        matches!(self, StatusTagihan::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusTagihan::Pending => "Belum Dibayar",
            StatusTagihan::Paid => "Lunas",
        }
    }
}

/// Monthly meter reading with the server-computed bill, as returned by
/// `/api/penggunaan/history`. The history endpoint joins in the customer's
/// name and address. Immutable from the client's perspective; only a payment
/// flips `status` (server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Penggunaan {
    pub id: i64,
    pub pelanggan_id: i64,
    pub jumlah_penggunaan: f64,
    pub tanggal: NaiveDate,
    #[serde(default)]
    pub foto_url: Option<String>,
    pub total_tagihan: f64,
    #[serde(default)]
    pub status: StatusTagihan,
    #[serde(default)]
    pub nama: Option<String>,
    #[serde(default)]
    pub alamat: Option<String>,
}

/// Form payload for `/api/penggunaan`. The photo travels alongside these
/// fields in a multipart body and is not part of the JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PenggunaanInput {
    pub pelanggan_id: Option<i64>,
    pub jumlah_penggunaan: String,
    pub tanggal: String,
}

/// Response of a successful usage submission; `total_tagihan` is echoed so
/// the form can confirm the computed amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenggunaanCreated {
    pub id: i64,
    pub total_tagihan: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_defaults_to_pending() {
        let raw = r#"{
            "id": 3,
            "pelanggan_id": 12,
            "jumlah_penggunaan": 14.5,
            "tanggal": "2025-05-01",
            "total_tagihan": 43500.0
        }"#;
        let usage: Penggunaan = serde_json::from_str(raw).unwrap();
        assert_eq!(usage.status, StatusTagihan::Pending);
        assert!(usage.status.is_outstanding());
    }

    #[test]
    fn explicit_status_is_honored() {
        let raw = r#"{
            "id": 3,
            "pelanggan_id": 12,
            "jumlah_penggunaan": 14.5,
            "tanggal": "2025-05-01",
            "total_tagihan": 43500.0,
            "status": "paid"
        }"#;
        let usage: Penggunaan = serde_json::from_str(raw).unwrap();
        assert_eq!(usage.status, StatusTagihan::Paid);
        assert!(!usage.status.is_outstanding());
    }
}
