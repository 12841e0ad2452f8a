use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pelanggan::JenisPelayanan;

/// Tariff row: base rate and late penalty for a service class over an
/// effective date range. An open `efektif_sampai` means "current".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tarif {
    pub id: i64,
    pub jenis_pelayanan: JenisPelayanan,
    pub tarif_dasar: f64,
    pub denda: f64,
    pub efektif_dari: NaiveDate,
    #[serde(default)]
    pub efektif_sampai: Option<NaiveDate>,
    #[serde(default)]
    pub keterangan: Option<String>,
}

/// Create/update payload for `/api/tarif_penggunaan`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TarifDto {
    pub jenis_pelayanan: String,
    pub tarif_dasar: String,
    pub denda: String,
    pub efektif_dari: String,
    pub efektif_sampai: String,
    pub keterangan: String,
}

impl TarifDto {
    pub fn from_record(t: &Tarif) -> Self {
        Self {
            jenis_pelayanan: t.jenis_pelayanan.as_str().to_string(),
            tarif_dasar: t.tarif_dasar.to_string(),
            denda: t.denda.to_string(),
            efektif_dari: t.efektif_dari.format("%Y-%m-%d").to_string(),
            efektif_sampai: t
                .efektif_sampai
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            keterangan: t.keterangan.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ended_tarif_deserializes() {
        let raw = r#"{
            "id": 2,
            "jenis_pelayanan": "Subsidi",
            "tarif_dasar": 2000.0,
            "denda": 5000.0,
            "efektif_dari": "2025-01-01"
        }"#;
        let t: Tarif = serde_json::from_str(raw).unwrap();
        assert!(t.efektif_sampai.is_none());
        let dto = TarifDto::from_record(&t);
        assert_eq!(dto.efektif_dari, "2025-01-01");
        assert_eq!(dto.efektif_sampai, "");
    }
}
