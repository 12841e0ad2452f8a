use serde::{Deserialize, Serialize};

/// Service class a customer is billed under. The tariff table keys on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JenisPelayanan {
    Reguler,
    Subsidi,
}

impl JenisPelayanan {
    pub const ALL: [JenisPelayanan; 2] = [JenisPelayanan::Reguler, JenisPelayanan::Subsidi];

    pub fn as_str(&self) -> &'static str {
        match self {
            JenisPelayanan::Reguler => "Reguler",
            JenisPelayanan::Subsidi => "Subsidi",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Reguler" => Some(JenisPelayanan::Reguler),
            "Subsidi" => Some(JenisPelayanan::Subsidi),
            _ => None,
        }
    }
}

impl Default for JenisPelayanan {
    fn default() -> Self {
        JenisPelayanan::Reguler
    }
}

impl std::fmt::Display for JenisPelayanan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer record as served by `/api/pelanggan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pelanggan {
    pub id: i64,
    pub nama: String,
    pub alamat: String,
    pub jenis_pelayanan: JenisPelayanan,
    #[serde(default)]
    pub keterangan: Option<String>,
}

/// Create/update payload for a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PelangganDto {
    pub nama: String,
    pub alamat: String,
    pub jenis_pelayanan: JenisPelayanan,
    #[serde(default)]
    pub keterangan: Option<String>,
}

impl PelangganDto {
    pub fn from_record(p: &Pelanggan) -> Self {
        Self {
            nama: p.nama.clone(),
            alamat: p.alamat.clone(),
            jenis_pelayanan: p.jenis_pelayanan,
            keterangan: p.keterangan.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jenis_pelayanan_roundtrips_through_labels() {
        for jenis in JenisPelayanan::ALL {
            assert_eq!(JenisPelayanan::parse(jenis.as_str()), Some(jenis));
        }
        assert_eq!(JenisPelayanan::parse("Industri"), None);
    }

    #[test]
    fn pelanggan_accepts_missing_keterangan() {
        let raw = r#"{"id":7,"nama":"Budi","alamat":"Dusun 2","jenis_pelayanan":"Subsidi"}"#;
        let p: Pelanggan = serde_json::from_str(raw).unwrap();
        assert_eq!(p.jenis_pelayanan, JenisPelayanan::Subsidi);
        assert!(p.keterangan.is_none());
    }

    #[test]
    fn dto_from_record_copies_editable_fields() {
        let p = Pelanggan {
            id: 3,
            nama: "Siti".to_string(),
            alamat: "Dusun 1".to_string(),
            jenis_pelayanan: JenisPelayanan::Reguler,
            keterangan: Some("meteran baru".to_string()),
        };
        let dto = PelangganDto::from_record(&p);
        assert_eq!(dto.nama, "Siti");
        assert_eq!(dto.alamat, "Dusun 1");
        assert_eq!(dto.jenis_pelayanan, JenisPelayanan::Reguler);
        assert_eq!(dto.keterangan.as_deref(), Some("meteran baru"));
    }
}
