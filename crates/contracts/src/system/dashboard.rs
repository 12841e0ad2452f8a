use serde::{Deserialize, Serialize};

/// Month summary served by `/api/dashboard/stats?bulan=&tahun=`. Fields the
/// server has no data for yet come back absent and default to zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    #[serde(default, rename = "totalPenggunaan")]
    pub total_penggunaan: f64,
    #[serde(default, rename = "totalPembayaran")]
    pub total_pembayaran: f64,
    #[serde(default, rename = "totalTagihan")]
    pub total_tagihan: f64,
    #[serde(default)]
    pub outstanding: f64,
}

/// One bar of the yearly usage chart, `/api/dashboard/monthly-usage?tahun=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyUsage {
    pub bulan: u32,
    #[serde(default)]
    pub total_penggunaan: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_stats_default_to_zero() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalPenggunaan": 120.0}"#).unwrap();
        assert_eq!(stats.total_penggunaan, 120.0);
        assert_eq!(stats.outstanding, 0.0);
    }
}
