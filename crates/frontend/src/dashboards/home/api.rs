use contracts::system::dashboard::{DashboardStats, MonthlyUsage};

use crate::shared::api::{get_json, ApiError, Token};

/// Summary figures for one billing period.
pub async fn get_stats(token: &Token, bulan: u32, tahun: i32) -> Result<DashboardStats, ApiError> {
    get_json(
        &format!("/api/dashboard/stats?bulan={bulan}&tahun={tahun}"),
        token,
    )
    .await
}

/// Per-month usage totals for the selected year.
pub async fn get_monthly_usage(token: &Token, tahun: i32) -> Result<Vec<MonthlyUsage>, ApiError> {
    get_json(&format!("/api/dashboard/monthly-usage?tahun={tahun}"), token).await
}
