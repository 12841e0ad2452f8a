use contracts::domain::pembayaran::{Pembayaran, PembayaranDto};

use crate::shared::api::{get_json, post_json, ApiError, Token};

pub async fn create_pembayaran(token: &Token, dto: &PembayaranDto) -> Result<Pembayaran, ApiError> {
    post_json("/api/pembayaran", token, dto).await
}

/// Payments recorded in one period.
pub async fn fetch_history(
    token: &Token,
    bulan: u32,
    tahun: i32,
) -> Result<Vec<Pembayaran>, ApiError> {
    get_json(
        &format!("/api/pembayaran/history?bulan={bulan}&tahun={tahun}"),
        token,
    )
    .await
}
