use crate::shared::api::{get_bytes, ApiError, Token};

/// Printable nota (receipt) for one usage record, as PDF bytes.
pub async fn fetch_nota(token: &Token, penggunaan_id: i64) -> Result<Vec<u8>, ApiError> {
    get_bytes(&format!("/api/tagihan/nota/{penggunaan_id}"), token).await
}

pub async fn export_pdf(token: &Token, bulan: u32, tahun: i32) -> Result<Vec<u8>, ApiError> {
    get_bytes(
        &format!("/api/tagihan/export/pdf?bulan={bulan}&tahun={tahun}"),
        token,
    )
    .await
}

pub async fn export_excel(token: &Token, bulan: u32, tahun: i32) -> Result<Vec<u8>, ApiError> {
    get_bytes(
        &format!("/api/tagihan/export/excel?bulan={bulan}&tahun={tahun}"),
        token,
    )
    .await
}
