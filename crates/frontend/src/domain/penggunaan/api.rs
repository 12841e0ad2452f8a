use contracts::domain::penggunaan::{Penggunaan, PenggunaanCreated, PenggunaanInput};

use crate::shared::api::{get_json, post_multipart, ApiError, Token};

/// Submit a meter reading. The photo rides in the same multipart body as
/// the form fields; the server computes the bill from the active tariff.
pub async fn submit_penggunaan(
    token: &Token,
    input: &PenggunaanInput,
    foto: Option<web_sys::File>,
) -> Result<PenggunaanCreated, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Unexpected(format!("{e:?}")))?;
    let pelanggan_id = input
        .pelanggan_id
        .ok_or_else(|| ApiError::Validation("Pilih pelanggan terlebih dahulu".to_string()))?;
    form.append_with_str("pelanggan_id", &pelanggan_id.to_string())
        .map_err(|e| ApiError::Unexpected(format!("{e:?}")))?;
    form.append_with_str("jumlah_penggunaan", &input.jumlah_penggunaan)
        .map_err(|e| ApiError::Unexpected(format!("{e:?}")))?;
    form.append_with_str("tanggal", &input.tanggal)
        .map_err(|e| ApiError::Unexpected(format!("{e:?}")))?;
    if let Some(foto) = foto {
        form.append_with_blob_and_filename("foto", &foto, &foto.name())
            .map_err(|e| ApiError::Unexpected(format!("{e:?}")))?;
    }
    post_multipart("/api/penggunaan", token, form).await
}

/// Usage records for one billing period, customer name/address joined in.
pub async fn fetch_history(
    token: &Token,
    bulan: u32,
    tahun: i32,
) -> Result<Vec<Penggunaan>, ApiError> {
    get_json(
        &format!("/api/penggunaan/history?bulan={bulan}&tahun={tahun}"),
        token,
    )
    .await
}
