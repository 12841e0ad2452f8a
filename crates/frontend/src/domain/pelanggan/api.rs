use contracts::domain::pelanggan::{Pelanggan, PelangganDto};

use crate::shared::api::{delete, get_json, post_json, put_json, ApiError, Token};

pub async fn fetch_pelanggan(token: &Token) -> Result<Vec<Pelanggan>, ApiError> {
    get_json("/api/pelanggan", token).await
}

/// Server-side name/address search. The empty query is handled by the
/// caller (it fetches the full list instead).
pub async fn search_pelanggan(token: &Token, query: &str) -> Result<Vec<Pelanggan>, ApiError> {
    get_json(
        &format!("/api/pelanggan/search?query={}", urlencoding::encode(query)),
        token,
    )
    .await
}

pub async fn create_pelanggan(token: &Token, dto: &PelangganDto) -> Result<Pelanggan, ApiError> {
    post_json("/api/pelanggan", token, dto).await
}

pub async fn update_pelanggan(
    token: &Token,
    id: i64,
    dto: &PelangganDto,
) -> Result<Pelanggan, ApiError> {
    put_json(&format!("/api/pelanggan/{id}"), token, dto).await
}

pub async fn delete_pelanggan(token: &Token, id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/pelanggan/{id}"), token).await
}
