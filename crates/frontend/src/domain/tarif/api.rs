use contracts::domain::tarif::{Tarif, TarifDto};

use crate::shared::api::{delete, get_json, post_json, put_json, ApiError, Token};

pub async fn fetch_tarif(token: &Token) -> Result<Vec<Tarif>, ApiError> {
    get_json("/api/tarif_penggunaan", token).await
}

pub async fn create_tarif(token: &Token, dto: &TarifDto) -> Result<Tarif, ApiError> {
    post_json("/api/tarif_penggunaan", token, dto).await
}

pub async fn update_tarif(token: &Token, id: i64, dto: &TarifDto) -> Result<Tarif, ApiError> {
    put_json(&format!("/api/tarif_penggunaan/{id}"), token, dto).await
}

pub async fn delete_tarif(token: &Token, id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/tarif_penggunaan/{id}"), token).await
}
