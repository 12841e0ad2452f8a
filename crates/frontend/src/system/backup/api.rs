use crate::shared::api::{get_bytes, post_multipart, ApiError, Token};

#[derive(Debug, serde::Deserialize)]
pub struct RestoreResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Download the full-database Excel backup.
pub async fn download_backup(token: &Token) -> Result<Vec<u8>, ApiError> {
    get_bytes("/api/backup/backup", token).await
}

/// Upload a previously downloaded backup; the server replaces its data.
pub async fn restore_backup(
    token: &Token,
    form: web_sys::FormData,
) -> Result<RestoreResponse, ApiError> {
    post_multipart("/api/backup/restore", token, form).await
}
