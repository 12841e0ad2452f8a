//! HTTP plumbing between the frontend and the PDAM API server.
//!
//! Every network call funnels through these helpers so that failures are
//! converted into [`ApiError`] exactly once, at the call site, and never
//! propagate as panics into rendering.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

/// Failure taxonomy for calls against the API server.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport never produced a response (unreachable, timeout, CORS).
    Network(String),
    /// 401: the token is missing or expired; the routing layer reacts by
    /// dropping the session.
    Auth,
    /// Client-side required-field check failed; nothing was sent.
    Validation(String),
    /// The server answered 4xx/5xx; `message` is surfaced verbatim when the
    /// payload carried one.
    Server { status: u16, message: String },
    /// Anything else (malformed payload, blob conversion).
    Unexpected(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Tidak dapat terhubung ke server: {e}"),
            ApiError::Auth => write!(f, "Sesi berakhir, silakan login kembali"),
            ApiError::Validation(msg) => write!(f, "{msg}"),
            ApiError::Server { message, .. } => write!(f, "{message}"),
            ApiError::Unexpected(e) => write!(f, "Terjadi kesalahan: {e}"),
        }
    }
}

/// Injected read-only credential for authenticated requests. Pages receive
/// it from the auth context and hand it to the api modules; nothing below
/// the routing layer touches browser storage directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Token(pub String);

impl Token {
    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

/// API base URL derived from the window location. The backend listens on
/// port 5000 next to wherever the dashboard is served from.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error payload shape the server uses for rejections.
#[derive(Debug, Deserialize)]
struct ServerMessage {
    #[serde(default)]
    message: Option<String>,
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Auth);
    }
    let message = match response.json::<ServerMessage>().await {
        Ok(ServerMessage { message: Some(m) }) => m,
        _ => format!("Permintaan gagal (HTTP {status})"),
    };
    Err(ApiError::Server { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("failed to decode API response: {e}");
        ApiError::Unexpected(e.to_string())
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: &Token) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &token.bearer())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &Token,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &token.bearer())
        .json(body)
        .map_err(|e| ApiError::Unexpected(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &Token,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &token.bearer())
        .json(body)
        .map_err(|e| ApiError::Unexpected(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn delete(path: &str, token: &Token) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &token.bearer())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await.map(|_| ())
}

/// Unauthenticated JSON POST (login, register).
pub async fn post_json_public<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Unexpected(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

/// Fetches a server-produced binary document (PDF report, Excel backup).
pub async fn get_bytes(path: &str, token: &Token) -> Result<Vec<u8>, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &token.bearer())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response)
        .await?
        .binary()
        .await
        .map_err(|e| ApiError::Unexpected(e.to_string()))
}

/// Multipart POST for form bodies carrying a file (meter photo, restore
/// upload). The browser sets the multipart boundary itself.
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    token: &Token,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &token.bearer())
        .body(form)
        .map_err(|e| ApiError::Unexpected(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_format() {
        let token = Token("abc123".to_string());
        assert_eq!(token.bearer(), "Bearer abc123");
    }

    #[test]
    fn server_message_payload_is_optional() {
        let with: ServerMessage = serde_json::from_str(r#"{"message": "Pelanggan tidak ditemukan"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("Pelanggan tidak ditemukan"));

        let without: ServerMessage = serde_json::from_str("{}").unwrap();
        assert!(without.message.is_none());

        let extra: ServerMessage = serde_json::from_str(r#"{"error": "x", "code": 7}"#).unwrap();
        assert!(extra.message.is_none());
    }

    #[test]
    fn error_display_surfaces_server_message_verbatim() {
        let err = ApiError::Server {
            status: 422,
            message: "Jumlah pembayaran tidak valid".to_string(),
        };
        assert_eq!(err.to_string(), "Jumlah pembayaran tidak valid");
        assert_eq!(
            ApiError::Auth.to_string(),
            "Sesi berakhir, silakan login kembali"
        );
    }
}
