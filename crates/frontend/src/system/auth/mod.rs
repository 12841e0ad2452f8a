pub mod api;
pub mod context;
pub mod storage;

pub use context::{end_session, start_session, use_auth, AuthProvider, AuthState};
