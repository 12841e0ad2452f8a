pub mod auth;
pub mod backup;
pub mod pages;
