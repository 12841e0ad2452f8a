pub mod api;
pub mod components;
pub mod download;
pub mod format;
pub mod icons;
pub mod list_view;
