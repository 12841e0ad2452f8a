pub mod navbar;
pub mod sidebar;
