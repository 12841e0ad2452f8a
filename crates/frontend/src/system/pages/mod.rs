pub mod login;
pub mod register;

pub use login::LoginPage;
pub use register::RegisterPage;
