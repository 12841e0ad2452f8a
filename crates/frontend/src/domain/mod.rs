pub mod pelanggan;
pub mod pembayaran;
pub mod penggunaan;
pub mod tagihan;
pub mod tarif;
