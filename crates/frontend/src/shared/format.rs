//! Indonesian-locale display formatting (rupiah amounts, dates).

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Indonesian month name for a 1-based month number. Out-of-range input
/// (0 or >12) yields an empty string rather than a wrong month.
pub fn month_name(bulan: u32) -> &'static str {
    bulan
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Rupiah amount with id-ID dot grouping and no decimals: `Rp 1.234.567`.
/// Bills are whole-rupiah; fractions are rounded.
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if negative {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Long-form Indonesian date: `12 Januari 2025`.
pub fn format_tanggal(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Usage quantity with the meter unit: `14.5 m³`.
pub fn format_m3(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{} m³", amount as i64)
    } else {
        format!("{amount} m³")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(1500.0), "Rp 1.500");
        assert_eq!(format_rupiah(1234567.0), "Rp 1.234.567");
        assert_eq!(format_rupiah(150000.4), "Rp 150.000");
        assert_eq!(format_rupiah(-2500.0), "-Rp 2.500");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Januari");
        assert_eq!(month_name(12), "Desember");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_format_tanggal() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        assert_eq!(format_tanggal(date), "3 Mei 2025");
    }

    #[test]
    fn test_format_m3() {
        assert_eq!(format_m3(14.0), "14 m³");
        assert_eq!(format_m3(14.5), "14.5 m³");
    }
}
