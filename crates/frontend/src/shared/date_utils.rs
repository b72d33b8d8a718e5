/// Utilities for date formatting
///
/// Dates arrive from the API as ISO strings (`2024-03-15` or a full
/// timestamp) and are shown in pt-BR.
use chrono::{Datelike, NaiveDate};

const MONTHS_SHORT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

const MONTHS_LONG: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parse the date part of an ISO date or datetime string.
pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Day and abbreviated month, for chart axes.
/// Example: "2024-03-15" -> "15 de mar."
pub fn format_date(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => short_date(date),
        None => date_str.to_string(),
    }
}

/// Example: "2024-03-15T14:02:26Z" -> "15 de março de 2024"
pub fn format_full_date(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => full_date(date),
        None => date_str.to_string(),
    }
}

pub fn short_date(date: NaiveDate) -> String {
    format!("{:02} de {}", date.day(), MONTHS_SHORT[date.month0() as usize])
}

pub fn full_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// Cohort labels: "2024-03" -> "mar. 2024". Anything else is kept as is.
pub fn format_month(month_str: &str) -> String {
    let parsed = NaiveDate::parse_from_str(&format!("{}-01", month_str.trim()), "%Y-%m-%d");
    match parsed {
        Ok(date) => format!("{} {}", MONTHS_SHORT[date.month0() as usize], date.year()),
        Err(_) => month_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 de mar.");
        assert_eq!(format_date("2024-12-05T14:02:26.123Z"), "05 de dez.");
    }

    #[test]
    fn test_format_full_date() {
        assert_eq!(format_full_date("2024-03-15"), "15 de março de 2024");
        assert_eq!(format_full_date("2024-01-01T00:00:00"), "01 de janeiro de 2024");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2024-03"), "mar. 2024");
        assert_eq!(format_month("Q1"), "Q1");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_full_date("2024-13-40"), "2024-13-40");
        assert_eq!(format_date(""), "");
    }
}
