//! Display formatting for numbers, currency and percentages (pt-BR).
//!
//! Every function accepts anything implementing [`ToNumber`], so raw API
//! values (`"1234.50"`, `None`, `f64`) can be passed straight through.
//! None of them fail: absent values get a placeholder and unparsable ones
//! are shown as zero.

pub use contracts::shared::numeric::{to_number, ToNumber};

/// Insert `.` every three digits of an integer string (sign preserved).
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();
    format!("{}{}", sign, grouped)
}

/// `1234.5` with 2 decimals -> `"1.234,50"`. The sign is left to the caller.
fn format_decimal_abs(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{},{}", group_thousands(integer), fraction),
        None => group_thousands(&formatted),
    }
}

/// BRL currency: `"R$ 1.234,50"`, negatives as `"-R$ 1,50"`.
pub fn format_currency(value: impl ToNumber) -> String {
    if value.is_absent() {
        return "R$ 0,00".to_string();
    }
    let n = value.to_number();
    let body = format_decimal_abs(n, 2);
    // -0.001 rounds to zero and must not keep its sign
    if n < 0.0 && body != "0,00" {
        format!("-R$ {}", body)
    } else {
        format!("R$ {}", body)
    }
}

/// pt-BR grouping with up to three decimals, trailing zeros dropped:
/// `1234.5` -> `"1.234,5"`.
pub fn format_number(value: impl ToNumber) -> String {
    if value.is_absent() {
        return "0".to_string();
    }
    let n = value.to_number();
    let body = format_decimal_abs(n, 3);
    let body = match body.split_once(',') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{},{}", integer, fraction)
            }
        }
        None => body,
    };
    if n < 0.0 && body != "0" {
        format!("-{}", body)
    } else {
        body
    }
}

/// `12.345` with one decimal -> `"12.3%"`.
pub fn format_percent(value: impl ToNumber, decimals: usize) -> String {
    if value.is_absent() {
        return "0%".to_string();
    }
    format!("{:.*}%", decimals, value.to_number())
}

/// Short form for axis labels and badges: `1.5K`, `2.5M`.
pub fn format_compact(value: impl ToNumber) -> String {
    if value.is_absent() {
        return "0".to_string();
    }
    let n = value.to_number();
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// Return on ad spend: `"3.25x"`, or `"-"` when the ratio is undefined.
pub fn format_roas(value: impl ToNumber) -> String {
    if value.is_absent() {
        return "-".to_string();
    }
    format!("{:.2}x", value.to_number())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "change change--up",
            ChangeDirection::Down => "change change--down",
            ChangeDirection::Flat => "change change--flat",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "\u{2191}",
            ChangeDirection::Down => "\u{2193}",
            ChangeDirection::Flat => "\u{2192}",
        }
    }
}

pub fn change_direction(value: impl ToNumber) -> ChangeDirection {
    if value.is_absent() {
        return ChangeDirection::Flat;
    }
    let n = value.to_number();
    if n > 0.0 {
        ChangeDirection::Up
    } else if n < 0.0 {
        ChangeDirection::Down
    } else {
        ChangeDirection::Flat
    }
}

/// Arrow plus magnitude, e.g. `"↑ 12.5%"`.
pub fn format_change(value: impl ToNumber) -> String {
    let direction = change_direction(&value);
    format!("{} {:.1}%", direction.arrow(), value.to_number().abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(-1.5), "-R$ 1,50");
        assert_eq!(format_currency("99.9"), "R$ 99,90");
    }

    #[test]
    fn test_format_currency_absent_or_invalid() {
        assert_eq!(format_currency(None::<f64>), "R$ 0,00");
        assert_eq!(format_currency(f64::NAN), "R$ 0,00");
        assert_eq!(format_currency("abc"), "R$ 0,00");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(1_000_000), "1.000.000");
        assert_eq!(format_number(0.12345), "0,123");
        assert_eq!(format_number(-1234.0), "-1.234");
        assert_eq!(format_number(None::<f64>), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345, 1), "12.3%");
        assert_eq!(format_percent(5, 0), "5%");
        assert_eq!(format_percent(None::<f64>, 1), "0%");
        assert_eq!(format_percent("abc", 1), "0.0%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1500), "1.5K");
        assert_eq!(format_compact(2_500_000), "2.5M");
        assert_eq!(format_compact(None::<f64>), "0");
    }

    #[test]
    fn test_format_roas() {
        assert_eq!(format_roas(3.254), "3.25x");
        assert_eq!(format_roas(Some(0.0)), "0.00x");
        assert_eq!(format_roas(None::<f64>), "-");
    }

    #[test]
    fn test_change_direction() {
        assert_eq!(change_direction(12.0), ChangeDirection::Up);
        assert_eq!(change_direction(-0.1), ChangeDirection::Down);
        assert_eq!(change_direction(0.0), ChangeDirection::Flat);
        assert_eq!(change_direction(None::<f64>), ChangeDirection::Flat);
        assert_eq!(ChangeDirection::Down.arrow(), "↓");
        assert_eq!(format_change(-12.5), "↓ 12.5%");
        assert_eq!(format_change(None::<f64>), "→ 0.0%");
    }
}
