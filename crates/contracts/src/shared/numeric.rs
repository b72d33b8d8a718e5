//! Lenient numeric coercion.
//!
//! The API serializes decimal columns as JSON strings (`"1234.50"`) and
//! occasionally sends `null` where a number is expected. Every consumer goes
//! through [`ToNumber`], which maps anything unparsable to `0.0`. The zero
//! fallback hides upstream data errors; it is kept on purpose so that all
//! widgets agree on the value they display.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a loosely typed value into a finite `f64`.
pub trait ToNumber {
    fn to_number(&self) -> f64;

    /// `true` for `None` / JSON `null`. Formatters use it to pick a
    /// placeholder instead of rendering a zero.
    fn is_absent(&self) -> bool {
        false
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl ToNumber for f64 {
    fn to_number(&self) -> f64 {
        finite_or_zero(*self)
    }
}

impl ToNumber for f32 {
    fn to_number(&self) -> f64 {
        finite_or_zero(*self as f64)
    }
}

macro_rules! impl_to_number_for_int {
    ($($t:ty),*) => {
        $(
            impl ToNumber for $t {
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_to_number_for_int!(i32, i64, u32, u64, usize);

impl ToNumber for str {
    fn to_number(&self) -> f64 {
        self.trim().parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
    }
}

impl ToNumber for String {
    fn to_number(&self) -> f64 {
        self.as_str().to_number()
    }
}

impl ToNumber for Value {
    fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => n.as_f64().map(finite_or_zero).unwrap_or(0.0),
            Value::String(s) => s.to_number(),
            Value::Bool(true) => 1.0,
            _ => 0.0,
        }
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ToNumber> ToNumber for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map(ToNumber::to_number).unwrap_or(0.0)
    }

    fn is_absent(&self) -> bool {
        match self {
            Some(inner) => inner.is_absent(),
            None => true,
        }
    }
}

impl<T: ToNumber + ?Sized> ToNumber for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// Free-function form of [`ToNumber::to_number`].
pub fn to_number(value: impl ToNumber) -> f64 {
    value.to_number()
}

/// Serde adapters applying [`ToNumber`] while decoding.
///
/// ```ignore
/// #[serde(default, deserialize_with = "lenient::number")]
/// pub revenue: f64,
/// ```
pub mod lenient {
    use super::*;

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(raw.to_number())
    }

    pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            Ok(None)
        } else {
            Ok(Some(raw.to_number()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_unparsable_input_is_zero() {
        assert_eq!(to_number("abc"), 0.0);
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number(None::<&str>), 0.0);
        assert_eq!(to_number(f64::NAN), 0.0);
        assert_eq!(to_number(f64::INFINITY), 0.0);
        assert_eq!(to_number("inf"), 0.0);
        assert_eq!(to_number(Value::Null), 0.0);
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        assert_eq!(to_number("42.5"), 42.5);
        assert_eq!(to_number(" 7 "), 7.0);
        assert_eq!(to_number(String::from("-3.25")), -3.25);
        assert_eq!(to_number(Value::from("1234.50")), 1234.5);
        assert_eq!(to_number(Some(12_i64)), 12.0);
    }

    #[test]
    fn test_absence_is_reported() {
        assert!(None::<f64>.is_absent());
        assert!(Value::Null.is_absent());
        assert!(!Some(0.0).is_absent());
        assert!(!0.0_f64.is_absent());
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient::number")]
        revenue: f64,
        #[serde(default, deserialize_with = "lenient::opt_number")]
        roas: Option<f64>,
    }

    #[test]
    fn test_lenient_deserialization() {
        let row: Row = serde_json::from_str(r#"{"revenue": "1500.75", "roas": null}"#).unwrap();
        assert_eq!(row.revenue, 1500.75);
        assert_eq!(row.roas, None);

        let row: Row = serde_json::from_str(r#"{"revenue": 10, "roas": "2.5"}"#).unwrap();
        assert_eq!(row.revenue, 10.0);
        assert_eq!(row.roas, Some(2.5));

        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.revenue, 0.0);
        assert_eq!(row.roas, None);
    }
}
